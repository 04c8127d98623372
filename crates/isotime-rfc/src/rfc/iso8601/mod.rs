//! ISO 8601 interval implementation.
//!
//! ## Overview
//!
//! An interval expression is up to four `/`-separated segments: an optional
//! repeat marker (`R`, `R5`), a start timestamp, a period (`P1Y2M10DT2H30M`)
//! and an end timestamp. Timestamps use RFC 3339.
//!
//! ## Usage
//!
//! ### Parsing
//!
//! ```rust
//! use isotime_rfc::rfc::iso8601::{parse_period, Period};
//!
//! let period = parse_period("P1Y2M10DT2H30M").unwrap();
//! assert_eq!(period.years, 1);
//! assert_eq!(period.minutes, 30);
//! ```
//!
//! ### Serializing
//!
//! ```rust
//! use isotime_rfc::rfc::iso8601::{serialize_period, Period};
//!
//! let period = Period { hours: 2, seconds: 5, ..Period::zero() };
//! assert_eq!(serialize_period(&period), "PT2H5S");
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Value types (`Period`, `Interval`, `Repeats`)
//! - [`parse`] - Scanners and error types
//! - [`build`] - Serialization functions

pub mod build;
pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;

pub use build::{format_instant, serialize_interval, serialize_period};
pub use core::{Instant, Interval, Period, Repeats};
pub use parse::{
    ParseError, ParseErrorKind, ParseResult, parse_instant, parse_interval, parse_period,
};
