//! ISO 8601 parsing.
//!
//! ## Usage
//!
//! ```rust
//! use isotime_rfc::rfc::iso8601::parse::{parse_interval, ParseErrorKind};
//!
//! let interval = parse_interval("R/2008-03-01T13:00:00Z").unwrap();
//! assert_eq!(interval.repeat_count(), -1);
//!
//! let err = parse_interval("2008-03-01T13:00:00Z/R5").unwrap_err();
//! assert_eq!(err.kind, ParseErrorKind::RepeatNotFirst);
//! ```

mod error;
mod interval;
mod period;
mod timestamp;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use interval::parse_interval;
pub use period::parse_period;
pub use timestamp::parse_instant;
