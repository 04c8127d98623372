//! ISO 8601 time interval and period expressions.
//!
//! ```rust
//! use isotime_rfc::rfc::iso8601::{Interval, Repeats};
//!
//! let interval: Interval = "R5/2008-03-01T13:00:00Z/P1Y2M10DT2H30M".parse().unwrap();
//! assert_eq!(interval.repeats, Some(Repeats::Count(5)));
//! assert_eq!(interval.to_string(), "R5/2008-03-01T13:00:00Z/P1Y2M10DT2H30M");
//! ```

pub mod rfc;
