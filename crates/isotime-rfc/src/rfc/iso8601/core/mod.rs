//! ISO 8601 value types.
//!
//! These types are plain values: parsers build them once and every
//! transformation (`normalize`, approximate durations) returns a new value.

mod interval;
mod period;

pub use interval::{Instant, Interval, Repeats};
pub use period::Period;
