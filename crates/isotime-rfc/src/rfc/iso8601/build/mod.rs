//! ISO 8601 serialization.
//!
//! - Period: `P`, date components, then `T` and time components, zeros omitted
//! - Interval: repeats, start, period and end joined with `/`, absent pieces omitted

mod serializer;

pub use serializer::{
    format_instant, serialize_interval, serialize_period, write_interval, write_period,
};
