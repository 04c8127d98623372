//! Interval expression type.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::Period;
use crate::rfc::iso8601::build::write_interval;
use crate::rfc::iso8601::parse::{ParseError, parse_interval};

/// A timestamp as parsed from an RFC 3339 segment, offset preserved.
pub type Instant = DateTime<FixedOffset>;

/// Repetition marker of an interval (`R5`, or a bare `R`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Repeats {
    /// A positive repeat count.
    Count(u32),
    /// A bare `R` with no count: repeat indefinitely.
    Unbounded,
}

impl Repeats {
    /// Integer view where unbounded repeats are `-1`.
    pub const UNBOUNDED_SENTINEL: i64 = -1;

    /// Returns the repeat count, or [`Repeats::UNBOUNDED_SENTINEL`] when unbounded.
    #[must_use]
    pub fn sentinel(self) -> i64 {
        match self {
            Self::Count(count) => i64::from(count),
            Self::Unbounded => Self::UNBOUNDED_SENTINEL,
        }
    }

    #[must_use]
    pub const fn is_unbounded(self) -> bool {
        matches!(self, Self::Unbounded)
    }
}

impl fmt::Display for Repeats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(count) => write!(f, "R{count}"),
            Self::Unbounded => f.write_str("R"),
        }
    }
}

/// A parsed interval expression such as
/// `R5/2008-03-01T13:00:00Z/P1Y2M10DT2H30M/2009-03-01T13:00:00Z`.
///
/// Every piece is optional. No ordering between `start` and `end` is checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: Option<Instant>,
    pub end: Option<Instant>,
    pub repeats: Option<Repeats>,
    pub period: Option<Period>,
}

impl Interval {
    /// Creates an interval holding only a start timestamp.
    #[must_use]
    pub const fn at(start: Instant) -> Self {
        Self {
            start: Some(start),
            end: None,
            repeats: None,
            period: None,
        }
    }

    /// Creates an interval holding only a period.
    #[must_use]
    pub const fn of_period(period: Period) -> Self {
        Self {
            start: None,
            end: None,
            repeats: None,
            period: Some(period),
        }
    }

    /// Returns the repeat count as an integer: `0` when absent, `-1` when unbounded.
    #[must_use]
    pub fn repeat_count(&self) -> i64 {
        self.repeats.map_or(0, Repeats::sentinel)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_interval(f, self)
    }
}

impl FromStr for Interval {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_interval(s)
    }
}
