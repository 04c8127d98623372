//! Period (duration designator) type.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::rfc::iso8601::build::write_period;
use crate::rfc::iso8601::parse::{ParseError, parse_period};

const SECONDS_PER_MINUTE: u64 = 60;
const MINUTES_PER_HOUR: u64 = 60;
const HOURS_PER_DAY: u64 = 24;
const DAYS_PER_WEEK: u64 = 7;
const DAYS_PER_MONTH: u64 = 30;
const DAYS_PER_YEAR: u64 = 365;
const MONTHS_PER_YEAR: u64 = 12;

/// A period such as `P1Y2M10DT2H30M`.
///
/// Components are unsigned because the grammar only admits unsigned digit
/// runs. Weeks are kept separate from days and are never merged by the parser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Period {
    /// Creates a period with every component set to zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            years: 0,
            months: 0,
            weeks: 0,
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
        }
    }

    /// Returns whether every component is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.weeks == 0 && self.days == 0 && !self.has_time()
    }

    /// Returns whether any of hours, minutes or seconds is set.
    #[must_use]
    pub const fn has_time(&self) -> bool {
        self.hours != 0 || self.minutes != 0 || self.seconds != 0
    }

    /// ## Summary
    /// Collapses overflowed components into 0-59 seconds and minutes, 0-23
    /// hours, 0-29 days and 0-11 months, using fixed 60/24/30/12 ratios.
    ///
    /// Weeks are folded into days and come back as zero. Hour overflow past a
    /// full day is dropped rather than carried into days, and month overflow
    /// reaches years both through the carried month count and the original
    /// month count. Years saturate at `u32::MAX`.
    #[must_use]
    pub fn normalize(&self) -> Self {
        let seconds = u64::from(self.seconds);
        let minutes = seconds / SECONDS_PER_MINUTE + u64::from(self.minutes);
        let hours = minutes / MINUTES_PER_HOUR + u64::from(self.hours);
        let days = u64::from(self.days) + u64::from(self.weeks) * DAYS_PER_WEEK;
        let months = u64::from(self.months) % MONTHS_PER_YEAR + days / DAYS_PER_MONTH;
        let years =
            months / MONTHS_PER_YEAR + u64::from(self.years) + u64::from(self.months) / MONTHS_PER_YEAR;

        Self {
            years: saturate(years),
            months: saturate(months % MONTHS_PER_YEAR),
            weeks: 0,
            days: saturate(days % DAYS_PER_MONTH),
            hours: saturate(hours % HOURS_PER_DAY),
            minutes: saturate(minutes % MINUTES_PER_HOUR),
            seconds: saturate(seconds % SECONDS_PER_MINUTE),
        }
    }

    /// ## Summary
    /// Approximates the period as a fixed-length duration, treating a year as
    /// 365 days and a month as 30 days.
    ///
    /// The weeks component is not counted. See
    /// [`Period::to_approximate_duration_with_weeks`].
    #[must_use]
    pub fn to_approximate_duration(&self) -> Duration {
        self.approximate(0)
    }

    /// Same as [`Period::to_approximate_duration`], with weeks counted as 7 days.
    #[must_use]
    pub fn to_approximate_duration_with_weeks(&self) -> Duration {
        self.approximate(u64::from(self.weeks) * DAYS_PER_WEEK)
    }

    fn approximate(&self, extra_days: u64) -> Duration {
        let days = u64::from(self.years) * DAYS_PER_YEAR
            + u64::from(self.months) * DAYS_PER_MONTH
            + u64::from(self.days)
            + extra_days;
        let hours = days * HOURS_PER_DAY + u64::from(self.hours);
        let minutes = hours * MINUTES_PER_HOUR + u64::from(self.minutes);

        Duration::from_secs(minutes * SECONDS_PER_MINUTE + u64::from(self.seconds))
    }
}

fn saturate(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_period(f, self)
    }
}

impl FromStr for Period {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_period(s)
    }
}
