//! Period and interval serializers.

use std::fmt::{self, Write};

use chrono::SecondsFormat;

use crate::rfc::iso8601::core::{Instant, Interval, Period};

/// Formats a timestamp as RFC 3339, using `Z` for a zero offset.
#[must_use]
pub fn format_instant(instant: &Instant) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Serializes a period, e.g. `P1Y2M10DT2H30M`. An all-zero period is `P`.
#[must_use]
pub fn serialize_period(period: &Period) -> String {
    period.to_string()
}

/// Serializes an interval, e.g. `R5/2008-03-01T13:00:00Z/P1Y2M10DT2H30M`.
#[must_use]
pub fn serialize_interval(interval: &Interval) -> String {
    interval.to_string()
}

/// Writes a period to any formatter.
///
/// ## Errors
/// Returns an error only if the underlying writer fails.
pub fn write_period<W: Write>(w: &mut W, period: &Period) -> fmt::Result {
    w.write_char('P')?;

    let date = [
        (period.years, 'Y'),
        (period.months, 'M'),
        (period.weeks, 'W'),
        (period.days, 'D'),
    ];
    write_components(w, &date)?;

    if period.has_time() {
        w.write_char('T')?;
        let time = [
            (period.hours, 'H'),
            (period.minutes, 'M'),
            (period.seconds, 'S'),
        ];
        write_components(w, &time)?;
    }

    Ok(())
}

fn write_components<W: Write>(w: &mut W, components: &[(u32, char)]) -> fmt::Result {
    for &(value, unit) in components {
        if value != 0 {
            write!(w, "{value}{unit}")?;
        }
    }
    Ok(())
}

/// Writes an interval to any formatter.
///
/// ## Errors
/// Returns an error only if the underlying writer fails.
pub fn write_interval<W: Write>(w: &mut W, interval: &Interval) -> fmt::Result {
    let mut separator = "";

    if let Some(repeats) = interval.repeats {
        write!(w, "{repeats}")?;
        separator = "/";
    }
    if let Some(start) = &interval.start {
        write!(w, "{separator}{}", format_instant(start))?;
        separator = "/";
    }
    if let Some(period) = &interval.period {
        w.write_str(separator)?;
        write_period(w, period)?;
        separator = "/";
    }
    if let Some(end) = &interval.end {
        write!(w, "{separator}{}", format_instant(end))?;
    }

    Ok(())
}
