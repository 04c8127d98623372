//! Interval expression scanner.
//!
//! Segments are split on `/` and classified by their first character: `R`
//! for repeats, `P` for the period, anything else is a timestamp. The first
//! timestamp is the start (also when it directly follows the repeat segment),
//! the next one is the end.

use std::num::IntErrorKind;

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::period::parse_period;
use super::timestamp::parse_instant;
use crate::rfc::iso8601::core::{Instant, Interval, Period, Repeats};

const SEGMENT_SEPARATOR: char = '/';

/// Parses an interval expression such as
/// `R5/2008-03-01T13:00:00Z/P1Y2M10DT2H30M/2009-03-01T13:00:00Z`.
///
/// Text without a `/` is a lone start timestamp. As an exception to that
/// rule, such text starting with `P` is parsed as a lone period instead of
/// failing as a malformed timestamp.
///
/// ## Errors
/// Returns an error if a repeat segment is not first or has a count of zero or
/// less, if more than one period or end timestamp is present, or if any period
/// or timestamp segment fails to parse.
#[tracing::instrument(skip(s), fields(input_len = s.len()))]
pub fn parse_interval(s: &str) -> ParseResult<Interval> {
    tracing::debug!("Parsing interval expression");

    if !s.contains(SEGMENT_SEPARATOR) {
        return if s.starts_with('P') {
            parse_period_segment(s, 0).map(Interval::of_period)
        } else {
            parse_timestamp_segment(s, 0).map(Interval::at)
        };
    }

    let mut interval = Interval::default();
    let mut offset = 0;

    for (i, segment) in s.split(SEGMENT_SEPARATOR).enumerate() {
        let segment_offset = offset;
        offset += segment.len() + SEGMENT_SEPARATOR.len_utf8();

        if let Some(count) = segment.strip_prefix('R') {
            if i != 0 {
                tracing::warn!(segment = i, "Repeat segment is not first");
                return Err(ParseError::new(
                    ParseErrorKind::RepeatNotFirst,
                    segment_offset,
                    "repetitions component must be at the beginning of the string",
                ));
            }
            interval.repeats = Some(parse_repeats(count, segment_offset)?);
            continue;
        }

        if segment.starts_with('P') {
            if interval.period.is_some() {
                return Err(ParseError::new(
                    ParseErrorKind::DuplicatePeriod,
                    segment_offset,
                    "invalid iso8601, more than one period component detected",
                ));
            }
            interval.period = Some(parse_period_segment(segment, segment_offset)?);
            continue;
        }

        let instant = parse_timestamp_segment(segment, segment_offset)?;

        if i == 0 || (i == 1 && interval.repeats.is_some()) {
            interval.start = Some(instant);
        } else if interval.end.is_some() {
            return Err(ParseError::new(
                ParseErrorKind::DuplicateEnd,
                segment_offset,
                "invalid iso8601, more than one end date detected",
            ));
        } else {
            interval.end = Some(instant);
        }
    }

    tracing::debug!(repeats = interval.repeat_count(), "Interval parsed");

    Ok(interval)
}

/// Parses the text after `R`. Anything that is not an integer means unbounded.
fn parse_repeats(count: &str, offset: usize) -> ParseResult<Repeats> {
    match count.parse::<i64>() {
        Ok(value) if value <= 0 => Err(non_positive_repeat(offset)),
        Ok(value) => u32::try_from(value).map(Repeats::Count).map_err(|err| {
            ParseError::new(
                ParseErrorKind::RepeatOutOfRange,
                offset,
                format!("repeat count {value} is too large: {err}"),
            )
        }),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Err(ParseError::new(
                ParseErrorKind::RepeatOutOfRange,
                offset,
                format!("repeat count {count} is too large: {err}"),
            )),
            IntErrorKind::NegOverflow => Err(non_positive_repeat(offset)),
            _ => {
                tracing::trace!(count, "Non-numeric repeat count, treating as unbounded");
                Ok(Repeats::Unbounded)
            }
        },
    }
}

fn non_positive_repeat(offset: usize) -> ParseError {
    ParseError::new(
        ParseErrorKind::NonPositiveRepeat,
        offset,
        "repeat value must be greater than zero",
    )
}

fn parse_period_segment(segment: &str, offset: usize) -> ParseResult<Period> {
    parse_period(segment).map_err(|err| {
        ParseError::new(
            ParseErrorKind::MalformedPeriod,
            offset,
            format!("invalid period {segment:?}, unable to parse"),
        )
        .with_cause(err)
    })
}

fn parse_timestamp_segment(segment: &str, offset: usize) -> ParseResult<Instant> {
    parse_instant(segment).map_err(|err| {
        tracing::warn!(error = %err, "Invalid timestamp segment");
        ParseError::new(
            ParseErrorKind::MalformedTimestamp,
            offset,
            format!("unable to parse time component {segment:?}, {err}"),
        )
    })
}
