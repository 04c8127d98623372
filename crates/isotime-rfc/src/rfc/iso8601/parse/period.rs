//! Period scanner (`PnYnMnWnDTnHnMnS`).
//!
//! A single left-to-right pass. Digits accumulate into a pending value that
//! the next unit letter consumes, even across a `P` or `T`; `T` switches `M`
//! from months to minutes and unlocks `H` and `S` for the rest of the text.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::iso8601::core::Period;

/// Parses a period such as `P1Y2M10DT2H30M`.
///
/// ## Errors
/// Returns an error if the text does not start with `P`, ends in a digit,
/// has a unit letter without a value, uses `H`/`S` before `T`, contains any
/// other character, or holds a value that does not fit in 32 bits.
#[tracing::instrument(level = "trace", skip(s), fields(input_len = s.len()))]
pub fn parse_period(s: &str) -> ParseResult<Period> {
    let mut chars = s.chars().enumerate().peekable();

    if !matches!(chars.next(), Some((_, 'P'))) {
        tracing::warn!("Period does not start with P");
        return Err(ParseError::new(
            ParseErrorKind::MalformedPeriod,
            0,
            "invalid period representation, must start with P",
        ));
    }

    let mut period = Period::zero();
    let mut time_enabled = false;
    let mut pending: Option<u32> = None;

    while let Some((i, c)) = chars.next() {
        match c {
            'P' => {}
            '0'..='9' => {
                if chars.peek().is_none() {
                    return Err(ParseError::new(
                        ParseErrorKind::TrailingDigit,
                        i,
                        "the last character cannot be a number",
                    ));
                }
                pending = Some(push_digit(pending, c, i)?);
            }
            'T' => time_enabled = true,
            'Y' | 'M' | 'W' | 'D' | 'H' | 'S' => {
                let value = pending.take().ok_or_else(|| ParseError::missing_value(i, c))?;
                apply_component(&mut period, c, value, time_enabled, i)?;
            }
            _ => return Err(ParseError::invalid_unit(i, c)),
        }
    }

    tracing::trace!(?period, "Period parsed");

    Ok(period)
}

/// Appends one decimal digit to the pending value.
fn push_digit(pending: Option<u32>, c: char, offset: usize) -> ParseResult<u32> {
    let digit = u32::from(c) - u32::from('0');
    pending
        .unwrap_or(0)
        .checked_mul(10)
        .and_then(|value| value.checked_add(digit))
        .ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::ValueOutOfRange,
                offset,
                "component value does not fit in 32 bits",
            )
        })
}

/// Stores a value under its unit letter.
fn apply_component(
    period: &mut Period,
    unit: char,
    value: u32,
    time_enabled: bool,
    offset: usize,
) -> ParseResult<()> {
    match unit {
        'Y' => period.years = value,
        'M' if time_enabled => period.minutes = value,
        'M' => period.months = value,
        'W' => period.weeks = value,
        'D' => period.days = value,
        'H' | 'S' if !time_enabled => return Err(ParseError::time_without_marker(offset, unit)),
        'H' => period.hours = value,
        'S' => period.seconds = value,
        _ => return Err(ParseError::invalid_unit(offset, unit)),
    }
    Ok(())
}
