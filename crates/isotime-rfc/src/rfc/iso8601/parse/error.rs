//! ISO 8601 parse error types.

use std::fmt;

/// Result type for ISO 8601 parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error that occurred while parsing a period or interval expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Character index within a period, or byte offset of the segment within an interval.
    pub offset: usize,
    /// Additional context, usually naming the offending token.
    pub message: String,
    /// The period error wrapped by an interval-level failure.
    pub cause: Option<Box<ParseError>>,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, offset: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            offset,
            message: message.into(),
            cause: None,
        }
    }

    /// Attaches the underlying error.
    #[must_use]
    pub fn with_cause(mut self, cause: Self) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Creates an invalid unit error naming the offending character.
    #[must_use]
    pub fn invalid_unit(offset: usize, found: char) -> Self {
        Self::new(
            ParseErrorKind::InvalidUnit,
            offset,
            format!("invalid value found, {found:?}"),
        )
    }

    /// Creates a missing value error naming the unit letter.
    #[must_use]
    pub fn missing_value(offset: usize, unit: char) -> Self {
        Self::new(
            ParseErrorKind::MissingValue,
            offset,
            format!("attempting to assign {unit:?} but no value found"),
        )
    }

    /// Creates an error for `H` or `S` appearing before the `T` marker.
    #[must_use]
    pub fn time_without_marker(offset: usize, unit: char) -> Self {
        Self::new(
            ParseErrorKind::TimeComponentWithoutMarker,
            offset,
            format!("found time component without time enabler 'T', {unit:?}"),
        )
    }

    /// Returns the kind of the innermost error.
    #[must_use]
    pub fn root_kind(&self) -> ParseErrorKind {
        self.cause.as_ref().map_or(self.kind, |cause| cause.root_kind())
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}: {}", self.kind, self.offset, self.message)?;
        if let Some(cause) = &self.cause {
            write!(f, " ({cause})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// Period text does not follow the `P...` grammar.
    MalformedPeriod,
    /// A unit letter with no digits before it.
    MissingValue,
    /// Period text ends in a digit.
    TrailingDigit,
    /// A character outside the period alphabet.
    InvalidUnit,
    /// `H` or `S` before the `T` marker.
    TimeComponentWithoutMarker,
    /// A component value does not fit in 32 bits.
    ValueOutOfRange,
    /// An `R` segment that is not the first segment.
    RepeatNotFirst,
    /// A numeric repeat count of zero or less.
    NonPositiveRepeat,
    /// A numeric repeat count too large to hold.
    RepeatOutOfRange,
    /// More than one period segment.
    DuplicatePeriod,
    /// More than one end timestamp.
    DuplicateEnd,
    /// A timestamp segment that is not valid RFC 3339.
    MalformedTimestamp,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedPeriod => write!(f, "malformed period"),
            Self::MissingValue => write!(f, "missing value"),
            Self::TrailingDigit => write!(f, "trailing digit"),
            Self::InvalidUnit => write!(f, "invalid unit"),
            Self::TimeComponentWithoutMarker => write!(f, "time component without marker"),
            Self::ValueOutOfRange => write!(f, "value out of range"),
            Self::RepeatNotFirst => write!(f, "repeat not first"),
            Self::NonPositiveRepeat => write!(f, "non-positive repeat"),
            Self::RepeatOutOfRange => write!(f, "repeat out of range"),
            Self::DuplicatePeriod => write!(f, "duplicate period"),
            Self::DuplicateEnd => write!(f, "duplicate end"),
            Self::MalformedTimestamp => write!(f, "malformed timestamp"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn display_includes_kind_offset_and_message() {
        let err = ParseError::invalid_unit(2, 'Q');
        assert_eq!(err.to_string(), "invalid unit at offset 2: invalid value found, 'Q'");
    }

    #[test]
    fn cause_is_exposed_as_source() {
        let inner = ParseError::missing_value(1, 'S');
        let outer = ParseError::new(ParseErrorKind::MalformedPeriod, 21, "invalid period `PS`")
            .with_cause(inner.clone());

        assert_eq!(outer.root_kind(), ParseErrorKind::MissingValue);
        let source = outer.source().unwrap();
        assert_eq!(source.to_string(), inner.to_string());
        assert!(outer.to_string().contains("no value found"));
    }

    #[test]
    fn root_kind_without_cause() {
        let err = ParseError::new(ParseErrorKind::DuplicateEnd, 0, "");
        assert_eq!(err.root_kind(), ParseErrorKind::DuplicateEnd);
        assert!(err.source().is_none());
    }
}
