//! RFC 3339 timestamp segments.

use chrono::DateTime;

use crate::rfc::iso8601::core::Instant;

/// Parses an RFC 3339 timestamp, keeping its UTC offset.
///
/// ## Errors
/// Returns the `chrono` error if the text is not RFC 3339.
pub fn parse_instant(s: &str) -> Result<Instant, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s)
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn parse_utc() {
        let instant = parse_instant("2008-03-01T13:00:00Z").unwrap();
        assert_eq!(instant.year(), 2008);
        assert_eq!(instant.hour(), 13);
        assert_eq!(instant.offset().local_minus_utc(), 0);
    }

    #[test]
    fn parse_keeps_offset() {
        let instant = parse_instant("2008-03-01T13:00:00+02:00").unwrap();
        assert_eq!(instant.offset().local_minus_utc(), 7200);
        assert_eq!(instant.hour(), 13);
    }

    #[test]
    fn parse_rejects_bad_separator() {
        assert!(parse_instant("2008-03-01X13:00:00Z").is_err());
        assert!(parse_instant("").is_err());
        assert!(parse_instant("2008-03-01").is_err());
    }
}
