//! Behavior of the public parse/format API on the documented examples.

use std::time::Duration;

use isotime_rfc::rfc::iso8601::{
    Interval, ParseErrorKind, Period, Repeats, format_instant, parse_instant, parse_interval,
    parse_period, serialize_interval, serialize_period,
};

#[test_log::test]
fn period_example_parses() {
    let period = parse_period("P1Y2M10DT2H30M").unwrap();

    assert_eq!(
        period,
        Period {
            years: 1,
            months: 2,
            days: 10,
            hours: 2,
            minutes: 30,
            ..Period::zero()
        }
    );
}

#[test_log::test]
fn period_errors() {
    assert_eq!(
        parse_period("PT1S4").unwrap_err().kind,
        ParseErrorKind::TrailingDigit
    );

    let err = parse_period("P1Q").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::InvalidUnit);
    assert!(err.to_string().contains("'Q'"));
}

#[test_log::test]
fn interval_example_round_trips() {
    let input = "R5/2008-03-01T13:00:00Z/P1Y2M10DT2H30M/2009-03-01T13:00:00Z";
    let interval = parse_interval(input).unwrap();

    assert_eq!(interval.repeats, Some(Repeats::Count(5)));
    assert_eq!(
        interval.start.as_ref().map(format_instant).as_deref(),
        Some("2008-03-01T13:00:00Z")
    );
    assert_eq!(
        interval.end,
        Some(parse_instant("2009-03-01T13:00:00Z").unwrap())
    );
    assert_eq!(interval.period, Some(parse_period("P1Y2M10DT2H30M").unwrap()));
    assert_eq!(serialize_interval(&interval), input);
}

#[test_log::test]
fn unbounded_repeats() {
    let interval = parse_interval("R/2008-03-01T13:00:00Z").unwrap();
    assert_eq!(interval.repeat_count(), Repeats::UNBOUNDED_SENTINEL);
}

#[test_log::test]
fn repeat_must_come_first() {
    let err = parse_interval("2008-03-01T13:00:00Z/R5").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::RepeatNotFirst);
}

#[test]
fn normalize_example() {
    let period = Period {
        years: 1,
        months: 15,
        weeks: 2,
        days: 31,
        hours: 27,
        minutes: 73,
        seconds: 91,
    };

    assert_eq!(
        period.normalize(),
        Period {
            years: 2,
            months: 4,
            weeks: 0,
            days: 15,
            hours: 4,
            minutes: 14,
            seconds: 31,
        }
    );
}

#[test]
fn normalize_then_serialize() {
    let period = parse_period("PT90M").unwrap().normalize();
    assert_eq!(serialize_period(&period), "PT1H30M");
}

#[test]
fn approximate_duration_of_parsed_period() {
    let period = parse_period("P1DT1H1M1S").unwrap();
    assert_eq!(
        period.to_approximate_duration(),
        Duration::from_secs(86_400 + 3_600 + 60 + 1)
    );

    let weeks = parse_period("P2W").unwrap();
    assert_eq!(weeks.to_approximate_duration(), Duration::ZERO);
}

#[test]
fn failures_return_no_value() {
    let result: Result<Interval, _> = "R1/P1D/P2D".parse();
    assert!(result.is_err());
}
