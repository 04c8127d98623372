//! Command-line commands wrapping the interval and period parsers.

use isotime_core::config::{OutputConfig, OutputFormat};
use isotime_core::error::{CoreError, CoreResult};
use isotime_rfc::rfc::iso8601::{Interval, Period, parse_interval, parse_period};
use serde::Serialize;

const USAGE: &str = "usage: isotime <interval|period|normalize|duration> <expression>";

/// A single invocation of the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Interval(String),
    Period(String),
    Normalize(String),
    Duration(String),
}

#[derive(Debug, Serialize)]
struct DurationReport {
    seconds: u64,
    seconds_with_weeks: u64,
}

impl Command {
    /// ## Summary
    /// Builds a command from the arguments following the program name.
    ///
    /// ## Errors
    /// Returns an error if the command is unknown or the expression is missing.
    pub fn from_args(args: &[String]) -> CoreResult<Self> {
        let [name, expression] = args else {
            return Err(CoreError::InvalidInput(USAGE.to_string()));
        };
        let expression = expression.clone();

        match name.as_str() {
            "interval" => Ok(Self::Interval(expression)),
            "period" => Ok(Self::Period(expression)),
            "normalize" => Ok(Self::Normalize(expression)),
            "duration" => Ok(Self::Duration(expression)),
            other => Err(CoreError::InvalidInput(format!(
                "unknown command `{other}`; {USAGE}"
            ))),
        }
    }

    /// ## Summary
    /// Parses the expression and renders the result in the configured format.
    ///
    /// ## Errors
    /// Returns an error if the expression does not parse or JSON encoding fails.
    #[tracing::instrument(skip(output))]
    pub fn run(&self, output: &OutputConfig) -> anyhow::Result<String> {
        match self {
            Self::Interval(expression) => {
                let mut interval = parse_interval(expression)?;
                if output.normalize {
                    interval.period = interval.period.map(|period| period.normalize());
                }
                render_interval(&interval, output.format)
            }
            Self::Period(expression) => {
                let period = parse_period(expression)?;
                let period = if output.normalize {
                    period.normalize()
                } else {
                    period
                };
                render_period(&period, output.format)
            }
            Self::Normalize(expression) => {
                render_period(&parse_period(expression)?.normalize(), output.format)
            }
            Self::Duration(expression) => {
                let period = parse_period(expression)?;
                let report = DurationReport {
                    seconds: period.to_approximate_duration().as_secs(),
                    seconds_with_weeks: period.to_approximate_duration_with_weeks().as_secs(),
                };
                match output.format {
                    OutputFormat::Text => Ok(format!(
                        "{}s ({}s with weeks)",
                        report.seconds, report.seconds_with_weeks
                    )),
                    OutputFormat::Json => Ok(serde_json::to_string(&report)?),
                }
            }
        }
    }
}

fn render_interval(interval: &Interval, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(interval.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(interval)?),
    }
}

fn render_period(period: &Period, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(period.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(period)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    fn output(format: OutputFormat, normalize: bool) -> OutputConfig {
        OutputConfig { format, normalize }
    }

    #[test]
    fn from_args_known_commands() {
        assert_eq!(
            Command::from_args(&args(&["period", "P1D"])).unwrap(),
            Command::Period("P1D".to_string())
        );
        assert_eq!(
            Command::from_args(&args(&["duration", "PT1H"])).unwrap(),
            Command::Duration("PT1H".to_string())
        );
    }

    #[test]
    fn from_args_rejects_bad_input() {
        assert!(matches!(
            Command::from_args(&args(&["period"])),
            Err(CoreError::InvalidInput(_))
        ));
        assert!(matches!(
            Command::from_args(&args(&["explode", "P1D"])),
            Err(CoreError::InvalidInput(msg)) if msg.contains("explode")
        ));
    }

    #[test_log::test]
    fn run_interval_text() {
        let command = Command::Interval("R5/2008-03-01T13:00:00Z/PT90M".to_string());

        assert_eq!(
            command.run(&output(OutputFormat::Text, false)).unwrap(),
            "R5/2008-03-01T13:00:00Z/PT90M"
        );
        assert_eq!(
            command.run(&output(OutputFormat::Text, true)).unwrap(),
            "R5/2008-03-01T13:00:00Z/PT1H30M"
        );
    }

    #[test]
    fn run_period_json() {
        let command = Command::Period("P1Y".to_string());
        let json = command.run(&output(OutputFormat::Json, false)).unwrap();

        assert!(json.contains("\"years\":1"));
        assert!(json.contains("\"weeks\":0"));
    }

    #[test]
    fn run_normalize() {
        let command = Command::Normalize("PT73M".to_string());
        assert_eq!(
            command.run(&output(OutputFormat::Text, false)).unwrap(),
            "PT1H13M"
        );
    }

    #[test]
    fn run_duration() {
        let command = Command::Duration("P1WT1M".to_string());

        assert_eq!(
            command.run(&output(OutputFormat::Text, false)).unwrap(),
            "60s (604860s with weeks)"
        );
        assert_eq!(
            command.run(&output(OutputFormat::Json, false)).unwrap(),
            r#"{"seconds":60,"seconds_with_weeks":604860}"#
        );
    }

    #[test]
    fn run_reports_parse_errors() {
        let err = Command::Period("P1Q".to_string())
            .run(&output(OutputFormat::Text, false))
            .unwrap_err();
        assert!(err.to_string().contains("invalid unit"));
    }
}
