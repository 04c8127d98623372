use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;

use crate::error::{CoreError, CoreResult};


#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    /// ## Summary
    /// Parses the configured level into a `tracing` filter.
    ///
    /// ## Errors
    /// Returns an error if the level is not one of `off`, `error`, `warn`,
    /// `info`, `debug` or `trace`.
    pub fn level_filter(&self) -> CoreResult<LevelFilter> {
        self.level
            .parse()
            .map_err(|err| CoreError::ConfigError(format!("logging.level `{}`: {err}", self.level)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Normalize periods before printing them.
    pub normalize: bool,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `ISOTIME_*` environment variables and an
    /// optional `isotime.toml`, on top of built-in defaults.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it or
    /// validating it fails.
    pub fn load() -> Result<Self> {
        let builder = defaults()?
            .add_source(
                config::Environment::with_prefix("ISOTIME")
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("isotime").required(false));

        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let settings = builder.build()?.try_deserialize::<Self>()?;
        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks values that deserialize fine but are unusable.
    ///
    /// ## Errors
    /// Returns an error if the logging level is unknown.
    pub fn validate(&self) -> CoreResult<()> {
        self.logging.level_filter().map(|_| ())
    }
}

fn defaults() -> std::result::Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("logging.level", "warn")?
        .set_default("output.format", "text")?
        .set_default("output.normalize", false)
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(?settings, "Configuration loaded");
    Ok(settings)
}
