//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! for the provider credentials: `ODDS_API_KEY` and `ODDS_API_BASE_URL`.
//!
//! # Example
//!
//! ```no_run
//! use oddsboard::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("oddsboard.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use url::Url;

use super::display::DisplayConfig;
use super::logging::LoggingConfig;
use crate::adapter::outbound::odds_api::settings::OddsApiConfig;
use crate::domain::MarketCatalog;
use crate::error::{ConfigError, Result};

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "oddsboard.toml";

/// Environment variable holding the provider API key.
pub const API_KEY_ENV: &str = "ODDS_API_KEY";

/// Environment variable overriding the provider base URL.
pub const BASE_URL_ENV: &str = "ODDS_API_BASE_URL";

/// Main application configuration.
///
/// Every section has defaults, so an empty file (or no file) is valid. Load
/// from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Odds provider connection settings.
    #[serde(default)]
    pub provider: OddsApiConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Presentation defaults.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Reads the API key from `ODDS_API_KEY` (never from the file) and lets
    /// `ODDS_API_BASE_URL` override the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - Validation fails (e.g., an unknown default market)
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_overrides(
            std::env::var(API_KEY_ENV).ok(),
            std::env::var(BASE_URL_ENV).ok(),
        );
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if given, else [`DEFAULT_CONFIG_FILE`] if present, else
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a file is chosen and cannot be loaded.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::load(DEFAULT_CONFIG_FILE),
            None => Self::parse_toml(""),
        }
    }

    /// Apply credential overrides. Empty values are ignored.
    pub fn apply_overrides(&mut self, api_key: Option<String>, base_url: Option<String>) {
        self.provider.api_key = api_key.filter(|key| !key.is_empty());
        if let Some(base_url) = base_url.filter(|url| !url.is_empty()) {
            self.provider.base_url = base_url;
        }
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are present and values are within
    /// acceptable ranges.
    pub fn validate(&self) -> Result<()> {
        let provider = &self.provider;
        if provider.base_url.is_empty() {
            return Err(ConfigError::MissingField { field: "base_url" }.into());
        }
        if let Err(err) = Url::parse(&provider.base_url) {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: err.to_string(),
            }
            .into());
        }
        if provider.sport.is_empty() {
            return Err(ConfigError::MissingField { field: "sport" }.into());
        }
        if provider.regions.is_empty() {
            return Err(ConfigError::MissingField { field: "regions" }.into());
        }
        if provider.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if provider.retry_max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry_max_attempts",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "level" }.into());
        }

        if let Err(err) = MarketCatalog::global().lookup(&self.display.default_market) {
            return Err(ConfigError::InvalidValue {
                field: "default_market",
                reason: err.to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
