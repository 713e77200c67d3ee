//! Odds provider configuration.

use serde::Deserialize;

/// Connection settings for the odds provider (`[provider]` in the config file).
///
/// The API key is never read from the file; it comes from `ODDS_API_KEY`.
#[derive(Debug, Clone, Deserialize)]
pub struct OddsApiConfig {
    /// REST API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Provider sport key.
    #[serde(default = "default_sport")]
    pub sport: String,
    /// Comma-separated bookmaker regions.
    #[serde(default = "default_regions")]
    pub regions: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Maximum number of attempts for transient failures.
    #[serde(default = "default_retry_max_attempts")]
    pub retry_max_attempts: u32,
    /// Backoff between retries in milliseconds.
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_base_url() -> String {
    "https://api.the-odds-api.com/v4".into()
}

fn default_sport() -> String {
    "soccer_epl".into()
}

fn default_regions() -> String {
    "au".into()
}

const fn default_timeout_ms() -> u64 {
    10_000
}

const fn default_connect_timeout_ms() -> u64 {
    3000
}

const fn default_retry_max_attempts() -> u32 {
    3
}

const fn default_retry_backoff_ms() -> u64 {
    500
}

impl Default for OddsApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            sport: default_sport(),
            regions: default_regions(),
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
            retry_max_attempts: default_retry_max_attempts(),
            retry_backoff_ms: default_retry_backoff_ms(),
            api_key: None,
        }
    }
}

impl OddsApiConfig {
    /// True when an API key has been supplied.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }
}
