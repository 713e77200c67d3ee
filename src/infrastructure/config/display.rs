//! Presentation defaults.

use serde::Deserialize;

use crate::domain::{OddsFormat, MATCH_RESULT_MARKET};

/// Presentation settings (`[display]` in the config file).
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// How prices are rendered.
    #[serde(default)]
    pub odds_format: OddsFormat,
    /// Market compared when none is requested. Must exist in the catalog.
    #[serde(default = "default_market")]
    pub default_market: String,
}

fn default_market() -> String {
    MATCH_RESULT_MARKET.to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            odds_format: OddsFormat::default(),
            default_market: default_market(),
        }
    }
}
