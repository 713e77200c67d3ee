//! Bookmaker quote records.
//!
//! [`BookmakerQuoteSet`], [`MarketEntry`] and [`OutcomePrice`] mirror the odds
//! provider's JSON schema and are deserialized as-is. Prices are raw floats
//! at this layer; they become validated [`Quote`]s during normalization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::{BookmakerKey, MarketKey};
use super::odds::Odds;

/// One bookmaker's prices for a fixture, across every market it offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmakerQuoteSet {
    #[serde(rename = "key")]
    pub bookmaker: BookmakerKey,
    #[serde(rename = "title")]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub markets: Vec<MarketEntry>,
}

impl BookmakerQuoteSet {
    /// First market entry with the given key, if the bookmaker offers it.
    #[must_use]
    pub fn market(&self, key: &str) -> Option<&MarketEntry> {
        self.markets.iter().find(|m| m.key.as_str() == key)
    }
}

/// A bookmaker's outcome prices for one market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketEntry {
    pub key: MarketKey,
    pub last_update: DateTime<Utc>,
    #[serde(default)]
    pub outcomes: Vec<OutcomePrice>,
}

/// A single outcome price as delivered by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomePrice {
    pub name: String,
    pub price: f64,
    /// Line for totals and spreads markets (e.g. `2.5`, `-0.5`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point: Option<f64>,
}

/// A validated price from one bookmaker for one outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    bookmaker: BookmakerKey,
    bookmaker_name: String,
    price: Odds,
    #[serde(skip_serializing_if = "Option::is_none")]
    point: Option<f64>,
    last_update: DateTime<Utc>,
}

impl Quote {
    /// Create a quote from an already validated price.
    pub fn new(
        bookmaker: BookmakerKey,
        bookmaker_name: impl Into<String>,
        price: Odds,
        point: Option<f64>,
        last_update: DateTime<Utc>,
    ) -> Self {
        Self {
            bookmaker,
            bookmaker_name: bookmaker_name.into(),
            price,
            point,
            last_update,
        }
    }

    /// Create a quote from a provider record.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPrice`] if the price is not finite or
    /// does not exceed 1.0.
    pub fn try_from_outcome(
        set: &BookmakerQuoteSet,
        market: &MarketEntry,
        outcome: &OutcomePrice,
    ) -> Result<Self, DomainError> {
        let price = Odds::try_from_f64(outcome.price)?;
        Ok(Self::new(
            set.bookmaker.clone(),
            set.display_name.clone(),
            price,
            outcome.point,
            market.last_update,
        ))
    }

    /// Get the bookmaker key.
    #[must_use]
    pub const fn bookmaker(&self) -> &BookmakerKey {
        &self.bookmaker
    }

    /// Get the bookmaker display name.
    #[must_use]
    pub fn bookmaker_name(&self) -> &str {
        &self.bookmaker_name
    }

    /// Get the price.
    #[must_use]
    pub const fn price(&self) -> Odds {
        self.price
    }

    /// Get the line, for markets that have one.
    #[must_use]
    pub const fn point(&self) -> Option<f64> {
        self.point
    }

    /// When the bookmaker last updated this market.
    #[must_use]
    pub const fn last_update(&self) -> DateTime<Utc> {
        self.last_update
    }
}
