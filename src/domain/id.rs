//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Bookmaker identifier as issued by the odds provider (e.g. `sportsbet`).
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmakerKey(String);

impl BookmakerKey {
    /// Create a new BookmakerKey from a string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the bookmaker key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookmakerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for BookmakerKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for BookmakerKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Market key (e.g. `h2h`, `totals`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketKey(String);

impl MarketKey {
    /// Create a new MarketKey from a string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the market key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MarketKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for MarketKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Fixture (sporting event) identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixtureId(String);

impl FixtureId {
    /// Create a new FixtureId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the fixture ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FixtureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for FixtureId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for FixtureId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
