//! Odds source port.

use async_trait::async_trait;

use crate::domain::{BookmakerKey, Fixture, FixtureId};
use crate::error::Error;

/// Supplies fixtures and bookmaker prices.
#[async_trait]
pub trait OddsSource: Send + Sync {
    /// Fetch upcoming fixtures kicking off within `days`.
    ///
    /// Sources may return a superset; callers filter against their own
    /// clock.
    async fn fixtures(&self, days: u32) -> Result<Vec<Fixture>, Error>;

    /// Fetch one fixture with prices for `market_key`.
    ///
    /// An empty `bookmakers` slice means every bookmaker the source knows.
    /// Returns `Ok(None)` when the source does not have the fixture.
    async fn fixture_odds(
        &self,
        fixture_id: &FixtureId,
        market_key: &str,
        bookmakers: &[BookmakerKey],
    ) -> Result<Option<Fixture>, Error>;

    /// Get the source name for logging/debugging.
    fn source_name(&self) -> &'static str;
}

#[async_trait]
impl<T: OddsSource + ?Sized> OddsSource for Box<T> {
    async fn fixtures(&self, days: u32) -> Result<Vec<Fixture>, Error> {
        (**self).fixtures(days).await
    }

    async fn fixture_odds(
        &self,
        fixture_id: &FixtureId,
        market_key: &str,
        bookmakers: &[BookmakerKey],
    ) -> Result<Option<Fixture>, Error> {
        (**self)
            .fixture_odds(fixture_id, market_key, bookmakers)
            .await
    }

    fn source_name(&self) -> &'static str {
        (**self).source_name()
    }
}
