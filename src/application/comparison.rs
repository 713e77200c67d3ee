//! Fixture comparison use cases.
//!
//! ```text
//! OddsSource --fixture_odds--> Fixture --compare_market--> ComparisonTable
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::{
    compare_market, BookmakerKey, ComparisonTable, DomainError, Fixture, FixtureId,
    FixtureSummary, MarketCatalog,
};
use crate::error::Result;
use crate::port::OddsSource;

/// One fixture's comparison table together with the fixture itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixtureComparison {
    pub fixture: FixtureSummary,
    pub table: ComparisonTable,
}

/// Compares bookmaker prices for fixtures served by an [`OddsSource`].
pub struct ComparisonService<S> {
    source: S,
    catalog: &'static MarketCatalog,
}

impl<S: OddsSource> ComparisonService<S> {
    /// Create a service over `source` using the global market catalog.
    pub fn new(source: S) -> Self {
        Self {
            source,
            catalog: MarketCatalog::global(),
        }
    }

    /// Compare one market for one fixture.
    ///
    /// An empty `bookmakers` slice compares every bookmaker the source has.
    ///
    /// # Errors
    ///
    /// - [`DomainError::UnknownMarket`] before the source is queried
    /// - [`DomainError::FixtureNotFound`] when the source lacks the fixture
    /// - [`DomainError::InvalidPrice`] for malformed quotes
    /// - Any error the source raises
    pub async fn compare(
        &self,
        fixture_id: &FixtureId,
        market_key: &str,
        bookmakers: &[BookmakerKey],
    ) -> Result<FixtureComparison> {
        self.catalog.lookup(market_key)?;

        info!(
            source = self.source.source_name(),
            fixture = %fixture_id,
            market = market_key,
            "Comparing fixture"
        );

        let fixture = self
            .source
            .fixture_odds(fixture_id, market_key, bookmakers)
            .await?
            .ok_or_else(|| DomainError::FixtureNotFound {
                id: fixture_id.to_string(),
            })?;

        let table = compare_market(
            self.catalog,
            &fixture.bookmakers,
            market_key,
            Some((fixture.home_team.as_str(), fixture.away_team.as_str())),
        )?;

        debug!(
            fixture = %fixture_id,
            outcomes = table.outcomes().len(),
            bookmakers = fixture.bookmakers.len(),
            "Comparison complete"
        );

        Ok(FixtureComparison {
            fixture: fixture.summary(),
            table,
        })
    }

    /// Fixtures kicking off between `now` and `now + days`, soonest first.
    ///
    /// # Errors
    ///
    /// Returns any error the source raises.
    pub async fn upcoming(&self, days: u32, now: DateTime<Utc>) -> Result<Vec<Fixture>> {
        let mut fixtures: Vec<Fixture> = self
            .source
            .fixtures(days)
            .await?
            .into_iter()
            .filter(|f| f.within_days(now, i64::from(days)))
            .collect();
        fixtures.sort_by_key(|f| f.commence_time);

        debug!(count = fixtures.len(), days, "Upcoming fixtures");
        Ok(fixtures)
    }
}
