//! In-memory odds sources.

use async_trait::async_trait;

use crate::domain::{BookmakerKey, Fixture, FixtureId};
use crate::error::{ProviderError, Result};
use crate::port::OddsSource;

/// Serves a fixed list of fixtures.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    fixtures: Vec<Fixture>,
}

impl StaticSource {
    pub fn new(fixtures: Vec<Fixture>) -> Self {
        Self { fixtures }
    }
}

#[async_trait]
impl OddsSource for StaticSource {
    async fn fixtures(&self, _days: u32) -> Result<Vec<Fixture>> {
        Ok(self.fixtures.clone())
    }

    async fn fixture_odds(
        &self,
        fixture_id: &FixtureId,
        _market_key: &str,
        bookmakers: &[BookmakerKey],
    ) -> Result<Option<Fixture>> {
        Ok(self
            .fixtures
            .iter()
            .find(|f| &f.id == fixture_id)
            .cloned()
            .map(|mut fixture| {
                if !bookmakers.is_empty() {
                    fixture
                        .bookmakers
                        .retain(|set| bookmakers.contains(&set.bookmaker));
                }
                fixture
            }))
    }

    fn source_name(&self) -> &'static str {
        "static"
    }
}

/// Fails every call with a provider status error.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingSource;

impl FailingSource {
    fn error() -> crate::error::Error {
        ProviderError::Status {
            endpoint: "/test".into(),
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
        }
        .into()
    }
}

#[async_trait]
impl OddsSource for FailingSource {
    async fn fixtures(&self, _days: u32) -> Result<Vec<Fixture>> {
        Err(Self::error())
    }

    async fn fixture_odds(
        &self,
        _fixture_id: &FixtureId,
        _market_key: &str,
        _bookmakers: &[BookmakerKey],
    ) -> Result<Option<Fixture>> {
        Err(Self::error())
    }

    fn source_name(&self) -> &'static str {
        "failing"
    }
}
