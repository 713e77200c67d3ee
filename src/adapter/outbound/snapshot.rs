//! Offline odds source backed by a JSON snapshot file.
//!
//! The file holds a list of fixtures in the provider's schema, as returned
//! by the odds endpoint. It is re-read on every call.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::{BookmakerKey, Fixture, FixtureId};
use crate::error::{ProviderError, Result};
use crate::port::OddsSource;

/// Serves fixtures from a snapshot file.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    path: PathBuf,
}

impl SnapshotSource {
    /// Create a source for the snapshot at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load(&self) -> Result<Vec<Fixture>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ProviderError::Snapshot {
                path: self.path.display().to_string(),
                source,
            })?;
        let fixtures: Vec<Fixture> = serde_json::from_str(&content)?;
        debug!(
            path = %self.path.display(),
            count = fixtures.len(),
            "Loaded snapshot"
        );
        Ok(fixtures)
    }
}

#[async_trait]
impl OddsSource for SnapshotSource {
    async fn fixtures(&self, _days: u32) -> Result<Vec<Fixture>> {
        self.load().await
    }

    async fn fixture_odds(
        &self,
        fixture_id: &FixtureId,
        _market_key: &str,
        bookmakers: &[BookmakerKey],
    ) -> Result<Option<Fixture>> {
        let fixture = self
            .load()
            .await?
            .into_iter()
            .find(|f| &f.id == fixture_id);

        Ok(fixture.map(|mut fixture| {
            if !bookmakers.is_empty() {
                fixture
                    .bookmakers
                    .retain(|set| bookmakers.contains(&set.bookmaker));
            }
            fixture
        }))
    }

    fn source_name(&self) -> &'static str {
        "snapshot"
    }
}
