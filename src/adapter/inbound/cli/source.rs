//! Odds source selection for commands that read fixtures.

use tracing::debug;

use super::command::SourceArgs;
use crate::adapter::outbound::{OddsApiClient, SnapshotSource};
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::port::OddsSource;

/// Open the snapshot if one was given, else the provider API.
///
/// # Errors
///
/// Returns a configuration error when the API is needed but `ODDS_API_KEY`
/// is not set.
pub fn open(args: &SourceArgs, config: &Config) -> Result<Box<dyn OddsSource>> {
    if let Some(path) = &args.snapshot {
        debug!(path = %path.display(), "Using snapshot source");
        return Ok(Box::new(SnapshotSource::new(path)));
    }

    debug!(base_url = %config.provider.base_url, "Using provider API");
    Ok(Box::new(OddsApiClient::from_config(&config.provider)?))
}
