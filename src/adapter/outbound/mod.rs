//! Outbound adapters implementing [`OddsSource`](crate::port::OddsSource).

pub mod odds_api;
pub mod snapshot;

pub use odds_api::OddsApiClient;
pub use snapshot::SnapshotSource;
