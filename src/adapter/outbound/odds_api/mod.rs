//! The Odds API adapter.

pub mod client;
pub mod settings;

pub use client::{OddsApiClient, OddsQuery};
pub use settings::OddsApiConfig;
