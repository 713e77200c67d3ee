//! Odds comparison domain logic.
//!
//! Everything here is pure: no I/O, no clocks (callers pass `now`), no
//! global state apart from the immutable market catalog.

pub mod bookmaker;
pub mod error;

mod comparison;
mod fixture;
mod id;
mod margin;
mod market;
mod normalizer;
mod odds;
mod pipeline;
mod quote;
mod sequencer;

pub use comparison::{
    resolve_best_prices, BookmakerMargin, BookmakerPrice, ComparisonTable, OutcomeComparison,
};
pub use error::DomainError;
pub use fixture::{window_end, Fixture, FixtureSummary};
pub use id::{BookmakerKey, FixtureId, MarketKey};
pub use margin::overround_percent;
pub use market::{MarketCatalog, MarketCategory, MarketDefinition};
pub use normalizer::{normalize, NormalizedQuotes, OutcomeQuotes};
pub use odds::{decimal_to_fractional, Fraction, Odds, OddsFormat};
pub use pipeline::compare_market;
pub use quote::{BookmakerQuoteSet, MarketEntry, OutcomePrice, Quote};
pub use sequencer::{compare_names, OutcomeSequencer, MATCH_RESULT_MARKET, MATCH_RESULT_ORDER};
