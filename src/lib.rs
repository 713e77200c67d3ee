//! Oddsboard - compare bookmaker prices and find the best odds.
//!
//! Given every bookmaker's quotes for a fixture, oddsboard pivots them into
//! one row per outcome, marks the best price (and every bookmaker tied at
//! it), orders outcomes for display, and reports each bookmaker's margin.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - Pure comparison logic: market catalog, quote normalizer,
//!   best-price resolver, outcome sequencer, format converter, margin
//!   calculator
//! - [`port`] - The [`OddsSource`](port::OddsSource) trait
//! - [`adapter`] - Odds sources (provider API, snapshot files) and the CLI
//! - [`application`] - Use cases tying a source to the domain pipeline
//! - [`infrastructure`] - Configuration and logging setup
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use oddsboard::domain::{compare_market, BookmakerQuoteSet, MarketCatalog};
//!
//! let sets: Vec<BookmakerQuoteSet> = serde_json::from_str(r#"[
//!     { "key": "tab", "title": "TAB", "markets": [
//!         { "key": "h2h", "last_update": "2026-10-18T09:00:00Z", "outcomes": [
//!             { "name": "Draw", "price": 3.4 },
//!             { "name": "Arsenal", "price": 2.1 }
//!         ] }
//!     ] },
//!     { "key": "neds", "title": "Neds", "markets": [
//!         { "key": "h2h", "last_update": "2026-10-18T09:00:00Z", "outcomes": [
//!             { "name": "Arsenal", "price": 2.2 },
//!             { "name": "Draw", "price": 3.4 }
//!         ] }
//!     ] }
//! ]"#).unwrap();
//!
//! let table = compare_market(
//!     MarketCatalog::global(),
//!     &sets,
//!     "h2h",
//!     Some(("Arsenal", "Chelsea")),
//! ).unwrap();
//!
//! assert_eq!(table.outcomes()[0].outcome(), "Arsenal");
//! assert_eq!(table.outcomes()[1].tied_bookmakers().len(), 2);
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
