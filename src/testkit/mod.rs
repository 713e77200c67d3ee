//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for quote sets, market entries and fixtures.
//! - [`source`] - In-memory [`OddsSource`](crate::port::OddsSource)
//!   implementations: `StaticSource`, `FailingSource`.

pub mod domain;
pub mod source;
