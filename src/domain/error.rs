//! Domain validation errors for core domain types.
//!
//! This module defines errors that occur when domain invariants are violated.
//! They are returned by `try_new` constructors and by the comparison pipeline.
//!
//! # Examples
//!
//! Handling validation errors:
//!
//! ```
//! use oddsboard::domain::error::DomainError;
//! use oddsboard::domain::Odds;
//! use rust_decimal_macros::dec;
//!
//! // A price of 1.00 returns nothing beyond the stake
//! let result = Odds::try_new(dec!(1.00));
//!
//! assert!(matches!(result, Err(DomainError::InvalidPrice { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// The requested market key is not in the market catalog.
    #[error("unknown market '{key}'")]
    UnknownMarket {
        /// The key that was requested.
        key: String,
    },

    /// A decimal price is not finite or does not exceed 1.0.
    #[error("invalid price {price}: {reason}")]
    InvalidPrice {
        /// The rejected price, as text so non-finite values survive.
        price: String,
        /// Why the price was rejected.
        reason: &'static str,
    },

    /// The odds source did not return the requested fixture.
    #[error("fixture '{id}' not found")]
    FixtureNotFound {
        /// The fixture that was requested.
        id: String,
    },
}
