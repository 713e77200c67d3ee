//! Decimal odds and conversion to other quoting conventions.
//!
//! [`Odds`] is the validated price type used throughout the crate. A decimal
//! price is the total payout per unit stake, stake included, so every valid
//! price is strictly greater than 1.
//!
//! Conversion to fractional odds is a fixed two-decimal approximation:
//! the profit part is rounded to hundredths and the ratio `n/100` is then
//! reduced. `1.333` therefore becomes `33/100`, not `1/3`. There is no
//! fractional-to-decimal conversion.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::error::DomainError;

const FRACTION_DENOMINATOR: u64 = 100;

/// A decimal price strictly greater than 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Odds(Decimal);

impl Odds {
    /// Create odds from a decimal price.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPrice`] if `price <= 1`.
    pub fn try_new(price: Decimal) -> Result<Self, DomainError> {
        if price <= Decimal::ONE {
            return Err(DomainError::InvalidPrice {
                price: price.to_string(),
                reason: "must be greater than 1.0",
            });
        }
        Ok(Self(price))
    }

    /// Create odds from a float as delivered by JSON providers.
    ///
    /// The float goes through its shortest round-trip text form, so `1.91`
    /// becomes exactly `1.91` rather than its binary expansion.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPrice`] for NaN, infinities, values that
    /// do not fit a `Decimal`, and values `<= 1`.
    pub fn try_from_f64(price: f64) -> Result<Self, DomainError> {
        if !price.is_finite() {
            return Err(DomainError::InvalidPrice {
                price: price.to_string(),
                reason: "must be finite",
            });
        }
        let value = Decimal::from_str(&price.to_string()).map_err(|_| DomainError::InvalidPrice {
            price: price.to_string(),
            reason: "out of range",
        })?;
        Self::try_new(value)
    }

    /// Get the underlying decimal price.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Implied probability of this price (`1 / price`).
    #[must_use]
    pub fn implied_probability(&self) -> Decimal {
        Decimal::ONE / self.0
    }

    /// Convert to reduced fractional odds.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPrice`] if the price is too large to be
    /// expressed in hundredths.
    pub fn to_fractional(&self) -> Result<Fraction, DomainError> {
        let too_large = || DomainError::InvalidPrice {
            price: self.0.to_string(),
            reason: "too large for fractional conversion",
        };

        let hundredths = (self.0 - Decimal::ONE)
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or_else(too_large)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let numerator = hundredths.to_u64().ok_or_else(too_large)?;

        Ok(Fraction::reduced(numerator, FRACTION_DENOMINATOR))
    }

    /// Render the price in the requested format.
    #[must_use]
    pub fn display(&self, format: OddsFormat) -> String {
        match format {
            OddsFormat::Decimal => format!("{:.2}", self.0),
            OddsFormat::Fractional => match self.to_fractional() {
                Ok(fraction) => fraction.to_string(),
                Err(_) => format!("{:.2}", self.0),
            },
        }
    }
}

impl TryFrom<Decimal> for Odds {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Odds> for Decimal {
    fn from(odds: Odds) -> Self {
        odds.0
    }
}

impl fmt::Display for Odds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A reduced `numerator/denominator` ratio of profit to stake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    numerator: u64,
    denominator: u64,
}

impl Fraction {
    fn reduced(numerator: u64, denominator: u64) -> Self {
        let divisor = gcd(numerator, denominator).max(1);
        Self {
            numerator: numerator / divisor,
            denominator: denominator / divisor,
        }
    }

    /// Get the numerator.
    #[must_use]
    pub const fn numerator(&self) -> u64 {
        self.numerator
    }

    /// Get the denominator.
    #[must_use]
    pub const fn denominator(&self) -> u64 {
        self.denominator
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let rem = a % b;
        a = b;
        b = rem;
    }
    a
}

/// Convert a raw decimal price into a reduced fractional-odds string.
///
/// # Errors
///
/// Returns [`DomainError::InvalidPrice`] if `price <= 1` or is too large.
pub fn decimal_to_fractional(price: Decimal) -> Result<String, DomainError> {
    Ok(Odds::try_new(price)?.to_fractional()?.to_string())
}

/// Quoting convention used when displaying prices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OddsFormat {
    /// `2.50`
    #[default]
    Decimal,
    /// `3/2`
    Fractional,
}

impl FromStr for OddsFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "decimal" => Ok(Self::Decimal),
            "fractional" => Ok(Self::Fractional),
            other => Err(format!(
                "unknown odds format '{other}' (expected decimal or fractional)"
            )),
        }
    }
}

impl fmt::Display for OddsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decimal => write!(f, "decimal"),
            Self::Fractional => write!(f, "fractional"),
        }
    }
}
