//! Bookmaker margin (overround) calculation.

use rust_decimal::Decimal;

use super::odds::Odds;

/// Overround of a bookmaker's price set, as a percentage.
///
/// Computes `(Σ 1/price - 1) * 100`. A fair book returns `0`; a positive
/// value is the bookmaker's theoretical edge.
///
/// The caller must pass every outcome price of one bookmaker's one market.
/// No completeness check is made: a partial set yields a number that is
/// meaningless but not an error, and an empty set yields `-100`.
#[must_use]
pub fn overround_percent(prices: &[Odds]) -> Decimal {
    let book: Decimal = prices.iter().map(Odds::implied_probability).sum();
    (book - Decimal::ONE) * Decimal::ONE_HUNDRED
}
