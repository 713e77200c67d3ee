//! Overround of a price set.

use rust_decimal::Decimal;
use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::domain::{overround_percent, Odds};
use crate::error::Result;

/// Print the overround of `prices`, in percent.
///
/// The prices should be one bookmaker's complete set for one market; a
/// partial set produces a meaningless number.
pub fn execute(prices: &[Decimal]) -> Result<()> {
    let odds = prices
        .iter()
        .map(|&price| Odds::try_new(price))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let margin = overround_percent(&odds).round_dp(2);

    if output::is_json() {
        output::json_output(json!({
            "command": "margin",
            "prices": odds,
            "margin_percent": margin,
        }));
        return Ok(());
    }

    output::field("Prices", format_prices(&odds));
    output::field("Outcomes", odds.len());
    let rendered = format!("{margin}%");
    if margin < Decimal::ZERO {
        output::result(output::positive(&rendered));
        output::note("below 100%: backing every outcome locks in a profit");
    } else {
        output::result(output::negative(&rendered));
    }

    Ok(())
}

fn format_prices(odds: &[Odds]) -> String {
    odds.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
