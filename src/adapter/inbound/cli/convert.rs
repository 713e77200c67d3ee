//! Decimal to fractional conversion.

use rust_decimal::Decimal;
use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::domain::{Odds, OddsFormat};
use crate::error::Result;

/// Print the fractional form of a decimal price.
pub fn execute(price: Decimal) -> Result<()> {
    let odds = Odds::try_new(price)?;
    let fraction = odds.to_fractional()?;
    let implied = (odds.implied_probability() * Decimal::ONE_HUNDRED).round_dp(2);

    if output::is_json() {
        output::json_output(json!({
            "command": "convert",
            "decimal": odds,
            "fractional": fraction.to_string(),
            "implied_percent": implied,
        }));
        return Ok(());
    }

    output::field("Decimal", odds.display(OddsFormat::Decimal));
    output::field("Implied", format!("{implied}%"));
    output::result(fraction);

    Ok(())
}
