//! End-to-end comparison of one market across bookmakers.

use tracing::debug;

use super::comparison::{resolve_best_prices, ComparisonTable};
use super::error::DomainError;
use super::market::MarketCatalog;
use super::normalizer::normalize;
use super::quote::BookmakerQuoteSet;
use super::sequencer::OutcomeSequencer;

/// Build the ordered comparison table for `market_key`.
///
/// `teams` is the fixture's `(home, away)` pair; when given, match-result
/// outcomes named after a team are placed in that team's bucket.
///
/// # Errors
///
/// Returns [`DomainError::UnknownMarket`] if the catalog does not know the
/// key, or [`DomainError::InvalidPrice`] if any quote for the market is
/// invalid. A market nobody priced yields an empty table, not an error.
pub fn compare_market(
    catalog: &MarketCatalog,
    bookmakers: &[BookmakerQuoteSet],
    market_key: &str,
    teams: Option<(&str, &str)>,
) -> Result<ComparisonTable, DomainError> {
    let market = catalog.lookup(market_key)?;

    let normalized = normalize(bookmakers, market_key)?;
    let mut outcomes = resolve_best_prices(normalized);

    let mut sequencer = OutcomeSequencer::new(market_key);
    if let Some((home, away)) = teams {
        sequencer = sequencer.with_teams(home, away);
    }
    sequencer.order(&mut outcomes, |o| o.outcome());

    debug!(
        market = market_key,
        outcomes = outcomes.len(),
        "Built comparison table"
    );

    Ok(ComparisonTable::new(market.clone(), outcomes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::{bookmaker, market_entry};
    use rust_decimal_macros::dec;

    #[test]
    fn orders_h2h_home_draw_away() {
        let sets = vec![
            bookmaker(
                "tab",
                vec![market_entry(
                    "h2h",
                    &[("Draw", 3.4), ("Team B (Away)", 3.6), ("Team A (Home)", 2.1)],
                )],
            ),
            bookmaker(
                "neds",
                vec![market_entry("h2h", &[("Team A (Home)", 2.2), ("Draw", 3.4)])],
            ),
        ];

        let table = compare_market(MarketCatalog::global(), &sets, "h2h", None).unwrap();

        let names: Vec<_> = table.outcomes().iter().map(|o| o.outcome()).collect();
        assert_eq!(names, ["Team A (Home)", "Draw", "Team B (Away)"]);
        assert_eq!(table.outcomes()[0].best_price().value(), dec!(2.2));

        let draw_ties: Vec<_> = table.outcomes()[1]
            .tied_bookmakers()
            .iter()
            .map(|k| k.as_str())
            .collect();
        assert_eq!(draw_ties, ["tab", "neds"]);
    }

    #[test]
    fn team_names_place_plain_outcomes() {
        let sets = vec![bookmaker(
            "tab",
            vec![market_entry(
                "h2h",
                &[("Chelsea", 3.6), ("Draw", 3.4), ("Arsenal", 2.1)],
            )],
        )];

        let table = compare_market(
            MarketCatalog::global(),
            &sets,
            "h2h",
            Some(("Arsenal", "Chelsea")),
        )
        .unwrap();

        let names: Vec<_> = table.outcomes().iter().map(|o| o.outcome()).collect();
        assert_eq!(names, ["Arsenal", "Draw", "Chelsea"]);
    }

    #[test]
    fn totals_sort_by_name() {
        let sets = vec![bookmaker(
            "tab",
            vec![market_entry("totals", &[("Under", 1.95), ("Over", 1.9)])],
        )];

        let table = compare_market(MarketCatalog::global(), &sets, "totals", None).unwrap();

        let names: Vec<_> = table.outcomes().iter().map(|o| o.outcome()).collect();
        assert_eq!(names, ["Over", "Under"]);
        assert_eq!(table.market().display_name(), "Total Goals O/U");
    }

    #[test]
    fn unknown_market_fails_before_normalizing() {
        let sets = vec![bookmaker("tab", vec![market_entry("h2h", &[("Home", 0.5)])])];
        assert!(matches!(
            compare_market(MarketCatalog::global(), &sets, "corners", None),
            Err(DomainError::UnknownMarket { .. })
        ));
    }

    #[test]
    fn unpriced_market_is_empty() {
        let sets = vec![bookmaker("tab", vec![market_entry("h2h", &[("Home", 2.0)])])];
        let table = compare_market(MarketCatalog::global(), &sets, "btts", None).unwrap();
        assert!(table.is_empty());
        assert!(table.bookmaker_margins().is_empty());
    }
}
