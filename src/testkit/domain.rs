//! Builders for domain primitives used across tests.
//!
//! Every builder stamps records with [`fixed_time`] so serialized output is
//! stable between runs.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::bookmaker;
use crate::domain::{BookmakerQuoteSet, Fixture, FixtureId, MarketEntry, OutcomePrice};

/// Timestamp used for every `last_update` produced here.
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Create a market entry with plain `(name, price)` outcomes.
pub fn market_entry(key: &str, outcomes: &[(&str, f64)]) -> MarketEntry {
    MarketEntry {
        key: key.into(),
        last_update: fixed_time(),
        outcomes: outcomes
            .iter()
            .map(|&(name, price)| OutcomePrice {
                name: name.to_string(),
                price,
                point: None,
            })
            .collect(),
    }
}

/// Create a market entry with `(name, price, point)` outcomes.
pub fn market_entry_with_points(key: &str, outcomes: &[(&str, f64, f64)]) -> MarketEntry {
    MarketEntry {
        key: key.into(),
        last_update: fixed_time(),
        outcomes: outcomes
            .iter()
            .map(|&(name, price, point)| OutcomePrice {
                name: name.to_string(),
                price,
                point: Some(point),
            })
            .collect(),
    }
}

/// Create a bookmaker quote set.
///
/// The display name comes from the bookmaker directory, or the key itself
/// for unknown bookmakers.
pub fn bookmaker(key: &str, markets: Vec<MarketEntry>) -> BookmakerQuoteSet {
    let display_name = bookmaker::lookup(key).map_or(key, |b| b.display_name);
    BookmakerQuoteSet {
        bookmaker: key.into(),
        display_name: display_name.to_string(),
        last_update: Some(fixed_time()),
        markets,
    }
}

/// Create a fixture.
pub fn fixture(
    id: &str,
    home: &str,
    away: &str,
    commence_time: DateTime<Utc>,
    bookmakers: Vec<BookmakerQuoteSet>,
) -> Fixture {
    Fixture {
        id: FixtureId::from(id),
        sport_key: "soccer_epl".into(),
        sport_title: "EPL".into(),
        commence_time,
        home_team: home.to_string(),
        away_team: away.to_string(),
        bookmakers,
    }
}

/// A priced Arsenal v Chelsea fixture with three bookmakers.
///
/// Draw is tied at 3.40 between TAB and Neds; Sportsbet leads Home and
/// Away. Kickoff is one day after [`fixed_time`].
pub fn priced_fixture(id: &str) -> Fixture {
    let h2h = |home, draw, away| {
        market_entry("h2h", &[("Arsenal", home), ("Draw", draw), ("Chelsea", away)])
    };
    let totals = |over, under| {
        market_entry_with_points("totals", &[("Over", over, 2.5), ("Under", under, 2.5)])
    };

    fixture(
        id,
        "Arsenal",
        "Chelsea",
        fixed_time() + chrono::Duration::days(1),
        vec![
            bookmaker("sportsbet", vec![h2h(2.15, 3.30, 3.70), totals(1.90, 1.90)]),
            bookmaker("tab", vec![h2h(2.10, 3.40, 3.60), totals(1.95, 1.85)]),
            bookmaker("neds", vec![h2h(2.05, 3.40, 3.65)]),
        ],
    )
}
