//! End-to-end behaviour of the comparison pipeline.

use oddsboard::domain::{
    compare_market, decimal_to_fractional, overround_percent, BookmakerQuoteSet, DomainError,
    MarketCatalog, Odds,
};
use oddsboard::testkit::domain::{bookmaker, market_entry, market_entry_with_points};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const BOOKS: [&str; 6] = ["sportsbet", "tab", "neds", "ladbrokes_au", "unibet", "betfair"];

/// Deterministic price generator so failures reproduce.
struct Prices(u64);

impl Prices {
    fn next(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        // 1.01 ..= 5.00 in hundredths, with plenty of collisions for ties.
        let hundredths = 101 + (self.0 >> 33) % 400;
        hundredths as f64 / 100.0
    }
}

fn random_h2h(seed: u64) -> Vec<BookmakerQuoteSet> {
    let mut prices = Prices(seed);
    BOOKS
        .iter()
        .map(|&book| {
            let outcomes = [
                ("Arsenal", prices.next()),
                ("Draw", prices.next()),
                ("Chelsea", prices.next()),
            ];
            bookmaker(book, vec![market_entry("h2h", &outcomes)])
        })
        .collect()
}

#[test]
fn best_price_and_tie_set_invariants_hold() {
    for seed in 0..200 {
        let sets = random_h2h(seed);
        let table = compare_market(MarketCatalog::global(), &sets, "h2h", None).unwrap();

        for outcome in table.outcomes() {
            let max = outcome
                .per_bookmaker()
                .values()
                .map(|p| p.price)
                .max()
                .unwrap();
            assert_eq!(outcome.best_price(), max, "seed {seed}");

            for (key, price) in outcome.per_bookmaker() {
                let tied = outcome.tied_bookmakers().contains(key);
                assert_eq!(price.is_best, tied, "seed {seed}");
                assert_eq!(price.is_best, price.price == max, "seed {seed}");
            }
            assert!(!outcome.tied_bookmakers().is_empty());
        }
    }
}

#[test]
fn output_is_deterministic() {
    let sets = random_h2h(42);
    let first = compare_market(MarketCatalog::global(), &sets, "h2h", None).unwrap();
    let second = compare_market(MarketCatalog::global(), &sets, "h2h", None).unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn tie_order_follows_bookmaker_input_order() {
    let sets = vec![
        bookmaker("unibet", vec![market_entry("h2h", &[("Draw", 3.4)])]),
        bookmaker("tab", vec![market_entry("h2h", &[("Draw", 3.4)])]),
    ];
    let reversed: Vec<_> = sets.iter().rev().cloned().collect();

    let forward = compare_market(MarketCatalog::global(), &sets, "h2h", None).unwrap();
    let backward = compare_market(MarketCatalog::global(), &reversed, "h2h", None).unwrap();

    let keys = |t: &oddsboard::domain::ComparisonTable| -> Vec<String> {
        t.outcomes()[0]
            .tied_bookmakers()
            .iter()
            .map(ToString::to_string)
            .collect()
    };
    assert_eq!(keys(&forward), ["unibet", "tab"]);
    assert_eq!(keys(&backward), ["tab", "unibet"]);
}

#[test]
fn h2h_ordering_is_home_draw_away() {
    let sets = vec![bookmaker(
        "tab",
        vec![market_entry(
            "h2h",
            &[("Draw", 3.4), ("Team B (Away)", 3.6), ("Team A (Home)", 2.1)],
        )],
    )];

    let table = compare_market(MarketCatalog::global(), &sets, "h2h", None).unwrap();

    let names: Vec<_> = table.outcomes().iter().map(|o| o.outcome()).collect();
    assert_eq!(names, ["Team A (Home)", "Draw", "Team B (Away)"]);
}

#[test]
fn totals_keep_points_per_bookmaker() {
    let sets = vec![
        bookmaker(
            "tab",
            vec![market_entry_with_points(
                "totals",
                &[("Over", 1.9, 2.5), ("Under", 1.9, 2.5)],
            )],
        ),
        bookmaker(
            "neds",
            vec![market_entry_with_points(
                "totals",
                &[("Under", 1.8, 3.0), ("Over", 2.0, 3.0)],
            )],
        ),
    ];

    let table = compare_market(MarketCatalog::global(), &sets, "totals", None).unwrap();

    let over = &table.outcomes()[0];
    assert_eq!(over.outcome(), "Over");
    assert_eq!(over.best_price().value(), dec!(2.0));
    assert_eq!(
        over.price_for(&"tab".into()).and_then(|p| p.point),
        Some(2.5)
    );
    assert_eq!(
        over.price_for(&"neds".into()).and_then(|p| p.point),
        Some(3.0)
    );
}

#[test]
fn empty_input_gives_empty_table() {
    let table = compare_market(MarketCatalog::global(), &[], "h2h", None).unwrap();
    assert!(table.is_empty());
    assert_eq!(table.market().key().as_str(), "h2h");
}

#[test]
fn unknown_market_is_rejected() {
    let err = compare_market(MarketCatalog::global(), &random_h2h(1), "unknown_key", None)
        .unwrap_err();
    assert_eq!(
        err,
        DomainError::UnknownMarket {
            key: "unknown_key".into()
        }
    );
}

#[test]
fn invalid_price_is_rejected() {
    let sets = vec![bookmaker("tab", vec![market_entry("h2h", &[("Draw", 1.0)])])];
    assert!(matches!(
        compare_market(MarketCatalog::global(), &sets, "h2h", None),
        Err(DomainError::InvalidPrice { .. })
    ));
}

#[test]
fn margins_match_the_calculator() {
    let sets = random_h2h(7);
    let table = compare_market(MarketCatalog::global(), &sets, "h2h", None).unwrap();

    let margins = table.bookmaker_margins();
    assert_eq!(margins.len(), BOOKS.len());

    for margin in margins {
        let prices: Vec<Odds> = table
            .outcomes()
            .iter()
            .map(|o| o.price_for(&margin.bookmaker).unwrap().price)
            .collect();
        assert_eq!(margin.margin_percent, overround_percent(&prices));
    }
}

#[test]
fn margin_examples() {
    let even = [Odds::try_new(dec!(2.0)).unwrap(), Odds::try_new(dec!(2.0)).unwrap()];
    assert_eq!(overround_percent(&even), Decimal::ZERO);

    let three_way = [
        Odds::try_new(dec!(1.9)).unwrap(),
        Odds::try_new(dec!(1.9)).unwrap(),
        Odds::try_new(dec!(4.5)).unwrap(),
    ];
    let margin = overround_percent(&three_way);
    assert!((margin - dec!(27.48)).abs() < dec!(0.01), "got {margin}");
}

#[test]
fn fractional_examples() {
    assert_eq!(decimal_to_fractional(dec!(2.5)).unwrap(), "3/2");
    assert_eq!(decimal_to_fractional(dec!(1.91)).unwrap(), "91/100");
    assert_eq!(decimal_to_fractional(dec!(3.0)).unwrap(), "2/1");
    assert!(decimal_to_fractional(dec!(1.0)).is_err());
}
