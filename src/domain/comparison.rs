//! Best-price resolution and the outcome comparison table.
//!
//! For every outcome the resolver finds the highest price on offer and the
//! bookmakers tied at it. Ties use exact decimal equality.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::id::BookmakerKey;
use super::margin::overround_percent;
use super::market::MarketDefinition;
use super::normalizer::{NormalizedQuotes, OutcomeQuotes};
use super::odds::Odds;

/// One bookmaker's price within an [`OutcomeComparison`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookmakerPrice {
    pub display_name: String,
    pub price: Odds,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point: Option<f64>,
    pub is_best: bool,
    pub last_update: DateTime<Utc>,
}

/// Every bookmaker's price for one outcome, with the best price marked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeComparison {
    outcome: String,
    per_bookmaker: BTreeMap<BookmakerKey, BookmakerPrice>,
    best_price: Odds,
    tied_bookmakers: Vec<BookmakerKey>,
}

impl OutcomeComparison {
    /// Resolve the best price for one outcome.
    ///
    /// Returns `None` only when `quotes` is empty, which normalization never
    /// produces.
    #[must_use]
    pub fn resolve(quotes: OutcomeQuotes) -> Option<Self> {
        let best_price = quotes.quotes().iter().map(|q| q.price()).max()?;

        let mut per_bookmaker = BTreeMap::new();
        let mut tied_bookmakers = Vec::new();
        for quote in quotes.quotes() {
            let is_best = quote.price() == best_price;
            if is_best {
                tied_bookmakers.push(quote.bookmaker().clone());
            }
            per_bookmaker.insert(
                quote.bookmaker().clone(),
                BookmakerPrice {
                    display_name: quote.bookmaker_name().to_string(),
                    price: quote.price(),
                    point: quote.point(),
                    is_best,
                    last_update: quote.last_update(),
                },
            );
        }

        Some(Self {
            outcome: quotes.name().to_string(),
            per_bookmaker,
            best_price,
            tied_bookmakers,
        })
    }

    /// Get the outcome name.
    #[must_use]
    pub fn outcome(&self) -> &str {
        &self.outcome
    }

    /// Prices keyed by bookmaker.
    #[must_use]
    pub const fn per_bookmaker(&self) -> &BTreeMap<BookmakerKey, BookmakerPrice> {
        &self.per_bookmaker
    }

    /// A single bookmaker's price, if it priced this outcome.
    #[must_use]
    pub fn price_for(&self, bookmaker: &BookmakerKey) -> Option<&BookmakerPrice> {
        self.per_bookmaker.get(bookmaker)
    }

    /// The highest price on offer.
    #[must_use]
    pub const fn best_price(&self) -> Odds {
        self.best_price
    }

    /// Bookmakers offering the best price, in input order.
    ///
    /// The order reflects the order bookmakers were supplied in and is not
    /// canonical.
    #[must_use]
    pub fn tied_bookmakers(&self) -> &[BookmakerKey] {
        &self.tied_bookmakers
    }
}

/// Resolve the best price for every normalized outcome, preserving order.
#[must_use]
pub fn resolve_best_prices(normalized: NormalizedQuotes) -> Vec<OutcomeComparison> {
    normalized
        .into_iter()
        .filter_map(OutcomeComparison::resolve)
        .collect()
}

/// A bookmaker's overround across a whole comparison table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookmakerMargin {
    pub bookmaker: BookmakerKey,
    pub display_name: String,
    pub margin_percent: Decimal,
}

/// Ordered comparison of one market for one fixture.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    market: MarketDefinition,
    outcomes: Vec<OutcomeComparison>,
}

impl ComparisonTable {
    /// Create a table from already ordered outcomes.
    #[must_use]
    pub fn new(market: MarketDefinition, outcomes: Vec<OutcomeComparison>) -> Self {
        Self { market, outcomes }
    }

    /// Get the market this table compares.
    #[must_use]
    pub const fn market(&self) -> &MarketDefinition {
        &self.market
    }

    /// Get the outcomes in display order.
    #[must_use]
    pub fn outcomes(&self) -> &[OutcomeComparison] {
        &self.outcomes
    }

    /// True when no bookmaker priced the market.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Bookmakers appearing in the table, each once, in table order.
    #[must_use]
    pub fn bookmakers(&self) -> Vec<(&BookmakerKey, &str)> {
        let mut seen: Vec<(&BookmakerKey, &str)> = Vec::new();
        for outcome in &self.outcomes {
            for (key, price) in &outcome.per_bookmaker {
                if !seen.iter().any(|(k, _)| *k == key) {
                    seen.push((key, price.display_name.as_str()));
                }
            }
        }
        seen
    }

    /// Overround for each bookmaker that priced every outcome.
    ///
    /// Bookmakers with a partial set are left out; their margin would be
    /// meaningless.
    #[must_use]
    pub fn bookmaker_margins(&self) -> Vec<BookmakerMargin> {
        self.bookmakers()
            .into_iter()
            .filter_map(|(key, name)| {
                let prices: Option<Vec<Odds>> = self
                    .outcomes
                    .iter()
                    .map(|o| o.price_for(key).map(|p| p.price))
                    .collect();
                prices.map(|prices| BookmakerMargin {
                    bookmaker: key.clone(),
                    display_name: name.to_string(),
                    margin_percent: overround_percent(&prices),
                })
            })
            .collect()
    }
}
