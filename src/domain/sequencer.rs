//! Display ordering of outcomes.
//!
//! Match-result (`h2h`) markets use a canonical Home, Draw, Away order. An
//! outcome joins a bucket when its name contains the bucket label, or when
//! it equals the fixture's home or away team. Outcomes in no bucket follow
//! all bucketed ones, sorted by name. Every other market is sorted by name.
//!
//! Name order compares case-insensitively first and falls back to the raw
//! byte order, so `"over"` sorts next to `"Over"` and `"Over"` precedes
//! `"over"`.

use std::cmp::Ordering;

/// Market key that receives the canonical ordering.
pub const MATCH_RESULT_MARKET: &str = "h2h";

/// Canonical bucket labels for match-result markets.
pub const MATCH_RESULT_ORDER: [&str; 3] = ["Home", "Draw", "Away"];

const HOME_BUCKET: usize = 0;
const AWAY_BUCKET: usize = 2;

/// Orders outcomes for display according to a market's policy.
#[derive(Debug, Clone, Copy)]
pub struct OutcomeSequencer<'a> {
    canonical: bool,
    teams: Option<(&'a str, &'a str)>,
}

impl<'a> OutcomeSequencer<'a> {
    /// Create a sequencer for a market key.
    #[must_use]
    pub fn new(market_key: &str) -> Self {
        Self {
            canonical: market_key == MATCH_RESULT_MARKET,
            teams: None,
        }
    }

    /// Also bucket outcomes named exactly after the home or away team.
    #[must_use]
    pub fn with_teams(mut self, home: &'a str, away: &'a str) -> Self {
        self.teams = Some((home, away));
        self
    }

    /// Canonical bucket of an outcome name, or `None` when it has none.
    ///
    /// Always `None` for markets without a canonical order.
    #[must_use]
    pub fn bucket(&self, name: &str) -> Option<usize> {
        if !self.canonical {
            return None;
        }
        if let Some((home, away)) = self.teams {
            if name == home {
                return Some(HOME_BUCKET);
            }
            if name == away {
                return Some(AWAY_BUCKET);
            }
        }
        MATCH_RESULT_ORDER
            .iter()
            .position(|label| name.contains(label))
    }

    /// Compare two outcome names under this sequencer's policy.
    #[must_use]
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match (self.bucket(a), self.bucket(b)) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => compare_names(a, b),
        }
    }

    /// Stable-sort `items` by their outcome names.
    pub fn order<T, F>(&self, items: &mut [T], name_of: F)
    where
        F: Fn(&T) -> &str,
    {
        items.sort_by(|a, b| self.compare(name_of(a), name_of(b)));
    }
}

/// Case-insensitive name order with a raw comparison tie-break.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
