//! Market definitions and the process-wide market catalog.
//!
//! - [`MarketCategory`] - Grouping used to build market menus
//! - [`MarketDefinition`] - A known bet type (key, display name, category)
//! - [`MarketCatalog`] - Immutable registry of every known market
//!
//! The catalog is built once. [`MarketCatalog::global`] hands out a shared
//! reference; nothing mutates it afterwards, so no locking is needed.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;

use super::error::DomainError;
use super::id::MarketKey;

/// Grouping of markets. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketCategory {
    Match,
    Goals,
    Player,
    Specials,
}

impl MarketCategory {
    /// Lowercase name as used by the provider and JSON output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::Goals => "goals",
            Self::Player => "player",
            Self::Specials => "specials",
        }
    }
}

impl fmt::Display for MarketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A known market (bet type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketDefinition {
    key: MarketKey,
    display_name: String,
    category: MarketCategory,
    available: bool,
}

impl MarketDefinition {
    /// Create a new market definition.
    pub fn new(
        key: impl Into<MarketKey>,
        display_name: impl Into<String>,
        category: MarketCategory,
        available: bool,
    ) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            category,
            available,
        }
    }

    /// Get the market key.
    #[must_use]
    pub const fn key(&self) -> &MarketKey {
        &self.key
    }

    /// Get the human-readable name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Get the category.
    #[must_use]
    pub const fn category(&self) -> MarketCategory {
        self.category
    }

    /// Whether the market is currently offered for selection.
    #[must_use]
    pub const fn available(&self) -> bool {
        self.available
    }
}

/// Immutable registry of known markets.
///
/// Listing preserves declaration order. The by-category grouping is built
/// once at construction and omits categories with no members.
#[derive(Debug)]
pub struct MarketCatalog {
    markets: Vec<MarketDefinition>,
    by_key: HashMap<MarketKey, usize>,
    by_category: BTreeMap<MarketCategory, Vec<MarketDefinition>>,
}

static CATALOG: OnceLock<MarketCatalog> = OnceLock::new();

impl MarketCatalog {
    /// Build a catalog from definitions in declaration order.
    ///
    /// A later definition with a key already present is ignored.
    #[must_use]
    pub fn new(definitions: Vec<MarketDefinition>) -> Self {
        let mut markets = Vec::with_capacity(definitions.len());
        let mut by_key = HashMap::with_capacity(definitions.len());
        let mut by_category: BTreeMap<MarketCategory, Vec<MarketDefinition>> = BTreeMap::new();

        for definition in definitions {
            if by_key.contains_key(definition.key()) {
                continue;
            }
            by_key.insert(definition.key().clone(), markets.len());
            by_category
                .entry(definition.category())
                .or_default()
                .push(definition.clone());
            markets.push(definition);
        }

        Self {
            markets,
            by_key,
            by_category,
        }
    }

    /// The fixed set of markets this application knows about.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            MarketDefinition::new("h2h", "Match Result (1X2)", MarketCategory::Match, true),
            MarketDefinition::new("totals", "Total Goals O/U", MarketCategory::Goals, true),
            MarketDefinition::new("spreads", "Asian Handicap", MarketCategory::Match, true),
            MarketDefinition::new("btts", "Both Teams to Score", MarketCategory::Goals, true),
            MarketDefinition::new("draw_no_bet", "Draw No Bet", MarketCategory::Match, true),
            MarketDefinition::new("double_chance", "Double Chance", MarketCategory::Match, true),
        ])
    }

    /// Process-wide catalog, built on first use.
    #[must_use]
    pub fn global() -> &'static Self {
        CATALOG.get_or_init(Self::builtin)
    }

    /// Look up a market by key.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownMarket`] if the key is not registered.
    pub fn lookup(&self, key: &str) -> Result<&MarketDefinition, DomainError> {
        self.by_key
            .get(&MarketKey::from(key))
            .map(|&index| &self.markets[index])
            .ok_or_else(|| DomainError::UnknownMarket {
                key: key.to_string(),
            })
    }

    /// All markets in declaration order.
    #[must_use]
    pub fn list_all(&self) -> &[MarketDefinition] {
        &self.markets
    }

    /// Markets grouped by category, in category order.
    #[must_use]
    pub fn list_by_category(&self) -> &BTreeMap<MarketCategory, Vec<MarketDefinition>> {
        &self.by_category
    }

    /// Get the number of markets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.markets.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_contains_the_six_known_markets_in_order() {
        let catalog = MarketCatalog::builtin();
        let keys: Vec<_> = catalog.list_all().iter().map(|m| m.key().as_str()).collect();
        assert_eq!(
            keys,
            ["h2h", "totals", "spreads", "btts", "draw_no_bet", "double_chance"]
        );
    }

    #[test]
    fn lookup_returns_definition() {
        let catalog = MarketCatalog::builtin();
        let market = catalog.lookup("btts").unwrap();
        assert_eq!(market.display_name(), "Both Teams to Score");
        assert_eq!(market.category(), MarketCategory::Goals);
        assert!(market.available());
    }

    #[test]
    fn lookup_unknown_key_fails() {
        let catalog = MarketCatalog::builtin();
        let err = catalog.lookup("unknown_key").unwrap_err();
        assert_eq!(
            err,
            DomainError::UnknownMarket {
                key: "unknown_key".into()
            }
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let catalog = MarketCatalog::builtin();
        assert!(catalog.lookup("H2H").is_err());
    }

    #[test]
    fn by_category_omits_empty_categories() {
        let catalog = MarketCatalog::builtin();
        let grouped = catalog.list_by_category();

        let categories: Vec<_> = grouped.keys().copied().collect();
        assert_eq!(categories, [MarketCategory::Match, MarketCategory::Goals]);
        assert_eq!(grouped[&MarketCategory::Match].len(), 4);
        assert_eq!(grouped[&MarketCategory::Goals].len(), 2);
    }

    #[test]
    fn by_category_preserves_declaration_order_within_group() {
        let catalog = MarketCatalog::builtin();
        let names: Vec<_> = catalog.list_by_category()[&MarketCategory::Match]
            .iter()
            .map(|m| m.key().as_str())
            .collect();
        assert_eq!(names, ["h2h", "spreads", "draw_no_bet", "double_chance"]);
    }

    #[test]
    fn duplicate_keys_keep_first_definition() {
        let catalog = MarketCatalog::new(vec![
            MarketDefinition::new("h2h", "First", MarketCategory::Match, true),
            MarketDefinition::new("h2h", "Second", MarketCategory::Specials, true),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup("h2h").unwrap().display_name(), "First");
        assert!(!catalog
            .list_by_category()
            .contains_key(&MarketCategory::Specials));
    }

    #[test]
    fn global_is_shared() {
        let a = MarketCatalog::global() as *const MarketCatalog;
        let b = MarketCatalog::global() as *const MarketCatalog;
        assert_eq!(a, b);
        assert!(!MarketCatalog::global().is_empty());
    }
}
