//! Market catalog listing.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::domain::MarketCatalog;
use crate::error::Result;

#[derive(Tabled)]
struct MarketRow<'a> {
    #[tabled(rename = "Key")]
    key: &'a str,
    #[tabled(rename = "Market")]
    name: &'a str,
    #[tabled(rename = "Available")]
    available: &'static str,
}

/// List known markets grouped by category.
pub fn execute() -> Result<()> {
    let catalog = MarketCatalog::global();

    if output::is_json() {
        let categories: Vec<_> = catalog
            .list_by_category()
            .iter()
            .map(|(category, markets)| {
                json!({
                    "category": category,
                    "markets": markets,
                })
            })
            .collect();
        output::json_output(json!({
            "command": "markets",
            "categories": categories,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));

    for (category, markets) in catalog.list_by_category() {
        output::section(&format!("{} markets", capitalize(category.as_str())));
        let rows = markets.iter().map(|m| MarketRow {
            key: m.key().as_str(),
            name: m.display_name(),
            available: if m.available() { "yes" } else { "no" },
        });
        output::lines(&Table::new(rows).to_string());
    }

    output::hint(&format!(
        "run {} to compare a market",
        output::highlight("oddsboard compare <fixture-id> --market <key>")
    ));

    Ok(())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
