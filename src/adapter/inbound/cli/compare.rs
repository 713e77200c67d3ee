//! Fixture comparison table.

use serde_json::json;
use tabled::builder::Builder;
use tabled::{Table, Tabled};

use super::command::CompareArgs;
use super::{output, source};
use crate::application::{ComparisonService, FixtureComparison};
use crate::domain::bookmaker;
use crate::domain::{BookmakerKey, FixtureId, OddsFormat, OutcomeComparison};
use crate::error::Result;
use crate::infrastructure::config::Config;

const NO_PRICE: &str = "-";

#[derive(Tabled)]
struct MarginRow {
    #[tabled(rename = "Bookmaker")]
    bookmaker: String,
    #[tabled(rename = "Margin")]
    margin: String,
}

/// Compare one market for one fixture and print the table.
pub async fn execute(args: &CompareArgs, config: &Config) -> Result<()> {
    let market = args
        .market
        .as_deref()
        .unwrap_or(config.display.default_market.as_str());
    let format = args.format.unwrap_or(config.display.odds_format);
    let bookmakers: Vec<BookmakerKey> = args
        .bookmakers
        .iter()
        .map(|key| key.trim())
        .filter(|key| !key.is_empty())
        .map(BookmakerKey::from)
        .collect();

    let service = ComparisonService::new(source::open(&args.source, config)?);
    let comparison = service
        .compare(&FixtureId::from(args.fixture_id.as_str()), market, &bookmakers)
        .await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "compare",
            "fixture": comparison.fixture,
            "market": comparison.table.market(),
            "bookmakers": bookmaker::active_in(&comparison.table),
            "outcomes": comparison.table.outcomes(),
            "margins": comparison.table.bookmaker_margins(),
        }));
        return Ok(());
    }

    render(&comparison, format);
    Ok(())
}

fn render(comparison: &FixtureComparison, format: OddsFormat) {
    let fixture = &comparison.fixture;
    let table = &comparison.table;

    output::header(env!("CARGO_PKG_VERSION"));
    output::field(
        "Fixture",
        format!("{} v {}", fixture.home_team, fixture.away_team),
    );
    output::field(
        "Kickoff",
        fixture.commence_time.format("%a %d %b %H:%M UTC"),
    );
    output::field("Market", table.market().display_name());

    if table.is_empty() {
        output::warning(&format!(
            "no bookmaker offers {} for this fixture",
            table.market().key()
        ));
        return;
    }

    let bookmakers = bookmaker::active_in(table);

    let mut builder = Builder::default();
    let mut heading = vec!["Outcome".to_string()];
    heading.extend(bookmakers.iter().map(|b| b.display_name.clone()));
    heading.push("Best".to_string());
    builder.push_record(heading);

    for outcome in table.outcomes() {
        let mut record = vec![fixture.outcome_label(table.market().key().as_str(), outcome.outcome())];
        record.extend(
            bookmakers
                .iter()
                .map(|b| price_cell(outcome, &b.key, format)),
        );
        record.push(best_cell(outcome, format));
        builder.push_record(record);
    }

    output::section("Prices");
    output::lines(&builder.build().to_string());

    let margins: Vec<MarginRow> = table
        .bookmaker_margins()
        .into_iter()
        .map(|m| MarginRow {
            bookmaker: m.display_name,
            margin: format!("{}%", m.margin_percent.round_dp(2)),
        })
        .collect();
    if !margins.is_empty() {
        output::section("Bookmaker margins");
        output::lines(&Table::new(margins).to_string());
    }
}

fn price_cell(outcome: &OutcomeComparison, bookmaker: &BookmakerKey, format: OddsFormat) -> String {
    match outcome.price_for(bookmaker) {
        Some(price) if price.is_best => output::best(price.price.display(format)),
        Some(price) => price.price.display(format),
        None => output::muted(NO_PRICE),
    }
}

fn best_cell(outcome: &OutcomeComparison, format: OddsFormat) -> String {
    let names: Vec<&str> = outcome
        .tied_bookmakers()
        .iter()
        .filter_map(|key| outcome.price_for(key))
        .map(|price| price.display_name.as_str())
        .collect();
    format!(
        "{} {}",
        output::best(outcome.best_price().display(format)),
        output::muted(format!("({})", names.join(", ")))
    )
}
