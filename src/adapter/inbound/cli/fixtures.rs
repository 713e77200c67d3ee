//! Upcoming fixture listing.

use chrono::Utc;
use serde_json::json;
use tabled::{Table, Tabled};

use super::command::FixturesArgs;
use super::{output, source};
use crate::application::ComparisonService;
use crate::domain::{Fixture, FixtureSummary};
use crate::error::Result;
use crate::infrastructure::config::Config;

#[derive(Tabled)]
struct FixtureRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Fixture")]
    teams: String,
    #[tabled(rename = "Kickoff")]
    kickoff: String,
    #[tabled(rename = "Starts In")]
    starts_in: String,
    #[tabled(rename = "Odds")]
    odds: String,
}

/// List fixtures kicking off within the requested window.
pub async fn execute(args: &FixturesArgs, config: &Config) -> Result<()> {
    let now = Utc::now();
    let service = ComparisonService::new(source::open(&args.source, config)?);
    let fixtures = service.upcoming(args.days, now).await?;

    if output::is_json() {
        let summaries: Vec<FixtureSummary> = fixtures.iter().map(Fixture::summary).collect();
        output::json_output(json!({
            "command": "fixtures",
            "days": args.days,
            "fixtures": summaries,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));

    if fixtures.is_empty() {
        output::warning(&format!("no fixtures in the next {} days", args.days));
        return Ok(());
    }

    let rows: Vec<FixtureRow> = fixtures
        .iter()
        .map(|f| FixtureRow {
            id: f.id.to_string(),
            teams: format!("{} v {}", f.home_team, f.away_team),
            kickoff: f.commence_time.format("%a %d %b %H:%M").to_string(),
            starts_in: if f.is_live(now) {
                output::positive("LIVE")
            } else {
                f.time_until_kickoff(now)
            },
            odds: if f.has_odds() {
                "yes".to_string()
            } else {
                output::muted("no")
            },
        })
        .collect();

    output::section(&format!("Fixtures in the next {} days", args.days));
    output::lines(&Table::new(rows).to_string());
    output::hint(&format!(
        "run {} to compare prices",
        output::highlight("oddsboard compare <id>")
    ));

    Ok(())
}
