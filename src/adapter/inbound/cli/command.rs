//! Command-line interface definitions.
//!
//! Defines the CLI structure for the oddsboard application using `clap`.

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::domain::OddsFormat;

/// Longest look-ahead accepted by `oddsboard fixtures`.
const MAX_FIXTURE_DAYS: i64 = 365;

/// Compare bookmaker prices and find the best odds per outcome
#[derive(Parser, Debug)]
#[command(name = "oddsboard")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the config file [default: ./oddsboard.toml if present]
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the oddsboard CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List known markets grouped by category
    Markets,

    /// Compare one market for one fixture across bookmakers
    Compare(CompareArgs),

    /// List upcoming fixtures
    Fixtures(FixturesArgs),

    /// Compute the overround of a complete price set
    Margin(MarginArgs),

    /// Convert a decimal price to fractional odds
    Convert(ConvertArgs),
}

/// Where fixtures and prices come from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Read fixtures from a JSON snapshot instead of the provider API
    #[arg(long, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,
}

/// Arguments for `oddsboard compare`.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Provider fixture (event) ID
    pub fixture_id: String,

    /// Market key [default: display.default_market from config]
    #[arg(short, long)]
    pub market: Option<String>,

    /// Restrict to these bookmakers (comma-separated keys)
    #[arg(short, long, value_delimiter = ',')]
    pub bookmakers: Vec<String>,

    /// Price format [default: display.odds_format from config]
    #[arg(short, long)]
    pub format: Option<OddsFormat>,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for `oddsboard fixtures`.
#[derive(Args, Debug)]
pub struct FixturesArgs {
    /// Look-ahead window in days
    #[arg(
        short,
        long,
        default_value_t = 7,
        value_parser = clap::value_parser!(u32).range(1..=MAX_FIXTURE_DAYS)
    )]
    pub days: u32,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for `oddsboard margin`.
#[derive(Args, Debug)]
pub struct MarginArgs {
    /// One decimal price per outcome of a single bookmaker's market
    #[arg(required = true, num_args = 1..)]
    pub prices: Vec<Decimal>,
}

/// Arguments for `oddsboard convert`.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Decimal price to convert
    pub price: Decimal,
}
