//! CLI module graph.

pub mod command;
pub mod compare;
pub mod convert;
pub mod fixtures;
pub mod margin;
pub mod markets;
pub mod output;
pub mod source;

use crate::error::Result;
use crate::infrastructure::config::Config;
use command::{Cli, Commands};

/// Run a parsed command line.
///
/// # Errors
///
/// Returns the first error raised by the command.
pub async fn run(cli: Cli, config: &Config) -> Result<()> {
    match cli.command {
        Commands::Markets => markets::execute(),
        Commands::Compare(args) => compare::execute(&args, config).await,
        Commands::Fixtures(args) => fixtures::execute(&args, config).await,
        Commands::Margin(args) => margin::execute(&args.prices),
        Commands::Convert(args) => convert::execute(args.price),
    }
}
