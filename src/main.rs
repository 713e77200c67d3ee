use std::process::ExitCode;

use clap::Parser;
use oddsboard::adapter::inbound::cli::{
    self,
    command::Cli,
    output::{self, OutputConfig},
};
use oddsboard::infrastructure::config::Config;
use tracing::debug;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    let config = match Config::discover(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            output::error(&format!("failed to load config: {e}"));
            return ExitCode::FAILURE;
        }
    };

    config.init_logging();
    debug!("oddsboard starting");

    match cli::run(cli, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
