//! `bioscan` -- command-line front end for the BioScan report engine.

mod cli;
mod commands;
mod error;
mod logging;
mod output;

use clap::Parser;

use bioscan_core::config::{BioscanConfig, GeneralConfig};

use crate::cli::{Cli, Commands};
use crate::error::CliError;
use crate::output::OutputWriter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // An invalid config file falls back to default logging here; the command reports it.
    let mut general = BioscanConfig::load_or_default(&cli.config)
        .await
        .map(|config| config.general)
        .unwrap_or_else(|_| GeneralConfig::default());
    if let Some(level) = &cli.log_level {
        general.log_level = level.clone();
    }
    if let Err(e) = logging::init_tracing(&general) {
        eprintln!("warning: {e}");
    }
    bioscan_core::metrics::describe_all();

    tracing::debug!(config = %cli.config.display(), "bioscan starting");

    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let writer = OutputWriter::new(cli.output);
    match cli.command {
        Commands::Report(args) => commands::report::execute(args, &cli.config, &writer).await,
        Commands::Lookup(args) => commands::lookup::execute(args, &cli.config, &writer).await,
        Commands::Catalog(args) => commands::catalog::execute(args, &writer),
        Commands::Config(args) => commands::config::execute(args, &cli.config, &writer).await,
    }
}
