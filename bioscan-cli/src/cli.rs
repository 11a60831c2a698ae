//! CLI argument parsing using clap derive API
//!
//! Purely declarative: no side effects or I/O.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// BioScan -- food additive risk and nutrition scan reports.
///
/// Use `bioscan <COMMAND> --help` for subcommand details.
#[derive(Parser, Debug)]
#[command(name = "bioscan", version, about, long_about = None)]
pub struct Cli {
    /// Path to the bioscan.toml configuration file (defaults apply if missing).
    #[arg(short, long, default_value = "bioscan.toml")]
    pub config: PathBuf,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Output format.
    #[arg(long, global = true, default_value = "text")]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a scan report from a saved product response.
    Report(ReportArgs),

    /// Look up a barcode in the product directory and build its report.
    Lookup(LookupArgs),

    /// List the additive risk catalog.
    Catalog(CatalogArgs),

    /// Manage configuration.
    Config(ConfigArgs),
}

// ---- report ----

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Product JSON file (response envelope or bare product object).
    pub file: PathBuf,

    /// Exit with code 4 when a risk at or above this tier is detected
    /// (moderate, high, critical).
    #[arg(long)]
    pub fail_on: Option<String>,
}

// ---- lookup ----

#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Product barcode (digits only).
    pub barcode: String,

    /// Override `[lookup] product_dir`.
    #[arg(long)]
    pub product_dir: Option<PathBuf>,
}

// ---- catalog ----

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Only list entries at or above this tier (moderate, high, critical).
    #[arg(long)]
    pub min_tier: Option<String>,
}

// ---- config ----

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate the configuration file and report errors.
    Validate,
    /// Show the effective configuration (file + env overrides + defaults).
    Show {
        /// Show only a specific section (general, lookup, report).
        #[arg(long)]
        section: Option<String>,
    },
}
