//! `bioscan lookup` command handler

use std::path::Path;

use tracing::info;

use bioscan_core::config::BioscanConfig;
use bioscan_core::types::Barcode;
use bioscan_lookup::{DirectoryLookup, LookupSettings, ScanOutcome, ScanService};
use bioscan_report::{ReportAssembler, ReportEngineConfig};

use crate::cli::LookupArgs;
use crate::commands::report::ReportView;
use crate::error::CliError;
use crate::output::OutputWriter;

/// Execute the `lookup` command.
///
/// Resolves `<product_dir>/<barcode>.json` and renders the resulting report.
/// A missing record is reported as `CliError::NotFound` (exit code 5).
pub async fn execute(
    args: LookupArgs,
    config_path: &Path,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    let barcode = Barcode::parse(&args.barcode)?;

    let mut config = BioscanConfig::load_or_default(config_path).await?;
    if let Some(dir) = args.product_dir {
        config.lookup.product_dir = dir.display().to_string();
    }

    let settings = LookupSettings::from_core(&config.lookup)?;
    let engine_config = ReportEngineConfig::from_core(&config.report)?;
    info!(
        barcode = %barcode,
        product_dir = %settings.product_dir.display(),
        "looking up product"
    );

    let service = ScanService::new(
        DirectoryLookup::new(settings),
        ReportAssembler::new(&engine_config),
    );

    match service.scan(&barcode).await? {
        ScanOutcome::Report(report) => {
            writer.render(&ReportView::new(barcode.to_string(), &report))?;
            Ok(())
        }
        ScanOutcome::NotFound { barcode } => {
            Err(CliError::NotFound(format!("no record for barcode {barcode}")))
        }
    }
}
