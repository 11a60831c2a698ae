//! `bioscan catalog` command handler

use std::io::Write;

use serde::Serialize;

use bioscan_core::types::RiskTier;
use bioscan_report::{RiskCatalog, RiskEntry};

use crate::cli::CatalogArgs;
use crate::commands::report::{colored_tier, parse_tier};
use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Execute the `catalog` command.
pub fn execute(args: CatalogArgs, writer: &OutputWriter) -> Result<(), CliError> {
    let min_tier = args
        .min_tier
        .as_deref()
        .map(parse_tier)
        .transpose()?
        .unwrap_or_default();

    writer.render(&CatalogListing::build(RiskCatalog::global(), min_tier))
}

/// Catalog listing result.
#[derive(Serialize)]
pub struct CatalogListing {
    pub min_tier: RiskTier,
    pub entries: Vec<CatalogRow>,
}

/// One catalog entry with its code.
#[derive(Serialize)]
pub struct CatalogRow {
    pub code: &'static str,
    #[serde(flatten)]
    pub entry: &'static RiskEntry,
}

impl CatalogListing {
    /// Collect entries at or above `min_tier`, in catalog order.
    pub fn build(catalog: &RiskCatalog, min_tier: RiskTier) -> Self {
        let entries = catalog
            .entries()
            .filter(|(_, entry)| entry.tier >= min_tier)
            .map(|(code, entry)| CatalogRow { code, entry })
            .collect();
        Self { min_tier, entries }
    }
}

impl Render for CatalogListing {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            w,
            "Additive risk catalog ({} entries, min tier: {})",
            self.entries.len(),
            self.min_tier
        )?;
        writeln!(w, "{:<7} {:<24} {:<10} Description", "Code", "Name", "Tier")?;
        writeln!(w, "{}", "-".repeat(80))?;
        for row in &self.entries {
            writeln!(
                w,
                "{:<7} {:<24} {:<10} {}",
                row.code,
                row.entry.name,
                colored_tier(row.entry.tier),
                row.entry.description
            )?;
        }
        Ok(())
    }
}
