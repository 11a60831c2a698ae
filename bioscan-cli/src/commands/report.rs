//! `bioscan report` command handler

use std::io::Write;
use std::path::Path;

use colored::{ColoredString, Colorize};
use serde::Serialize;
use tracing::info;

use bioscan_core::config::BioscanConfig;
use bioscan_core::types::RiskTier;
use bioscan_report::{
    GaugeBand, Nutrient, RawProductRecord, ReportAssembler, ReportEngineConfig,
    ReportEngineError, ScanReport,
};

use crate::cli::ReportArgs;
use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Execute the `report` command.
///
/// Reads a saved product response, assembles the scan report and renders it.
///
/// # Errors
///
/// * `CliError::NotFound` if the file holds a "product not found" envelope
/// * `CliError::RiskThreshold` if `--fail-on` is set and a risk at or above it is detected
/// * `CliError::Core` if the file is not UTF-8 or not a JSON object
/// * `CliError::Command` if the file exceeds `[lookup] max_record_bytes` or `--fail-on` is unknown
pub async fn execute(
    args: ReportArgs,
    config_path: &Path,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    let fail_on = args.fail_on.as_deref().map(parse_tier).transpose()?;

    let config = BioscanConfig::load_or_default(config_path).await?;
    let engine_config = ReportEngineConfig::from_core(&config.report)?;

    let metadata = tokio::fs::metadata(&args.file).await?;
    let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
    if size > config.lookup.max_record_bytes {
        return Err(CliError::Command(format!(
            "{} is {} bytes, exceeding max_record_bytes ({})",
            args.file.display(),
            size,
            config.lookup.max_record_bytes
        )));
    }

    let bytes = tokio::fs::read(&args.file).await?;
    let body = String::from_utf8(bytes).map_err(|e| {
        ReportEngineError::Decode(format!("{} is not UTF-8: {}", args.file.display(), e))
    })?;
    let raw = RawProductRecord::from_envelope_or_product(&body)?.ok_or_else(|| {
        CliError::NotFound(format!("{} holds no product", args.file.display()))
    })?;

    let report = ReportAssembler::new(&engine_config).assemble(&raw);
    info!(
        file = %args.file.display(),
        risks = report.detected_risks.len(),
        "report assembled"
    );

    writer.render(&ReportView::new(args.file.display().to_string(), &report))?;

    match fail_on {
        Some(threshold) => check_threshold(&report, threshold),
        None => Ok(()),
    }
}

/// Parse a tier name given on the command line.
pub(crate) fn parse_tier(raw: &str) -> Result<RiskTier, CliError> {
    RiskTier::from_str_loose(raw).ok_or_else(|| {
        CliError::Command(format!(
            "unknown risk tier: {raw} (expected: moderate, high, critical)"
        ))
    })
}

fn check_threshold(report: &ScanReport, threshold: RiskTier) -> Result<(), CliError> {
    let count = report
        .detected_risks
        .iter()
        .filter(|risk| risk.tier() >= threshold)
        .count();
    if count > 0 {
        return Err(CliError::RiskThreshold {
            count,
            tier: threshold,
        });
    }
    Ok(())
}

/// A scan report plus the place it came from.
#[derive(Serialize)]
pub(crate) struct ReportView<'a> {
    pub source: String,
    #[serde(flatten)]
    pub report: &'a ScanReport,
}

impl<'a> ReportView<'a> {
    pub(crate) fn new(source: String, report: &'a ScanReport) -> Self {
        Self { source, report }
    }
}

impl Render for ReportView<'_> {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        let report = self.report;

        writeln!(
            w,
            "{} ({})",
            report.product_name.bold(),
            report.brand
        )?;
        writeln!(w, "Source: {}", self.source)?;
        if let Some(url) = &report.image_url {
            writeln!(w, "Image: {}", url)?;
        }

        let grade = if report.visuals.nutri_score_favourable {
            report.nutri_score_grade.green()
        } else {
            report.nutri_score_grade.yellow()
        };
        let nova = report
            .nova_group
            .map_or_else(|| "?".to_owned(), |group| group.to_string());
        let palm_oil = if report.contains_palm_oil {
            "yes".red()
        } else {
            "no".green()
        };
        writeln!(
            w,
            "Nutri-Score: {}  NOVA: {}  Palm oil: {}",
            grade, nova, palm_oil
        )?;
        writeln!(w)?;

        let counts = report.tier_counts();
        writeln!(
            w,
            "Risks: {} (critical: {}, high: {}, moderate: {})",
            counts.total(),
            counts.critical,
            counts.high,
            counts.moderate
        )?;
        if report.has_risks() {
            writeln!(w, "{:<10} {:<7} {:<24} Description", "Tier", "Code", "Name")?;
            writeln!(w, "{}", "-".repeat(80))?;
            for risk in &report.detected_risks {
                writeln!(
                    w,
                    "{:<10} {:<7} {:<24} {}",
                    colored_tier(risk.tier()),
                    risk.code.as_str(),
                    risk.name(),
                    risk.entry.description
                )?;
            }
        }
        writeln!(w)?;

        writeln!(w, "Per 100g:")?;
        for nutrient in Nutrient::ALL {
            writeln!(
                w,
                "  {:<16} {:>8.2}",
                nutrient.label(),
                report.nutrients.get(nutrient)
            )?;
        }
        writeln!(w, "  {:<16} {:>8.2}", "Starch", report.derived.starch)?;
        writeln!(
            w,
            "  {:<16} {:>8.2}",
            "Unsaturated Fat", report.derived.unsaturated_fat
        )?;
        writeln!(w)?;

        writeln!(w, "Gauges:")?;
        for gauge in &report.visuals.gauges {
            writeln!(
                w,
                "  {:<16} {:>8.2} / {:<6} {}",
                gauge.label,
                gauge.value,
                gauge.max,
                colored_band(gauge.band)
            )?;
        }
        writeln!(w)?;

        let allergens = if report.allergens.is_empty() {
            "none".to_owned()
        } else {
            report.allergens.join(", ")
        };
        writeln!(w, "Allergens: {}", allergens)?;
        writeln!(w, "Ingredients: {}", report.ingredients_text)?;

        Ok(())
    }
}

/// Colored, upper-case tier label for text tables.
pub(crate) fn colored_tier(tier: RiskTier) -> ColoredString {
    let label = tier.as_label().to_uppercase();
    match tier {
        RiskTier::Critical => label.red().bold(),
        RiskTier::High => label.red(),
        RiskTier::Moderate => label.yellow(),
    }
}

fn colored_band(band: GaugeBand) -> ColoredString {
    match band {
        GaugeBand::Low => "low".green(),
        GaugeBand::Elevated => "elevated".yellow(),
        GaugeBand::Excessive => "excessive".red(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with_tags(tags: &[&str]) -> ScanReport {
        let raw = RawProductRecord {
            product_name: Some("Cola".to_owned()),
            additives_tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            ..RawProductRecord::default()
        };
        ReportAssembler::default().assemble(&raw)
    }

    #[test]
    fn test_parse_tier_accepts_case_insensitive_names() {
        assert_eq!(parse_tier("HIGH").unwrap(), RiskTier::High);
        assert_eq!(parse_tier("critical").unwrap(), RiskTier::Critical);
    }

    #[test]
    fn test_parse_tier_rejects_unknown() {
        let err = parse_tier("severe").unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("severe"));
    }

    #[test]
    fn test_threshold_counts_at_or_above() {
        // e150d: High, e171: Critical
        let report = report_with_tags(&["en:e150d", "en:e171"]);
        match check_threshold(&report, RiskTier::High) {
            Err(CliError::RiskThreshold { count, tier }) => {
                assert_eq!(count, 2);
                assert_eq!(tier, RiskTier::High);
            }
            other => panic!("expected RiskThreshold, got {other:?}"),
        }
        match check_threshold(&report, RiskTier::Critical) {
            Err(CliError::RiskThreshold { count, .. }) => assert_eq!(count, 1),
            other => panic!("expected RiskThreshold, got {other:?}"),
        }
    }

    #[test]
    fn test_threshold_passes_without_risks() {
        let report = report_with_tags(&["en:e330"]);
        assert!(check_threshold(&report, RiskTier::Moderate).is_ok());
    }

    #[test]
    fn test_render_text_lists_risks_and_defaults() {
        colored::control::set_override(false);
        let report = report_with_tags(&["en:e171"]);
        let view = ReportView::new("cola.json".to_owned(), &report);

        let mut buffer = Vec::new();
        view.render_text(&mut buffer).expect("render should succeed");
        let text = String::from_utf8(buffer).expect("valid UTF-8");

        assert!(text.contains("Cola (Unknown)"));
        assert!(text.contains("Source: cola.json"));
        assert!(text.contains("NOVA: ?"));
        assert!(text.contains("CRITICAL"));
        assert!(text.contains("Titanium Dioxide"));
        assert!(text.contains("Allergens: none"));
        assert!(text.contains("Ingredients: Not Available"));
    }

    #[test]
    fn test_json_view_flattens_report() {
        let report = report_with_tags(&["en:e171"]);
        let view = ReportView::new("cola.json".to_owned(), &report);
        let json = serde_json::to_value(&view).expect("serializable");
        assert_eq!(json["source"], "cola.json");
        assert_eq!(json["product_name"], "Cola");
        assert_eq!(json["detected_risks"][0]["tier"], "Critical");
    }
}
