//! The `pathfit compare` command.

use std::path::PathBuf;

use anyhow::Result;

use pathfit_core::report::AssessmentReport;

use crate::config::{load_config_from, OutputFormat};

pub fn execute(
    baseline_path: PathBuf,
    current_path: PathBuf,
    threshold: Option<u8>,
    fail_on_decline: bool,
    format: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let format = super::resolve_format(&config, format)?;
    let threshold = threshold.unwrap_or(config.compare_threshold);

    let baseline = AssessmentReport::load_json(&baseline_path)?;
    let current = AssessmentReport::load_json(&current_path)?;

    let report = current.compare(&baseline, threshold);

    match format {
        OutputFormat::Markdown => {
            println!("{}", report.to_markdown());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!(
                "Comparison: {} improvements, {} declines, {} unchanged",
                report.improvements.len(),
                report.declines.len(),
                report.unchanged
            );

            if report.recommendation_changed() {
                println!(
                    "Recommendation: {} -> {}",
                    report.baseline_recommendation, report.current_recommendation
                );
            }

            if report.catalog_changed {
                println!(
                    "Note: reports use different catalogs ({} vs {})",
                    baseline.catalog.id, current.catalog.id
                );
            }

            if !report.declines.is_empty() {
                println!("\nDeclines:");
                for c in &report.declines {
                    println!("  {} {}% -> {}% ({:+})", c.metric, c.baseline, c.current, c.delta);
                }
            }

            if !report.improvements.is_empty() {
                println!("\nImprovements:");
                for c in &report.improvements {
                    println!("  {} {}% -> {}% ({:+})", c.metric, c.baseline, c.current, c.delta);
                }
            }
        }
    }

    if fail_on_decline && report.has_declines() {
        std::process::exit(1);
    }

    Ok(())
}
