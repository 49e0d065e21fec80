//! The `pathfit score` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use pathfit_core::model::{Dimension, Metric};
use pathfit_core::parser::parse_answers;
use pathfit_core::report::AssessmentReport;
use pathfit_core::ScoringEngine;

use crate::config::{load_config_from, OutputFormat};

pub fn execute(
    answers_path: PathBuf,
    catalog_path: Option<PathBuf>,
    format: Option<String>,
    output: Option<PathBuf>,
    no_save: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let format = super::resolve_format(&config, format)?;
    let catalog = super::resolve_catalog(&config, catalog_path)?;
    let answers = parse_answers(&answers_path)?;

    let result = ScoringEngine::new(&catalog).evaluate(&answers)?;
    let report = AssessmentReport::build(&catalog, &answers, result);

    if !report.progress.is_complete() {
        tracing::warn!(
            "{} of {} questions answered; unanswered questions are left out of every score",
            report.progress.answered,
            report.progress.total
        );
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Markdown => println!("{}", report.to_markdown()),
        OutputFormat::Text => print_summary(&report),
    }

    if !no_save {
        let output = output.unwrap_or(config.output_dir);
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");
        let path = output.join(format!("report-{timestamp}.json"));
        report.save_json(&path)?;
        eprintln!("Report saved to: {}", path.display());
    }

    Ok(())
}

fn print_summary(report: &AssessmentReport) {
    let result = &report.result;

    println!(
        "{} ({} of {} questions answered)\n",
        report.catalog.name, report.progress.answered, report.progress.total
    );

    let mut table = Table::new();
    table.set_header(vec!["Metric", "Score", "About"]);
    table.add_row(vec![
        Cell::new(Metric::TraitFit),
        Cell::new(format!("{}%", result.trait_fit)),
        Cell::new("Interest and personality alignment"),
    ]);
    table.add_row(vec![
        Cell::new(Metric::TechnicalReadiness),
        Cell::new(format!("{}%", result.technical_readiness)),
        Cell::new("Current technical knowledge"),
    ]);
    for dimension in Dimension::ALL {
        table.add_row(vec![
            Cell::new(dimension),
            Cell::new(format!("{}%", result.dimensions[dimension])),
            Cell::new(dimension.description()),
        ]);
    }
    table.add_row(vec![
        Cell::new(Metric::OverallConfidence),
        Cell::new(format!("{}%", result.overall_confidence)),
        Cell::new(""),
    ]);
    println!("{table}");

    println!(
        "\nRecommendation: {} - {}",
        result.recommendation,
        result.recommendation.headline()
    );

    println!("\nNext steps:");
    for (i, step) in result.next_steps.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }

    if !report.insights.skill_gaps.is_empty() {
        let mut gaps = Table::new();
        gaps.set_header(vec!["Skill", "Required", "Current", "Gap"]);
        for g in &report.insights.skill_gaps {
            gaps.add_row(vec![
                Cell::new(&g.skill),
                Cell::new(g.required),
                Cell::new(g.current),
                Cell::new(g.gap),
            ]);
        }
        println!("\nSkill gaps:\n{gaps}");
    }

    if !report.insights.career_matches.is_empty() {
        println!("\nRelated careers:");
        for c in &report.insights.career_matches {
            println!("  {:<34} {:>3}%", c.title, c.score);
        }
    }
}
