//! The `pathfit init` command.

use std::path::Path;

use anyhow::{Context, Result};

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("pathfit.toml"), SAMPLE_CONFIG)?;
    write_if_missing(Path::new("catalogs/example.toml"), EXAMPLE_CATALOG)?;
    write_if_missing(Path::new("answers/example.json"), EXAMPLE_ANSWERS)?;

    println!("\nNext steps:");
    println!("  1. Edit catalogs/example.toml or point pathfit.toml at your own catalog");
    println!("  2. Run: pathfit validate --catalog catalogs/example.toml");
    println!("  3. Run: pathfit score --answers answers/example.json");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
        return Ok(());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# pathfit configuration

# Catalog used when --catalog is not given. Remove to use the bundled
# AI Automation Specialist catalog.
catalog = "catalogs/example.toml"

output_dir = "./pathfit-results"
default_format = "text"
compare_threshold = 0
"#;

const EXAMPLE_CATALOG: &str = r#"[catalog]
id = "example"
name = "Example Assessment"
career = "Data Analyst"
description = "A small catalog to get started"

[[questions]]
id = "curiosity"
kind = "rating-scale"
category = "trait-fit"
dimension = "interest"
text = "I enjoy finding patterns in messy data."

[[questions]]
id = "persistence"
kind = "rating-scale"
category = "trait-fit"
dimension = "drive"
text = "I keep going when a query returns numbers that don't add up."

[[questions]]
id = "sql_having"
kind = "single-choice"
category = "technical"
dimension = "skill"
text = "Which SQL clause filters rows after GROUP BY?"
options = ["HAVING", "WHERE", "ORDER BY", "LIMIT"]
scores = [100, 40, 10, 10]

[[questions]]
id = "dashboard"
kind = "single-choice-with-context"
category = "technical"
dimension = "reasoning"
text = "A dashboard shows a sudden 40% drop in sales. What do you check first?"
context = "The drop appeared overnight and no release went out."
options = [
    "Whether the data pipeline loaded completely",
    "Which region caused the drop",
    "Last year's numbers for the same week",
    "Ask sales what happened",
]
scores = [100, 70, 50, 30]

[[questions]]
id = "feedback"
kind = "rating-scale"
category = "multi-dimensional"
dimension = "learning-agility"
text = "I rework an analysis happily when stakeholders point out gaps."

[[questions]]
id = "impact"
kind = "single-choice"
category = "multi-dimensional"
dimension = "applied-context"
text = "What makes an analysis valuable to a business?"
options = [
    "It changes a decision",
    "It uses advanced statistics",
    "It covers every available metric",
]
scores = [100, 30, 20]

[[skills]]
name = "SQL"
required = "high"
source = "skill"
high_above = 70
medium_above = 40

[[careers]]
title = "Data Analyst"
sources = ["overall-confidence"]

[[careers]]
title = "Analytics Engineer"
sources = ["technical-readiness", "reasoning"]
"#;

const EXAMPLE_ANSWERS: &str = r#"{
  "answers": [
    { "question_id": "curiosity", "value": 5 },
    { "question_id": "persistence", "value": 4 },
    { "question_id": "sql_having", "value": 0, "selected_option": "HAVING" },
    { "question_id": "dashboard", "value": 1 },
    { "question_id": "feedback", "value": 3 },
    { "question_id": "impact", "value": 0 }
  ]
}
"#;
