//! The `pathfit questions` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use pathfit_core::model::Category;

use crate::config::load_config_from;

pub fn execute(
    catalog_path: Option<PathBuf>,
    category: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let catalog = super::resolve_catalog(&config, catalog_path)?;

    let category: Option<Category> = category
        .map(|c| c.parse().map_err(|e: String| anyhow::anyhow!(e)))
        .transpose()?;

    let mut table = Table::new();
    table.set_header(vec!["ID", "Kind", "Category", "Dimension", "Question"]);

    let mut shown = 0usize;
    for question in catalog.questions() {
        if category.is_some_and(|c| c != question.category) {
            continue;
        }
        let mut text = question.text.clone();
        for (i, option) in question.options.iter().enumerate() {
            text.push_str(&format!("\n  {i}. {option}"));
        }
        table.add_row(vec![
            Cell::new(&question.id),
            Cell::new(question.kind),
            Cell::new(question.category),
            Cell::new(
                question
                    .dimension
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".into()),
            ),
            Cell::new(text),
        ]);
        shown += 1;
    }

    println!("{} ({} questions)", catalog.info().name, catalog.len());
    if shown == 0 {
        println!("No matching questions.");
    } else {
        println!("{table}");
    }

    Ok(())
}
