//! Subcommand implementations.

pub mod compare;
pub mod init;
pub mod questions;
pub mod score;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;

use pathfit_core::parser::load_catalog_or_builtin;
use pathfit_core::Catalog;

use crate::config::{OutputFormat, PathfitConfig};

/// Load the catalog named by the flag, the config, or the bundled one.
pub(crate) fn resolve_catalog(config: &PathfitConfig, flag: Option<PathBuf>) -> Result<Catalog> {
    let path = config.catalog_path(flag);
    match &path {
        Some(p) => tracing::debug!("using catalog {}", p.display()),
        None => tracing::debug!("using bundled catalog"),
    }
    load_catalog_or_builtin(path.as_deref())
}

/// Parse the `--format` flag, falling back to the configured default.
pub(crate) fn resolve_format(config: &PathfitConfig, flag: Option<String>) -> Result<OutputFormat> {
    match flag {
        Some(f) => f.parse().map_err(|e: String| anyhow::anyhow!(e)),
        None => Ok(config.default_format),
    }
}
