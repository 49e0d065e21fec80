//! CLI configuration.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// How `score` and `compare` print their results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Top-level pathfit configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathfitConfig {
    /// Catalog used when `--catalog` is not given. The bundled catalog is
    /// used when this is unset too. A relative path is resolved against the
    /// directory of the config file it came from.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Where `score` saves JSON reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Output format when `--format` is not given.
    #[serde(default)]
    pub default_format: OutputFormat,
    /// Points a metric must move by before `compare` reports it.
    #[serde(default)]
    pub compare_threshold: u8,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./pathfit-results")
}

impl Default for PathfitConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            output_dir: default_output_dir(),
            default_format: OutputFormat::default(),
            compare_threshold: 0,
        }
    }
}

impl PathfitConfig {
    /// Pick the catalog path: an explicit flag wins over the config.
    pub fn catalog_path(&self, flag: Option<PathBuf>) -> Option<PathBuf> {
        flag.or_else(|| self.catalog.clone())
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are copied through as-is and never expanded again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + end];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `pathfit.toml` in the current directory
/// 2. `~/.config/pathfit/config.toml`
///
/// `PATHFIT_CATALOG` overrides the configured catalog.
pub fn load_config_from(path: Option<&Path>) -> Result<PathfitConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("pathfit.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let mut config = toml::from_str::<PathfitConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            let base = path.parent().unwrap_or(Path::new(""));
            config.catalog = config
                .catalog
                .as_deref()
                .map(|catalog| base.join(resolve_path(catalog)));
            config
        }
        None => PathfitConfig::default(),
    };

    if let Ok(catalog) = std::env::var("PATHFIT_CATALOG") {
        if !catalog.is_empty() {
            config.catalog = Some(resolve_path(Path::new(&catalog)));
        }
    }

    config.output_dir = resolve_path(&config.output_dir);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("pathfit"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_PATHFIT_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_PATHFIT_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_PATHFIT_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        assert_eq!(resolve_env_vars("${_PATHFIT_UNSET_VAR}/x"), "/x");
        assert_eq!(resolve_env_vars("no ${closing"), "no ${closing");
        std::env::remove_var("_PATHFIT_TEST_VAR");
    }

    #[test]
    fn resolve_env_vars_does_not_expand_values() {
        std::env::set_var("_PATHFIT_SELF_VAR", "${_PATHFIT_SELF_VAR}");
        assert_eq!(resolve_env_vars("${_PATHFIT_SELF_VAR}/x"), "${_PATHFIT_SELF_VAR}/x");
        std::env::set_var("_PATHFIT_SELF_VAR", "${_PATHFIT_SELF_VAR}${_PATHFIT_SELF_VAR}");
        assert_eq!(
            resolve_env_vars("a/${_PATHFIT_SELF_VAR}"),
            "a/${_PATHFIT_SELF_VAR}${_PATHFIT_SELF_VAR}"
        );
        std::env::remove_var("_PATHFIT_SELF_VAR");
    }

    #[test]
    fn default_config() {
        let config = PathfitConfig::default();
        assert!(config.catalog.is_none());
        assert_eq!(config.output_dir, PathBuf::from("./pathfit-results"));
        assert_eq!(config.default_format, OutputFormat::Text);
        assert_eq!(config.compare_threshold, 0);
    }

    #[test]
    fn parse_config() {
        let toml_str = r#"
catalog = "catalogs/analyst.toml"
default_format = "markdown"
compare_threshold = 3
"#;
        let config: PathfitConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("catalogs/analyst.toml")));
        assert_eq!(config.default_format, OutputFormat::Markdown);
        assert_eq!(config.compare_threshold, 3);
        assert_eq!(config.output_dir, PathBuf::from("./pathfit-results"));
    }

    #[test]
    fn explicit_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pathfit.toml");
        std::fs::write(&path, "output_dir = \"${_PATHFIT_TEST_OUT}/reports\"\n").unwrap();
        std::env::set_var("_PATHFIT_TEST_OUT", "/tmp/pf");

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/pf/reports"));
        std::env::remove_var("_PATHFIT_TEST_OUT");

        assert!(load_config_from(Some(&dir.path().join("missing.toml"))).is_err());
    }

    #[test]
    fn relative_catalog_resolves_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "catalog = \"catalogs/mine.toml\"\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.catalog, Some(dir.path().join("catalogs/mine.toml")));

        std::fs::write(&path, "catalog = \"/abs/mine.toml\"\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("/abs/mine.toml")));
    }

    #[test]
    fn flag_beats_config_catalog() {
        let config = PathfitConfig {
            catalog: Some(PathBuf::from("from-config.toml")),
            ..PathfitConfig::default()
        };
        assert_eq!(
            config.catalog_path(Some(PathBuf::from("flag.toml"))),
            Some(PathBuf::from("flag.toml"))
        );
        assert_eq!(config.catalog_path(None), Some(PathBuf::from("from-config.toml")));
    }

    #[test]
    fn output_format_names() {
        assert_eq!("md".parse::<OutputFormat>(), Ok(OutputFormat::Markdown));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("html".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Markdown.to_string(), "markdown");
    }
}
