//! Catalog and answer file parsing.
//!
//! Loads question catalogs from TOML files and directories, validates them,
//! and reads answer files in JSON or TOML.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::answers::AnswerSet;
use crate::catalog::{Catalog, CatalogInfo};
use crate::guidance::Guidance;
use crate::insights::{CareerDefinition, SkillDefinition};
use crate::model::{Answer, Category, Dimension, Question};

/// The AI automation catalog shipped with the crate.
pub const BUILTIN_CATALOG: &str = include_str!("../catalogs/ai-automation.toml");

/// Intermediate TOML structure for parsing catalog files.
#[derive(Debug, Deserialize)]
struct TomlCatalogFile {
    catalog: TomlCatalogHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
    #[serde(default)]
    guidance: Option<Guidance>,
    #[serde(default)]
    skills: Vec<SkillDefinition>,
    #[serde(default)]
    careers: Vec<CareerDefinition>,
}

#[derive(Debug, Deserialize)]
struct TomlCatalogHeader {
    id: String,
    name: String,
    #[serde(default)]
    career: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    kind: String,
    category: String,
    #[serde(default)]
    dimension: Option<String>,
    text: String,
    #[serde(default)]
    options: Vec<String>,
    #[serde(default)]
    context: Option<String>,
    #[serde(default)]
    scores: Option<Vec<u8>>,
}

/// Parse a single TOML file into a `Catalog`.
pub fn parse_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;

    parse_catalog_str(&content, path)
}

/// Parse a TOML string into a `Catalog`.
pub fn parse_catalog_str(content: &str, source_path: &Path) -> Result<Catalog> {
    let parsed: TomlCatalogFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let mut builder = Catalog::builder(CatalogInfo {
        id: parsed.catalog.id,
        name: parsed.catalog.name,
        career: parsed.catalog.career,
        description: parsed.catalog.description,
    });

    for q in parsed.questions {
        let kind = q
            .kind
            .parse()
            .map_err(|e: String| anyhow::anyhow!("question {}: {}", q.id, e))?;
        let category = q
            .category
            .parse()
            .map_err(|e: String| anyhow::anyhow!("question {}: {}", q.id, e))?;
        let dimension = q
            .dimension
            .map(|d| d.parse().map_err(|e: String| anyhow::anyhow!("question {}: {}", q.id, e)))
            .transpose()?;

        if let Some(scores) = q.scores {
            builder = builder.scores(q.id.clone(), scores);
        }
        builder = builder.question(Question {
            id: q.id,
            kind,
            category,
            dimension,
            text: q.text,
            options: q.options,
            context: q.context,
        });
    }

    if let Some(guidance) = parsed.guidance {
        builder = builder.guidance(guidance);
    }
    for skill in parsed.skills {
        builder = builder.skill(skill);
    }
    for career in parsed.careers {
        builder = builder.career(career);
    }

    builder
        .build()
        .with_context(|| format!("invalid catalog: {}", source_path.display()))
}

/// The bundled AI automation catalog.
pub fn builtin_catalog() -> Result<Catalog> {
    parse_catalog_str(BUILTIN_CATALOG, Path::new("<builtin>/ai-automation.toml"))
}

/// Load `path` if given, otherwise the bundled catalog.
pub fn load_catalog_or_builtin(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(p) => parse_catalog(p),
        None => builtin_catalog(),
    }
}

/// Recursively load all `.toml` catalog files from a directory.
pub fn load_catalog_directory(dir: &Path) -> Result<Vec<Catalog>> {
    let mut catalogs = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut paths = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.sort();

    for path in paths {
        if path.is_dir() {
            catalogs.extend(load_catalog_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_catalog(&path) {
                Ok(catalog) => catalogs.push(catalog),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(catalogs)
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Check a built catalog for issues that are legal but probably unintended.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for question in catalog.questions() {
        if question.kind.is_choice() && !catalog.scoring().contains(&question.id) {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: "choice question has no scoring table; every answer scores 50".into(),
            });
        }
        if question.text.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: "question text is empty".into(),
            });
        }
        if question.category == Category::MultiDimensional && question.dimension.is_none() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: "multi-dimensional question has no dimension and is never scored".into(),
            });
        }
    }

    for category in [Category::TraitFit, Category::Technical] {
        if catalog.questions_in(category).next().is_none() {
            warnings.push(ValidationWarning {
                question_id: None,
                message: format!("no {category} questions; that score is always 0"),
            });
        }
    }

    for dimension in Dimension::ALL {
        if catalog.questions_for(dimension).next().is_none() {
            warnings.push(ValidationWarning {
                question_id: None,
                message: format!("no question feeds the {dimension} dimension; it is always 0"),
            });
        }
    }

    warnings
}

/// On-disk shape of an answer file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AnswerFile {
    #[serde(default)]
    pub answers: Vec<Answer>,
}

impl From<AnswerFile> for AnswerSet {
    fn from(file: AnswerFile) -> Self {
        let mut seen = HashSet::new();
        for answer in &file.answers {
            if !seen.insert(answer.question_id.as_str()) {
                tracing::warn!(
                    "question {} answered more than once, keeping the last answer",
                    answer.question_id
                );
            }
        }
        file.answers.into()
    }
}

/// Answer file encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerFormat {
    Json,
    Toml,
}

impl AnswerFormat {
    /// Pick a format from a file extension; anything but `.toml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        if path.extension().is_some_and(|ext| ext == "toml") {
            AnswerFormat::Toml
        } else {
            AnswerFormat::Json
        }
    }
}

/// Read an answer file, choosing the format by extension.
pub fn parse_answers(path: &Path) -> Result<AnswerSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answer file: {}", path.display()))?;

    parse_answers_str(&content, AnswerFormat::from_path(path))
        .with_context(|| format!("failed to parse answers: {}", path.display()))
}

/// Parse answers from a string.
pub fn parse_answers_str(content: &str, format: AnswerFormat) -> Result<AnswerSet> {
    let file: AnswerFile = match format {
        AnswerFormat::Json => serde_json::from_str(content).context("invalid answer JSON")?,
        AnswerFormat::Toml => toml::from_str(content).context("invalid answer TOML")?,
    };
    Ok(file.into())
}
