//! Derived insights: skill gap analysis and related career matches.
//!
//! Both are computed from a finished [`AssessmentResult`] and the definitions
//! a catalog ships in its `[[skills]]` and `[[careers]]` tables. A catalog
//! without those tables simply yields empty lists.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::model::{AssessmentResult, Metric};

/// Coarse proficiency level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Low => write!(f, "Low"),
            Level::Medium => write!(f, "Medium"),
            Level::High => write!(f, "High"),
        }
    }
}

/// Distance between the current and required level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gap {
    None,
    Small,
    Significant,
}

impl Gap {
    /// One level short is `Small`, two is `Significant`. Meeting or
    /// exceeding the requirement is never a gap.
    pub fn between(current: Level, required: Level) -> Self {
        match (required as i8) - (current as i8) {
            i8::MIN..=0 => Gap::None,
            1 => Gap::Small,
            _ => Gap::Significant,
        }
    }
}

impl fmt::Display for Gap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gap::None => write!(f, "None"),
            Gap::Small => write!(f, "Small"),
            Gap::Significant => write!(f, "Significant"),
        }
    }
}

fn default_floor() -> Level {
    Level::Low
}

/// A skill area and how to read its current level from a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDefinition {
    /// Skill area name.
    pub name: String,
    /// Level the career expects.
    pub required: Level,
    /// Metric the current level is read from.
    pub source: Metric,
    /// Scores strictly above this are `High`.
    #[serde(default)]
    pub high_above: Option<u8>,
    /// Scores strictly above this are at least `Medium`.
    #[serde(default)]
    pub medium_above: Option<u8>,
    /// Level when no threshold is exceeded.
    #[serde(default = "default_floor")]
    pub floor: Level,
}

impl SkillDefinition {
    /// Current level for a metric value.
    pub fn level(&self, score: u8) -> Level {
        if self.high_above.is_some_and(|t| score > t) {
            Level::High
        } else if self.medium_above.is_some_and(|t| score > t) {
            Level::Medium.max(self.floor)
        } else {
            self.floor
        }
    }

    pub(crate) fn validate(&self) -> Result<(), CatalogError> {
        let invalid = |reason: &str| CatalogError::InvalidSkill {
            name: self.name.clone(),
            reason: reason.to_string(),
        };
        if self.name.trim().is_empty() {
            return Err(invalid("name is empty"));
        }
        if self.high_above.is_some_and(|t| t > 100) || self.medium_above.is_some_and(|t| t > 100) {
            return Err(invalid("thresholds must be at most 100"));
        }
        if let (Some(high), Some(medium)) = (self.high_above, self.medium_above) {
            if high <= medium {
                return Err(invalid("high_above must be greater than medium_above"));
            }
        }
        Ok(())
    }
}

/// A related career and the metrics its match is averaged from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerDefinition {
    /// Career title.
    pub title: String,
    /// Metrics averaged into the match.
    pub sources: Vec<Metric>,
    /// Points added after averaging.
    #[serde(default)]
    pub bonus: i16,
}

impl CareerDefinition {
    /// Match percentage for a result, capped to `[0, 100]`.
    pub fn score(&self, result: &AssessmentResult) -> u8 {
        let sum: f64 = self
            .sources
            .iter()
            .map(|m| f64::from(m.value(result)))
            .sum();
        let mean = sum / self.sources.len().max(1) as f64;
        (mean + f64::from(self.bonus)).round().clamp(0.0, 100.0) as u8
    }

    pub(crate) fn validate(&self) -> Result<(), CatalogError> {
        if self.title.trim().is_empty() {
            return Err(CatalogError::InvalidCareer {
                title: self.title.clone(),
                reason: "title is empty".into(),
            });
        }
        if self.sources.is_empty() {
            return Err(CatalogError::InvalidCareer {
                title: self.title.clone(),
                reason: "at least one source metric is required".into(),
            });
        }
        Ok(())
    }
}

/// One row of the skill gap analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub required: Level,
    pub current: Level,
    pub gap: Gap,
}

/// One related career and how well the result matches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerMatch {
    pub title: String,
    pub score: u8,
}

/// Everything derived from a result beyond the result itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    #[serde(default)]
    pub skill_gaps: Vec<SkillGap>,
    #[serde(default)]
    pub career_matches: Vec<CareerMatch>,
}

impl Insights {
    /// Derive insights for `result` using the definitions in `catalog`.
    pub fn derive(catalog: &Catalog, result: &AssessmentResult) -> Self {
        let skill_gaps = catalog
            .skills()
            .iter()
            .map(|skill| {
                let current = skill.level(skill.source.value(result));
                SkillGap {
                    skill: skill.name.clone(),
                    required: skill.required,
                    current,
                    gap: Gap::between(current, skill.required),
                }
            })
            .collect();

        let career_matches = catalog
            .careers()
            .iter()
            .map(|career| CareerMatch {
                title: career.title.clone(),
                score: career.score(result),
            })
            .collect();

        Self {
            skill_gaps,
            career_matches,
        }
    }
}
