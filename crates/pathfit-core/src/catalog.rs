//! Question catalogs and the per-question option scoring table.
//!
//! A [`Catalog`] is loaded once and is read-only afterwards. It can only be
//! obtained through [`CatalogBuilder::build`], which checks every question and
//! every scoring table entry, so the engine never has to second-guess it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::guidance::Guidance;
use crate::insights::{CareerDefinition, SkillDefinition};
use crate::model::{Category, Dimension, Question};

/// Catalog header metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogInfo {
    /// Unique identifier for this catalog.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Career path the catalog assesses.
    #[serde(default)]
    pub career: String,
    /// Description of the assessment.
    #[serde(default)]
    pub description: String,
}

/// Option index to percentage lookup, keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoringTable {
    entries: HashMap<String, Vec<u8>>,
}

impl ScoringTable {
    /// Score for `option` of `question_id`, if one is configured.
    pub fn score(&self, question_id: &str, option: usize) -> Option<u8> {
        self.entries
            .get(question_id)
            .and_then(|scores| scores.get(option))
            .copied()
    }

    /// The whole table row for a question.
    pub fn scores_for(&self, question_id: &str) -> Option<&[u8]> {
        self.entries.get(question_id).map(Vec::as_slice)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.entries.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A validated, immutable question catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    info: CatalogInfo,
    questions: Vec<Question>,
    index: HashMap<String, usize>,
    scoring: ScoringTable,
    guidance: Guidance,
    skills: Vec<SkillDefinition>,
    careers: Vec<CareerDefinition>,
}

impl Catalog {
    pub fn builder(info: CatalogInfo) -> CatalogBuilder {
        CatalogBuilder {
            info,
            questions: Vec::new(),
            scores: Vec::new(),
            guidance: Guidance::default(),
            skills: Vec::new(),
            careers: Vec::new(),
        }
    }

    pub fn info(&self) -> &CatalogInfo {
        &self.info
    }

    /// Questions in catalog order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Look up a question by id.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.index.get(id).map(|&i| &self.questions[i])
    }

    /// Questions belonging to one category, in catalog order.
    pub fn questions_in(&self, category: Category) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.category == category)
    }

    /// Questions tagged with one dimension, in catalog order.
    pub fn questions_for(&self, dimension: Dimension) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |q| q.dimension == Some(dimension))
    }

    pub fn scoring(&self) -> &ScoringTable {
        &self.scoring
    }

    pub fn guidance(&self) -> &Guidance {
        &self.guidance
    }

    pub fn skills(&self) -> &[SkillDefinition] {
        &self.skills
    }

    pub fn careers(&self) -> &[CareerDefinition] {
        &self.careers
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Collects catalog parts and validates them in [`CatalogBuilder::build`].
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    info: CatalogInfo,
    questions: Vec<Question>,
    scores: Vec<(String, Vec<u8>)>,
    guidance: Guidance,
    skills: Vec<SkillDefinition>,
    careers: Vec<CareerDefinition>,
}

impl CatalogBuilder {
    pub fn question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    pub fn questions(mut self, questions: impl IntoIterator<Item = Question>) -> Self {
        self.questions.extend(questions);
        self
    }

    /// Attach the option scoring row for a choice question.
    pub fn scores(mut self, question_id: impl Into<String>, scores: Vec<u8>) -> Self {
        self.scores.push((question_id.into(), scores));
        self
    }

    pub fn guidance(mut self, guidance: Guidance) -> Self {
        self.guidance = guidance;
        self
    }

    pub fn skill(mut self, skill: SkillDefinition) -> Self {
        self.skills.push(skill);
        self
    }

    pub fn career(mut self, career: CareerDefinition) -> Self {
        self.careers.push(career);
        self
    }

    /// Validate everything and freeze the catalog.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        let mut index = HashMap::with_capacity(self.questions.len());
        for (position, question) in self.questions.iter().enumerate() {
            if question.id.trim().is_empty() {
                return Err(CatalogError::EmptyQuestionId(position + 1));
            }
            if index.insert(question.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateQuestion(question.id.clone()));
            }
            if question.kind.is_choice() {
                if question.options.is_empty() {
                    return Err(CatalogError::MissingOptions(question.id.clone()));
                }
            } else if !question.options.is_empty() {
                return Err(CatalogError::UnexpectedOptions(question.id.clone()));
            }
        }

        let mut entries = HashMap::with_capacity(self.scores.len());
        for (question_id, scores) in self.scores {
            let Some(&position) = index.get(&question_id) else {
                return Err(CatalogError::UnknownScoredQuestion(question_id));
            };
            let question = &self.questions[position];
            if !question.kind.is_choice() {
                return Err(CatalogError::ScoresOnRatingQuestion(question_id));
            }
            if scores.len() != question.options.len() {
                return Err(CatalogError::ScoreCountMismatch {
                    question_id,
                    scores: scores.len(),
                    options: question.options.len(),
                });
            }
            if let Some((option, &score)) = scores.iter().enumerate().find(|(_, s)| **s > 100) {
                return Err(CatalogError::ScoreOutOfRange {
                    question_id,
                    index: option,
                    score,
                });
            }
            if entries.contains_key(&question_id) {
                tracing::warn!("scoring table for {question_id} given twice, keeping the last");
            }
            entries.insert(question_id, scores);
        }

        self.guidance.validate()?;
        for skill in &self.skills {
            skill.validate()?;
        }
        for career in &self.careers {
            career.validate()?;
        }

        Ok(Catalog {
            info: self.info,
            questions: self.questions,
            index,
            scoring: ScoringTable { entries },
            guidance: self.guidance,
            skills: self.skills,
            careers: self.careers,
        })
    }
}
