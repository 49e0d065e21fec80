//! Scoring and catalog error types.
//!
//! Both enums describe producer bugs rather than user mistakes: a
//! `ScoringError` means the collection layer handed the engine an answer it
//! should never have recorded, and a `CatalogError` means the catalog owner
//! shipped an inconsistent question set. Everything else degrades to the
//! neutral defaults documented on the scorer.

use thiserror::Error;

/// Errors raised at the engine boundary when an answer set is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// An answer references a question id that the catalog does not define.
    #[error("answer references unknown question: {question_id}")]
    UnknownQuestion { question_id: String },

    /// A rating-scale answer lies outside the fixed 1-5 scale.
    #[error("rating for {question_id} must be between 1 and 5, got {value}")]
    RatingOutOfRange { question_id: String, value: u32 },
}

impl ScoringError {
    /// The question id the rejected answer pointed at.
    pub fn question_id(&self) -> &str {
        match self {
            ScoringError::UnknownQuestion { question_id }
            | ScoringError::RatingOutOfRange { question_id, .. } => question_id,
        }
    }
}

/// Load-time validation failures for a question catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two questions share the same id.
    #[error("duplicate question id: {0}")]
    DuplicateQuestion(String),

    /// A question id is blank.
    #[error("question #{0} has an empty id")]
    EmptyQuestionId(usize),

    /// A choice question has no options to pick from.
    #[error("choice question {0} has no options")]
    MissingOptions(String),

    /// A rating-scale question carries choice-only data.
    #[error("rating-scale question {0} must not define options or scores")]
    UnexpectedOptions(String),

    /// A scoring table names a question that is not in the catalog.
    #[error("scoring table references unknown question: {0}")]
    UnknownScoredQuestion(String),

    /// A scoring table is attached to a rating-scale question.
    #[error("scoring table given for rating-scale question: {0}")]
    ScoresOnRatingQuestion(String),

    /// A scoring table does not cover exactly the question's options.
    #[error("scoring table for {question_id} has {scores} entries but the question has {options} options")]
    ScoreCountMismatch {
        question_id: String,
        scores: usize,
        options: usize,
    },

    /// A scoring table entry exceeds 100.
    #[error("score {score} for option {index} of {question_id} exceeds 100")]
    ScoreOutOfRange {
        question_id: String,
        index: usize,
        score: u8,
    },

    /// A guidance override is blank.
    #[error("guidance step '{0}' must not be empty")]
    EmptyGuidance(&'static str),

    /// A skill-gap definition is inconsistent.
    #[error("skill '{name}': {reason}")]
    InvalidSkill { name: String, reason: String },

    /// A related-career definition is inconsistent.
    #[error("career '{title}': {reason}")]
    InvalidCareer { title: String, reason: String },
}
