//! The user's recorded responses.
//!
//! An [`AnswerSet`] holds at most one answer per question id. Recording an
//! answer for an already-answered question replaces the earlier one, and the
//! order in which answers arrive never matters to scoring.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::ScoringError;
use crate::model::Answer;
use crate::scoring::RATING_SCALE_MAX;

/// Answers keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Answer>", into = "Vec<Answer>")]
pub struct AnswerSet {
    answers: BTreeMap<String, Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the answer for its question, returning the old one.
    pub fn upsert(&mut self, answer: Answer) -> Option<Answer> {
        self.answers.insert(answer.question_id.clone(), answer)
    }

    /// Record an answer the way a collection UI does: the question must exist,
    /// ratings must be on the scale, and the chosen option label is echoed.
    pub fn record(
        &mut self,
        catalog: &Catalog,
        question_id: &str,
        value: u32,
    ) -> Result<Option<Answer>, ScoringError> {
        let question = catalog
            .question(question_id)
            .ok_or_else(|| ScoringError::UnknownQuestion {
                question_id: question_id.to_string(),
            })?;

        let selected_option = if question.kind.is_choice() {
            usize::try_from(value)
                .ok()
                .and_then(|i| question.options.get(i))
                .cloned()
        } else {
            if !(1..=RATING_SCALE_MAX).contains(&value) {
                return Err(ScoringError::RatingOutOfRange {
                    question_id: question_id.to_string(),
                    value,
                });
            }
            None
        };

        Ok(self.upsert(Answer {
            question_id: question_id.to_string(),
            value,
            selected_option,
        }))
    }

    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.answers.get(question_id)
    }

    pub fn remove(&mut self, question_id: &str) -> Option<Answer> {
        self.answers.remove(question_id)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.answers.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Answers ordered by question id.
    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.answers.values()
    }

    /// How far through `catalog` these answers are.
    pub fn progress(&self, catalog: &Catalog) -> Progress {
        let answered = catalog
            .questions()
            .iter()
            .filter(|q| self.contains(&q.id))
            .count();
        Progress::new(answered, catalog.len())
    }
}

impl FromIterator<Answer> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = Answer>>(iter: I) -> Self {
        let mut set = AnswerSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<Answer> for AnswerSet {
    fn extend<I: IntoIterator<Item = Answer>>(&mut self, iter: I) {
        for answer in iter {
            if let Some(previous) = self.upsert(answer) {
                tracing::debug!("answer for {} replaced", previous.question_id);
            }
        }
    }
}

impl From<Vec<Answer>> for AnswerSet {
    fn from(answers: Vec<Answer>) -> Self {
        answers.into_iter().collect()
    }
}

impl From<AnswerSet> for Vec<Answer> {
    fn from(set: AnswerSet) -> Self {
        set.answers.into_values().collect()
    }
}

/// Completion state of an answer set against a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Catalog questions with an answer.
    pub answered: usize,
    /// Questions in the catalog.
    pub total: usize,
    /// `answered / total` as a rounded percentage.
    pub percent_complete: u8,
}

impl Progress {
    pub fn new(answered: usize, total: usize) -> Self {
        let percent_complete = if total == 0 {
            0
        } else {
            ((answered * 100 + total / 2) / total).min(100) as u8
        };
        Self {
            answered,
            total,
            percent_complete,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.answered >= self.total
    }
}
