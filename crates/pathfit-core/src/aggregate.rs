//! Category and dimension aggregation.
//!
//! Reduces per-question scores into the two pillar means and the six
//! dimension means. All values stay unrounded here; rounding happens once,
//! when the engine builds the published result.

use crate::answers::AnswerSet;
use crate::catalog::Catalog;
use crate::error::ScoringError;
use crate::model::{Category, Dimension, DimensionProfile};
use crate::scoring::score_answer;

/// Running sum and count for one mean.
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    sum: f64,
    count: u32,
}

impl Tally {
    fn add(&mut self, score: f64) {
        self.sum += score;
        self.count += 1;
    }

    /// Mean of everything added so far, or 0 when nothing was.
    fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / f64::from(self.count)
        }
    }
}

/// Unrounded means produced by [`aggregate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregates {
    /// Mean of answered trait-fit questions.
    pub trait_fit: f64,
    /// Mean of answered technical questions.
    pub technical_readiness: f64,
    /// Mean of answered questions per dimension.
    pub dimensions: DimensionProfile<f64>,
    /// Number of answers that contributed.
    pub answered: usize,
}

impl Aggregates {
    /// Equal-weight mean of the six dimension means.
    pub fn dimension_average(&self) -> f64 {
        self.dimensions.values().iter().sum::<f64>() / Dimension::COUNT as f64
    }

    /// Mean of trait-fit, technical readiness and the dimension average,
    /// rounded to the nearest integer.
    pub fn overall_confidence(&self) -> u8 {
        to_percent((self.trait_fit + self.technical_readiness + self.dimension_average()) / 3.0)
    }
}

/// Round a percentage to the nearest integer, half away from zero.
pub fn to_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

/// Aggregate every answered question of `catalog`.
///
/// Unanswered questions are skipped entirely. Every answer must reference a
/// catalog question, and rating answers must lie within the scale.
pub fn aggregate(catalog: &Catalog, answers: &AnswerSet) -> Result<Aggregates, ScoringError> {
    if let Some(stray) = answers.iter().find(|a| catalog.question(&a.question_id).is_none()) {
        return Err(ScoringError::UnknownQuestion {
            question_id: stray.question_id.clone(),
        });
    }

    let mut trait_fit = Tally::default();
    let mut technical = Tally::default();
    let mut dimensions = DimensionProfile::<Tally>::default();
    let mut answered = 0usize;

    for question in catalog.questions() {
        let Some(answer) = answers.get(&question.id) else {
            continue;
        };
        let score = score_answer(question, answer, catalog.scoring())?;
        answered += 1;

        match question.category {
            Category::TraitFit => trait_fit.add(score),
            Category::Technical => technical.add(score),
            Category::MultiDimensional => {}
        }

        if let Some(dimension) = question.dimension {
            dimensions[dimension].add(score);
        }
    }

    Ok(Aggregates {
        trait_fit: trait_fit.mean(),
        technical_readiness: technical.mean(),
        dimensions: dimensions.map(|t| t.mean()),
        answered,
    })
}
