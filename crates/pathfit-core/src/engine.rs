//! The scoring engine.
//!
//! Turns a finalized answer set into an [`AssessmentResult`]. The engine only
//! borrows its catalog and keeps no state between calls, so one engine can
//! serve any number of runs, including concurrent ones on other threads.

use crate::aggregate::{aggregate, to_percent};
use crate::answers::AnswerSet;
use crate::catalog::Catalog;
use crate::error::ScoringError;
use crate::model::{AssessmentResult, Recommendation};

/// Stateless scorer bound to one catalog.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Score a completed answer set.
    ///
    /// Fails only for producer bugs: an answer to a question the catalog does
    /// not define, or a rating outside the 1-5 scale.
    pub fn evaluate(&self, answers: &AnswerSet) -> Result<AssessmentResult, ScoringError> {
        let aggregates = aggregate(self.catalog, answers)?;
        let overall_confidence = aggregates.overall_confidence();
        let recommendation = Recommendation::from_confidence(overall_confidence);
        let next_steps = self
            .catalog
            .guidance()
            .next_steps(recommendation, &aggregates);

        tracing::debug!(
            catalog = %self.catalog.info().id,
            answered = aggregates.answered,
            overall_confidence,
            %recommendation,
            "assessment scored"
        );

        Ok(AssessmentResult {
            trait_fit: to_percent(aggregates.trait_fit),
            technical_readiness: to_percent(aggregates.technical_readiness),
            dimensions: aggregates.dimensions.map(to_percent),
            overall_confidence,
            recommendation,
            next_steps,
        })
    }
}

/// Score `answers` against `catalog` in one call.
pub fn evaluate(catalog: &Catalog, answers: &AnswerSet) -> Result<AssessmentResult, ScoringError> {
    ScoringEngine::new(catalog).evaluate(answers)
}
