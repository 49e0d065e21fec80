//! Per-question scoring.
//!
//! Maps one `(question, answer)` pair to a percentage in `[0, 100]`.

use crate::catalog::ScoringTable;
use crate::error::ScoringError;
use crate::model::{Answer, Question};

/// Top of the rating scale.
pub const RATING_SCALE_MAX: u32 = 5;

/// Neutral score for a choice answer with no usable table entry.
pub const FALLBACK_SCORE: f64 = 50.0;

/// Score a single answer.
///
/// Rating-scale answers map linearly onto a percentage (`1 -> 20`,
/// `5 -> 100`). Choice answers are looked up in `table`; an unscored question
/// or an option index past the end of its row yields [`FALLBACK_SCORE`].
///
/// The only error is a rating outside `1..=5`, which is a producer bug and is
/// never coerced.
pub fn score_answer(
    question: &Question,
    answer: &Answer,
    table: &ScoringTable,
) -> Result<f64, ScoringError> {
    if !question.kind.is_choice() {
        if !(1..=RATING_SCALE_MAX).contains(&answer.value) {
            return Err(ScoringError::RatingOutOfRange {
                question_id: question.id.clone(),
                value: answer.value,
            });
        }
        return Ok(f64::from(answer.value) / f64::from(RATING_SCALE_MAX) * 100.0);
    }

    let score = usize::try_from(answer.value)
        .ok()
        .and_then(|option| table.score(&question.id, option))
        .map(|s| f64::from(s.min(100)))
        .unwrap_or(FALLBACK_SCORE);
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogInfo};
    use crate::model::{Category, QuestionKind};

    fn catalog() -> Catalog {
        Catalog::builder(CatalogInfo::default())
            .question(Question {
                id: "rate".into(),
                kind: QuestionKind::RatingScale,
                category: Category::TraitFit,
                dimension: None,
                text: "Rate it".into(),
                options: vec![],
                context: None,
            })
            .question(Question {
                id: "pick".into(),
                kind: QuestionKind::SingleChoiceWithContext,
                category: Category::Technical,
                dimension: None,
                text: "Pick one".into(),
                options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                context: Some("A scenario".into()),
            })
            .question(Question {
                id: "unscored".into(),
                kind: QuestionKind::SingleChoice,
                category: Category::Technical,
                dimension: None,
                text: "Pick another".into(),
                options: vec!["a".into(), "b".into()],
                context: None,
            })
            .scores("pick", vec![100, 40, 60, 30])
            .build()
            .unwrap()
    }

    fn score(catalog: &Catalog, id: &str, value: u32) -> Result<f64, ScoringError> {
        score_answer(
            catalog.question(id).unwrap(),
            &Answer::new(id, value),
            catalog.scoring(),
        )
    }

    #[test]
    fn rating_scale_is_linear() {
        let catalog = catalog();
        assert_eq!(score(&catalog, "rate", 1).unwrap(), 20.0);
        assert_eq!(score(&catalog, "rate", 3).unwrap(), 60.0);
        assert_eq!(score(&catalog, "rate", 5).unwrap(), 100.0);
    }

    #[test]
    fn rating_out_of_range_is_rejected() {
        let catalog = catalog();
        for value in [0, 6, 99] {
            let err = score(&catalog, "rate", value).unwrap_err();
            assert_eq!(
                err,
                ScoringError::RatingOutOfRange {
                    question_id: "rate".into(),
                    value
                }
            );
        }
    }

    #[test]
    fn choice_uses_table() {
        let catalog = catalog();
        assert_eq!(score(&catalog, "pick", 0).unwrap(), 100.0);
        assert_eq!(score(&catalog, "pick", 2).unwrap(), 60.0);
        assert_eq!(score(&catalog, "pick", 3).unwrap(), 30.0);
    }

    #[test]
    fn choice_out_of_range_falls_back() {
        let catalog = catalog();
        assert_eq!(score(&catalog, "pick", 99).unwrap(), FALLBACK_SCORE);
        assert_eq!(score(&catalog, "pick", u32::MAX).unwrap(), FALLBACK_SCORE);
    }

    #[test]
    fn unscored_choice_falls_back() {
        let catalog = catalog();
        assert_eq!(score(&catalog, "unscored", 0).unwrap(), FALLBACK_SCORE);
        assert_eq!(score(&catalog, "unscored", 1).unwrap(), FALLBACK_SCORE);
    }

    #[test]
    fn selected_option_echo_is_ignored() {
        let catalog = catalog();
        let answer = Answer {
            question_id: "pick".into(),
            value: 1,
            selected_option: Some("d".into()),
        };
        let score = score_answer(catalog.question("pick").unwrap(), &answer, catalog.scoring());
        assert_eq!(score.unwrap(), 40.0);
    }
}
