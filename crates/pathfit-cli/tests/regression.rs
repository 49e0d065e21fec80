//! Progress tracking integration tests.
//!
//! Tests the report comparison workflow end-to-end, including JSON
//! persistence, report loading and decline detection.

use chrono::{TimeZone, Utc};
use pathfit_core::answers::AnswerSet;
use pathfit_core::model::{Answer, Metric, Recommendation};
use pathfit_core::parser::builtin_catalog;
use pathfit_core::report::AssessmentReport;
use pathfit_core::{evaluate, Catalog};
use uuid::Uuid;

fn answer_all(catalog: &Catalog, rating: u32, option: u32) -> AnswerSet {
    catalog
        .questions()
        .iter()
        .map(|q| Answer::new(q.id.clone(), if q.kind.is_choice() { option } else { rating }))
        .collect()
}

fn make_report(catalog: &Catalog, answers: &AnswerSet) -> AssessmentReport {
    let result = evaluate(catalog, answers).unwrap();
    AssessmentReport::build(catalog, answers, result)
}

#[test]
fn save_load_compare_roundtrip() {
    let catalog = builtin_catalog().unwrap();
    let dir = tempfile::tempdir().unwrap();

    let baseline = make_report(&catalog, &answer_all(&catalog, 4, 1));
    let current = make_report(&catalog, &answer_all(&catalog, 5, 0));
    assert_ne!(baseline.id, current.id);

    let baseline_path = dir.path().join("baseline.json");
    let current_path = dir.path().join("current.json");
    baseline.save_json(&baseline_path).unwrap();
    current.save_json(&current_path).unwrap();

    let baseline = AssessmentReport::load_json(&baseline_path).unwrap();
    let current = AssessmentReport::load_json(&current_path).unwrap();

    let report = current.compare(&baseline, 0);
    assert!(!report.has_declines());
    assert_eq!(report.improvements.len() + report.unchanged, Metric::all().len());
    assert_eq!(report.baseline_recommendation, Recommendation::Conditional);
    assert_eq!(report.current_recommendation, Recommendation::Favorable);

    let overall = report
        .improvements
        .iter()
        .find(|c| c.metric == Metric::OverallConfidence)
        .unwrap();
    assert_eq!((overall.baseline, overall.current, overall.delta), (57, 100, 43));
}

#[test]
fn reverse_comparison_reports_declines() {
    let catalog = builtin_catalog().unwrap();
    let strong = make_report(&catalog, &answer_all(&catalog, 5, 0));
    let weak = make_report(&catalog, &answer_all(&catalog, 3, 2));

    let report = weak.compare(&strong, 0);
    assert!(report.has_declines());
    assert!(report.improvements.is_empty());
    assert!(report.recommendation_changed());
    let md = report.to_markdown();
    assert!(md.contains("### Declines"));
    assert!(md.contains("Favorable -> Unfavorable"));
}

#[test]
fn threshold_hides_small_changes() {
    let catalog = builtin_catalog().unwrap();
    let baseline_answers = answer_all(&catalog, 4, 1);
    let mut current_answers = baseline_answers.clone();
    current_answers.upsert(Answer::new("wiscar_3", 5));

    let baseline = make_report(&catalog, &baseline_answers);
    let current = make_report(&catalog, &current_answers);

    // learning-agility moves 60+80 -> 60+100, i.e. 70 -> 80
    let strict = current.compare(&baseline, 0);
    assert!(strict
        .improvements
        .iter()
        .any(|c| c.metric.to_string() == "learning-agility" && c.delta == 10));

    let lenient = current.compare(&baseline, 10);
    assert!(lenient.improvements.is_empty());
    assert!(!lenient.has_declines());
}

#[test]
fn load_handwritten_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    std::fs::write(
        &path,
        r#"{
    "id": "00000000-0000-0000-0000-000000000000",
    "created_at": "2025-01-01T00:00:00Z",
    "catalog": { "id": "ai-automation", "name": "AI", "question_count": 15 },
    "progress": { "answered": 1, "total": 15, "percent_complete": 7 },
    "result": {
        "trait_fit": 100,
        "technical_readiness": 0,
        "dimensions": {
            "drive": 100, "interest": 0, "skill": 0,
            "reasoning": 0, "learning-agility": 0, "applied-context": 0
        },
        "overall_confidence": 39,
        "recommendation": "Unfavorable",
        "next_steps": ["Explore related fields"]
    }
}"#,
    )
    .unwrap();

    let report = AssessmentReport::load_json(&path).unwrap();
    assert_eq!(report.id, Uuid::nil());
    assert_eq!(report.created_at, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
    assert_eq!(report.catalog.career, "");
    assert!(report.insights.skill_gaps.is_empty());
    assert_eq!(report.result.recommendation, Recommendation::Unfavorable);
}

#[test]
fn report_missing_a_dimension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    std::fs::write(
        &path,
        r#"{
    "id": "00000000-0000-0000-0000-000000000000",
    "created_at": "2025-01-01T00:00:00Z",
    "catalog": { "id": "x", "name": "X", "question_count": 0 },
    "progress": { "answered": 0, "total": 0, "percent_complete": 0 },
    "result": {
        "trait_fit": 0,
        "technical_readiness": 0,
        "dimensions": { "drive": 0 },
        "overall_confidence": 0,
        "recommendation": "Unfavorable",
        "next_steps": []
    }
}"#,
    )
    .unwrap();

    let err = AssessmentReport::load_json(&path).unwrap_err();
    assert!(format!("{err:#}").contains("missing dimension"));
}
