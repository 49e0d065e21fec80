//! Assessment report types with JSON persistence and progress comparison.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::answers::{AnswerSet, Progress};
use crate::catalog::Catalog;
use crate::insights::{Gap, Insights};
use crate::model::{AssessmentResult, Metric, Recommendation};

/// A complete assessment report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the catalog that was scored.
    pub catalog: CatalogSummary,
    /// How much of the catalog was answered.
    pub progress: Progress,
    /// The engine's result.
    pub result: AssessmentResult,
    /// Skill gaps and career matches.
    #[serde(default)]
    pub insights: Insights,
}

/// Summary of a catalog (without the question definitions).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub career: String,
    pub question_count: usize,
}

impl AssessmentReport {
    /// Wrap a finished result with identity, progress and insights.
    pub fn build(catalog: &Catalog, answers: &AnswerSet, result: AssessmentResult) -> Self {
        let info = catalog.info();
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            catalog: CatalogSummary {
                id: info.id.clone(),
                name: info.name.clone(),
                career: info.career.clone(),
                question_count: catalog.len(),
            },
            progress: answers.progress(catalog),
            insights: Insights::derive(catalog, &result),
            result,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: AssessmentReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Compare this report against an earlier one.
    ///
    /// A metric counts as changed only when it moved by more than `threshold`
    /// points.
    pub fn compare(&self, baseline: &AssessmentReport, threshold: u8) -> ProgressReport {
        let mut improvements = Vec::new();
        let mut declines = Vec::new();
        let mut unchanged = 0usize;

        for metric in Metric::all() {
            let before = metric.value(&baseline.result);
            let after = metric.value(&self.result);
            let delta = i16::from(after) - i16::from(before);
            let change = ScoreChange {
                metric,
                baseline: before,
                current: after,
                delta,
            };
            if delta > i16::from(threshold) {
                improvements.push(change);
            } else if delta < -i16::from(threshold) {
                declines.push(change);
            } else {
                unchanged += 1;
            }
        }

        ProgressReport {
            improvements,
            declines,
            unchanged,
            baseline_recommendation: baseline.result.recommendation,
            current_recommendation: self.result.recommendation,
            catalog_changed: baseline.catalog.id != self.catalog.id,
        }
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let result = &self.result;
        let mut md = String::new();

        let title = if self.catalog.career.is_empty() {
            &self.catalog.name
        } else {
            &self.catalog.career
        };
        md.push_str(&format!("## {title}\n\n"));
        md.push_str(&format!(
            "**{}** ({}): {}% overall confidence\n\n",
            result.recommendation,
            result.recommendation.headline(),
            result.overall_confidence
        ));
        md.push_str(&format!(
            "Answered {} of {} questions ({}%).\n\n",
            self.progress.answered, self.progress.total, self.progress.percent_complete
        ));

        md.push_str("### Scores\n\n");
        md.push_str("| Metric | Score |\n");
        md.push_str("|--------|-------|\n");
        for metric in Metric::all() {
            md.push_str(&format!("| {} | {}% |\n", metric, metric.value(result)));
        }
        md.push('\n');

        if !self.insights.skill_gaps.is_empty() {
            md.push_str("### Skill Gaps\n\n");
            md.push_str("| Skill | Required | Current | Gap |\n");
            md.push_str("|-------|----------|---------|-----|\n");
            for g in &self.insights.skill_gaps {
                md.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    g.skill, g.required, g.current, g.gap
                ));
            }
            md.push('\n');
        }

        if !self.insights.career_matches.is_empty() {
            md.push_str("### Related Careers\n\n");
            for c in &self.insights.career_matches {
                md.push_str(&format!("- {}: {}% match\n", c.title, c.score));
            }
            md.push('\n');
        }

        md.push_str("### Next Steps\n\n");
        for (i, step) in result.next_steps.iter().enumerate() {
            md.push_str(&format!("{}. {}\n", i + 1, step));
        }

        md
    }

    /// Skill areas with a significant gap.
    pub fn significant_gaps(&self) -> impl Iterator<Item = &str> {
        self.insights
            .skill_gaps
            .iter()
            .filter(|g| g.gap == Gap::Significant)
            .map(|g| g.skill.as_str())
    }
}

/// Result of comparing two reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Metrics that went up.
    pub improvements: Vec<ScoreChange>,
    /// Metrics that went down.
    pub declines: Vec<ScoreChange>,
    /// Metrics with no significant change.
    pub unchanged: usize,
    pub baseline_recommendation: Recommendation,
    pub current_recommendation: Recommendation,
    /// The two reports were scored against different catalogs.
    pub catalog_changed: bool,
}

/// Movement of one metric between two reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreChange {
    pub metric: Metric,
    pub baseline: u8,
    pub current: u8,
    pub delta: i16,
}

impl ProgressReport {
    /// Format the progress report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**Summary:** {} improvements, {} declines, {} unchanged\n\n",
            self.improvements.len(),
            self.declines.len(),
            self.unchanged
        ));

        if self.recommendation_changed() {
            md.push_str(&format!(
                "**Recommendation:** {} -> {}\n\n",
                self.baseline_recommendation, self.current_recommendation
            ));
        }

        if self.catalog_changed {
            md.push_str("_Reports were scored against different catalogs._\n\n");
        }

        if !self.declines.is_empty() {
            md.push_str("### Declines\n\n");
            md.push_str("| Metric | Baseline | Current | Delta |\n");
            md.push_str("|--------|----------|---------|-------|\n");
            for c in &self.declines {
                md.push_str(&format!(
                    "| {} | {}% | {}% | {} |\n",
                    c.metric, c.baseline, c.current, c.delta
                ));
            }
            md.push('\n');
        }

        if !self.improvements.is_empty() {
            md.push_str("### Improvements\n\n");
            md.push_str("| Metric | Baseline | Current | Delta |\n");
            md.push_str("|--------|----------|---------|-------|\n");
            for c in &self.improvements {
                md.push_str(&format!(
                    "| {} | {}% | {}% | +{} |\n",
                    c.metric, c.baseline, c.current, c.delta
                ));
            }
        }

        md
    }

    /// Returns true if any metric went down.
    pub fn has_declines(&self) -> bool {
        !self.declines.is_empty()
    }

    pub fn recommendation_changed(&self) -> bool {
        self.baseline_recommendation != self.current_recommendation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::{CareerMatch, Level, SkillGap};
    use crate::model::{Dimension, DimensionProfile};

    fn make_result(trait_fit: u8, technical: u8, drive: u8, overall: u8) -> AssessmentResult {
        let mut dimensions = DimensionProfile::<u8>::default();
        dimensions[Dimension::Drive] = drive;
        AssessmentResult {
            trait_fit,
            technical_readiness: technical,
            dimensions,
            overall_confidence: overall,
            recommendation: Recommendation::from_confidence(overall),
            next_steps: vec!["Keep going".into()],
        }
    }

    fn make_report(result: AssessmentResult) -> AssessmentReport {
        AssessmentReport {
            id: Uuid::nil(),
            created_at: Utc::now(),
            catalog: CatalogSummary {
                id: "test".into(),
                name: "Test".into(),
                career: "Tester".into(),
                question_count: 3,
            },
            progress: Progress::new(3, 3),
            result,
            insights: Insights {
                skill_gaps: vec![SkillGap {
                    skill: "Programming".into(),
                    required: Level::High,
                    current: Level::Low,
                    gap: Gap::Significant,
                }],
                career_matches: vec![CareerMatch {
                    title: "QA Engineer".into(),
                    score: 64,
                }],
            },
        }
    }

    #[test]
    fn compare_identical_reports() {
        let baseline = make_report(make_result(60, 50, 40, 50));
        let current = make_report(make_result(60, 50, 40, 50));

        let report = current.compare(&baseline, 0);
        assert!(report.improvements.is_empty());
        assert!(!report.has_declines());
        assert_eq!(report.unchanged, Metric::all().len());
        assert!(!report.recommendation_changed());
        assert!(!report.catalog_changed);
    }

    #[test]
    fn compare_with_decline_and_improvement() {
        let baseline = make_report(make_result(60, 50, 40, 56));
        let current = make_report(make_result(80, 45, 40, 54));

        let report = current.compare(&baseline, 0);
        assert_eq!(report.improvements.len(), 1);
        assert_eq!(report.improvements[0].metric, Metric::TraitFit);
        assert_eq!(report.improvements[0].delta, 20);
        assert_eq!(report.declines.len(), 2);
        assert!(report.has_declines());
        assert!(report.recommendation_changed());
        assert_eq!(report.current_recommendation, Recommendation::Unfavorable);
    }

    #[test]
    fn compare_threshold_absorbs_small_moves() {
        let baseline = make_report(make_result(60, 50, 40, 50));
        let current = make_report(make_result(63, 47, 40, 50));

        let report = current.compare(&baseline, 3);
        assert!(report.improvements.is_empty());
        assert!(report.declines.is_empty());

        let report = current.compare(&baseline, 2);
        assert_eq!(report.improvements.len(), 1);
        assert_eq!(report.declines.len(), 1);
    }

    #[test]
    fn compare_flags_catalog_change() {
        let baseline = make_report(make_result(60, 50, 40, 50));
        let mut current = make_report(make_result(60, 50, 40, 50));
        current.catalog.id = "other".into();
        assert!(current.compare(&baseline, 0).catalog_changed);
    }

    #[test]
    fn json_roundtrip() {
        let report = make_report(make_result(60, 50, 40, 50));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");

        report.save_json(&path).unwrap();
        let loaded = AssessmentReport::load_json(&path).unwrap();

        assert_eq!(loaded.catalog, report.catalog);
        assert_eq!(loaded.result, report.result);
        assert_eq!(loaded.insights, report.insights);
    }

    #[test]
    fn markdown_output() {
        let report = make_report(make_result(60, 50, 40, 50));
        let md = report.to_markdown();
        assert!(md.contains("## Tester"));
        assert!(md.contains("Unfavorable"));
        assert!(md.contains("| drive | 40% |"));
        assert!(md.contains("Programming"));
        assert!(md.contains("QA Engineer: 64% match"));
        assert!(md.contains("1. Keep going"));
        assert_eq!(report.significant_gaps().collect::<Vec<_>>(), vec!["Programming"]);

        let baseline = make_report(make_result(70, 50, 40, 50));
        let md = report.compare(&baseline, 0).to_markdown();
        assert!(md.contains("Declines"));
        assert!(md.contains("trait-fit"));
    }
}
