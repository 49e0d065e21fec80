//! Next-step recommendations.
//!
//! The decision table is fixed; only the wording comes from [`Guidance`],
//! which a catalog may override step by step in its `[guidance]` table.

use serde::{Deserialize, Serialize};

use crate::aggregate::Aggregates;
use crate::error::CatalogError;
use crate::model::{Dimension, Recommendation};

/// Applied-context mean below which a favorable result gets the extra
/// business-context step.
pub const APPLIED_CONTEXT_FOCUS_BELOW: f64 = 70.0;

/// Mean below which a conditional result gets the matching remedial step.
pub const CONDITIONAL_FOCUS_BELOW: f64 = 60.0;

/// Wording of every step the generator can emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Guidance {
    pub foundations: String,
    pub first_project: String,
    pub ecosystem: String,
    pub business_context: String,
    pub technical_foundation: String,
    pub concept_course: String,
    pub logical_thinking: String,
    pub small_projects: String,
    pub adjacent_role: String,
    pub adjacent_fields: String,
    pub foundational_skills: String,
    pub existing_strengths: String,
}

impl Default for Guidance {
    fn default() -> Self {
        Self {
            foundations: "Start with foundational courses in Python programming and RPA tools".into(),
            first_project: "Build your first automation project using UiPath or Automation Anywhere".into(),
            ecosystem: "Explore AI/ML APIs and integration patterns".into(),
            business_context: "Focus on change management and business process analysis skills".into(),
            technical_foundation: "Strengthen technical foundations with programming basics".into(),
            concept_course: "Complete introductory courses in AI and machine learning concepts".into(),
            logical_thinking: "Practice process mapping and logical thinking exercises".into(),
            small_projects: "Start with smaller automation projects to build confidence".into(),
            adjacent_role: "Consider related roles like Business Process Analyst while building skills".into(),
            adjacent_fields: "Explore related fields like Data Analysis or Business Analysis".into(),
            foundational_skills: "Build foundational technical skills before revisiting AI automation".into(),
            existing_strengths: "Consider roles that leverage your existing strengths".into(),
        }
    }
}

impl Guidance {
    fn steps(&self) -> [(&'static str, &str); 12] {
        [
            ("foundations", self.foundations.as_str()),
            ("first_project", self.first_project.as_str()),
            ("ecosystem", self.ecosystem.as_str()),
            ("business_context", self.business_context.as_str()),
            ("technical_foundation", self.technical_foundation.as_str()),
            ("concept_course", self.concept_course.as_str()),
            ("logical_thinking", self.logical_thinking.as_str()),
            ("small_projects", self.small_projects.as_str()),
            ("adjacent_role", self.adjacent_role.as_str()),
            ("adjacent_fields", self.adjacent_fields.as_str()),
            ("foundational_skills", self.foundational_skills.as_str()),
            ("existing_strengths", self.existing_strengths.as_str()),
        ]
    }

    /// Every step must have visible text.
    pub fn validate(&self) -> Result<(), CatalogError> {
        match self.steps().into_iter().find(|(_, text)| text.trim().is_empty()) {
            Some((name, _)) => Err(CatalogError::EmptyGuidance(name)),
            None => Ok(()),
        }
    }

    /// Build the ordered next-step list for a tier.
    ///
    /// Conditions read the unrounded means. The list is never empty: the
    /// favorable and unfavorable tiers always emit three steps, and the
    /// conditional tier always ends with the adjacent-role step.
    pub fn next_steps(&self, recommendation: Recommendation, aggregates: &Aggregates) -> Vec<String> {
        let dimensions = &aggregates.dimensions;
        let mut steps = Vec::new();

        match recommendation {
            Recommendation::Favorable => {
                steps.push(self.foundations.clone());
                steps.push(self.first_project.clone());
                steps.push(self.ecosystem.clone());
                if dimensions[Dimension::AppliedContext] < APPLIED_CONTEXT_FOCUS_BELOW {
                    steps.push(self.business_context.clone());
                }
            }
            Recommendation::Conditional => {
                if aggregates.technical_readiness < CONDITIONAL_FOCUS_BELOW {
                    steps.push(self.technical_foundation.clone());
                    steps.push(self.concept_course.clone());
                }
                if dimensions[Dimension::Reasoning] < CONDITIONAL_FOCUS_BELOW {
                    steps.push(self.logical_thinking.clone());
                }
                if dimensions[Dimension::Drive] < CONDITIONAL_FOCUS_BELOW {
                    steps.push(self.small_projects.clone());
                }
                steps.push(self.adjacent_role.clone());
            }
            Recommendation::Unfavorable => {
                steps.push(self.adjacent_fields.clone());
                steps.push(self.foundational_skills.clone());
                steps.push(self.existing_strengths.clone());
            }
        }

        steps
    }
}
