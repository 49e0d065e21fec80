//! Core data model types for pathfit.
//!
//! These are the fundamental types the whole system uses to represent
//! questions, answers, the six-dimension readiness profile, and the
//! assessment result handed back to the host.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::de::Error;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How a question is presented and answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    /// Five-point agreement scale, answered with 1..=5.
    RatingScale,
    /// Pick one option, answered with a zero-based option index.
    SingleChoice,
    /// Pick one option after reading a short scenario.
    SingleChoiceWithContext,
}

impl QuestionKind {
    /// Returns `true` for the option-based variants.
    pub fn is_choice(self) -> bool {
        !matches!(self, QuestionKind::RatingScale)
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::RatingScale => write!(f, "rating-scale"),
            QuestionKind::SingleChoice => write!(f, "single-choice"),
            QuestionKind::SingleChoiceWithContext => write!(f, "single-choice-with-context"),
        }
    }
}

impl FromStr for QuestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "rating-scale" | "rating" | "likert" => Ok(QuestionKind::RatingScale),
            "single-choice" | "choice" | "multiple-choice" => Ok(QuestionKind::SingleChoice),
            "single-choice-with-context" | "scenario" => Ok(QuestionKind::SingleChoiceWithContext),
            other => Err(format!("unknown question kind: {other}")),
        }
    }
}

/// Top-level grouping of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Interest and personality alignment.
    TraitFit,
    /// Current technical knowledge.
    Technical,
    /// Feeds only the dimension profile.
    MultiDimensional,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::TraitFit => write!(f, "trait-fit"),
            Category::Technical => write!(f, "technical"),
            Category::MultiDimensional => write!(f, "multi-dimensional"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "trait-fit" | "psychometric" => Ok(Category::TraitFit),
            "technical" => Ok(Category::Technical),
            "multi-dimensional" | "wiscar" => Ok(Category::MultiDimensional),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

/// One of the six independent readiness axes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Dimension {
    Drive,
    Interest,
    Skill,
    Reasoning,
    LearningAgility,
    AppliedContext,
}

impl Dimension {
    /// Number of dimensions in a profile.
    pub const COUNT: usize = 6;

    /// All dimensions in profile order.
    pub const ALL: [Dimension; Dimension::COUNT] = [
        Dimension::Drive,
        Dimension::Interest,
        Dimension::Skill,
        Dimension::Reasoning,
        Dimension::LearningAgility,
        Dimension::AppliedContext,
    ];

    fn slot(self) -> usize {
        self as usize
    }

    /// Short description shown next to the dimension score.
    pub fn description(self) -> &'static str {
        match self {
            Dimension::Drive => "Motivation and persistence for the work",
            Dimension::Interest => "Genuine curiosity about the field",
            Dimension::Skill => "Current technical and analytical capabilities",
            Dimension::Reasoning => "Problem-solving and process-oriented thinking",
            Dimension::LearningAgility => "Openness to feedback and continuous learning",
            Dimension::AppliedContext => "Understanding of practical business applications",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Drive => write!(f, "drive"),
            Dimension::Interest => write!(f, "interest"),
            Dimension::Skill => write!(f, "skill"),
            Dimension::Reasoning => write!(f, "reasoning"),
            Dimension::LearningAgility => write!(f, "learning-agility"),
            Dimension::AppliedContext => write!(f, "applied-context"),
        }
    }
}

impl FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "drive" | "will" => Ok(Dimension::Drive),
            "interest" => Ok(Dimension::Interest),
            "skill" => Ok(Dimension::Skill),
            "reasoning" | "cognitive" => Ok(Dimension::Reasoning),
            "learning-agility" | "ability-to-learn" => Ok(Dimension::LearningAgility),
            "applied-context" | "real-world" => Ok(Dimension::AppliedContext),
            other => Err(format!("unknown dimension: {other}")),
        }
    }
}

/// A fixed map holding exactly one value per [`Dimension`].
///
/// Serialized as a map from dimension name to value; deserialization fails
/// unless all six dimensions are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionProfile<T> {
    values: [T; Dimension::COUNT],
}

impl<T: Copy + Default> Default for DimensionProfile<T> {
    fn default() -> Self {
        Self {
            values: [T::default(); Dimension::COUNT],
        }
    }
}

impl<T: Copy> DimensionProfile<T> {
    /// Build a profile by evaluating `f` for every dimension.
    pub fn from_fn(mut f: impl FnMut(Dimension) -> T) -> Self {
        Self {
            values: Dimension::ALL.map(&mut f),
        }
    }

    /// Iterate `(dimension, value)` pairs in profile order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, T)> + '_ {
        Dimension::ALL.into_iter().map(|d| (d, self.values[d.slot()]))
    }

    /// Transform every value, keeping the dimension keys.
    pub fn map<U: Copy>(&self, mut f: impl FnMut(T) -> U) -> DimensionProfile<U> {
        DimensionProfile {
            values: self.values.map(&mut f),
        }
    }

    /// The raw values in profile order.
    pub fn values(&self) -> &[T; Dimension::COUNT] {
        &self.values
    }
}

impl<T> Index<Dimension> for DimensionProfile<T> {
    type Output = T;

    fn index(&self, dimension: Dimension) -> &T {
        &self.values[dimension.slot()]
    }
}

impl<T> IndexMut<Dimension> for DimensionProfile<T> {
    fn index_mut(&mut self, dimension: Dimension) -> &mut T {
        &mut self.values[dimension.slot()]
    }
}

impl<T: Serialize + Copy> Serialize for DimensionProfile<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Dimension::COUNT))?;
        for (dimension, value) in self.iter() {
            map.serialize_entry(&dimension, &value)?;
        }
        map.end()
    }
}

impl<'de, T> Deserialize<'de> for DimensionProfile<T>
where
    T: Deserialize<'de> + Copy + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::<Dimension, T>::deserialize(deserializer)?;
        let mut profile = DimensionProfile::default();
        for dimension in Dimension::ALL {
            profile[dimension] = *map
                .get(&dimension)
                .ok_or_else(|| Error::custom(format!("missing dimension: {dimension}")))?;
        }
        Ok(profile)
    }
}

/// A single question definition from a catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier within the catalog.
    pub id: String,
    /// Presentation and answer variant.
    pub kind: QuestionKind,
    /// Pillar this question feeds.
    pub category: Category,
    /// Readiness dimension this question feeds, if any.
    #[serde(default)]
    pub dimension: Option<Dimension>,
    /// Display text.
    pub text: String,
    /// Option labels for choice questions.
    #[serde(default)]
    pub options: Vec<String>,
    /// Scenario narrative shown before the options.
    #[serde(default)]
    pub context: Option<String>,
}

/// A recorded response to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// The answered question.
    pub question_id: String,
    /// Rating (1..=5) or zero-based option index.
    pub value: u32,
    /// Echo of the chosen option label. Never used for scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_option: Option<String>,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, value: u32) -> Self {
        Self {
            question_id: question_id.into(),
            value,
            selected_option: None,
        }
    }
}

/// Three-way verdict derived from overall confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    Favorable,
    Conditional,
    Unfavorable,
}

impl Recommendation {
    /// Lowest overall confidence that is still `Favorable`.
    pub const FAVORABLE_MIN: u8 = 75;
    /// Lowest overall confidence that is still `Conditional`.
    pub const CONDITIONAL_MIN: u8 = 55;

    /// Thresholds are inclusive lower bounds, checked from the top tier down.
    pub fn from_confidence(confidence: u8) -> Self {
        if confidence >= Self::FAVORABLE_MIN {
            Recommendation::Favorable
        } else if confidence >= Self::CONDITIONAL_MIN {
            Recommendation::Conditional
        } else {
            Recommendation::Unfavorable
        }
    }

    /// Headline shown above the recommendation badge.
    pub fn headline(self) -> &'static str {
        match self {
            Recommendation::Favorable => "You should pursue this career",
            Recommendation::Conditional => "You have potential with some development",
            Recommendation::Unfavorable => "Consider alternative paths",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Favorable => write!(f, "Favorable"),
            Recommendation::Conditional => write!(f, "Conditional"),
            Recommendation::Unfavorable => write!(f, "Unfavorable"),
        }
    }
}

/// A published score that insights and report comparisons can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Metric {
    TraitFit,
    TechnicalReadiness,
    OverallConfidence,
    Dimension(Dimension),
}

impl Metric {
    /// Every metric, in report order.
    pub fn all() -> Vec<Metric> {
        let mut metrics = vec![Metric::TraitFit, Metric::TechnicalReadiness];
        metrics.extend(Dimension::ALL.map(Metric::Dimension));
        metrics.push(Metric::OverallConfidence);
        metrics
    }

    /// Read this metric from a finished result.
    pub fn value(self, result: &AssessmentResult) -> u8 {
        match self {
            Metric::TraitFit => result.trait_fit,
            Metric::TechnicalReadiness => result.technical_readiness,
            Metric::OverallConfidence => result.overall_confidence,
            Metric::Dimension(d) => result.dimensions[d],
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::TraitFit => write!(f, "trait-fit"),
            Metric::TechnicalReadiness => write!(f, "technical-readiness"),
            Metric::OverallConfidence => write!(f, "overall-confidence"),
            Metric::Dimension(d) => d.fmt(f),
        }
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "trait-fit" | "psychometric-fit" => Ok(Metric::TraitFit),
            "technical-readiness" | "technical" => Ok(Metric::TechnicalReadiness),
            "overall-confidence" | "overall" => Ok(Metric::OverallConfidence),
            other => other
                .parse::<Dimension>()
                .map(Metric::Dimension)
                .map_err(|_| format!("unknown metric: {other}")),
        }
    }
}

impl TryFrom<String> for Metric {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Metric> for String {
    fn from(metric: Metric) -> Self {
        metric.to_string()
    }
}

/// The engine's output. Built once per completed run and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// Mean score of answered trait-fit questions.
    pub trait_fit: u8,
    /// Mean score of answered technical questions.
    pub technical_readiness: u8,
    /// Mean score per dimension.
    pub dimensions: DimensionProfile<u8>,
    /// Equal-weight mean of the two pillars and the dimension average.
    pub overall_confidence: u8,
    /// Verdict derived from `overall_confidence`.
    pub recommendation: Recommendation,
    /// Ordered, never-empty list of suggested next steps.
    pub next_steps: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_display_and_parse() {
        assert_eq!(QuestionKind::RatingScale.to_string(), "rating-scale");
        assert_eq!(
            "single-choice-with-context".parse::<QuestionKind>().unwrap(),
            QuestionKind::SingleChoiceWithContext
        );
        assert_eq!("likert".parse::<QuestionKind>().unwrap(), QuestionKind::RatingScale);
        assert_eq!(
            "multiple_choice".parse::<QuestionKind>().unwrap(),
            QuestionKind::SingleChoice
        );
        assert!("essay".parse::<QuestionKind>().is_err());
        assert!(QuestionKind::SingleChoice.is_choice());
        assert!(!QuestionKind::RatingScale.is_choice());
    }

    #[test]
    fn dimension_display_and_parse() {
        for dimension in Dimension::ALL {
            assert_eq!(dimension.to_string().parse::<Dimension>().unwrap(), dimension);
        }
        assert_eq!("ability_to_learn".parse::<Dimension>().unwrap(), Dimension::LearningAgility);
        assert_eq!("Real_World".parse::<Dimension>().unwrap(), Dimension::AppliedContext);
        assert!("luck".parse::<Dimension>().is_err());
    }

    #[test]
    fn profile_indexing_and_iteration() {
        let mut profile = DimensionProfile::<u8>::default();
        profile[Dimension::Reasoning] = 40;
        assert_eq!(profile[Dimension::Reasoning], 40);
        assert_eq!(profile[Dimension::Drive], 0);

        let order: Vec<Dimension> = profile.iter().map(|(d, _)| d).collect();
        assert_eq!(order, Dimension::ALL.to_vec());

        let doubled = profile.map(|v| u16::from(v) * 2);
        assert_eq!(doubled[Dimension::Reasoning], 80);
    }

    #[test]
    fn profile_serializes_as_named_map() {
        let profile = DimensionProfile::from_fn(|d| if d == Dimension::Skill { 70u8 } else { 10 });
        let json = serde_json::to_value(profile).unwrap();
        assert_eq!(json["skill"], 70);
        assert_eq!(json["learning-agility"], 10);
        assert_eq!(json.as_object().unwrap().len(), Dimension::COUNT);
    }

    #[test]
    fn profile_rejects_missing_dimension() {
        let json = r#"{"drive": 1, "interest": 2, "skill": 3, "reasoning": 4, "learning-agility": 5}"#;
        let err = serde_json::from_str::<DimensionProfile<u8>>(json).unwrap_err();
        assert!(err.to_string().contains("applied-context"));
    }

    #[test]
    fn recommendation_thresholds() {
        assert_eq!(Recommendation::from_confidence(100), Recommendation::Favorable);
        assert_eq!(Recommendation::from_confidence(75), Recommendation::Favorable);
        assert_eq!(Recommendation::from_confidence(74), Recommendation::Conditional);
        assert_eq!(Recommendation::from_confidence(55), Recommendation::Conditional);
        assert_eq!(Recommendation::from_confidence(54), Recommendation::Unfavorable);
        assert_eq!(Recommendation::from_confidence(0), Recommendation::Unfavorable);
    }

    #[test]
    fn metric_parse_and_serde() {
        assert_eq!("technical-readiness".parse::<Metric>().unwrap(), Metric::TechnicalReadiness);
        assert_eq!(
            "reasoning".parse::<Metric>().unwrap(),
            Metric::Dimension(Dimension::Reasoning)
        );
        assert!("height".parse::<Metric>().is_err());

        let json = serde_json::to_string(&Metric::Dimension(Dimension::AppliedContext)).unwrap();
        assert_eq!(json, "\"applied-context\"");
        let back: Metric = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Metric::Dimension(Dimension::AppliedContext));
        assert_eq!(Metric::all().len(), 9);
    }

    #[test]
    fn answer_omits_missing_echo() {
        let json = serde_json::to_string(&Answer::new("q1", 3)).unwrap();
        assert_eq!(json, r#"{"question_id":"q1","value":3}"#);
    }
}
