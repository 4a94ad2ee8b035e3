//! Subjects, persona labels, levels, predictors, and query enums for Cohort.
//!
//! Wire names match `as_str()`: snake_case, except `Subject`, which uses
//! its class labels (`Math`, `PE`).
//! Enums with a fixed reporting order expose it as an `ALL` constant; reductions
//! over those enums break ties by that order.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Subject
// ---------------------------------------------------------------------------

/// Class a student is enrolled in. Serialized by its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Subject {
    Math,
    Science,
    English,
    History,
    Art,
    Music,
    #[serde(rename = "PE")]
    Pe,
}

impl Subject {
    pub const ALL: [Self; 7] = [
        Self::Math,
        Self::Science,
        Self::English,
        Self::History,
        Self::Art,
        Self::Music,
        Self::Pe,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Math => "Math",
            Self::Science => "Science",
            Self::English => "English",
            Self::History => "History",
            Self::Art => "Art",
            Self::Music => "Music",
            Self::Pe => "PE",
        }
    }

    /// Human-facing class name; identical to the wire name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PersonaLabel
// ---------------------------------------------------------------------------

/// One of the six learning personas a student is classified into.
///
/// Variant order is catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PersonaLabel {
    HighAchiever,
    EfficientLearner,
    EngagedLearner,
    SteadyPerformer,
    DevelopingLearner,
    NeedsSupport,
}

impl PersonaLabel {
    pub const ALL: [Self; 6] = [
        Self::HighAchiever,
        Self::EfficientLearner,
        Self::EngagedLearner,
        Self::SteadyPerformer,
        Self::DevelopingLearner,
        Self::NeedsSupport,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HighAchiever => "high_achiever",
            Self::EfficientLearner => "efficient_learner",
            Self::EngagedLearner => "engaged_learner",
            Self::SteadyPerformer => "steady_performer",
            Self::DevelopingLearner => "developing_learner",
            Self::NeedsSupport => "needs_support",
        }
    }

    /// Display name, as shown in the persona catalog.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HighAchiever => "High Achiever",
            Self::EfficientLearner => "Efficient Learner",
            Self::EngagedLearner => "Engaged Learner",
            Self::SteadyPerformer => "Steady Performer",
            Self::DevelopingLearner => "Developing Learner",
            Self::NeedsSupport => "Needs Support",
        }
    }

    /// Position in the catalog, used for tallies and tie-breaks.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PersonaLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Level
// ---------------------------------------------------------------------------

/// Ordinal bucket for engagement and performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    High,
    Medium,
    Low,
}

impl Level {
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// NumericField
// ---------------------------------------------------------------------------

/// A numeric attribute of a student record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    Comprehension,
    Attention,
    Focus,
    Retention,
    AssessmentScore,
    EngagementTime,
}

impl NumericField {
    pub const ALL: [Self; 6] = [
        Self::Comprehension,
        Self::Attention,
        Self::Focus,
        Self::Retention,
        Self::AssessmentScore,
        Self::EngagementTime,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comprehension => "comprehension",
            Self::Attention => "attention",
            Self::Focus => "focus",
            Self::Retention => "retention",
            Self::AssessmentScore => "assessment_score",
            Self::EngagementTime => "engagement_time",
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Predictor
// ---------------------------------------------------------------------------

/// A field correlated against the assessment score in insights.
///
/// Variant order is reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Predictor {
    Comprehension,
    Attention,
    Focus,
    Retention,
    EngagementTime,
}

impl Predictor {
    pub const ALL: [Self; 5] = [
        Self::Comprehension,
        Self::Attention,
        Self::Focus,
        Self::Retention,
        Self::EngagementTime,
    ];

    /// The record field this predictor reads.
    #[must_use]
    pub const fn field(self) -> NumericField {
        match self {
            Self::Comprehension => NumericField::Comprehension,
            Self::Attention => NumericField::Attention,
            Self::Focus => NumericField::Focus,
            Self::Retention => NumericField::Retention,
            Self::EngagementTime => NumericField::EngagementTime,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.field().as_str()
    }
}

impl fmt::Display for Predictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ScoreBand
// ---------------------------------------------------------------------------

/// Assessment score bracket.
///
/// ```text
/// excellent   score >= 80
/// proficient  60 <= score < 80
/// developing  score < 60
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Proficient,
    Developing,
}

impl ScoreBand {
    #[must_use]
    pub fn of(score: f64) -> Self {
        if score >= 80.0 {
            Self::Excellent
        } else if score >= 60.0 {
            Self::Proficient
        } else {
            Self::Developing
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Proficient => "proficient",
            Self::Developing => "developing",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SortField / SortDirection
// ---------------------------------------------------------------------------

/// Column a student listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    StudentId,
    Name,
    Class,
    #[default]
    AssessmentScore,
    Comprehension,
    Attention,
    Focus,
    Retention,
    EngagementTime,
}

impl SortField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StudentId => "student_id",
            Self::Name => "name",
            Self::Class => "class",
            Self::AssessmentScore => "assessment_score",
            Self::Comprehension => "comprehension",
            Self::Attention => "attention",
            Self::Focus => "focus",
            Self::Retention => "retention",
            Self::EngagementTime => "engagement_time",
        }
    }

    /// The numeric field behind this column, `None` for text columns.
    #[must_use]
    pub const fn numeric(self) -> Option<NumericField> {
        match self {
            Self::StudentId | Self::Name | Self::Class => None,
            Self::AssessmentScore => Some(NumericField::AssessmentScore),
            Self::Comprehension => Some(NumericField::Comprehension),
            Self::Attention => Some(NumericField::Attention),
            Self::Focus => Some(NumericField::Focus),
            Self::Retention => Some(NumericField::Retention),
            Self::EngagementTime => Some(NumericField::EngagementTime),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- Serde roundtrip tests ---

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(subject_pe, Subject, Subject::Pe, "PE");
    test_serde_roundtrip!(subject_history, Subject, Subject::History, "History");

    test_serde_roundtrip!(
        persona_high_achiever,
        PersonaLabel,
        PersonaLabel::HighAchiever,
        "high_achiever"
    );
    test_serde_roundtrip!(
        persona_needs_support,
        PersonaLabel,
        PersonaLabel::NeedsSupport,
        "needs_support"
    );

    test_serde_roundtrip!(level_medium, Level, Level::Medium, "medium");

    test_serde_roundtrip!(
        field_engagement_time,
        NumericField,
        NumericField::EngagementTime,
        "engagement_time"
    );
    test_serde_roundtrip!(
        predictor_retention,
        Predictor,
        Predictor::Retention,
        "retention"
    );
    test_serde_roundtrip!(band_proficient, ScoreBand, ScoreBand::Proficient, "proficient");
    test_serde_roundtrip!(sort_student_id, SortField, SortField::StudentId, "student_id");
    test_serde_roundtrip!(sort_asc, SortDirection, SortDirection::Asc, "asc");

    // --- Ordering tests ---

    #[test]
    fn persona_index_matches_catalog_order() {
        for (position, label) in PersonaLabel::ALL.iter().enumerate() {
            assert_eq!(label.index(), position);
        }
    }

    #[test]
    fn predictor_fields_exclude_assessment_score() {
        assert!(
            Predictor::ALL
                .iter()
                .all(|p| p.field() != NumericField::AssessmentScore)
        );
    }

    #[test]
    fn score_band_boundaries() {
        assert_eq!(ScoreBand::of(80.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::of(79.9), ScoreBand::Proficient);
        assert_eq!(ScoreBand::of(60.0), ScoreBand::Proficient);
        assert_eq!(ScoreBand::of(59.9), ScoreBand::Developing);
        assert_eq!(ScoreBand::of(0.0), ScoreBand::Developing);
    }

    #[test]
    fn sort_defaults_to_score_descending() {
        assert_eq!(SortField::default(), SortField::AssessmentScore);
        assert_eq!(SortDirection::default(), SortDirection::Desc);
        assert_eq!(SortField::Name.numeric(), None);
    }

    #[test]
    fn subject_wire_names_are_class_labels() {
        let names: Vec<String> = Subject::ALL
            .iter()
            .map(|subject| serde_json::to_string(subject).unwrap())
            .collect();
        assert_eq!(
            names,
            ["\"Math\"", "\"Science\"", "\"English\"", "\"History\"", "\"Art\"", "\"Music\"", "\"PE\""]
        );
        assert!(serde_json::from_str::<Subject>("\"pe\"").is_err());
    }

    // --- Display / as_str tests ---

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", Subject::Pe), "PE");
        assert_eq!(Subject::Pe.label(), "PE");
        assert_eq!(format!("{}", PersonaLabel::SteadyPerformer), "steady_performer");
        assert_eq!(PersonaLabel::SteadyPerformer.name(), "Steady Performer");
        assert_eq!(format!("{}", Level::Low), "low");
        assert_eq!(format!("{}", NumericField::AssessmentScore), "assessment_score");
        assert_eq!(format!("{}", Predictor::EngagementTime), "engagement_time");
        assert_eq!(format!("{}", ScoreBand::Excellent), "excellent");
        assert_eq!(format!("{}", SortField::Class), "class");
        assert_eq!(format!("{}", SortDirection::Desc), "desc");
    }
}
