use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{NumericField, PersonaLabel, Subject};

/// One synthetic student. Immutable once generated.
///
/// Cognitive attributes and the assessment score lie in `[0, 100]`, engagement
/// time in `[10, 120]` minutes, all rounded to one decimal place.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StudentRecord {
    /// `STU` followed by the zero-padded generation sequence number.
    pub student_id: String,
    pub name: String,
    #[serde(rename = "class")]
    pub class_name: Subject,
    pub comprehension: f64,
    pub attention: f64,
    pub focus: f64,
    pub retention: f64,
    pub assessment_score: f64,
    /// Minutes.
    pub engagement_time: f64,
}

impl StudentRecord {
    /// Mean of the four cognitive attributes.
    #[must_use]
    pub fn cognitive_avg(&self) -> f64 {
        (self.comprehension + self.attention + self.focus + self.retention) / 4.0
    }

    /// Read a numeric field by name.
    #[must_use]
    pub const fn value(&self, field: NumericField) -> f64 {
        match field {
            NumericField::Comprehension => self.comprehension,
            NumericField::Attention => self.attention,
            NumericField::Focus => self.focus,
            NumericField::Retention => self.retention,
            NumericField::AssessmentScore => self.assessment_score,
            NumericField::EngagementTime => self.engagement_time,
        }
    }
}

/// A student paired with the persona it classifies into.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ClassifiedStudent {
    #[serde(flatten)]
    pub student: StudentRecord,
    pub persona: PersonaLabel,
}
