//! CLI response types returned as JSON by `cohort` commands.
//!
//! These structs define the shape of JSON output for `cohort student`,
//! `cohort personas`, and `cohort correlate`. Listing commands return bare
//! arrays of [`crate::entities::ClassifiedStudent`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::StudentRecord;
use crate::enums::{Level, NumericField, PersonaLabel, ScoreBand};

/// Response from `cohort student <ID>`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StudentDetailResponse {
    pub student: StudentRecord,
    pub persona: PersonaLabel,
    pub cognitive_avg: f64,
    pub performance_level: Level,
    pub engagement_level: Level,
    pub score_band: ScoreBand,
}

/// One row of `cohort personas`: catalog descriptor joined with its stats.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PersonaOverview {
    pub persona: PersonaLabel,
    pub name: String,
    pub description: String,
    /// Catalog order.
    pub characteristics: Vec<String>,
    pub count: usize,
    pub share: f64,
    pub avg_score: f64,
    pub color: String,
}

/// Response from `cohort correlate <X> <Y>`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CorrelateResponse {
    pub x: NumericField,
    pub y: NumericField,
    pub coefficient: f64,
    pub samples: usize,
}
