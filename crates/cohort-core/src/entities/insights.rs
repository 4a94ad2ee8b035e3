use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{PersonaLabel, Predictor};

/// Pearson coefficients of each predictor against the assessment score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Correlations {
    pub comprehension_to_score: f64,
    pub attention_to_score: f64,
    pub focus_to_score: f64,
    pub retention_to_score: f64,
    pub engagement_to_score: f64,
}

impl Correlations {
    #[must_use]
    pub const fn get(&self, predictor: Predictor) -> f64 {
        match predictor {
            Predictor::Comprehension => self.comprehension_to_score,
            Predictor::Attention => self.attention_to_score,
            Predictor::Focus => self.focus_to_score,
            Predictor::Retention => self.retention_to_score,
            Predictor::EngagementTime => self.engagement_to_score,
        }
    }

    /// Coefficients in [`Predictor::ALL`] order.
    #[must_use]
    pub fn entries(&self) -> [(Predictor, f64); 5] {
        Predictor::ALL.map(|p| (p, self.get(p)))
    }
}

/// A predictor together with its coefficient.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PredictorCorrelation {
    pub predictor: Predictor,
    pub coefficient: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PersonaCount {
    pub persona: PersonaLabel,
    pub count: usize,
}

/// Minimum, maximum, and spread of the assessment score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub spread: f64,
}

/// Head counts per [`crate::enums::ScoreBand`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScoreBands {
    pub excellent: usize,
    pub proficient: usize,
    pub developing: usize,
}

/// Population-level summary. Recomputed from scratch on every request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Insights {
    pub correlations: Correlations,
    pub avg_score: f64,
    pub avg_engagement: f64,
    pub avg_cognitive: f64,
    /// One entry per persona, in catalog order, zero counts included.
    pub persona_counts: Vec<PersonaCount>,
    pub total_students: usize,
    pub score_range: ScoreRange,
    pub score_bands: ScoreBands,
    /// Students scoring strictly above 80.
    pub top_performer_count: usize,
    /// Personas with at least one member.
    pub distinct_personas: usize,
    /// Largest absolute coefficient; the earlier predictor wins ties.
    pub strongest_predictor: PredictorCorrelation,
    /// Largest persona count; the earlier catalog entry wins ties.
    pub most_common_persona: PersonaCount,
}

impl Insights {
    /// Count for a single persona.
    #[must_use]
    pub fn persona_count(&self, persona: PersonaLabel) -> usize {
        self.persona_counts
            .iter()
            .find(|entry| entry.persona == persona)
            .map_or(0, |entry| entry.count)
    }
}
