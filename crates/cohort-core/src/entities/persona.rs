use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::PersonaLabel;

/// Static descriptor of a learning persona. See [`crate::catalog`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LearningPersona {
    pub label: PersonaLabel,
    pub name: String,
    pub description: String,
    pub characteristics: Vec<String>,
    /// Display-only color token.
    pub color: String,
}

/// Population statistics for one persona.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PersonaStats {
    pub persona: PersonaLabel,
    pub count: usize,
    /// Fraction of the population, in `[0, 1]`.
    pub share: f64,
    /// Mean assessment score of the persona's members, 0 when it has none.
    pub avg_score: f64,
}
