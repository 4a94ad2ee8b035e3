//! Synthetic population settings.

use serde::{Deserialize, Serialize};

/// Default number of generated students.
const fn default_size() -> usize {
    150
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PopulationConfig {
    /// Number of students to generate. Must be positive.
    #[serde(default = "default_size")]
    pub size: usize,

    /// PRNG seed. `None` means a fresh seed is drawn at startup.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            seed: None,
        }
    }
}

impl PopulationConfig {
    /// Whether runs are reproducible without extra flags.
    #[must_use]
    pub const fn is_seeded(&self) -> bool {
        self.seed.is_some()
    }
}
