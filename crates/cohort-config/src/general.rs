//! `[general]`: output defaults for listing commands.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Rows shown by `cohort students` when `--limit` is absent.
    pub default_limit: u32,
    /// Rows shown by `cohort top` when neither `--count` nor `--limit` is given.
    pub top_performers: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: 20,
            top_performers: 5,
        }
    }
}
