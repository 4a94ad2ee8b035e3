//! # cohort-config
//!
//! Layered configuration loading for Cohort using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`COHORT_*` prefix, `__` as separator)
//! 2. Project-level `.cohort/config.toml`
//! 3. User-level `~/.config/cohort/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `COHORT_POPULATION__SIZE` -> `population.size`,
//! `COHORT_GENERAL__DEFAULT_LIMIT` -> `general.default_limit`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use cohort_config::CohortConfig;
//!
//! let config = CohortConfig::load_with_dotenv().expect("config");
//! config.validate().expect("valid config");
//! println!("generating {} students", config.population.size);
//! ```

mod error;
mod general;
mod population;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use population::PopulationConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CohortConfig {
    #[serde(default)]
    pub population: PopulationConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl CohortConfig {
    /// Read defaults, config files, and `COHORT_*` variables.
    ///
    /// `.env` is not consulted; see [`Self::load_with_dotenv`].
    ///
    /// # Errors
    ///
    /// [`ConfigError::Figment`] when a file is malformed or a value has the
    /// wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::figment().extract()?)
    }

    /// Like [`Self::load`], after exporting `.env` from the working directory
    /// into the process environment. A missing `.env` is not an error.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// The provider chain, lowest priority first.
    #[must_use]
    pub fn figment() -> Figment {
        let files = [user_config_path(), Some(PathBuf::from(PROJECT_CONFIG))];
        files
            .into_iter()
            .flatten()
            .filter(|path| path.is_file())
            .fold(
                Figment::from(Serialized::defaults(Self::default())),
                |figment, path| figment.merge(Toml::file(path)),
            )
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values the analytics core cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population.size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "population.size".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.general.top_performers == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.top_performers".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

const PROJECT_CONFIG: &str = ".cohort/config.toml";
const ENV_PREFIX: &str = "COHORT_";

/// `<config dir>/cohort/config.toml`, e.g. `~/.config/cohort/config.toml`.
fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cohort").join("config.toml"))
}
