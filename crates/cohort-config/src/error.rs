use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `COHORT_*` variable could not be read into the config.
    #[error("cannot load cohort config: {0}")]
    Figment(#[from] figment::Error),

    #[error("{field} {reason}")]
    InvalidValue { field: String, reason: String },
}
