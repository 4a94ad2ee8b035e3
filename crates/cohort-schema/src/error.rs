use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("no schema registered as '{0}'")]
    NotFound(String),

    /// One message per violation, prefixed with the JSON pointer it occurred at.
    #[error("{} schema violation(s): {}", errors.len(), errors.join("; "))]
    ValidationFailed { errors: Vec<String> },

    /// The generated schema itself failed to compile.
    #[error("invalid schema: {0}")]
    Generation(String),
}
