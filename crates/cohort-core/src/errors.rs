//! Cross-cutting error types for Cohort.
//!
//! The analytics core has a single recoverable failure class: a caller handed
//! it an argument outside the operation's domain. Configuration and schema
//! errors live in their own crates; `cohort-cli` converges them with `anyhow`.

use thiserror::Error;

/// Errors that can be raised by the analytics core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An input violated an operation's precondition (empty or mismatched
    /// series, zero population size, non-finite values).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CoreError {
    /// Shorthand for [`CoreError::InvalidArgument`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
