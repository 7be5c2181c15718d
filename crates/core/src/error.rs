//! Simulation error model.

use thiserror::Error;

/// Result type used across the simulation crates.
pub type SimResult<T> = Result<T, SimError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures (validation, invariants,
/// parsing). File and CSV concerns belong to the export layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A simulation invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// A textual value could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

impl SimError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
