//! Domain error model.

use thiserror::Error;

/// Result type used across the library crates.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only fallible constructors and configuration parsing return this. The engines
/// themselves are total and report ambiguity as regular results.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A configuration value could not be parsed or is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
