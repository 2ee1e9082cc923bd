//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// A configured route expectation is unusable.
    #[error("invalid route '{name}': {reason}")]
    InvalidRoute {
        /// Name of the offending route.
        name: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
