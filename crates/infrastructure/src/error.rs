//! Infrastructure error types

use thiserror::Error;
use webprobe_domain::DomainError;

/// Errors raised while assembling the runner from its environment.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// Settings could not be read or deserialized.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Settings were read but failed validation.
    #[error("invalid settings: {0}")]
    Domain(#[from] DomainError),
}

/// Result type alias for infrastructure operations.
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;
