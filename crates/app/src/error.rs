//! Runner error types

use thiserror::Error;
use webprobe_application::ApplicationError;
use webprobe_infrastructure::InfrastructureError;

/// Errors that stop the runner before or while reporting.
///
/// Failed checks are not errors; they are counted in the summary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Settings could not be assembled.
    #[error(transparent)]
    Settings(#[from] InfrastructureError),

    /// The suite could not report its results.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Writing to the output failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for runner operations.
pub type AppResult<T> = Result<T, AppError>;
