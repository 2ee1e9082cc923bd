//! Application error types

use thiserror::Error;

/// Application-level errors.
///
/// Test outcomes never surface here; they are recorded in each test case.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Writing a report failed.
    #[error("report output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
