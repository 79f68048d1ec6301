//! Application-level errors

use thiserror::Error;

/// Failures while carrying out a command's side effect.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{context}: {source}")]
    OperationFailed {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
