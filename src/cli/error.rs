//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    /// Malformed or incomplete command line
    #[error("{0}")]
    Usage(#[from] clap::Error),

    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Writing to stdout failed
    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Application(_) | CliError::Output(_) => crate::exitcode::FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn given_usage_error_then_exit_code_is_usage() {
        let err = CliError::from(clap::Error::new(clap::error::ErrorKind::MissingRequiredArgument));
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
    }

    #[test]
    fn given_application_error_then_exit_code_is_failure() {
        let err = CliError::from(ApplicationError::OperationFailed {
            context: "write file: x".into(),
            source: io::Error::new(io::ErrorKind::Other, "boom"),
        });
        assert_eq!(err.exit_code(), crate::exitcode::FAILURE);
        assert_eq!(err.to_string(), "write file: x: boom");
    }

    #[test]
    fn given_output_error_then_exit_code_is_failure() {
        let err = CliError::from(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"));
        assert_eq!(err.exit_code(), crate::exitcode::FAILURE);
    }
}
