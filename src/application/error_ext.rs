//! Error conversion helpers for common I/O operations
//!
//! Provides extension traits for cleaner error handling with path context.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// fs.write(&out, STUB_CONTENT)
    ///     .with_path_context("write file", &out)?;
    /// ```
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: format!("{}: {}", action, path.display()),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_io_error_when_with_path_context_then_message_has_action_path_and_cause() {
        let result: io::Result<()> = Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "permission denied",
        ));

        let err = result
            .with_path_context("write file", Path::new("/ro/stub.md"))
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "write file: /ro/stub.md: permission denied"
        );
    }

    #[test]
    fn given_ok_when_with_path_context_then_value_passes_through() {
        let result: io::Result<u8> = Ok(7);
        assert_eq!(result.with_path_context("noop", Path::new("x")).unwrap(), 7);
    }
}
