//! PRD stub service
//!
//! Writes the fixed PRD stub to a destination path, creating missing
//! parent directories first.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{OutcomeReport, STUB_CONTENT};
use crate::infrastructure::traits::FileSystem;

/// PRD generation service.
pub struct PrdService {
    fs: Arc<dyn FileSystem>,
}

impl PrdService {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Write the stub to `out`, overwriting any existing file.
    ///
    /// Parent directories are created when missing; an existing parent is
    /// left untouched. The returned report names the directory that was
    /// created, if any.
    ///
    /// # Errors
    /// Returns `ApplicationError::OperationFailed` if the parent directory
    /// cannot be created or the file cannot be written (permission denied,
    /// `out` is a directory, disk full, invalid path).
    #[instrument(skip(self))]
    pub fn write_stub(&self, out: &Path) -> ApplicationResult<OutcomeReport> {
        let created_dir = self.ensure_parent(out)?;

        self.fs
            .write(out, STUB_CONTENT)
            .with_path_context("write file", out)?;
        debug!(bytes = STUB_CONTENT.len(), "stub written");

        Ok(OutcomeReport::stub(out, created_dir))
    }

    fn ensure_parent(&self, out: &Path) -> ApplicationResult<Option<PathBuf>> {
        let parent = match out.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => return Ok(None),
        };
        if self.fs.is_dir(parent) {
            return Ok(None);
        }

        debug!(parent = %parent.display(), "creating parent directory");
        self.fs
            .create_dir_all(parent)
            .with_path_context("create directory", parent)?;
        Ok(Some(parent.to_path_buf()))
    }
}
