//! Domain entities for PRD stub generation

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Fixed content of every generated PRD stub.
pub const STUB_CONTENT: &str = "# PRD\n\n## Summary\n\nTBD\n";

/// A request to write a PRD stub, as parsed from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrdRequest {
    /// Destination file path
    pub out: PathBuf,
    /// Render the outcome as JSON instead of text
    pub json: bool,
    /// Emit `[debug]` trace lines to the error stream
    pub verbose: bool,
}

impl PrdRequest {
    pub fn new(out: impl Into<PathBuf>) -> Self {
        Self {
            out: out.into(),
            json: false,
            verbose: false,
        }
    }
}

/// Result of a successful stub write.
///
/// Serializes to `{"out": ..., "stub": true}`; the remaining fields are
/// only used for text rendering and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeReport {
    #[serde(rename = "out")]
    pub output_path: String,
    #[serde(rename = "stub")]
    pub is_stub: bool,
    #[serde(skip)]
    pub success: bool,
    /// Parent directory that did not exist and had to be created.
    #[serde(skip)]
    pub created_dir: Option<PathBuf>,
}

impl OutcomeReport {
    /// Report for a stub written to `path`.
    pub fn stub(path: &Path, created_dir: Option<PathBuf>) -> Self {
        Self {
            output_path: path.display().to_string(),
            is_stub: true,
            success: true,
            created_dir,
        }
    }
}
