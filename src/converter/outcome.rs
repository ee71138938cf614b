use std::path::{Path, PathBuf};

use super::ConversionError;

/// Result of processing one candidate file.
#[derive(Debug)]
pub struct Outcome {
    /// Full path of the candidate.
    pub source: PathBuf,
    /// Entry name as listed in the source directory, lossily decoded for display.
    pub file_name: String,
    /// Artifact path on success.
    pub result: Result<PathBuf, ConversionError>,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn artifact(&self) -> Option<&Path> {
        self.result.as_ref().ok().map(PathBuf::as_path)
    }

    pub fn error(&self) -> Option<&ConversionError> {
        self.result.as_ref().err()
    }
}
