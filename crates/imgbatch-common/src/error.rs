//! Common error types used throughout imgbatch.
//!
//! These cover the conditions that abort a whole run. Failures of a single
//! file are reported per file by the converter and never end up here.

use std::path::PathBuf;

/// Fatal error type for imgbatch.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source directory is missing or cannot be listed.
    #[error("Cannot read source directory {}: {source}", .path.display())]
    SourceDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output directory could not be created.
    #[error("Failed to create output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The target suffix does not name a format the encoder can write.
    #[error("Unsupported target format: {0}")]
    UnsupportedFormat(String),

    /// Invalid input was provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create a new SourceDir error.
    pub fn source_dir<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::SourceDir {
            path: path.into(),
            source,
        }
    }

    /// Create a new OutputDir error.
    pub fn output_dir<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::OutputDir {
            path: path.into(),
            source,
        }
    }

    /// Create a new UnsupportedFormat error.
    pub fn unsupported_format<S: Into<String>>(msg: S) -> Self {
        Self::UnsupportedFormat(msg.into())
    }

    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
