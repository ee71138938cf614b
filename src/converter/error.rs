use image::ImageError;
use std::path::PathBuf;

/// Failure converting a single candidate file.
///
/// Never aborts a run: the converter reports it in the file's [`Outcome`]
/// and moves on to the next entry.
///
/// [`Outcome`]: super::Outcome
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// The source could not be opened, read, or decoded.
    #[error("decode failed: {0}")]
    Decode(#[source] ImageError),

    /// The decoded image could not be encoded in the target format.
    #[error("encode to {} failed: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    /// The encoded artifact could not be written.
    #[error("write to {} failed: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
