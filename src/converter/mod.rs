//! Batch converter.
//!
//! Walks one level of a source directory, picks entries by suffix, and
//! re-encodes each into the output directory. Per-file failures are returned
//! as values in the stream of [`Outcome`]s; only setup failures abort a run.

mod error;
mod outcome;

pub use error::ConversionError;
pub use outcome::Outcome;

use crate::config::Config;
use image::{ImageError, ImageFormat, ImageReader};
use imgbatch_common::paths::artifact_os_name;
use imgbatch_common::{Error, Result};
use std::ffi::OsString;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};
use walkdir::WalkDir;

/// Converts every candidate file of a directory.
pub struct BatchConverter {
    config: Config,
    output_path: PathBuf,
    format: ImageFormat,
}

impl BatchConverter {
    /// Create a converter, resolving the target format up front.
    pub fn new(config: Config) -> Result<Self> {
        let format = config.target_format()?;
        let output_path = config.output_path();
        Ok(Self {
            config,
            output_path,
            format,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Directory artifacts are written to.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Start a run.
    ///
    /// Checks the source directory and creates the output directory before
    /// returning. The returned iterator does the actual work lazily, one
    /// file per call to `next`.
    pub fn run(&self) -> Result<Conversions<'_>> {
        let source_dir = &self.config.source_dir;
        std::fs::read_dir(source_dir).map_err(|e| Error::source_dir(source_dir, e))?;

        std::fs::create_dir_all(&self.output_path)
            .map_err(|e| Error::output_dir(&self.output_path, e))?;

        info!(
            "Converting {} files in {:?} to {} under {:?}",
            self.config.source_suffix, source_dir, self.config.target_suffix, self.output_path
        );

        let mut walker = WalkDir::new(source_dir).min_depth(1).max_depth(1);
        if self.config.sorted {
            walker = walker.sort_by_file_name();
        }

        Ok(Conversions {
            converter: self,
            entries: walker.into_iter(),
        })
    }

    fn convert_entry(&self, source: &Path, file_name: String, artifact: OsString) -> Outcome {
        let target = self.output_path.join(artifact);
        debug!("Converting {:?} -> {:?}", source, target);

        let result = convert_file(source, &target, self.format).map(|()| target);
        if let Err(ref e) = result {
            debug!("Conversion of {:?} failed: {}", source, e);
        }

        Outcome {
            source: source.to_path_buf(),
            file_name,
            result,
        }
    }
}

/// Lazy, one-shot stream of conversion outcomes.
pub struct Conversions<'a> {
    converter: &'a BatchConverter,
    entries: walkdir::IntoIter,
}

impl Iterator for Conversions<'_> {
    type Item = Outcome;

    fn next(&mut self) -> Option<Outcome> {
        let config = &self.converter.config;

        for entry in self.entries.by_ref() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable directory entry: {}", e);
                    continue;
                }
            };

            let Some(artifact) =
                artifact_os_name(entry.file_name(), &config.source_suffix, &config.target_suffix)
            else {
                trace!("Skipping {:?}", entry.path());
                continue;
            };
            let file_name = entry.file_name().to_string_lossy().into_owned();

            return Some(self.converter.convert_entry(entry.path(), file_name, artifact));
        }

        None
    }
}

/// Decode `source` and write it to `target` in `format`.
///
/// The source format is guessed from the file content, falling back to the
/// extension. The image is encoded in memory first, so an encoding failure
/// never leaves a partial artifact behind.
pub fn convert_file(
    source: &Path,
    target: &Path,
    format: ImageFormat,
) -> std::result::Result<(), ConversionError> {
    let img = ImageReader::open(source)
        .map_err(|e| ConversionError::Decode(ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| ConversionError::Decode(ImageError::IoError(e)))?
        .decode()
        .map_err(ConversionError::Decode)?;

    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, format)
        .map_err(|source| ConversionError::Encode {
            path: target.to_path_buf(),
            source,
        })?;

    std::fs::write(target, buf.into_inner()).map_err(|source| ConversionError::Write {
        path: target.to_path_buf(),
        source,
    })
}
