use image::ImageFormat;
use imgbatch_common::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directory scanned for candidate files (not recursive)
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Directory receiving artifacts; relative paths resolve against `source_dir`
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Suffix selecting candidate files, compared case-insensitively
    #[serde(default = "default_source_suffix")]
    pub source_suffix: String,

    /// Suffix given to artifacts; also selects the output format
    #[serde(default = "default_target_suffix")]
    pub target_suffix: String,

    /// Process entries in file-name order instead of listing order
    #[serde(default = "default_sorted")]
    pub sorted: bool,
}

fn default_source_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("converted_pngs")
}
fn default_source_suffix() -> String {
    ".ppm".to_string()
}
fn default_target_suffix() -> String {
    ".png".to_string()
}
fn default_sorted() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            output_dir: default_output_dir(),
            source_suffix: default_source_suffix(),
            target_suffix: default_target_suffix(),
            sorted: default_sorted(),
        }
    }
}

impl Config {
    /// Resolved output directory.
    ///
    /// When scanning the current directory the output path is kept relative,
    /// so reported artifact paths read `converted_pngs/<name>.png`.
    pub fn output_path(&self) -> PathBuf {
        if self.output_dir.is_absolute() || self.source_dir == Path::new(".") {
            self.output_dir.clone()
        } else {
            self.source_dir.join(&self.output_dir)
        }
    }

    /// Encoder format inferred from the target suffix.
    pub fn target_format(&self) -> Result<ImageFormat> {
        let ext = self.target_suffix.trim_start_matches('.');
        match ImageFormat::from_extension(ext) {
            Some(format) if format.writing_enabled() => Ok(format),
            _ => Err(Error::unsupported_format(self.target_suffix.clone())),
        }
    }
}
