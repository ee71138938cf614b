use clap::Parser;
use imgbatch::config::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "imgbatch")]
#[command(
    author,
    version,
    about = "Convert every .ppm image in a directory to .png"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory to scan for source images [default: .]
    #[arg(long)]
    pub source_dir: Option<PathBuf>,

    /// Directory for converted images, relative to the source directory [default: converted_pngs]
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Suffix of files to convert [default: .ppm]
    #[arg(long)]
    pub from: Option<String>,

    /// Suffix (and format) of converted files [default: .png]
    #[arg(long)]
    pub to: Option<String>,

    /// Process entries in directory listing order instead of sorting by name
    #[arg(long)]
    pub unsorted: bool,
}

impl Cli {
    /// Override config values with any flags given on the command line.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref dir) = self.source_dir {
            config.source_dir = dir.clone();
        }
        if let Some(ref dir) = self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(ref suffix) = self.from {
            config.source_suffix = suffix.clone();
        }
        if let Some(ref suffix) = self.to {
            config.target_suffix = suffix.clone();
        }
        if self.unsorted {
            config.sorted = false;
        }
    }
}
