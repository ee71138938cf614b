mod types;

pub use types::*;

use anyhow::{Context, Result};
use imgbatch_common::paths::normalize_suffix;
use imgbatch_common::Error;
use std::path::Path;

/// Load configuration from a TOML file
///
/// Values are normalized but not validated; command-line overrides are
/// applied on top before [`validate_config`] runs.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    prepare_config(&mut config);

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = ["./imgbatch.toml", "~/.config/imgbatch/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Normalize user-supplied values in place.
pub fn prepare_config(config: &mut Config) {
    config.source_suffix = normalize_suffix(&config.source_suffix);
    config.target_suffix = normalize_suffix(&config.target_suffix);
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.source_suffix.len() < 2 {
        return Err(Error::invalid_input("source suffix cannot be empty").into());
    }
    if config.target_suffix.len() < 2 {
        return Err(Error::invalid_input("target suffix cannot be empty").into());
    }

    if config
        .source_suffix
        .eq_ignore_ascii_case(&config.target_suffix)
    {
        return Err(Error::invalid_input(format!(
            "source and target suffix are both {:?}",
            config.source_suffix
        ))
        .into());
    }

    config.target_format()?;

    if !config.source_dir.is_dir() {
        tracing::warn!("Source directory does not exist: {:?}", config.source_dir);
    }

    Ok(())
}
