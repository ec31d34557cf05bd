//! Configuration loading and discovery for `frames.toml`

use super::schema::FramesConfig;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name searched for by [`find_config_from`]
pub const CONFIG_FILE: &str = "frames.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse frames.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// Find frames.toml by walking up from a directory.
///
/// Returns `None` when no ancestor holds a config file.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a frames.toml file.
///
/// With `None`, returns [`default_config`]. Nothing is read from the process
/// environment; callers wanting discovery pass the result of
/// [`find_config_from`] explicitly.
pub fn load_config(path: Option<&Path>) -> Result<FramesConfig, ConfigError> {
    match path {
        Some(p) => {
            debug!("loading config from {}", p.display());
            let contents = fs::read_to_string(&p)?;
            parse_config(&contents)
        }
        None => Ok(default_config()),
    }
}

/// Parse and validate configuration text.
pub fn parse_config(contents: &str) -> Result<FramesConfig, ConfigError> {
    let config: FramesConfig = toml::from_str(contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

/// Configuration used when no frames.toml is present.
pub fn default_config() -> FramesConfig {
    FramesConfig::default()
}
