//! Configuration schema types for `frames.toml`
//!
//! Defines the structure and validation rules for frame building options.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Zero-padding rule for indexed frame file names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaddingMode {
    /// `frames / 10 + 1` digits, compatible with existing asset sets
    #[default]
    Legacy,
    /// As many digits as the largest frame index needs
    Digits,
}

/// Sampling filter used when rotating frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RotationFilter {
    /// Nearest source pixel, no new colors introduced
    #[default]
    Nearest,
    /// Bilinear interpolation of the four nearest source pixels
    Bilinear,
}

/// Indexed file naming options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddingConfig {
    #[serde(default)]
    pub mode: PaddingMode,
}

/// Rotation options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationConfig {
    #[serde(default)]
    pub filter: RotationFilter,
}

/// Image loading options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Directory image names are resolved against
    #[serde(default = "default_root")]
    pub root: PathBuf,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self { root: default_root() }
    }
}

/// Complete frames.toml configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FramesConfig {
    #[serde(default)]
    pub padding: PaddingConfig,
    #[serde(default)]
    pub rotation: RotationConfig,
    #[serde(default)]
    pub loader: LoaderConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "loader.root")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "frames.toml: '{}' {}", self.field, self.message)
    }
}

impl FramesConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.loader.root.as_os_str().is_empty() {
            errors.push(ConfigValidationError {
                field: "loader.root".to_string(),
                message: "must be a non-empty path".to_string(),
            });
        }

        errors
    }
}
