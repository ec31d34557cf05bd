//! Configuration module for frame building
//!
//! Provides types and parsing for `frames.toml` configuration.

pub mod loader;
pub mod schema;

pub use loader::{default_config, find_config_from, load_config, parse_config, ConfigError};
pub use schema::*;
