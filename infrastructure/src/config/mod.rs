//! Configuration file loading for numeric-converter
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./numconv.toml` or `./.numconv.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/numeric-converter/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileDefaultsConfig, FileHistoryConfig, FileOutputConfig,
};
pub use loader::ConfigLoader;
