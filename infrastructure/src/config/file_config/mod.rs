//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod defaults;
mod history;
mod output;

pub use defaults::FileDefaultsConfig;
pub use history::FileHistoryConfig;
pub use output::FileOutputConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("history.path cannot be empty when history is enabled")]
    EmptyHistoryPath,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Default input/output formats
    pub defaults: FileDefaultsConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Conversion history settings
    pub history: FileHistoryConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.history.enabled && self.history.path.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyHistoryPath);
        }

        Ok(())
    }
}
