//! Conversion history configuration from TOML (`[history]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw history configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHistoryConfig {
    /// Append every conversion to the history file
    pub enabled: bool,
    /// JSONL file the history is appended to
    pub path: PathBuf,
}

impl Default for FileHistoryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: PathBuf::from("numconv-history.jsonl"),
        }
    }
}

impl FileHistoryConfig {
    /// The history file to write, if history is enabled
    pub fn active_path(&self) -> Option<&PathBuf> {
        self.enabled.then_some(&self.path)
    }
}
