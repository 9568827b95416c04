//! Infrastructure layer for numeric-converter
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileDefaultsConfig, FileHistoryConfig,
    FileOutputConfig,
};
pub use logging::JsonlConversionHistory;
