//! Application layer for numeric-converter
//!
//! This crate contains the conversion use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::DefaultFormats;
pub use ports::conversion_history::{ConversionEvent, ConversionHistory, NoConversionHistory};
pub use use_cases::convert::ConvertUseCase;
