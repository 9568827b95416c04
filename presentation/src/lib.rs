//! Presentation layer for numeric-converter
//!
//! This crate contains the CLI definitions, console output formatting,
//! and the JSON-lines request boundary.

pub mod boundary;
pub mod cli;
pub mod output;

// Re-export commonly used types
pub use boundary::JsonLinesServer;
pub use boundary::json_lines::ServeSummary;
pub use cli::commands::{Cli, FormatArg, OutputFormat};
pub use output::console::ConsoleFormatter;
