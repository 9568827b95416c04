//! Configuration value objects for the domain layer
//!
//! Shared by the config file loader and the CLI.

mod output_format;

pub use output_format::OutputFormat;
