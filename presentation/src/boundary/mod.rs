//! Machine-facing boundary: JSON requests in, JSON results out

pub mod json_lines;

pub use json_lines::JsonLinesServer;
