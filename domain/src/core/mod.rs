//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ConversionError`]: the error taxonomy for every codec

pub mod error;
