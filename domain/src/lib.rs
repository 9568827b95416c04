//! Domain layer for numeric-converter
//!
//! This crate contains the codecs, value objects and error taxonomy.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Formats
//!
//! A number travels between six textual encodings, named by [`FormatTag`]:
//! English words, binary, octal, decimal, hexadecimal and base64.
//!
//! ## Codecs
//!
//! Every encoding is read into an arbitrary-precision integer and written back
//! out by a pure codec (see [`codec`]). Failures are [`ConversionError`]s.
//!
//! ## Boundary
//!
//! Callers send a [`ConversionRequest`] and receive a [`ConversionResult`],
//! which holds either the rendered string or an error message.

pub mod codec;
pub mod config;
pub mod conversion;
pub mod core;
pub mod format;
pub mod util;

// Re-export commonly used types
pub use config::OutputFormat;
pub use conversion::{ConversionRequest, ConversionResponse, ConversionResult};
pub use core::error::ConversionError;
pub use format::{CodecKind, FormatTag};

// Arbitrary-precision integer type used across the layers
pub use num_bigint::{BigInt, BigUint};
