//! Domain error types

use thiserror::Error;

/// Errors raised while parsing or rendering a number.
///
/// Every variant is local to a single conversion. The conversion facade turns
/// them into the `error` message of a [`ConversionResult`](crate::ConversionResult).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Invalid format: '{0}' (expected one of text, binary, octal, decimal, hexadecimal, base64)")]
    InvalidFormatTag(String),

    #[error("Invalid digit '{digit}' at position {position} for base {radix}")]
    InvalidDigit {
        digit: char,
        position: usize,
        radix: u32,
    },

    #[error("Empty input: no digits to convert")]
    EmptyInput,

    #[error("Invalid base64 input: {0}")]
    InvalidBase64(String),

    #[error("Unable to convert text to number: {0}")]
    UnrecognizedText(String),

    #[error("Unable to render number: {0}")]
    UnrenderableNumber(String),
}
