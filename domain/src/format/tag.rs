//! Format tag value object

use crate::core::error::ConversionError;
use serde::{Deserialize, Serialize};

/// Which codec reads and writes a format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecKind {
    /// English number words
    Text,
    /// Positional digits in the given radix
    Radix(u32),
    /// Base64 over little-endian bytes
    Base64,
}

/// Textual encodings a number can be read from or written to (Value Object)
///
/// This is a closed set: any other tag is rejected with
/// [`ConversionError::InvalidFormatTag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatTag {
    /// English number words ("forty-two")
    Text,
    /// Base 2, no prefix
    Binary,
    /// Base 8, no prefix
    Octal,
    /// Base 10
    Decimal,
    /// Base 16, lowercase on output, no prefix
    Hexadecimal,
    /// Little-endian bytes, standard base64 with padding
    Base64,
}

impl FormatTag {
    /// All tags in canonical order
    pub const ALL: [FormatTag; 6] = [
        FormatTag::Text,
        FormatTag::Binary,
        FormatTag::Octal,
        FormatTag::Decimal,
        FormatTag::Hexadecimal,
        FormatTag::Base64,
    ];

    /// Get the wire identifier for this tag
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatTag::Text => "text",
            FormatTag::Binary => "binary",
            FormatTag::Octal => "octal",
            FormatTag::Decimal => "decimal",
            FormatTag::Hexadecimal => "hexadecimal",
            FormatTag::Base64 => "base64",
        }
    }

    /// The codec responsible for this format
    pub fn codec(&self) -> CodecKind {
        match self {
            FormatTag::Text => CodecKind::Text,
            FormatTag::Binary => CodecKind::Radix(2),
            FormatTag::Octal => CodecKind::Radix(8),
            FormatTag::Decimal => CodecKind::Radix(10),
            FormatTag::Hexadecimal => CodecKind::Radix(16),
            FormatTag::Base64 => CodecKind::Base64,
        }
    }
}

impl std::fmt::Display for FormatTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FormatTag {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| ConversionError::InvalidFormatTag(s.to_string()))
    }
}
