//! Conversion request value object

use crate::core::error::ConversionError;
use crate::format::FormatTag;
use serde::{Deserialize, Serialize};

/// A single conversion request, as it arrives at the boundary
///
/// The format tags are kept as raw strings so an unknown tag surfaces as an
/// error result from the facade instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    pub input: String,
    pub input_type: String,
    pub output_type: String,
}

impl ConversionRequest {
    pub fn new(
        input: impl Into<String>,
        input_type: impl Into<String>,
        output_type: impl Into<String>,
    ) -> Self {
        Self {
            input: input.into(),
            input_type: input_type.into(),
            output_type: output_type.into(),
        }
    }

    /// Build a request from already-resolved tags
    pub fn typed(input: impl Into<String>, from: FormatTag, to: FormatTag) -> Self {
        Self::new(input, from.as_str(), to.as_str())
    }

    /// Resolve the declared input format
    pub fn input_format(&self) -> Result<FormatTag, ConversionError> {
        self.input_type.parse()
    }

    /// Resolve the declared output format
    pub fn output_format(&self) -> Result<FormatTag, ConversionError> {
        self.output_type.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"input": "42", "inputType": "decimal", "outputType": "binary"}"#;
        let request: ConversionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request, ConversionRequest::new("42", "decimal", "binary"));
    }

    #[test]
    fn test_unknown_tag_still_deserializes() {
        let json = r#"{"input": "42", "inputType": "roman", "outputType": "binary"}"#;
        let request: ConversionRequest = serde_json::from_str(json).unwrap();
        assert!(request.input_format().is_err());
        assert_eq!(request.output_format().unwrap(), FormatTag::Binary);
    }

    #[test]
    fn test_typed_request() {
        let request = ConversionRequest::typed("2a", FormatTag::Hexadecimal, FormatTag::Text);
        assert_eq!(request.input_type, "hexadecimal");
        assert_eq!(request.output_type, "text");
    }
}
