//! Conversion result value object

use crate::core::error::ConversionError;
use serde::{Deserialize, Serialize};

/// Outcome of one conversion: a rendered string or an error message, never both
///
/// On the wire this is `{"result": ..., "error": ...}` with exactly one side
/// non-null (see [`ConversionResponse`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "ConversionResponse", try_from = "ConversionResponse")]
pub enum ConversionResult {
    Converted(String),
    Failed(String),
}

impl ConversionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionResult::Converted(_))
    }

    /// The rendered value, if the conversion succeeded
    pub fn result(&self) -> Option<&str> {
        match self {
            ConversionResult::Converted(value) => Some(value),
            ConversionResult::Failed(_) => None,
        }
    }

    /// The error message, if the conversion failed
    pub fn error(&self) -> Option<&str> {
        match self {
            ConversionResult::Converted(_) => None,
            ConversionResult::Failed(message) => Some(message),
        }
    }
}

impl From<Result<String, ConversionError>> for ConversionResult {
    fn from(outcome: Result<String, ConversionError>) -> Self {
        match outcome {
            Ok(value) => ConversionResult::Converted(value),
            Err(e) => ConversionResult::Failed(e.to_string()),
        }
    }
}

/// Wire shape of a [`ConversionResult`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResponse {
    pub result: Option<String>,
    pub error: Option<String>,
}

impl From<ConversionResult> for ConversionResponse {
    fn from(result: ConversionResult) -> Self {
        match result {
            ConversionResult::Converted(value) => Self {
                result: Some(value),
                error: None,
            },
            ConversionResult::Failed(message) => Self {
                result: None,
                error: Some(message),
            },
        }
    }
}

impl TryFrom<ConversionResponse> for ConversionResult {
    type Error = String;

    fn try_from(response: ConversionResponse) -> Result<Self, Self::Error> {
        match (response.result, response.error) {
            (Some(value), None) => Ok(ConversionResult::Converted(value)),
            (None, Some(message)) => Ok(ConversionResult::Failed(message)),
            (Some(_), Some(_)) => Err("response has both result and error".to_string()),
            (None, None) => Err("response has neither result nor error".to_string()),
        }
    }
}
