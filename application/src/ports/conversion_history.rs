//! Port for recording conversion history.
//!
//! Defines the [`ConversionHistory`] trait for keeping a machine-readable
//! record of every conversion (input, formats, outcome).
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures each request
//! and its response in a structured form (e.g. JSONL).

use numconv_domain::{ConversionRequest, ConversionResponse, ConversionResult};
use serde::Serialize;

/// A single recorded conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionEvent {
    /// Event type identifier ("convert" or "convert_all").
    #[serde(skip)]
    pub event_type: &'static str,
    pub input: String,
    pub input_type: String,
    pub output_type: String,
    /// `result` / `error` pair, exactly one set.
    #[serde(flatten)]
    pub outcome: ConversionResponse,
}

impl ConversionEvent {
    pub fn new(event_type: &'static str, request: &ConversionRequest, result: &ConversionResult) -> Self {
        Self {
            event_type,
            input: request.input.clone(),
            input_type: request.input_type.clone(),
            output_type: request.output_type.clone(),
            outcome: result.clone().into(),
        }
    }
}

/// Port for recording conversions.
///
/// `record` is synchronous and non-fallible so that history problems never
/// turn a successful conversion into a failed one.
pub trait ConversionHistory: Send + Sync {
    /// Record a finished conversion.
    fn record(&self, event: ConversionEvent);
}

/// No-op implementation for tests and when history is disabled.
pub struct NoConversionHistory;

impl ConversionHistory for NoConversionHistory {
    fn record(&self, _event: ConversionEvent) {}
}
