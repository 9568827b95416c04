//! Logging infrastructure: structured conversion history.
//!
//! Provides [`JsonlConversionHistory`], a JSONL file writer that implements
//! the [`ConversionHistory`](numconv_application::ConversionHistory) port.

mod jsonl_history;

pub use jsonl_history::JsonlConversionHistory;
