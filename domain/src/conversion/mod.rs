//! Boundary value objects: what a caller sends and what it gets back.

mod request;
mod result;

pub use request::ConversionRequest;
pub use result::{ConversionResponse, ConversionResult};
