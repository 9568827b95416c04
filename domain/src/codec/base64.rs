//! Base64 integer codec.
//!
//! A number is stored as its minimal little-endian byte sequence (first byte
//! least significant, at least one byte) and encoded with the standard
//! alphabet and padding.

use crate::core::error::ConversionError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use num_bigint::BigUint;

/// Decode a base64 string into a non-negative integer.
///
/// The empty string decodes to zero bytes, which represent no number and is
/// rejected.
pub fn decode(b64: &str) -> Result<BigUint, ConversionError> {
    let bytes = STANDARD
        .decode(b64)
        .map_err(|e| ConversionError::InvalidBase64(e.to_string()))?;

    if bytes.is_empty() {
        return Err(ConversionError::InvalidBase64(
            "decoded to zero bytes".to_string(),
        ));
    }

    Ok(BigUint::from_bytes_le(&bytes))
}

/// Encode a non-negative integer as base64.
pub fn encode(n: &BigUint) -> String {
    // `to_bytes_le` yields `[0]` for zero, so the sequence is never empty
    STANDARD.encode(n.to_bytes_le())
}
