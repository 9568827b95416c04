//! Positional integer codec for bases 2, 8, 10 and 16.
//!
//! Digits only: no `0x`/`0b`/`0o` prefixes, no `+`, no separators. Parsing is
//! case-insensitive for hexadecimal; formatting is always lowercase.

use crate::core::error::ConversionError;
use num_bigint::{BigInt, BigUint, Sign};

/// Parse `s` as a signed integer in the given radix.
pub fn parse(s: &str, radix: u32) -> Result<BigInt, ConversionError> {
    let (sign, digits_str, offset) = match s.strip_prefix('-') {
        Some(rest) => (Sign::Minus, rest, 1),
        None => (Sign::Plus, s, 0),
    };

    if digits_str.is_empty() {
        return Err(ConversionError::EmptyInput);
    }

    let mut digits = Vec::with_capacity(digits_str.len());
    for (i, c) in digits_str.chars().enumerate() {
        let digit = c.to_digit(radix).ok_or(ConversionError::InvalidDigit {
            digit: c,
            position: offset + i,
            radix,
        })?;
        digits.push(digit as u8);
    }

    // Digits are non-empty and below the radix, so this is always `Some`
    let magnitude = BigUint::from_radix_be(&digits, radix).unwrap_or_default();
    Ok(BigInt::from_biguint(sign, magnitude))
}

/// Render `n` in the given radix, lowercase, `-` prefixed when negative.
pub fn format(n: &BigInt, radix: u32) -> String {
    n.to_str_radix(radix)
}
