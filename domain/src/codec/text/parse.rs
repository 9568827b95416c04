//! English number phrase parser.
//!
//! Accepts a restricted grammar: table words joined by whitespace or hyphens,
//! with an optional `and`. Ones and tens accumulate into the current group,
//! `hundred` multiplies it, and a scale word (`thousand` and up) closes it.

use super::words::{self, NumberWord};
use crate::core::error::ConversionError;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Parse an English number phrase into a non-negative integer.
pub fn parse(text: &str) -> Result<BigUint, ConversionError> {
    let normalized = normalize(text);

    if normalized == "zero" || normalized == "nil" {
        return Ok(BigUint::zero());
    }

    if let Some(word) = words::lookup(&normalized) {
        return Ok(word.value());
    }

    let tokens: Vec<&str> = normalized
        .split_whitespace()
        .filter(|token| *token != "and")
        .collect();

    if tokens.is_empty() {
        return Err(ConversionError::UnrecognizedText(
            "no number words found".to_string(),
        ));
    }

    let mut total = BigUint::zero();
    let mut current = BigUint::zero();

    for token in tokens {
        let word = words::lookup(token)
            .ok_or_else(|| ConversionError::UnrecognizedText(format!("Unknown word: {token}")))?;

        match word {
            NumberWord::Hundred => {
                if current.is_zero() {
                    current = BigUint::one();
                }
                current *= 100u32;
            }
            NumberWord::Scale(_) => {
                if current.is_zero() {
                    current = BigUint::one();
                }
                total += &current * word.value();
                current = BigUint::zero();
            }
            NumberWord::Unit(value) => {
                current += value;
            }
        }
    }

    Ok(total + current)
}

/// Lowercase, keep only ASCII letters, whitespace and hyphens, then turn
/// hyphens into spaces and trim.
fn normalize(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace() || *c == '-')
        .map(|c| if c == '-' { ' ' } else { c })
        .collect();
    kept.trim().to_string()
}
