//! English number renderer.
//!
//! Output style: hyphenated compound tens, `and` after a hundreds word, groups
//! of three digits joined by commas, and `and` before a trailing group below
//! one hundred ("one thousand and one").

use super::words::{HUNDRED, ONES, SCALES, TENS};
use crate::core::error::ConversionError;
use num_bigint::{BigInt, BigUint, Sign};

/// Render an integer as English words, prefixing `minus` when negative.
pub fn render(n: &BigInt) -> Result<String, ConversionError> {
    let words = render_magnitude(n.magnitude())?;
    if n.sign() == Sign::Minus {
        Ok(format!("minus {words}"))
    } else {
        Ok(words)
    }
}

fn render_magnitude(n: &BigUint) -> Result<String, ConversionError> {
    let digits = n.to_str_radix(10);

    // Three-digit groups, least significant first
    let groups: Vec<u32> = digits
        .as_bytes()
        .rchunks(3)
        .map(|chunk| {
            chunk
                .iter()
                .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'))
        })
        .collect();

    if groups.len() > SCALES.len() {
        return Err(ConversionError::UnrenderableNumber(format!(
            "{} digits is beyond the largest scale word ({})",
            digits.len(),
            SCALES[SCALES.len() - 1]
        )));
    }

    if groups.iter().all(|&g| g == 0) {
        return Ok(ONES[0].to_string());
    }

    let mut output = String::new();
    for (scale, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        if !output.is_empty() {
            output.push_str(if scale == 0 && group < 100 { " and " } else { ", " });
        }
        output.push_str(&render_group(group));
        if scale > 0 {
            output.push(' ');
            output.push_str(&SCALES[scale]);
        }
    }

    Ok(output)
}

/// Render 1..=999
fn render_group(group: u32) -> String {
    let hundreds = group / 100;
    let rest = group % 100;

    match (hundreds, rest) {
        (0, _) => render_below_hundred(rest),
        (_, 0) => format!("{} {HUNDRED}", ONES[hundreds as usize]),
        _ => format!(
            "{} {HUNDRED} and {}",
            ONES[hundreds as usize],
            render_below_hundred(rest)
        ),
    }
}

/// Render 0..=99
fn render_below_hundred(n: u32) -> String {
    if n < 20 {
        return ONES[n as usize].to_string();
    }
    let tens = TENS[(n / 10) as usize];
    match n % 10 {
        0 => tens.to_string(),
        ones => format!("{tens}-{}", ONES[ones as usize]),
    }
}
