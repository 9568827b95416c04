//! The number-word table shared by the parser and the renderer.
//!
//! Built once on first use and never mutated.

use num_bigint::BigUint;
use std::collections::HashMap;
use std::sync::LazyLock;

pub(crate) const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Indexed by the tens digit; 0 and 1 are covered by [`ONES`]
pub(crate) const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

pub(crate) const HUNDRED: &str = "hundred";

/// Stems of the short-scale words from million (1000^2) to nonillion (1000^10)
const LOW_STEMS: [&str; 9] = [
    "m", "b", "tr", "quadr", "quint", "sext", "sept", "oct", "non",
];

/// Unit prefixes combined with [`TENS_STEMS`] from decillion upwards
const UNIT_PREFIXES: [&str; 10] = [
    "", "un", "duo", "tre", "quattuor", "quin", "sex", "sept", "octo", "novem",
];

const TENS_STEMS: [&str; 9] = [
    "dec",
    "vigint",
    "trigint",
    "quadragint",
    "quinquagint",
    "sexagint",
    "septuagint",
    "octogint",
    "nonagint",
];

/// Short-scale words indexed by power of one thousand, from `""` up to
/// centillion (1000^101)
pub(crate) static SCALES: LazyLock<Vec<String>> = LazyLock::new(|| {
    let mut scales = vec![String::new(), "thousand".to_string()];
    scales.extend(LOW_STEMS.iter().map(|stem| format!("{stem}illion")));
    for tens in TENS_STEMS {
        for unit in UNIT_PREFIXES {
            scales.push(format!("{unit}{tens}illion"));
        }
    }
    scales.push("centillion".to_string());
    scales
});

/// Largest scale the parser accepts: billion
const PARSE_MAX_SCALE: usize = 3;

/// What a single table word contributes to the running total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberWord {
    /// zero through ninety, added to the current group
    Unit(u32),
    /// Multiplies the current group by 100
    Hundred,
    /// Closes the current group, scaling it by `1000^power`
    Scale(u32),
}

impl NumberWord {
    /// The word's own numeric value
    pub fn value(&self) -> BigUint {
        match self {
            NumberWord::Unit(v) => BigUint::from(*v),
            NumberWord::Hundred => BigUint::from(100u32),
            NumberWord::Scale(power) => BigUint::from(1000u32).pow(*power),
        }
    }
}

static TABLE: LazyLock<HashMap<&'static str, NumberWord>> = LazyLock::new(|| {
    let mut table = HashMap::new();
    for (value, word) in ONES.iter().enumerate() {
        table.insert(*word, NumberWord::Unit(value as u32));
    }
    for (digit, word) in TENS.iter().enumerate().skip(2) {
        table.insert(*word, NumberWord::Unit(digit as u32 * 10));
    }
    table.insert(HUNDRED, NumberWord::Hundred);
    let scales = LazyLock::force(&SCALES);
    for (power, word) in scales.iter().enumerate().take(PARSE_MAX_SCALE + 1).skip(1) {
        table.insert(word.as_str(), NumberWord::Scale(power as u32));
    }
    table
});

/// Look up a canonical lowercase word
pub fn lookup(word: &str) -> Option<NumberWord> {
    TABLE.get(word).copied()
}
