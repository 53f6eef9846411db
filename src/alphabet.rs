//! Digit alphabets
//!
//! An alphabet maps digit values to symbols by position: the symbol at index
//! `i` stands for the digit value `i` in every radix up to the alphabet length.

use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Symbols for radices 2 through 36
pub const DEFAULT_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Ordered, case-folded set of digit symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    index: HashMap<char, usize>,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHABET)
    }
}

impl Alphabet {
    /// Build an alphabet from the given characters.
    ///
    /// Every character is folded to uppercase and only its first occurrence
    /// is kept, so `"aAbB"` yields `"AB"`.
    pub fn new(chars: &str) -> Self {
        let mut symbols = Vec::with_capacity(chars.len());
        let mut index = HashMap::with_capacity(chars.len());

        for symbol in chars.chars().map(fold_case) {
            if !index.contains_key(&symbol) {
                index.insert(symbol, symbols.len());
                symbols.push(symbol);
            }
        }

        debug!(
            "Built alphabet of {} symbols from {} characters",
            symbols.len(),
            chars.chars().count()
        );

        Self { symbols, index }
    }

    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Value of `c` as a digit in `radix`, if it is one of the first `radix` symbols
    pub fn digit_value(&self, c: char, radix: u32) -> Option<usize> {
        self.index
            .get(&fold_case(c))
            .copied()
            .filter(|&value| value < radix as usize)
    }

    /// Symbol for a digit value
    pub fn symbol(&self, digit: usize) -> Option<char> {
        self.symbols.get(digit).copied()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

/// Uppercase a character, keeping it unchanged when the mapping is not one-to-one
fn fold_case(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}
