//! Core radix conversion engine
//!
//! Numbers are parsed from their source radix into an `f64` intermediate value
//! and formatted from it into the target radix. Precision is bounded by the
//! float, and digit emission is bounded by [`Limits`].

use crate::{
    alphabet::Alphabet,
    error::{ConversionError, ConversionResult},
};
use tracing::{debug, trace};

/// Number of fractional digits emitted when no precision is given
pub const DEFAULT_PRECISION: usize = 6;

/// Smallest supported radix
pub const MIN_RADIX: u32 = 2;

/// Default bound on emitted integer-part digits
pub const MAX_INT_PART_LENGTH: usize = 250;

/// Default bound on emitted fractional-part digits
pub const MAX_FRAC_PART_LENGTH: usize = 250;

/// Upper bounds on digit emission while formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_int_digits: usize,
    pub max_frac_digits: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_int_digits: MAX_INT_PART_LENGTH,
            max_frac_digits: MAX_FRAC_PART_LENGTH,
        }
    }
}

/// Converts numbers between radices using a configurable alphabet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Converter {
    alphabet: Alphabet,
    limits: Limits,
}

impl Converter {
    /// Create a converter with the default alphabet and limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the alphabet, returning the reconfigured converter
    pub fn with_alphabet(mut self, chars: &str) -> Self {
        self.set_alphabet(chars);
        self
    }

    /// Replace the digit emission limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the alphabet from `chars`, case-folded with later duplicates dropped
    pub fn set_alphabet(&mut self, chars: &str) {
        self.alphabet = Alphabet::new(chars);
        debug!("Alphabet set to {}", self.alphabet);
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Current alphabet as a string
    pub fn get_alphabet(&self) -> String {
        self.alphabet.to_string()
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Parse then format, returning the first failure unchanged
    pub fn convert(
        &self,
        text: &str,
        radix_from: u32,
        radix_to: u32,
        precision: usize,
    ) -> ConversionResult<String> {
        let value = self.parse(text, radix_from)?;
        self.format(value, radix_to, precision)
    }

    /// [`Converter::convert`] with [`DEFAULT_PRECISION`]
    pub fn convert_default(
        &self,
        text: &str,
        radix_from: u32,
        radix_to: u32,
    ) -> ConversionResult<String> {
        self.convert(text, radix_from, radix_to, DEFAULT_PRECISION)
    }

    /// Parse a signed, optionally fractional number written in `radix_from`.
    ///
    /// Either `.` or `,` separates the fractional part; only the first one
    /// found is treated as a separator. The integer part may be empty, so
    /// `".5"` is accepted.
    pub fn parse(&self, text: &str, radix_from: u32) -> ConversionResult<f64> {
        if radix_from < MIN_RADIX || radix_from as usize > self.alphabet.len() {
            return Err(ConversionError::InvalidRadix {
                radix: radix_from,
                alphabet_len: self.alphabet.len(),
            });
        }

        let (negative, digits) = match text.chars().next() {
            Some('-') => (true, &text[1..]),
            Some('+') => (false, &text[1..]),
            Some(_) => (false, text),
            None => return Err(ConversionError::EmptyInput),
        };
        if digits.is_empty() {
            return Err(ConversionError::EmptyInput);
        }

        // Sign characters are single-byte, so this is also the char offset.
        let offset = text.len() - digits.len();
        let (int_digits, frac_digits) = match digits.find(['.', ',']) {
            Some(pos) => (&digits[..pos], &digits[pos + 1..]),
            None => (digits, ""),
        };

        let radix = f64::from(radix_from);

        let int_part = int_digits
            .chars()
            .enumerate()
            .try_fold(0.0_f64, |acc, (i, c)| -> ConversionResult<f64> {
                let digit = self.digit_at(c, offset + i, radix_from)?;
                Ok(acc * radix + digit as f64)
            })?;

        // Folding from the last digit weights each one without knowing the length.
        let frac_start = offset + int_digits.chars().count() + 1;
        let frac_len = frac_digits.chars().count();
        let frac_part = frac_digits
            .chars()
            .rev()
            .zip((0..frac_len).rev())
            .try_fold(0.0_f64, |acc, (c, i)| -> ConversionResult<f64> {
                let digit = self.digit_at(c, frac_start + i, radix_from)?;
                Ok((acc + digit as f64) / radix)
            })?;

        let magnitude = int_part + frac_part;
        let value = if negative { -magnitude } else { magnitude };

        trace!("Parsed '{}' in base {} as {}", text, radix_from, value);
        Ok(value)
    }

    /// Format `value` in `radix_to` with at most `precision` fractional digits.
    ///
    /// Fractional digits are truncated, not rounded, and emission stops early
    /// once the remainder is exactly zero.
    pub fn format(&self, value: f64, radix_to: u32, precision: usize) -> ConversionResult<String> {
        if radix_to < MIN_RADIX {
            return Err(ConversionError::InvalidRadix {
                radix: radix_to,
                alphabet_len: self.alphabet.len(),
            });
        }
        if value.is_nan() {
            return Err(ConversionError::Overflow {
                limit: self.limits.max_int_digits,
            });
        }

        let negative = value < 0.0;
        let magnitude = value.abs();
        let radix = f64::from(radix_to);

        let mut int_part = magnitude.trunc();
        let mut frac_part = magnitude.fract();

        // Least significant digit first; reversed once complete.
        let mut int_symbols = Vec::new();
        loop {
            if int_symbols.len() >= self.limits.max_int_digits {
                return Err(ConversionError::Overflow {
                    limit: self.limits.max_int_digits,
                });
            }
            let digit = (int_part % radix) as usize;
            int_symbols.push(self.symbol_for(digit)?);
            int_part = (int_part / radix).floor();
            if int_part <= 0.0 {
                break;
            }
        }

        let frac_capacity = precision.min(self.limits.max_frac_digits);
        let mut output = String::with_capacity(int_symbols.len() + frac_capacity + 2);
        if negative {
            output.push('-');
        }
        output.extend(int_symbols.iter().rev());

        if frac_part > 0.0 {
            output.push('.');
            let mut emitted = 0;
            while emitted < precision && frac_part > 0.0 {
                if emitted >= self.limits.max_frac_digits {
                    return Err(ConversionError::Overflow {
                        limit: self.limits.max_frac_digits,
                    });
                }
                frac_part *= radix;
                let digit = frac_part.trunc() as usize;
                output.push(self.symbol_for(digit)?);
                frac_part -= digit as f64;
                emitted += 1;
            }
        }

        trace!("Formatted {} in base {} as '{}'", value, radix_to, output);
        Ok(output)
    }

    fn digit_at(&self, c: char, position: usize, radix: u32) -> ConversionResult<usize> {
        self.alphabet
            .digit_value(c, radix)
            .ok_or(ConversionError::InvalidDigit {
                digit: c,
                position,
                radix,
            })
    }

    fn symbol_for(&self, digit: usize) -> ConversionResult<char> {
        self.alphabet
            .symbol(digit)
            .ok_or(ConversionError::DigitOutOfRange {
                digit,
                alphabet_len: self.alphabet.len(),
            })
    }
}
