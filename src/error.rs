//! Error handling for radix-convert
//!
//! The conversion core reports failures through the typed [`ConversionError`],
//! while the command-line pipeline uses anyhow for propagation and context.

use anyhow::Context;
use std::path::Path;

pub type Result<T> = anyhow::Result<T>;

/// Result type returned by the conversion core
pub type ConversionResult<T> = std::result::Result<T, ConversionError>;

/// Extension trait for Results to add context to pipeline errors
pub trait ResultExt<T> {
    /// Add context with file path information
    fn with_path_context<P: AsRef<Path>>(self, operation: &str, path: P) -> Result<T>;

    /// Add context naming the number being converted
    fn with_input_context(self, input: &str) -> Result<T>;

    /// Add context with the radices of a conversion
    fn with_conversion_context(self, from: u32, to: u32) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<anyhow::Error> + Send + Sync + 'static,
{
    fn with_path_context<P: AsRef<Path>>(self, operation: &str, path: P) -> Result<T> {
        self.map_err(|e| e.into())
            .with_context(|| format!("Failed to {} file: {}", operation, path.as_ref().display()))
    }

    fn with_input_context(self, input: &str) -> Result<T> {
        self.map_err(|e| e.into())
            .with_context(|| format!("Error converting number '{}'", input))
    }

    fn with_conversion_context(self, from: u32, to: u32) -> Result<T> {
        self.map_err(|e| e.into())
            .with_context(|| format!("Error converting from base {} to base {}", from, to))
    }
}

/// Failures of a single parse, format or convert call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("Invalid radix {radix}: must be between 2 and {alphabet_len}")]
    InvalidRadix { radix: u32, alphabet_len: usize },

    #[error("Empty input: no digits to convert")]
    EmptyInput,

    #[error("Invalid digit '{digit}' at position {position} for base {radix}")]
    InvalidDigit {
        digit: char,
        position: usize,
        radix: u32,
    },

    #[error("Digit limit of {limit} exceeded")]
    Overflow { limit: usize },

    #[error("Digit value {digit} has no symbol in an alphabet of {alphabet_len} characters")]
    DigitOutOfRange { digit: usize, alphabet_len: usize },
}
