//! radix-convert - Convert numbers between positional numeral systems
//!
//! The [`converter::Converter`] parses a signed, fractional number written in
//! one radix into an `f64` and formats it into another radix using a
//! configurable, case-insensitive digit alphabet.

pub mod alphabet;
pub mod batch;
pub mod config;
pub mod converter;
pub mod error;
pub mod progress;

pub use alphabet::{Alphabet, DEFAULT_ALPHABET};
pub use batch::{BatchConverter, BatchStats, ConversionOutcome};
pub use config::Config;
pub use converter::{
    Converter, Limits, DEFAULT_PRECISION, MAX_FRAC_PART_LENGTH, MAX_INT_PART_LENGTH, MIN_RADIX,
};
pub use error::{ConversionError, ConversionResult};
