//! Configuration management for radix-convert
//!
//! This module handles CLI argument parsing and application settings.

use crate::{
    alphabet::{Alphabet, DEFAULT_ALPHABET},
    converter::{
        Converter, Limits, DEFAULT_PRECISION, MAX_FRAC_PART_LENGTH, MAX_INT_PART_LENGTH,
        MIN_RADIX,
    },
};
use anyhow::{anyhow, bail, Result};
use clap::builder::styling;
use clap::{value_parser, Arg, ArgMatches, ColorChoice, Command};
use std::path::PathBuf;
use tracing::info;

/// Build the CLI command
pub fn build_cli() -> Command {
    let styles = styling::Styles::styled()
        .header(styling::AnsiColor::Green.on_default() | styling::Effects::BOLD)
        .usage(styling::AnsiColor::Green.on_default() | styling::Effects::BOLD)
        .literal(styling::AnsiColor::Blue.on_default() | styling::Effects::BOLD)
        .placeholder(styling::AnsiColor::Cyan.on_default());

    Command::new("radix-convert")
        .about("radix-convert - Convert numbers between positional numeral systems")
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("numbers")
                .help("Numbers to convert, written in the source radix")
                .value_parser(value_parser!(String))
                .allow_hyphen_values(true)
                .num_args(0..),
        )
        .arg(
            Arg::new("from")
                .short('f')
                .long("from")
                .help("Radix the numbers are written in")
                .value_parser(value_parser!(u32))
                .default_value("10"),
        )
        .arg(
            Arg::new("to")
                .short('t')
                .long("to")
                .help("Radix to convert the numbers into")
                .value_parser(value_parser!(u32))
                .required(true),
        )
        .arg(
            Arg::new("precision")
                .short('p')
                .long("precision")
                .help("Maximum number of fractional digits to emit")
                .value_parser(value_parser!(usize))
                .default_value("6"),
        )
        .arg(
            Arg::new("alphabet")
                .short('a')
                .long("alphabet")
                .help("Digit symbols in order of value (case-insensitive)")
                .value_parser(value_parser!(String))
                .default_value(DEFAULT_ALPHABET),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .help("File with one number per line")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write results to this file instead of stdout")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("max_int_digits")
                .long("max-int-digits")
                .help("Upper bound on emitted integer digits")
                .value_parser(value_parser!(usize))
                .default_value("250"),
        )
        .arg(
            Arg::new("max_frac_digits")
                .long("max-frac-digits")
                .help("Upper bound on emitted fractional digits")
                .value_parser(value_parser!(usize))
                .default_value("250"),
        )
        .arg(
            Arg::new("keep_going")
                .short('k')
                .long("keep-going")
                .help("Report failed conversions and continue with the rest")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no_progress")
                .long("no-progress")
                .help("Disable progress indicators")
                .action(clap::ArgAction::SetTrue),
        )
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Numbers given on the command line
    pub numbers: Vec<String>,

    /// Source radix
    pub from: u32,

    /// Target radix
    pub to: u32,

    /// Fractional digits to emit
    pub precision: usize,

    /// Digit alphabet as given by the user
    pub alphabet: String,

    /// Optional file of numbers, one per line
    pub input: Option<PathBuf>,

    /// Optional output file
    pub output: Option<PathBuf>,

    /// Digit emission bounds
    pub limits: Limits,

    /// Continue after failed conversions
    pub keep_going: bool,

    /// Enable verbose logging
    pub verbose: bool,

    /// Disable progress bars
    pub no_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            numbers: Vec::new(),
            from: 10,
            to: 10,
            precision: DEFAULT_PRECISION,
            alphabet: DEFAULT_ALPHABET.to_string(),
            input: None,
            output: None,
            limits: Limits::default(),
            keep_going: false,
            verbose: false,
            no_progress: false,
        }
    }
}

impl Config {
    /// Parse arguments and apply initial configuration
    pub fn from_args() -> Result<Self> {
        let matches = build_cli().get_matches();
        let config = Self::from_matches(&matches)?;

        // Set up tracing with environment variable support
        // RUST_LOG takes precedence over verbose flag
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new(if config.verbose { "info" } else { "off" })
        });

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();

        if config.verbose {
            info!("Configuration: {:?}", config);
        }

        Ok(config)
    }

    /// Build a configuration from already parsed arguments
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let numbers = matches
            .get_many::<String>("numbers")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        let from = matches.get_one::<u32>("from").copied().unwrap_or(10);

        let to = matches
            .get_one::<u32>("to")
            .copied()
            .ok_or_else(|| anyhow!("Target radix is required"))?;

        let precision = matches
            .get_one::<usize>("precision")
            .copied()
            .unwrap_or(DEFAULT_PRECISION);

        let alphabet = matches
            .get_one::<String>("alphabet")
            .cloned()
            .unwrap_or_else(|| DEFAULT_ALPHABET.to_string());

        let limits = Limits {
            max_int_digits: matches
                .get_one::<usize>("max_int_digits")
                .copied()
                .unwrap_or(MAX_INT_PART_LENGTH),
            max_frac_digits: matches
                .get_one::<usize>("max_frac_digits")
                .copied()
                .unwrap_or(MAX_FRAC_PART_LENGTH),
        };

        Ok(Config {
            numbers,
            from,
            to,
            precision,
            alphabet,
            input: matches.get_one::<PathBuf>("input").cloned(),
            output: matches.get_one::<PathBuf>("output").cloned(),
            limits,
            keep_going: matches.get_flag("keep_going"),
            verbose: matches.get_flag("verbose"),
            no_progress: matches.get_flag("no_progress"),
        })
    }

    /// Build the converter described by this configuration
    pub fn build_converter(&self) -> Converter {
        Converter::new()
            .with_alphabet(&self.alphabet)
            .with_limits(self.limits)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        let alphabet_len = Alphabet::new(&self.alphabet).len();

        if alphabet_len < MIN_RADIX as usize {
            bail!(
                "Alphabet must contain at least {} distinct symbols, got {}",
                MIN_RADIX,
                alphabet_len
            );
        }

        if self.from < MIN_RADIX || self.from as usize > alphabet_len {
            bail!(
                "Source radix {} is outside the supported range {}..={}",
                self.from,
                MIN_RADIX,
                alphabet_len
            );
        }

        if self.to < MIN_RADIX || self.to as usize > alphabet_len {
            bail!(
                "Target radix {} is outside the supported range {}..={}",
                self.to,
                MIN_RADIX,
                alphabet_len
            );
        }

        if let Some(input) = &self.input {
            if !input.is_file() {
                bail!("Input file does not exist: {}", input.display());
            }
        }

        if self.numbers.is_empty() && self.input.is_none() {
            bail!("No numbers given: pass them as arguments or with --input");
        }

        info!("Configuration validation completed successfully");
        Ok(())
    }
}
