//! Integration tests for radix-convert
//!
//! These exercise the public conversion API end to end, plus the batch
//! pipeline against real files.

use radix_convert::{
    batch::{read_number_file, BatchConverter, BatchStats},
    config::Config,
    converter::{Converter, Limits, DEFAULT_PRECISION},
    error::ConversionError,
};
use std::{fs, path::PathBuf};
use tempfile::TempDir;

/// Numerals that survive a parse/format round trip in their own radix
const ROUND_TRIP_CASES: &[(&str, u32)] = &[
    ("0", 2),
    ("1011", 2),
    ("-1011.101", 2),
    ("777", 8),
    ("0.4", 8),
    ("12345", 10),
    ("-42.125", 10),
    ("DEADBEEF", 16),
    ("FF.C", 16),
    ("HELLO", 36),
    ("Z.I", 36),
];

/// Create a temporary directory with the given files
fn create_test_files(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    for (filename, content) in files {
        let file_path = temp_dir.path().join(filename);
        fs::write(file_path, content).expect("Failed to write test file");
    }

    temp_dir
}

/// Create a test configuration
fn create_test_config(from: u32, to: u32, input: Option<PathBuf>, output: PathBuf) -> Config {
    Config {
        from,
        to,
        input,
        output: Some(output),
        no_progress: true, // Disable progress bars in tests
        ..Config::default()
    }
}

#[test]
fn test_round_trip_in_same_radix() {
    let converter = Converter::new();

    for (numeral, radix) in ROUND_TRIP_CASES {
        let value = converter
            .parse(numeral, *radix)
            .unwrap_or_else(|e| panic!("{} should parse in base {}: {}", numeral, radix, e));
        let formatted = converter
            .format(value, *radix, DEFAULT_PRECISION)
            .unwrap_or_else(|e| panic!("{} should format in base {}: {}", value, radix, e));

        assert_eq!(&formatted, numeral, "round trip in base {}", radix);
    }
}

#[test]
fn test_round_trip_truncates_to_precision() {
    let converter = Converter::new();

    // 0.0101 in binary is 0.3125; four decimal places keep it whole, two truncate it.
    assert_eq!(converter.convert("0.0101", 2, 10, 4).as_deref(), Ok("0.3125"));
    assert_eq!(converter.convert("0.0101", 2, 10, 2).as_deref(), Ok("0.31"));
    assert_eq!(converter.convert("0.11111111", 2, 2, 3).as_deref(), Ok("0.111"));
}

#[test]
fn test_documented_examples() {
    let converter = Converter::new();

    assert_eq!(converter.parse("10", 2), Ok(2.0));
    assert_eq!(converter.parse("-3.5", 10), Ok(-3.5));
    assert_eq!(converter.parse(".5", 10), Ok(0.5));
    assert_eq!(converter.format(255.0, 16, DEFAULT_PRECISION).as_deref(), Ok("FF"));

    for radix in 2..=36 {
        assert_eq!(converter.format(0.0, radix, DEFAULT_PRECISION).as_deref(), Ok("0"));
    }
}

#[test]
fn test_documented_failures() {
    let converter = Converter::new();

    assert!(matches!(
        converter.convert("FF", 16, 1, 6),
        Err(ConversionError::InvalidRadix { radix: 1, .. })
    ));
    assert!(matches!(
        converter.parse("2", 2),
        Err(ConversionError::InvalidDigit { digit: '2', .. })
    ));
    assert!(matches!(
        converter.parse("1", 37),
        Err(ConversionError::InvalidRadix { radix: 37, .. })
    ));
}

#[test]
fn test_alphabet_replacement_is_scoped_to_instance() {
    let default = Converter::new();
    let letters = default.clone().with_alphabet("aAbBcC");

    assert_eq!(letters.get_alphabet(), "ABC");
    assert_eq!(default.get_alphabet().len(), 36);

    assert_eq!(letters.convert_default("cab", 3, 3).as_deref(), Ok("CAB"));
    assert_eq!(letters.parse("cab", 3), Ok(19.0));
    assert!(matches!(
        default.parse("cab", 3),
        Err(ConversionError::InvalidDigit { digit: 'c', .. })
    ));
}

#[test]
fn test_cross_radix_conversions() {
    let converter = Converter::new();

    assert_eq!(converter.convert_default("255", 10, 16).as_deref(), Ok("FF"));
    assert_eq!(converter.convert_default("-FF.8", 16, 2).as_deref(), Ok("-11111111.1"));
    assert_eq!(converter.convert_default("777", 8, 10).as_deref(), Ok("511"));
    assert_eq!(converter.convert_default("1,25", 10, 4).as_deref(), Ok("1.1"));
    assert_eq!(converter.convert("0.1", 3, 10, 6).as_deref(), Ok("0.333333"));
}

#[test]
fn test_limits_guard_large_values() {
    let converter = Converter::new();
    let huge = "1".repeat(300);

    let value = converter.parse(&huge, 10).expect("Should parse as a float");
    assert_eq!(
        converter.format(value, 2, DEFAULT_PRECISION),
        Err(ConversionError::Overflow { limit: 250 })
    );

    let relaxed = Converter::new().with_limits(Limits {
        max_int_digits: 1100,
        max_frac_digits: 250,
    });
    assert!(relaxed.format(value, 2, DEFAULT_PRECISION).is_ok());
}

#[test]
fn test_batch_from_file() {
    let temp_dir = create_test_files(&[("numbers.txt", "# binary input\n1010\n-0.1\n\n11111111\n")]);
    let input = temp_dir.path().join("numbers.txt");
    let output = temp_dir.path().join("converted.txt");

    let mut batch = BatchConverter::new(create_test_config(2, 16, Some(input), output.clone()));
    batch.run().expect("Batch should succeed");

    assert_eq!(
        batch.stats(),
        BatchStats {
            total: 3,
            succeeded: 3,
            failed: 0
        }
    );
    let written = fs::read_to_string(output).expect("Output should exist");
    assert_eq!(written, "A\n-0.8\nFF\n");
}

#[test]
fn test_batch_keep_going_reports_failures() {
    let temp_dir = create_test_files(&[("numbers.txt", "12\n1G\n-\n")]);
    let input = temp_dir.path().join("numbers.txt");
    let output = temp_dir.path().join("converted.txt");

    let mut config = create_test_config(16, 10, Some(input), output.clone());
    config.keep_going = true;
    config.verbose = true;

    let mut batch = BatchConverter::new(config);
    batch.run().expect("Keep-going batch should succeed");

    assert_eq!(batch.stats().failed, 2);
    let written = fs::read_to_string(output).expect("Output should exist");
    let lines: Vec<&str> = written.lines().collect();

    assert_eq!(lines[0], "12 -> 18");
    assert_eq!(lines[1], "1G -> error: Invalid digit 'G' at position 1 for base 16");
    assert_eq!(lines[2], "- -> error: Empty input: no digits to convert");
}

#[test]
fn test_batch_aborts_without_keep_going() {
    let temp_dir = create_test_files(&[("numbers.txt", "12\n1G\n")]);
    let input = temp_dir.path().join("numbers.txt");
    let output = temp_dir.path().join("converted.txt");

    let mut batch = BatchConverter::new(create_test_config(16, 10, Some(input), output.clone()));
    let err = batch.run().expect_err("Invalid digit should fail the batch");

    assert!(format!("{:#}", err).contains("Invalid digit 'G'"));
    assert!(!output.exists());
}

#[test]
fn test_batch_rejects_missing_input_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("missing.txt");
    let output = temp_dir.path().join("converted.txt");

    let mut batch = BatchConverter::new(create_test_config(10, 2, Some(input), output));
    assert!(batch.run().is_err());
}

#[test]
fn test_read_number_file_trims_lines() {
    let temp_dir = create_test_files(&[("n.txt", "\t7 \r\n#skip\n 8\n")]);
    let numbers = read_number_file(&temp_dir.path().join("n.txt")).expect("Should read");

    assert_eq!(numbers, vec!["7".to_string(), "8".to_string()]);
}
