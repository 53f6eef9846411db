//! Batch conversion pipeline
//!
//! Gathers numbers from the command line and from an input file, converts each
//! of them with a single [`Converter`], and writes one result per line.

use crate::{
    config::Config,
    converter::Converter,
    error::{ConversionResult, Result, ResultExt},
    progress::ProgressTracker,
};
use anyhow::Context;
use std::{
    fs,
    io::{self, Write},
    path::Path,
};
use tracing::{debug, info, warn};

/// Result of converting one input
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutcome {
    pub input: String,
    pub result: ConversionResult<String>,
}

impl ConversionOutcome {
    /// Render the outcome as a single output line
    pub fn render(&self, verbose: bool) -> String {
        match (&self.result, verbose) {
            (Ok(output), false) => output.clone(),
            (Ok(output), true) => format!("{} -> {}", self.input, output),
            (Err(e), false) => format!("error: {}", e),
            (Err(e), true) => format!("{} -> error: {}", self.input, e),
        }
    }
}

/// Runs a configured batch of conversions
pub struct BatchConverter {
    config: Config,
    converter: Converter,
    progress_tracker: ProgressTracker,
    outcomes: Vec<ConversionOutcome>,
}

impl BatchConverter {
    /// Create a new batch converter with the given configuration
    pub fn new(config: Config) -> Self {
        let progress_enabled = !config.no_progress;
        let converter = config.build_converter();

        Self {
            config,
            converter,
            progress_tracker: ProgressTracker::new(progress_enabled),
            outcomes: Vec::new(),
        }
    }

    /// Run the complete batch: validate, gather, convert and write
    pub fn run(&mut self) -> Result<()> {
        let start = std::time::Instant::now();
        info!("Starting batch conversion...");

        self.config
            .validate()
            .context("Configuration validation failed")?;

        let inputs = self.collect_inputs().context("Failed to collect inputs")?;

        self.convert_all(&inputs).context("Failed to convert numbers")?;

        self.write_output().context("Failed to write output")?;

        info!("Batch completed in {} ms", start.elapsed().as_millis());
        Ok(())
    }

    /// Numbers from the command line followed by those in the input file
    fn collect_inputs(&self) -> Result<Vec<String>> {
        let mut inputs = self.config.numbers.clone();

        if let Some(path) = &self.config.input {
            let from_file = read_number_file(path)?;
            info!("Read {} numbers from {}", from_file.len(), path.display());
            inputs.extend(from_file);
        }

        debug!("Inputs: {:?}", inputs);
        Ok(inputs)
    }

    /// Convert every input, stopping at the first failure unless keep-going is set
    fn convert_all(&mut self, inputs: &[String]) -> Result<()> {
        info!(
            "Converting {} numbers from base {} to base {}",
            inputs.len(),
            self.config.from,
            self.config.to
        );

        let progress = self.progress_tracker.start_conversion(inputs.len());

        for input in inputs {
            let result = self.converter.convert(
                input,
                self.config.from,
                self.config.to,
                self.config.precision,
            );

            if let Err(e) = &result {
                if !self.config.keep_going {
                    progress.abandon(input, &e.to_string());
                    return Err(e.clone())
                        .with_conversion_context(self.config.from, self.config.to)
                        .with_input_context(input);
                }
                warn!("Skipping '{}': {}", input, e);
            }

            self.outcomes.push(ConversionOutcome {
                input: input.clone(),
                result,
            });
            progress.advance(input);
        }

        progress.finish(self.outcomes.len());
        Ok(())
    }

    /// Write all rendered outcomes to the output file or stdout
    fn write_output(&self) -> Result<()> {
        let lines: Vec<String> = self
            .outcomes
            .iter()
            .map(|outcome| outcome.render(self.config.verbose))
            .collect();

        match &self.config.output {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)
                        .with_path_context("create output directory", parent)?;
                }

                let content: String = lines.iter().map(|line| format!("{}\n", line)).collect();
                fs::write(path, content).with_path_context("write output", path)?;

                info!("Wrote {} results to {}", lines.len(), path.display());
            }
            None => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                for line in &lines {
                    writeln!(handle, "{}", line).context("Failed to write to stdout")?;
                }
            }
        }

        Ok(())
    }

    pub fn outcomes(&self) -> &[ConversionOutcome] {
        &self.outcomes
    }

    /// Get statistics about the batch
    pub fn stats(&self) -> BatchStats {
        let failed = self.outcomes.iter().filter(|o| o.result.is_err()).count();

        BatchStats {
            total: self.outcomes.len(),
            succeeded: self.outcomes.len() - failed,
            failed,
        }
    }
}

/// Statistics about a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Read numbers from a file, one per line; blank lines and `#` comments are skipped
pub fn read_number_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).with_path_context("read input", path)?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
