//! Progress tracking and display using indicatif
//!
//! Batch conversions report progress on stderr so results on stdout stay clean.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;
use tracing::info;

/// Progress tracker for batch conversions
pub struct ProgressTracker {
    enabled: bool,
}

impl ProgressTracker {
    /// Create a new progress tracker
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Start tracking the conversion of `total` numbers
    pub fn start_conversion(&self, total: usize) -> ConversionProgress {
        if !self.enabled || total == 0 {
            return ConversionProgress { bar: None };
        }

        let pb = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stderr());
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▉▊▋▌▍▎▏ "),
        );
        pb.enable_steady_tick(Duration::from_millis(100));

        info!("Started progress tracking for {} numbers", total);
        ConversionProgress { bar: Some(pb) }
    }
}

/// Progress of a single batch; a no-op when progress is disabled
pub struct ConversionProgress {
    bar: Option<ProgressBar>,
}

impl ConversionProgress {
    pub fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    pub fn position(&self) -> u64 {
        self.bar.as_ref().map_or(0, |pb| pb.position())
    }

    /// Count one converted number and show it as the current message
    pub fn advance(&self, input: &str) {
        if let Some(pb) = &self.bar {
            pb.set_message(input.to_string());
            pb.inc(1);
        }
    }

    /// Finish with a summary of how many numbers were converted
    pub fn finish(self, converted: usize) {
        if let Some(pb) = self.bar {
            pb.finish_with_message(format!("{} numbers converted", converted));
        }
    }

    /// Stop at the number that failed
    pub fn abandon(self, input: &str, reason: &str) {
        if let Some(pb) = self.bar {
            pb.abandon_with_message(format!("❌ {}: {}", input, reason));
        }
    }
}
