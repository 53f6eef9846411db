//! radix-convert - Convert numbers between positional numeral systems
//!
//! Converts numbers given as arguments or read from a file from one radix
//! into another, printing one result per line.

use radix_convert::{batch::BatchConverter, config::Config, error::Result};
use tracing::{error, info, warn};

fn main() -> Result<()> {
    // Parse configuration and initialize logging
    let config = Config::from_args().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    let mut batch = BatchConverter::new(config);

    match batch.run() {
        Ok(()) => {
            let stats = batch.stats();
            info!(
                "Converted {} numbers ({} failed)",
                stats.total, stats.failed
            );

            if stats.failed > 0 {
                warn!("{} of {} conversions failed", stats.failed, stats.total);
                std::process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            error!("Conversion failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
