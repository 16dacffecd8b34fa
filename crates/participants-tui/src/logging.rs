//! Logging set-up

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }))
}

/// Install the global subscriber.
///
/// Interactive runs own the terminal, so without a log file nothing is
/// installed for them.
pub fn init(verbose: bool, log_file: Option<&Path>, interactive: bool) -> Result<()> {
    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;

        tracing_subscriber::fmt()
            .with_env_filter(env_filter(verbose))
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else if !interactive {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter(verbose))
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}
