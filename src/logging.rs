//! `tracing` subscriber setup shared by both binaries.
//!
//! Level comes from `RUST_LOG` (default `info`). The terminal binary owns
//! stdout and stderr while the alternate screen is up, so it only logs when a
//! file is configured.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Where log output goes when no file is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    Stderr,
    Disabled,
}

pub fn init(log_path: Option<&str>, fallback: Fallback) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match (log_path, fallback) {
        (Some(path), _) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open log file {path}"))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow::anyhow!("init tracing: {e}"))?;
        }
        (None, Fallback::Stderr) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow::anyhow!("init tracing: {e}"))?;
        }
        (None, Fallback::Disabled) => {}
    }
    Ok(())
}
