//! Environment configuration.
//!
//! - `CHIMP_FLOOR`: initial / minimum tile count (default 3)
//! - `CHIMP_MAX_TILES`: largest tile count (default 15, must stay below 16)
//! - `CHIMP_SEED`: layout seed (default: derived from the system clock)
//! - `CHIMP_LOG_PATH`: log file for `tracing` output (optional)

use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::{ConfigError, EngineConfig, DEFAULT_MAX_TILES};
use crate::types::DEFAULT_FLOOR;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub log_path: Option<String>,
}

impl AppConfig {
    /// Create from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`], reading values through `lookup`.
    ///
    /// Unparsable numbers fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let floor = lookup("CHIMP_FLOOR")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_FLOOR);

        let max_tiles = lookup("CHIMP_MAX_TILES")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_MAX_TILES);

        let seed = lookup("CHIMP_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = lookup("CHIMP_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Ok(Self {
            engine: EngineConfig::new(floor, max_tiles, seed)?,
            log_path,
        })
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}
