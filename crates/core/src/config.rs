//! Engine configuration.
//!
//! Tile counts are validated up front: a round that asks for as many tiles as
//! there are cells is rejected here, so layout generation never has to
//! handle it at runtime.

use std::fmt;

use crate::types::{DEFAULT_FLOOR, GRID_CELLS};

/// Largest tile count a round may use by default.
pub const DEFAULT_MAX_TILES: u8 = (GRID_CELLS - 1) as u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Initial and minimum tile count.
    pub floor: u8,
    /// Upper bound for the tile count; must stay below the cell count.
    pub max_tiles: u8,
    /// Seed for the layout RNG.
    pub seed: u32,
}

impl EngineConfig {
    pub fn new(floor: u8, max_tiles: u8, seed: u32) -> Result<Self, ConfigError> {
        let config = Self {
            floor,
            max_tiles,
            seed,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.floor == 0 {
            return Err(ConfigError::FloorTooLow);
        }
        if self.max_tiles as usize >= GRID_CELLS {
            return Err(ConfigError::MaxTilesTooHigh {
                max_tiles: self.max_tiles,
                cells: GRID_CELLS,
            });
        }
        if self.floor > self.max_tiles {
            return Err(ConfigError::FloorAboveMax {
                floor: self.floor,
                max_tiles: self.max_tiles,
            });
        }
        Ok(())
    }

    /// Clamp a requested level into `[floor, max_tiles]`.
    ///
    /// Never panics, even for an unvalidated config: the upper bound wins.
    pub fn clamp_level(&self, level: u8) -> u8 {
        level
            .max(self.floor)
            .min(self.max_tiles)
            .min((GRID_CELLS - 1) as u8)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            floor: DEFAULT_FLOOR,
            max_tiles: DEFAULT_MAX_TILES,
            seed: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    FloorTooLow,
    MaxTilesTooHigh { max_tiles: u8, cells: usize },
    FloorAboveMax { floor: u8, max_tiles: u8 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FloorTooLow => write!(f, "floor must be at least 1 tile"),
            ConfigError::MaxTilesTooHigh { max_tiles, cells } => write!(
                f,
                "max tiles {} must be below the grid cell count {}",
                max_tiles, cells
            ),
            ConfigError::FloorAboveMax { floor, max_tiles } => {
                write!(f, "floor {} exceeds max tiles {}", floor, max_tiles)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.floor, 3);
        assert_eq!(config.max_tiles, 15);
    }

    #[test]
    fn rejects_zero_floor() {
        assert_eq!(EngineConfig::new(0, 10, 1), Err(ConfigError::FloorTooLow));
    }

    #[test]
    fn rejects_full_grid() {
        let err = EngineConfig::new(3, GRID_CELLS as u8, 1).unwrap_err();
        assert!(matches!(err, ConfigError::MaxTilesTooHigh { .. }));
        assert!(err.to_string().contains("below the grid cell count"));
    }

    #[test]
    fn rejects_floor_above_max() {
        let err = EngineConfig::new(9, 8, 1).unwrap_err();
        assert_eq!(
            err,
            ConfigError::FloorAboveMax {
                floor: 9,
                max_tiles: 8
            }
        );
    }

    #[test]
    fn clamp_level_respects_bounds() {
        let config = EngineConfig::new(3, 10, 1).unwrap();
        assert_eq!(config.clamp_level(1), 3);
        assert_eq!(config.clamp_level(7), 7);
        assert_eq!(config.clamp_level(40), 10);
    }
}
