//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, headless protocol).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed square grid:
//!
//! - **Size**: 4x4 cells (rows and columns indexed 0-3)
//! - **Cells**: 16 in total; a round never fills every cell
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval for the terminal shell |
//! | `REVEAL_BASE_MS` | 1000 | Base time the numbers stay visible |
//! | `REVEAL_PER_TILE_MS` | 200 | Extra reveal time per tile |
//! | `WIN_PAUSE_MS` | 800 | Pause after a solved round |
//! | `LOSS_PAUSE_MS` | 1200 | Pause after a wrong click |
//!
//! # Examples
//!
//! ```
//! use chimp_test_types::{GameAction, Position, RoundStatus, GRID_CELLS};
//!
//! let pos = Position::new(1, 2);
//! assert_eq!(pos.index(), 6);
//! assert_eq!(Position::from_index(6), Some(pos));
//!
//! assert_eq!(RoundStatus::from_str("won"), Some(RoundStatus::Won));
//! assert_eq!(GameAction::from_str("click:3"), Some(GameAction::Click(3)));
//! assert_eq!(GRID_CELLS, 16);
//! ```

/// Grid side length in cells.
pub const GRID_SIZE: u8 = 4;

/// Total number of cells on the grid.
pub const GRID_CELLS: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Base reveal duration for every round.
pub const REVEAL_BASE_MS: u32 = 1000;

/// Reveal duration added per tile in the round.
pub const REVEAL_PER_TILE_MS: u32 = 200;

/// Pause between a solved round and the next one.
pub const WIN_PAUSE_MS: u32 = 800;

/// Pause between a failed round and the next one.
pub const LOSS_PAUSE_MS: u32 = 1200;

/// Initial (and minimum) tile count.
pub const DEFAULT_FLOOR: u8 = 3;

/// Tile identifier. Identifiers start at 1 and define the click order.
pub type TileId = u8;

/// How long the numbers stay visible for a round with `tiles` tiles.
pub const fn reveal_duration_ms(tiles: u8) -> u32 {
    REVEAL_BASE_MS + (tiles as u32) * REVEAL_PER_TILE_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(REVEAL_BASE_MS, 1000);
        assert_eq!(REVEAL_PER_TILE_MS, 200);
        assert_eq!(WIN_PAUSE_MS, 800);
        assert_eq!(LOSS_PAUSE_MS, 1200);
        assert_eq!(reveal_duration_ms(3), 1600);
        assert_eq!(reveal_duration_ms(10), 3000);
    }

    #[test]
    fn position_index_roundtrip_covers_grid() {
        for i in 0..GRID_CELLS {
            let pos = Position::from_index(i).unwrap();
            assert!(pos.row < GRID_SIZE && pos.col < GRID_SIZE);
            assert_eq!(pos.index(), i);
        }
        assert_eq!(Position::from_index(GRID_CELLS), None);
    }

    #[test]
    fn position_rejects_out_of_grid() {
        assert!(Position::checked(3, 3).is_some());
        assert!(Position::checked(4, 0).is_none());
        assert!(Position::checked(0, 4).is_none());
    }

    #[test]
    fn game_action_parsing() {
        assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
        assert_eq!(GameAction::from_str("Click:12"), Some(GameAction::Click(12)));
        assert_eq!(GameAction::from_str("click:"), None);
        assert_eq!(GameAction::from_str("click:x"), None);
        assert_eq!(GameAction::from_str("jump"), None);
    }
}

/// A cell coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Create a position. Callers are expected to stay inside the grid;
    /// use [`Position::checked`] for untrusted input.
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Create a position, returning `None` outside the grid.
    pub fn checked(row: u8, col: u8) -> Option<Self> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Linear cell index (row-major).
    pub fn index(self) -> usize {
        (self.row as usize) * (GRID_SIZE as usize) + (self.col as usize)
    }

    /// Inverse of [`Position::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= GRID_CELLS {
            return None;
        }
        let size = GRID_SIZE as usize;
        Some(Self {
            row: (index / size) as u8,
            col: (index % size) as u8,
        })
    }
}

/// Status of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl RoundStatus {
    /// Parse status from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use chimp_test_types::RoundStatus;
    ///
    /// assert_eq!(RoundStatus::from_str("Playing"), Some(RoundStatus::Playing));
    /// assert_eq!(RoundStatus::from_str("draw"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "playing" => Some(Self::Playing),
            "won" => Some(Self::Won),
            "lost" => Some(Self::Lost),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }
}

/// Player-facing actions the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Select the tile with this identifier.
    Click(TileId),
    /// Select whatever tile occupies this cell (empty cells are ignored).
    ClickCell(Position),
    /// Start over at the floor level.
    Restart,
}

impl GameAction {
    /// Parse an action from `"restart"` or `"click:<id>"` (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        if lower == "restart" {
            return Some(Self::Restart);
        }
        let id = lower.strip_prefix("click:")?;
        id.parse::<TileId>().ok().map(Self::Click)
    }
}
