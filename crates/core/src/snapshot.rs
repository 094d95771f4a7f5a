use arrayvec::ArrayVec;

use crate::types::{Position, RoundStatus, TileId, GRID_CELLS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSnapshot {
    pub id: TileId,
    pub position: Position,
    /// Already selected correctly this round.
    pub cleared: bool,
}

/// Read-only view of the engine for presentation shells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoundSnapshot {
    pub round_id: u32,
    pub level: u8,
    pub floor: u8,
    pub displayed_level: u32,
    pub tiles: ArrayVec<TileSnapshot, GRID_CELLS>,
    pub revealed: bool,
    pub status: RoundStatus,
    pub progress: u8,
    pub wrong: Option<TileId>,
    pub timer_ms: Option<u32>,
}

impl RoundSnapshot {
    pub fn tile_at(&self, position: Position) -> Option<&TileSnapshot> {
        self.tiles.iter().find(|t| t.position == position)
    }

    /// Whether the shell should draw the tile's number.
    ///
    /// Numbers are shown during the reveal, for tiles already cleared, and
    /// for every tile once the round is lost.
    pub fn shows_number(&self, tile: &TileSnapshot) -> bool {
        self.revealed || tile.cleared || self.status == RoundStatus::Lost
    }
}

impl Default for RoundSnapshot {
    fn default() -> Self {
        Self {
            round_id: 0,
            level: 0,
            floor: 0,
            displayed_level: 0,
            tiles: ArrayVec::new(),
            revealed: false,
            status: RoundStatus::Playing,
            progress: 0,
            wrong: None,
            timer_ms: None,
        }
    }
}
