//! A single round: the tile layout, the click sequence and the player's
//! progress through it.

use arrayvec::ArrayVec;

use crate::layout::generate_positions;
use crate::rng::SimpleRng;
use crate::timer::{RoundTimer, TimerKind, TimerToken};
use crate::types::{reveal_duration_ms, Position, RoundStatus, TileId, GRID_CELLS};

/// A numbered tile on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub id: TileId,
    pub position: Position,
}

/// Result of a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Click arrived while numbers were visible or the round was resolved.
    Ignored,
    /// Correct tile; more remain.
    Advanced,
    /// Correct tile and it was the last one.
    Won,
    /// Wrong tile.
    Lost,
}

#[derive(Debug, Clone)]
pub struct Round {
    id: u32,
    level: u8,
    tiles: ArrayVec<Tile, GRID_CELLS>,
    sequence: ArrayVec<TileId, GRID_CELLS>,
    progress: usize,
    revealed: bool,
    status: RoundStatus,
    wrong: Option<TileId>,
    timer: RoundTimer,
}

impl Round {
    /// Lay out `level` tiles and arm the hide timer.
    pub fn generate(id: u32, level: u8, rng: &mut SimpleRng) -> Self {
        let tiles: ArrayVec<Tile, GRID_CELLS> = generate_positions(rng, level as usize)
            .into_iter()
            .zip(1..)
            .map(|(position, id)| Tile { id, position })
            .collect();

        let mut sequence: ArrayVec<TileId, GRID_CELLS> = tiles.iter().map(|t| t.id).collect();
        sequence.sort_unstable();

        let mut timer = RoundTimer::new();
        timer.arm(
            TimerToken {
                round_id: id,
                kind: TimerKind::Hide,
            },
            reveal_duration_ms(tiles.len() as u8),
        );

        Self {
            id,
            level: tiles.len() as u8,
            tiles,
            sequence,
            progress: 0,
            revealed: true,
            status: RoundStatus::Playing,
            wrong: None,
            timer,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn sequence(&self) -> &[TileId] {
        &self.sequence
    }

    pub fn progress(&self) -> usize {
        self.progress
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn wrong(&self) -> Option<TileId> {
        self.wrong
    }

    pub fn timer(&self) -> &RoundTimer {
        &self.timer
    }

    pub(crate) fn timer_mut(&mut self) -> &mut RoundTimer {
        &mut self.timer
    }

    /// The identifier the player must click next.
    pub fn expected(&self) -> Option<TileId> {
        self.sequence.get(self.progress).copied()
    }

    pub fn tile_at(&self, position: Position) -> Option<Tile> {
        self.tiles.iter().copied().find(|t| t.position == position)
    }

    /// Tile was already selected correctly this round.
    pub fn is_cleared(&self, id: TileId) -> bool {
        self.sequence[..self.progress].contains(&id)
    }

    pub fn accepts_clicks(&self) -> bool {
        !self.revealed && self.status == RoundStatus::Playing
    }

    pub(crate) fn hide(&mut self) {
        self.revealed = false;
    }

    /// Validate a click against the sequence. Does not touch the timer.
    pub(crate) fn select(&mut self, id: TileId) -> ClickOutcome {
        if !self.accepts_clicks() {
            return ClickOutcome::Ignored;
        }

        if self.expected() != Some(id) {
            self.status = RoundStatus::Lost;
            self.wrong = Some(id);
            return ClickOutcome::Lost;
        }

        self.progress += 1;
        if self.progress == self.sequence.len() {
            self.status = RoundStatus::Won;
            ClickOutcome::Won
        } else {
            ClickOutcome::Advanced
        }
    }
}
