//! Protocol module - JSON line messages for the headless shell
//!
//! One JSON object per line in each direction. Every message carries a
//! `type` tag.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::core::RoundSnapshot;
use crate::runtime::{SessionCommand, SessionUpdate};
use crate::types::{GameAction, Position, TileId};

// ============== Client -> Game Messages ==============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClientMessage {
    Click { tile: TileId },
    Cell { row: u8, col: u8 },
    Restart,
    Quit,
}

impl ClientMessage {
    pub fn parse_line(line: &str) -> Result<Self> {
        Ok(serde_json::from_str(line.trim())?)
    }

    pub fn into_command(self) -> Result<SessionCommand> {
        let action = match self {
            ClientMessage::Click { tile } => GameAction::Click(tile),
            ClientMessage::Cell { row, col } => {
                let pos = Position::checked(row, col)
                    .ok_or_else(|| anyhow!("cell ({}, {}) is outside the grid", row, col))?;
                GameAction::ClickCell(pos)
            }
            ClientMessage::Restart => GameAction::Restart,
            ClientMessage::Quit => return Ok(SessionCommand::Shutdown),
        };
        Ok(SessionCommand::Action(action))
    }
}

// ============== Game -> Client Messages ==============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObservationType {
    #[serde(rename = "observation")]
    Observation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorType {
    #[serde(rename = "error")]
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    /// Hidden tiles do not expose their identifier.
    pub id: Option<TileId>,
    pub row: u8,
    pub col: u8,
    pub cleared: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationMessage {
    #[serde(rename = "type")]
    pub msg_type: ObservationType,
    pub seq: u64,
    pub round_id: u32,
    pub level: u8,
    pub displayed_level: u32,
    pub revealed: bool,
    pub status: String,
    pub progress: u8,
    pub wrong: Option<TileId>,
    pub tiles: Vec<TileView>,
}

impl ObservationMessage {
    pub fn from_update(update: &SessionUpdate) -> Self {
        Self::from_snapshot(update.seq, &update.snapshot)
    }

    pub fn from_snapshot(seq: u64, snap: &RoundSnapshot) -> Self {
        let tiles = snap
            .tiles
            .iter()
            .map(|t| TileView {
                id: snap.shows_number(t).then_some(t.id),
                row: t.position.row,
                col: t.position.col,
                cleared: t.cleared,
            })
            .collect();

        Self {
            msg_type: ObservationType::Observation,
            seq,
            round_id: snap.round_id,
            level: snap.level,
            displayed_level: snap.displayed_level,
            revealed: snap.revealed,
            status: snap.status.as_str().to_string(),
            progress: snap.progress,
            wrong: snap.wrong,
            tiles,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    #[serde(rename = "type")]
    pub msg_type: ErrorType,
    pub message: String,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            msg_type: ErrorType::Error,
            message: message.into(),
        }
    }
}
