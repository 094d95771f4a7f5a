//! Round engine - owns the current round and drives level progression
//!
//! The engine is driven by two kinds of events: clicks and timer expiry.
//! Timers can be driven either with a fixed timestep ([`RoundEngine::tick`])
//! or by an external scheduler that reads [`RoundEngine::pending_timer`] and
//! calls back into [`RoundEngine::fire`] with the token it was given.

use crate::config::EngineConfig;
use crate::rng::SimpleRng;
use crate::round::{ClickOutcome, Round};
use crate::snapshot::{RoundSnapshot, TileSnapshot};
use crate::timer::{TimerKind, TimerToken};
use crate::types::*;

#[derive(Debug, Clone)]
pub struct RoundEngine {
    config: EngineConfig,
    rng: SimpleRng,
    round: Round,
    /// Monotonic round id (increments on every new round).
    next_round_id: u32,
}

impl RoundEngine {
    /// Create an engine and start the first round at the floor.
    ///
    /// The config is assumed to be validated (see [`EngineConfig::new`]);
    /// out-of-range values are clamped when a round starts.
    pub fn new(config: EngineConfig) -> Self {
        let mut rng = SimpleRng::new(config.seed);
        let level = config.clamp_level(config.floor).max(1);
        let round = Round::generate(1, level, &mut rng);
        Self {
            config,
            rng,
            round,
            next_round_id: 2,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn level(&self) -> u8 {
        self.round.level()
    }

    pub fn floor(&self) -> u8 {
        self.config.floor
    }

    /// Level as shown to the player, starting at 1.
    pub fn displayed_level(&self) -> u32 {
        (self.level() as u32).saturating_sub(self.config.floor as u32) + 1
    }

    /// Replace the current round with a fresh one.
    ///
    /// Any timer armed by the previous round is cancelled with it.
    pub fn start_round(&mut self, level: u8) {
        let level = self.config.clamp_level(level).max(1);
        let id = self.next_round_id;
        self.next_round_id = self.next_round_id.wrapping_add(1);
        self.round = Round::generate(id, level, &mut self.rng);
    }

    /// Validate a click on the tile with `id`.
    pub fn handle_click(&mut self, id: TileId) -> ClickOutcome {
        let outcome = self.round.select(id);
        match outcome {
            ClickOutcome::Won => {
                let next_level = self.level().saturating_add(1);
                self.arm_advance(next_level, WIN_PAUSE_MS);
            }
            ClickOutcome::Lost => {
                let next_level = self.level().saturating_sub(1).max(self.config.floor);
                self.arm_advance(next_level, LOSS_PAUSE_MS);
            }
            ClickOutcome::Advanced | ClickOutcome::Ignored => {}
        }
        outcome
    }

    /// Click whatever tile is at `position`. Empty cells are ignored.
    pub fn handle_cell_click(&mut self, position: Position) -> ClickOutcome {
        match self.round.tile_at(position) {
            Some(tile) => self.handle_click(tile.id),
            None => ClickOutcome::Ignored,
        }
    }

    /// Apply a game action. Returns true if the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Click(id) => self.handle_click(id) != ClickOutcome::Ignored,
            GameAction::ClickCell(position) => {
                self.handle_cell_click(position) != ClickOutcome::Ignored
            }
            GameAction::Restart => {
                self.start_round(self.config.floor);
                true
            }
        }
    }

    /// Fixed-timestep clock: count the armed timer down and fire it on expiry.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<TimerToken> {
        let token = self.round.timer_mut().advance(elapsed_ms)?;
        self.on_timer(token.kind);
        Some(token)
    }

    /// External clock: fire the timer identified by `token`.
    ///
    /// Returns false when the token is stale (its round was replaced or the
    /// timer was re-armed since it was handed out).
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if token.round_id != self.round.id() || !self.round.timer_mut().take_if(token) {
            return false;
        }
        self.on_timer(token.kind);
        true
    }

    /// The armed timer and its remaining delay, if any.
    pub fn pending_timer(&self) -> Option<(TimerToken, u32)> {
        let timer = self.round.timer();
        Some((timer.token()?, timer.remaining_ms()?))
    }

    fn on_timer(&mut self, kind: TimerKind) {
        match kind {
            TimerKind::Hide => self.round.hide(),
            TimerKind::Advance { next_level } => self.start_round(next_level),
        }
    }

    fn arm_advance(&mut self, next_level: u8, delay_ms: u32) {
        let token = TimerToken {
            round_id: self.round.id(),
            kind: TimerKind::Advance { next_level },
        };
        self.round.timer_mut().arm(token, delay_ms);
    }

    pub fn snapshot_into(&self, out: &mut RoundSnapshot) {
        let round = &self.round;

        out.round_id = round.id();
        out.level = round.level();
        out.floor = self.config.floor;
        out.displayed_level = self.displayed_level();
        out.revealed = round.revealed();
        out.status = round.status();
        out.progress = round.progress() as u8;
        out.wrong = round.wrong();
        out.timer_ms = round.timer().remaining_ms();

        out.tiles.clear();
        out.tiles.extend(round.tiles().iter().map(|t| TileSnapshot {
            id: t.id,
            position: t.position,
            cleared: round.is_cleared(t.id),
        }));
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        let mut s = RoundSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for RoundEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
