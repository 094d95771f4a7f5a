//! Session runtime: an async clock for the round engine.
//!
//! One tokio task owns the engine. Commands arrive over a bounded channel;
//! the engine's pending timer is turned into a `sleep_until`. The deadline is
//! tracked per timer token, so a click that leaves the timer alone does not
//! push it back, and a new round (new token) supersedes the old sleep.
//!
//! Every state change is numbered and queued as a [`SessionUpdate`]. The
//! `watch` channel only tracks the latest snapshot.

use anyhow::{anyhow, Result};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Duration, Instant};
use tracing::{debug, info};

use crate::core::{EngineConfig, RoundEngine, RoundSnapshot, TimerToken};
use crate::types::GameAction;

/// Commands accepted by a running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Action(GameAction),
    Shutdown,
}

/// Bounded so a flooding client cannot grow memory without limit.
pub const COMMAND_QUEUE_CAPACITY: usize = 64;

/// One published state change. `seq` starts at 1 with the initial round and
/// increases by one per change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUpdate {
    pub seq: u64,
    pub snapshot: RoundSnapshot,
}

/// Handle to a running session task.
pub struct SessionHandle {
    cmd_tx: mpsc::Sender<SessionCommand>,
    snapshots: watch::Receiver<RoundSnapshot>,
    task: JoinHandle<RoundSnapshot>,
}

impl SessionHandle {
    /// Start a session on the current tokio runtime.
    pub fn spawn(config: EngineConfig) -> Self {
        Self::spawn_with_updates(config).0
    }

    /// Start a session and return the stream of every state change.
    ///
    /// The first update (seq 1, the initial round) is already queued.
    pub fn spawn_with_updates(
        config: EngineConfig,
    ) -> (Self, mpsc::UnboundedReceiver<SessionUpdate>) {
        let engine = RoundEngine::new(config);
        let (cmd_tx, cmd_rx) = mpsc::channel(COMMAND_QUEUE_CAPACITY);
        let (update_tx, updates) = mpsc::unbounded_channel();
        let publisher = Publisher::new(engine.snapshot(), update_tx);
        let snapshots = publisher.watch_tx.subscribe();
        let task = tokio::spawn(run_session(engine, cmd_rx, publisher));
        let handle = Self {
            cmd_tx,
            snapshots,
            task,
        };
        (handle, updates)
    }

    pub async fn send(&self, cmd: SessionCommand) -> Result<()> {
        self.cmd_tx
            .send(cmd)
            .await
            .map_err(|_| anyhow!("session has stopped"))
    }

    pub async fn act(&self, action: GameAction) -> Result<()> {
        self.send(SessionCommand::Action(action)).await
    }

    /// A fresh receiver; the current snapshot is marked as seen.
    pub fn snapshots(&self) -> watch::Receiver<RoundSnapshot> {
        self.snapshots.clone()
    }

    /// Stop the session and return its last snapshot.
    pub async fn shutdown(self) -> Result<RoundSnapshot> {
        // The task may already be gone; the join below reports the outcome.
        let _ = self.cmd_tx.send(SessionCommand::Shutdown).await;
        Ok(self.task.await?)
    }
}

async fn run_session(
    mut engine: RoundEngine,
    mut cmd_rx: mpsc::Receiver<SessionCommand>,
    mut publisher: Publisher,
) -> RoundSnapshot {
    info!(
        seed = engine.config().seed,
        floor = engine.floor(),
        level = engine.level(),
        "session started"
    );

    let mut armed: Option<(TimerToken, Instant)> = None;

    loop {
        armed = rearm(&engine, armed);
        let deadline = armed.map(|(_, at)| at).unwrap_or_else(Instant::now);

        tokio::select! {
            cmd = cmd_rx.recv() => match cmd {
                Some(SessionCommand::Action(action)) => {
                    let round_before = engine.round().id();
                    let changed = engine.apply_action(action);
                    debug!(?action, changed, status = engine.round().status().as_str(), "action");
                    log_new_round(&engine, round_before);
                }
                Some(SessionCommand::Shutdown) | None => break,
            },
            _ = sleep_until(deadline), if armed.is_some() => {
                if let Some((token, _)) = armed.take() {
                    let round_before = engine.round().id();
                    let fired = engine.fire(token);
                    debug!(?token, fired, "timer");
                    log_new_round(&engine, round_before);
                }
            }
        }

        publisher.publish(&engine);
    }

    info!(level = engine.level(), "session stopped");
    engine.snapshot()
}

/// Keep the existing deadline while the engine still holds the same timer.
fn rearm(
    engine: &RoundEngine,
    armed: Option<(TimerToken, Instant)>,
) -> Option<(TimerToken, Instant)> {
    let (token, remaining_ms) = engine.pending_timer()?;
    match armed {
        Some((current, at)) if current == token => Some((current, at)),
        _ => Some((token, Instant::now() + Duration::from_millis(remaining_ms as u64))),
    }
}

struct Publisher {
    seq: u64,
    last: RoundSnapshot,
    scratch: RoundSnapshot,
    watch_tx: watch::Sender<RoundSnapshot>,
    update_tx: mpsc::UnboundedSender<SessionUpdate>,
}

impl Publisher {
    fn new(initial: RoundSnapshot, update_tx: mpsc::UnboundedSender<SessionUpdate>) -> Self {
        let (watch_tx, _) = watch::channel(initial.clone());
        // Sessions spawned without an update stream have no receiver.
        let _ = update_tx.send(SessionUpdate {
            seq: 1,
            snapshot: initial.clone(),
        });
        Self {
            seq: 1,
            last: initial,
            scratch: RoundSnapshot::default(),
            watch_tx,
            update_tx,
        }
    }

    /// Queue the engine state as a new update if it differs from the last one.
    fn publish(&mut self, engine: &RoundEngine) {
        engine.snapshot_into(&mut self.scratch);
        if self.scratch == self.last {
            return;
        }
        std::mem::swap(&mut self.last, &mut self.scratch);
        self.seq += 1;
        let _ = self.update_tx.send(SessionUpdate {
            seq: self.seq,
            snapshot: self.last.clone(),
        });
        self.watch_tx.send_replace(self.last.clone());
    }
}

fn log_new_round(engine: &RoundEngine, round_before: u32) {
    if engine.round().id() != round_before {
        info!(
            round_id = engine.round().id(),
            level = engine.level(),
            displayed_level = engine.displayed_level(),
            "round started"
        );
    }
}
