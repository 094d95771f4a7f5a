//! Terminal Chimp Test runner (default binary).
//!
//! Uses crossterm for keyboard/mouse input and the framebuffer renderer from
//! `chimp_test::term`. Timers are driven by a fixed-timestep loop.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use tracing::{debug, info};

use chimp_test::core::{ClickOutcome, EngineConfig, RoundEngine, RoundSnapshot};
use chimp_test::input::{map_event, InputEvent};
use chimp_test::logging::{self, Fallback};
use chimp_test::session::AppConfig;
use chimp_test::term::{FrameBuffer, GridView, TerminalRenderer, Viewport};
use chimp_test::types::{GameAction, Position, TICK_MS};

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    logging::init(config.log_path.as_deref(), Fallback::Disabled)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config.engine);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: EngineConfig) -> Result<()> {
    let mut engine = RoundEngine::new(config);
    info!(seed = config.seed, floor = config.floor, "game started");

    let view = GridView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = RoundSnapshot::default();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        engine.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.present(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            let ev = event::read()?;
            if matches!(ev, Event::Resize(..)) {
                term.invalidate();
            }

            match map_event(&ev) {
                Some(InputEvent::Quit) => return Ok(()),
                Some(InputEvent::Restart) => {
                    let before = engine.round().id();
                    engine.apply_action(GameAction::Restart);
                    log_round_change(&engine, before);
                }
                Some(InputEvent::Cell(pos)) => click(&mut engine, pos),
                Some(InputEvent::Pointer { column, row }) => {
                    if let Some(pos) = view.cell_at(viewport, column, row) {
                        click(&mut engine, pos);
                    }
                }
                None => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let before = engine.round().id();
            if let Some(token) = engine.tick(elapsed.as_millis() as u32) {
                debug!(?token, "timer fired");
                log_round_change(&engine, before);
            }
        }
    }
}

fn click(engine: &mut RoundEngine, pos: Position) {
    let outcome = engine.handle_cell_click(pos);
    match outcome {
        ClickOutcome::Won => info!(level = engine.level(), "round won"),
        ClickOutcome::Lost => info!(
            level = engine.level(),
            wrong = ?engine.round().wrong(),
            "round lost"
        ),
        ClickOutcome::Advanced => debug!(progress = engine.round().progress(), "correct tile"),
        ClickOutcome::Ignored => {}
    }
}

fn log_round_change(engine: &RoundEngine, before: u32) {
    if engine.round().id() != before {
        info!(
            round_id = engine.round().id(),
            level = engine.level(),
            displayed_level = engine.displayed_level(),
            "round started"
        );
    }
}
