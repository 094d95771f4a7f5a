//! Round lifecycle tests against the public engine API.

use chimp_test::core::{ClickOutcome, EngineConfig, RoundEngine, TimerKind};
use chimp_test::types::{GameAction, RoundStatus, GRID_CELLS, LOSS_PAUSE_MS, WIN_PAUSE_MS};

fn engine(floor: u8, seed: u32) -> RoundEngine {
    RoundEngine::new(EngineConfig::new(floor, 15, seed).unwrap())
}

fn hide_numbers(engine: &mut RoundEngine) {
    let (token, _) = engine.pending_timer().expect("reveal timer armed");
    assert_eq!(token.kind, TimerKind::Hide);
    assert!(engine.fire(token));
}

#[test]
fn sequence_is_sorted_and_covers_every_tile() {
    for seed in 1..100 {
        let mut engine = engine(3, seed);
        for level in 3..=15 {
            engine.start_round(level);
            let round = engine.round();

            let mut ids: Vec<u8> = round.tiles().iter().map(|t| t.id).collect();
            ids.sort_unstable();
            assert_eq!(round.sequence(), ids.as_slice());
            assert_eq!(round.sequence(), (1..=level).collect::<Vec<u8>>().as_slice());
        }
    }
}

#[test]
fn tile_positions_never_collide() {
    for seed in 1..100 {
        let mut engine = engine(3, seed);
        for level in 3..=15 {
            engine.start_round(level);
            let mut seen = [false; GRID_CELLS];
            for tile in engine.round().tiles() {
                let idx = tile.position.index();
                assert!(!seen[idx], "seed {seed} level {level}: duplicate cell {idx}");
                seen[idx] = true;
            }
        }
    }
}

#[test]
fn worked_example_win_then_loss() {
    let mut engine = engine(3, 2024);
    assert_eq!(engine.level(), 3);
    assert_eq!(engine.round().sequence(), &[1, 2, 3]);

    hide_numbers(&mut engine);
    assert_eq!(engine.handle_click(1), ClickOutcome::Advanced);
    assert_eq!(engine.handle_click(2), ClickOutcome::Advanced);
    assert_eq!(engine.round().status(), RoundStatus::Playing);
    assert_eq!(engine.handle_click(3), ClickOutcome::Won);
    engine.tick(WIN_PAUSE_MS);
    assert_eq!(engine.level(), 4);

    engine.apply_action(GameAction::Restart);
    hide_numbers(&mut engine);
    engine.handle_click(1);
    assert_eq!(engine.handle_click(3), ClickOutcome::Lost);
    assert_eq!(engine.round().status(), RoundStatus::Lost);
    engine.tick(LOSS_PAUSE_MS);
    assert_eq!(engine.level(), 3);
}

#[test]
fn out_of_order_loses_immediately_at_any_progress() {
    for wrong_at in 0..6u8 {
        let mut engine = engine(3, 7);
        engine.start_round(6);
        hide_numbers(&mut engine);

        for id in 1..=wrong_at {
            assert_eq!(engine.handle_click(id), ClickOutcome::Advanced);
        }
        // Skip ahead one tile.
        assert_eq!(engine.handle_click(wrong_at + 2), ClickOutcome::Lost);
        assert_eq!(engine.round().progress(), wrong_at as usize);
    }
}

#[test]
fn clicks_are_noops_when_not_accepting() {
    let mut engine = engine(3, 11);

    // Revealed.
    let before = engine.snapshot();
    assert!(!engine.apply_action(GameAction::Click(1)));
    assert_eq!(engine.snapshot(), before);

    // Resolved.
    hide_numbers(&mut engine);
    engine.handle_click(2);
    let lost = engine.snapshot();
    assert!(!engine.apply_action(GameAction::Click(1)));
    assert!(!engine.apply_action(GameAction::Click(2)));
    assert_eq!(engine.snapshot(), lost);
}

#[test]
fn level_changes_follow_outcomes() {
    let mut engine = engine(3, 5);
    let mut expected = 3u8;

    // win, win, lose, win, lose, lose, lose
    for win in [true, true, false, true, false, false, false] {
        assert_eq!(engine.level(), expected);
        hide_numbers(&mut engine);
        if win {
            for id in 1..=engine.level() {
                engine.handle_click(id);
            }
            expected += 1;
        } else {
            engine.handle_click(engine.level());
            expected = (expected - 1).max(3);
        }
        let (token, _) = engine.pending_timer().unwrap();
        assert!(engine.fire(token));
    }
    assert_eq!(engine.level(), expected);
    assert_eq!(engine.displayed_level(), 1);
}

#[test]
fn superseded_timers_do_not_touch_new_round() {
    let mut engine = engine(3, 9);
    hide_numbers(&mut engine);
    engine.handle_click(3);
    let (advance, _) = engine.pending_timer().unwrap();

    // Player restarts before the transition fires.
    engine.apply_action(GameAction::Restart);
    let round_id = engine.round().id();
    assert!(!engine.fire(advance));
    assert_eq!(engine.round().id(), round_id);
    assert!(engine.round().revealed());
}

#[test]
fn tick_drives_full_round_trip() {
    let mut engine = engine(4, 31);
    let mut elapsed = 0u32;
    while engine.round().revealed() {
        engine.tick(16);
        elapsed += 16;
    }
    // 1000 + 4 * 200, rounded up to the next 16ms tick.
    assert_eq!(elapsed, 1808);

    for id in 1..=4 {
        engine.handle_click(id);
    }
    let round_id = engine.round().id();
    for _ in 0..(WIN_PAUSE_MS / 16) {
        engine.tick(16);
    }
    assert_eq!(engine.round().id(), round_id + 1);
    assert_eq!(engine.level(), 5);
}
