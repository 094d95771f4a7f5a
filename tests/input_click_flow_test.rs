//! Terminal events resolved against the drawn grid and fed to the engine.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use chimp_test::core::{ClickOutcome, EngineConfig, RoundEngine};
use chimp_test::input::{map_event, InputEvent};
use chimp_test::term::{GridView, Viewport};
use chimp_test::types::{Position, RoundStatus};

fn key_for(pos: Position) -> char {
    const KEYS: [[char; 4]; 4] = [
        ['1', '2', '3', '4'],
        ['q', 'w', 'e', 'r'],
        ['a', 's', 'd', 'f'],
        ['z', 'x', 'c', 'v'],
    ];
    KEYS[pos.row as usize][pos.col as usize]
}

fn resolve(view: &GridView, vp: Viewport, ev: &Event) -> Option<Position> {
    match map_event(ev)? {
        InputEvent::Cell(pos) => Some(pos),
        InputEvent::Pointer { column, row } => view.cell_at(vp, column, row),
        InputEvent::Restart | InputEvent::Quit => None,
    }
}

#[test]
fn keyboard_round_is_winnable() {
    let mut engine = RoundEngine::new(EngineConfig::default().with_seed(8));
    engine.tick(1600);
    let view = GridView::default();
    let vp = Viewport::new(80, 24);

    let order: Vec<Position> = engine.round().tiles().iter().map(|t| t.position).collect();
    let mut last = ClickOutcome::Ignored;
    for pos in order {
        let ev = Event::Key(KeyEvent::from(KeyCode::Char(key_for(pos))));
        let cell = resolve(&view, vp, &ev).unwrap();
        last = engine.handle_cell_click(cell);
    }
    assert_eq!(last, ClickOutcome::Won);
    assert_eq!(engine.round().status(), RoundStatus::Won);
}

#[test]
fn mouse_click_on_wrong_tile_loses() {
    let mut engine = RoundEngine::new(EngineConfig::default().with_seed(8));
    engine.tick(1600);
    let view = GridView::default();
    let vp = Viewport::new(80, 24);
    let layout = view.layout(vp);

    let second = engine.round().tiles()[1].position;
    let ev = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: layout.frame_x + 1 + (second.col as u16) * 6,
        row: layout.frame_y + 1 + (second.row as u16) * 3,
        modifiers: KeyModifiers::NONE,
    });

    let cell = resolve(&view, vp, &ev).unwrap();
    assert_eq!(cell, second);
    assert_eq!(engine.handle_cell_click(cell), ClickOutcome::Lost);
    assert_eq!(engine.round().wrong(), Some(2));
}

#[test]
fn clicks_outside_grid_resolve_to_nothing() {
    let view = GridView::default();
    let vp = Viewport::new(80, 24);
    let ev = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(resolve(&view, vp, &ev), None);
}
