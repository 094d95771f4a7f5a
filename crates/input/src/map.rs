//! Key and mouse mapping from terminal events to shell input.
//!
//! The left-hand 4x4 key block mirrors the grid:
//!
//! ```text
//! 1 2 3 4
//! q w e r
//! a s d f
//! z x c v
//! ```

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::types::Position;

const KEY_GRID: [[char; 4]; 4] = [
    ['1', '2', '3', '4'],
    ['q', 'w', 'e', 'r'],
    ['a', 's', 'd', 'f'],
    ['z', 'x', 'c', 'v'],
];

/// Shell-level input, before it is resolved against the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A grid cell chosen from the keyboard.
    Cell(Position),
    /// A left click at terminal coordinates.
    Pointer { column: u16, row: u16 },
    Restart,
    Quit,
}

/// Map any terminal event. Key releases and repeats are dropped.
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(*key),
        Event::Mouse(mouse) => handle_mouse_event(*mouse),
        _ => None,
    }
}

/// Map keyboard input to shell input.
pub fn handle_key_event(key: KeyEvent) -> Option<InputEvent> {
    if should_quit(key) {
        return Some(InputEvent::Quit);
    }
    match key.code {
        KeyCode::Char('n') | KeyCode::Char('N') => Some(InputEvent::Restart),
        KeyCode::Char(ch) => cell_for_key(ch).map(InputEvent::Cell),
        _ => None,
    }
}

/// Only left-button presses count as clicks.
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<InputEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::Pointer {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

/// Grid cell bound to a key (case-insensitive).
pub fn cell_for_key(ch: char) -> Option<Position> {
    let ch = ch.to_ascii_lowercase();
    KEY_GRID.iter().enumerate().find_map(|(row, keys)| {
        keys.iter()
            .position(|&k| k == ch)
            .map(|col| Position::new(row as u8, col as u8))
    })
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_grid_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('1'))),
            Some(InputEvent::Cell(Position::new(0, 0)))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(InputEvent::Cell(Position::new(1, 3)))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('S'))),
            Some(InputEvent::Cell(Position::new(2, 1)))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('v'))),
            Some(InputEvent::Cell(Position::new(3, 3)))
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('p'))), None);
    }

    #[test]
    fn test_every_cell_has_a_key() {
        let mut seen = [false; crate::types::GRID_CELLS];
        for row in KEY_GRID {
            for ch in row {
                seen[cell_for_key(ch).unwrap().index()] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_restart_key() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('n'))),
            Some(InputEvent::Restart)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        // Plain 'c' is a grid key, not quit.
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Esc)),
            Some(InputEvent::Quit)
        );
    }

    #[test]
    fn test_left_click_maps_to_pointer() {
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 12, 5)),
            Some(InputEvent::Pointer { column: 12, row: 5 })
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Right), 12, 5)),
            None
        );
        assert_eq!(handle_mouse_event(mouse(MouseEventKind::Moved, 1, 1)), None);
    }

    #[test]
    fn test_key_release_is_dropped() {
        let mut key = KeyEvent::from(KeyCode::Char('1'));
        key.kind = KeyEventKind::Release;
        assert_eq!(map_event(&Event::Key(key)), None);
    }
}
