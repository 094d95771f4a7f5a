//! Terminal input module (shell-facing).
//!
//! This module is independent of the renderer. It maps `crossterm` key and
//! mouse events into [`InputEvent`]s. Mouse coordinates are passed through
//! untouched; only the view knows where the grid is drawn.

pub mod map;

pub use chimp_test_types as types;

pub use map::{cell_for_key, handle_key_event, handle_mouse_event, map_event, should_quit, InputEvent};
