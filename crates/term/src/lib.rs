//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders
//! into a simple framebuffer that is then flushed to a terminal backend,
//! without a widget/layout toolkit.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Own the grid geometry in one place so drawing and mouse hit-testing agree

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use chimp_test_core as core;
pub use chimp_test_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GridLayout, GridView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
