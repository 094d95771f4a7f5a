//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the round engine: tile layout, the click sequence,
//! the reveal and transition timers, and level progression.
//! It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical layouts
//! - **Testable**: Every transition is a plain method call, no UI harness needed
//! - **Portable**: Can be driven by a fixed-timestep loop or an async scheduler
//!
//! # Module Structure
//!
//! - [`config`]: Floor / maximum tile count, validated up front
//! - [`engine`]: The round engine (clicks, timers, level changes)
//! - [`layout`]: Distinct random tile positions
//! - [`rng`]: Seedable LCG
//! - [`round`]: One round's tiles, sequence and progress
//! - [`snapshot`]: Read-only view for presentation shells
//! - [`timer`]: Cancelable one-shot round timer
//!
//! # Game Rules
//!
//! - A round shows `level` numbered tiles for `1000 + 200 * level` ms.
//! - Once hidden, tiles must be selected in ascending order.
//! - Clearing every tile advances one level after 800ms.
//! - Any wrong click ends the round; after 1200ms the next round has one
//!   tile fewer, never going below the floor.
//!
//! # Example
//!
//! ```
//! use chimp_test_core::{ClickOutcome, EngineConfig, RoundEngine};
//!
//! let mut engine = RoundEngine::new(EngineConfig::default());
//! assert_eq!(engine.level(), 3);
//!
//! // Numbers are visible; clicks are ignored until the reveal ends.
//! assert_eq!(engine.handle_click(1), ClickOutcome::Ignored);
//! engine.tick(1600);
//!
//! assert_eq!(engine.handle_click(1), ClickOutcome::Advanced);
//! assert_eq!(engine.handle_click(2), ClickOutcome::Advanced);
//! assert_eq!(engine.handle_click(3), ClickOutcome::Won);
//!
//! engine.tick(800);
//! assert_eq!(engine.level(), 4);
//! ```

pub mod config;
pub mod engine;
pub mod layout;
pub mod rng;
pub mod round;
pub mod snapshot;
pub mod timer;

pub use chimp_test_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, EngineConfig, DEFAULT_MAX_TILES};
pub use engine::RoundEngine;
pub use layout::generate_positions;
pub use rng::SimpleRng;
pub use round::{ClickOutcome, Round, Tile};
pub use snapshot::{RoundSnapshot, TileSnapshot};
pub use timer::{RoundTimer, TimerKind, TimerToken};
