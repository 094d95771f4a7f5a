//! Session module - async clock and headless protocol for the round engine
//!
//! The core engine is synchronous and knows nothing about wall-clock time.
//! This crate drives it from a tokio task so shells that are not built around
//! a fixed-timestep loop can use it:
//!
//! 1. **Spawn**: [`SessionHandle::spawn`] creates the engine (first round at the floor)
//! 2. **Act**: clicks and restarts are sent as [`SessionCommand`]s
//! 3. **Observe**: every state change is queued as a numbered [`SessionUpdate`];
//!    the latest snapshot is also kept on a `watch` channel
//! 4. **Timers**: reveal and round-transition delays run on `tokio::time`
//!
//! # Environment Variables
//!
//! See [`config`] (`CHIMP_FLOOR`, `CHIMP_MAX_TILES`, `CHIMP_SEED`, `CHIMP_LOG_PATH`).
//!
//! # Headless Protocol
//!
//! ```text
//! Client -> Game: {"type":"click","tile":1}
//! Client -> Game: {"type":"cell","row":0,"col":2}
//! Game -> Client: {"type":"observation","seq":4,"round_id":1,"level":3,...}
//! Game -> Client: {"type":"error","message":"..."}
//! ```

pub mod config;
pub mod protocol;
pub mod runtime;
pub mod server;

pub use chimp_test_core as core;
pub use chimp_test_types as types;

pub use config::AppConfig;
pub use protocol::{ClientMessage, ErrorMessage, ObservationMessage, TileView};
pub use runtime::{SessionCommand, SessionHandle, SessionUpdate, COMMAND_QUEUE_CAPACITY};
pub use server::serve;
