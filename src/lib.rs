//! Chimp Test (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so binaries, tests and
//! benches can write `chimp_test::{core,input,session,term,types}`.

pub mod logging;

pub use chimp_test_core as core;
pub use chimp_test_input as input;
pub use chimp_test_session as session;
pub use chimp_test_term as term;
pub use chimp_test_types as types;
