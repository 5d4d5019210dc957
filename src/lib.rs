//! Bitris (workspace facade crate).
//!
//! Re-exports the engine, input and terminal crates under `bitris::{core,input,term,types}`
//! and hosts the driver pieces shared by the binary and integration tests.

pub use bitris_core as core;
pub use bitris_input as input;
pub use bitris_term as term;
pub use bitris_types as types;

pub mod config;
pub mod driver;
pub mod event_log;
