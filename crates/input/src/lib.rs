//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Key repeat is
//! left to the terminal: every press is one discrete input event.

pub mod map;

pub use bitris_types as types;

pub use map::{handle_key_event, should_quit};
