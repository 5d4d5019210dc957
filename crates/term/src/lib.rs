//! Terminal "game renderer" module.
//!
//! Draws core render snapshots into a simple framebuffer that is flushed to the
//! terminal with crossterm. No widget toolkit is involved.
//!
//! Goals:
//! - Keep `core` free of any presentation concern
//! - Precise control over aspect ratio (2 chars wide per board cell)
//! - Cheap frames: only the changed span of each row is rewritten

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use bitris_core as core;
pub use bitris_types as types;

pub use fb::{Cell, FrameBuffer, Tone};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
