//! Core game logic - bitmask field and falling-piece state machine
//!
//! This crate contains the game rules and state. It has **zero dependencies** on
//! UI, timers or I/O: a driver feeds it discrete input events and ticks and reads
//! back snapshots to draw.
//!
//! # Module Structure
//!
//! - [`field`]: settled rows, collision queries, fusion with line clear and compaction
//! - [`mask`]: board-sized occupancy masks (always the right height and width)
//! - [`pieces`]: the seven-shape catalog and bounding-box rotation
//! - [`piece`]: the active piece with checked moves, descent and unchecked rotation
//! - [`rng`]: seeded uniform piece selection
//! - [`session`]: one game: field, active piece and game-over flag
//! - [`snapshot`]: render snapshots handed to front-ends
//!
//! # Rules
//!
//! - Moving left/right is rejected at a wall or against settled cells
//! - Descending is rejected at the floor or against settled cells; a rejected
//!   descent fuses the piece and spawns the next one
//! - Full rows vanish and the remaining rows sink, keeping their order
//! - A piece that fuses without ever leaving the top row ends the game
//! - Rotation has no wall kicks and no collision check
//!
//! # Example
//!
//! ```
//! use bitris_core::GameSession;
//! use bitris_types::{Dimensions, GameAction};
//!
//! let mut game = GameSession::new(Dimensions::default(), 12345);
//!
//! game.handle_input(GameAction::MoveLeft);
//! game.handle_input(GameAction::RotateCw);
//! game.tick();
//!
//! let frame = game.render_state();
//! assert_eq!(frame.field.len(), 20);
//! assert!(!frame.game_over);
//! ```

pub mod field;
pub mod mask;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use bitris_types as types;

// Re-export commonly used types for convenience
pub use field::{Field, Fusion};
pub use mask::Occupancy;
pub use piece::{ActivePiece, Descent};
pub use pieces::PieceShape;
pub use rng::{PieceSource, SimpleRng};
pub use session::GameSession;
pub use snapshot::RenderState;
