//! Game session - the field, the falling piece and the game-over flag
//!
//! A session is the only owner of game state. The driver feeds it input events
//! and ticks and reads [`RenderState`] snapshots back; nothing else holds a
//! reference to the field or the piece.

use crate::field::Field;
use crate::piece::{ActivePiece, Descent};
use crate::rng::PieceSource;
use crate::snapshot::RenderState;
use crate::types::{Dimensions, FusionEvent, GameAction};

#[derive(Debug, Clone)]
pub struct GameSession {
    field: Field,
    active: ActivePiece,
    pieces: PieceSource,
    game_over: bool,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    pieces_spawned: u32,
    lines_cleared: u32,
    /// Last fusion (consumed by observers).
    last_event: Option<FusionEvent>,
}

impl GameSession {
    /// Start a game on an empty board with the given RNG seed
    pub fn new(dims: Dimensions, seed: u32) -> Self {
        let mut pieces = PieceSource::new(seed);
        let active = pieces.spawn(dims);
        Self {
            field: Field::new(dims),
            active,
            pieces,
            game_over: false,
            episode_id: 0,
            pieces_spawned: 1,
            lines_cleared: 0,
            last_event: None,
        }
    }

    /// Empty the board (possibly resized), spawn a fresh piece, clear game over.
    ///
    /// The piece source keeps its state, so a new episode does not replay the old one.
    pub fn reset(&mut self, dims: Dimensions) {
        self.field = Field::new(dims);
        self.active = self.pieces.spawn(dims);
        self.game_over = false;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.pieces_spawned = 1;
        self.lines_cleared = 0;
        self.last_event = None;
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn dimensions(&self) -> Dimensions {
        self.field.dimensions()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Apply one input event; returns whether anything changed.
    ///
    /// Everything except [`GameAction::Restart`] is ignored after game over.
    pub fn handle_input(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Restart => {
                let dims = self.dimensions();
                self.reset(dims);
                true
            }
            _ if self.game_over => false,
            GameAction::MoveLeft => self.active.move_left(&self.field),
            GameAction::MoveRight => self.active.move_right(&self.field),
            GameAction::RotateCw => {
                self.active.rotate();
                true
            }
            GameAction::SoftDrop => {
                self.descend();
                true
            }
        }
    }

    /// Periodic gravity; identical to a soft drop
    pub fn tick(&mut self) -> bool {
        self.handle_input(GameAction::SoftDrop)
    }

    fn descend(&mut self) {
        match self.active.down(&mut self.field, &mut self.pieces) {
            Descent::Fell => {}
            Descent::Fused { next, event } => {
                self.active = next;
                self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
                self.lines_cleared = self.lines_cleared.wrapping_add(event.lines_cleared);
                if event.topped_out {
                    self.game_over = true;
                }
                self.last_event = Some(event);
            }
        }
    }

    /// Take and clear the last fusion event.
    pub fn take_last_event(&mut self) -> Option<FusionEvent> {
        self.last_event.take()
    }

    pub fn render_state_into(&self, out: &mut RenderState) {
        out.dimensions = self.dimensions();
        out.field.clear();
        out.field.extend(self.field.rows().iter().copied());
        out.active.clear();
        out.active.extend(self.active.occupancy().rows().iter().copied());
        out.active_kind = Some(self.active.kind());
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
        out.pieces_spawned = self.pieces_spawned;
        out.lines_cleared = self.lines_cleared;
    }

    pub fn render_state(&self) -> RenderState {
        let mut s = RenderState::default();
        self.render_state_into(&mut s);
        s
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Dimensions::default(), 1)
    }
}
