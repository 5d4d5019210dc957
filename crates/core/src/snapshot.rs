use arrayvec::ArrayVec;

use crate::types::{Dimensions, PieceKind, Row, MAX_ROWS};

/// Read-only copy of everything a front-end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderState {
    pub dimensions: Dimensions,
    /// Settled rows, top first
    pub field: ArrayVec<Row, MAX_ROWS>,
    /// Active piece occupancy, same layout as `field`
    pub active: ArrayVec<Row, MAX_ROWS>,
    pub active_kind: Option<PieceKind>,
    pub game_over: bool,
    pub episode_id: u32,
    pub pieces_spawned: u32,
    pub lines_cleared: u32,
}

impl RenderState {
    /// Settled cell at (`col`, `row`), `col` 0 being the leftmost column
    pub fn field_cell(&self, col: u8, row: usize) -> bool {
        let bits = self.field.get(row).copied().unwrap_or(0);
        bits & self.dimensions.column_bit(col) != 0
    }

    /// Active piece cell at (`col`, `row`), `col` 0 being the leftmost column
    pub fn active_cell(&self, col: u8, row: usize) -> bool {
        let bits = self.active.get(row).copied().unwrap_or(0);
        bits & self.dimensions.column_bit(col) != 0
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            field: ArrayVec::new(),
            active: ArrayVec::new(),
            active_kind: None,
            game_over: false,
            episode_id: 0,
            pieces_spawned: 0,
            lines_cleared: 0,
        }
    }
}
