//! Occupancy masks - board-sized bit rows covered by a piece
//!
//! A mask always has exactly one row per board row and never sets a bit outside
//! the board's columns. Both properties are established at construction, and the
//! mask remembers the board size it was built for so a field can refuse masks
//! from another board.

use arrayvec::ArrayVec;

use crate::pieces::PieceShape;
use crate::types::{Dimensions, Row, MAX_ROWS};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Occupancy {
    dims: Dimensions,
    rows: ArrayVec<Row, MAX_ROWS>,
}

impl Occupancy {
    /// All-zero mask for a board of the given size
    pub fn empty(dims: Dimensions) -> Self {
        let mut rows = ArrayVec::new();
        for _ in 0..dims.rows() {
            rows.push(0);
        }
        Self { dims, rows }
    }

    /// Mask from explicit rows.
    ///
    /// Returns `None` unless there is one row per board row and no row sets a bit
    /// beyond the board's columns.
    pub fn from_rows(dims: Dimensions, rows: &[Row]) -> Option<Self> {
        if rows.len() != dims.rows() as usize {
            return None;
        }
        let full = dims.full_row();
        if rows.iter().any(|&r| r & !full != 0) {
            return None;
        }
        Some(Self {
            dims,
            rows: rows.iter().copied().collect(),
        })
    }

    /// Place `shape` with its top row at board row `y`, shifted left by `columns - x`.
    ///
    /// A negative shift moves the shape right instead. Cells that land outside
    /// the board (past a wall or below the floor) are dropped.
    pub fn place(shape: &PieceShape, x: i16, y: i16, dims: Dimensions) -> Self {
        let mut mask = Self::empty(dims);
        let full = dims.full_row();
        let shift = dims.columns() as i16 - x;

        for (i, &bits) in shape.rows().iter().enumerate() {
            let r = y + i as i16;
            if r < 0 || r >= dims.rows() as i16 {
                continue;
            }
            let placed = if shift >= 0 {
                bits.checked_shl(shift as u32).unwrap_or(0)
            } else {
                bits.checked_shr(shift.unsigned_abs() as u32).unwrap_or(0)
            };
            mask.rows[r as usize] = placed & full;
        }

        mask
    }

    /// Board size this mask was built for
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, y: usize) -> Row {
        self.rows.get(y).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|&r| r == 0)
    }

    pub fn cell_count(&self) -> u32 {
        self.rows.iter().map(|r| r.count_ones()).sum()
    }

    /// Some row covers the leftmost column
    pub fn touches_left_wall(&self) -> bool {
        let wall = self.dims.left_wall();
        self.rows.iter().any(|&r| r & wall != 0)
    }

    /// Some row covers the rightmost column
    pub fn touches_right_wall(&self) -> bool {
        self.rows.iter().any(|&r| r & 1 != 0)
    }

    /// The bottom row is covered
    pub fn touches_floor(&self) -> bool {
        self.rows.last().is_some_and(|&r| r != 0)
    }

    /// Every row shifted one column toward the left wall
    pub fn shifted_left(&self) -> Self {
        let full = self.dims.full_row();
        Self {
            dims: self.dims,
            rows: self.rows.iter().map(|&r| (r << 1) & full).collect(),
        }
    }

    /// Every row shifted one column toward the right wall
    pub fn shifted_right(&self) -> Self {
        Self {
            dims: self.dims,
            rows: self.rows.iter().map(|&r| r >> 1).collect(),
        }
    }

    /// Rows moved down by one: a zero row enters at the top, the bottom row is dropped
    pub fn shifted_down(&self) -> Self {
        let mut rows = ArrayVec::new();
        if !self.rows.is_empty() {
            rows.push(0);
            rows.extend(self.rows[..self.rows.len() - 1].iter().copied());
        }
        Self {
            dims: self.dims,
            rows,
        }
    }
}
