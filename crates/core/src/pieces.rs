//! Pieces module - shape catalog and bounding-box rotation
//!
//! Each shape is stored as the rows of its own `S×S` bounding square, top row
//! first, with bit `S-1` the leftmost cell of a row and bit 0 the rightmost.
//! Rotation turns the whole square; there are no kick tables.

use crate::types::{PieceKind, Row};

/// Largest bounding-box side in the catalog (the I piece)
pub const MAX_SIDE: usize = 4;

/// Rows of a piece's bounding square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceShape {
    rows: [Row; MAX_SIDE],
    side: u8,
}

impl PieceShape {
    const fn new(rows: [Row; MAX_SIDE], side: u8) -> Self {
        Self { rows, side }
    }

    /// Spawn orientation of a catalog piece
    pub fn of(kind: PieceKind) -> Self {
        match kind {
            PieceKind::O => Self::new([0b11, 0b11, 0, 0], 2),
            PieceKind::T => Self::new([0b111, 0b010, 0b000, 0], 3),
            PieceKind::S => Self::new([0b011, 0b110, 0b000, 0], 3),
            PieceKind::Z => Self::new([0b110, 0b011, 0b000, 0], 3),
            PieceKind::L => Self::new([0b010, 0b010, 0b011, 0], 3),
            PieceKind::J => Self::new([0b010, 0b010, 0b110, 0], 3),
            PieceKind::I => Self::new([0b0000, 0b1111, 0b0000, 0b0000], 4),
        }
    }

    /// Build a shape from explicit rows; `None` unless `1 <= rows.len() <= 4`
    /// and every row fits in `rows.len()` bits.
    pub fn from_rows(rows: &[Row]) -> Option<Self> {
        let side = rows.len();
        if side == 0 || side > MAX_SIDE {
            return None;
        }
        let limit = (1 << side) - 1;
        if rows.iter().any(|&r| r & !limit != 0) {
            return None;
        }
        let mut out = [0; MAX_SIDE];
        out[..side].copy_from_slice(rows);
        Some(Self::new(out, side as u8))
    }

    /// Side length of the bounding square
    pub fn side(&self) -> usize {
        self.side as usize
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows[..self.side()]
    }

    pub fn cell_count(&self) -> u32 {
        self.rows().iter().map(|r| r.count_ones()).sum()
    }

    /// Rotate the bounding square 90° clockwise.
    ///
    /// Row `j` of the result takes bit `i` from bit `S-1-j` of source row `i`.
    /// Empty rows at the top are then cycled to the bottom so the piece stays
    /// anchored to the top of its box.
    pub fn rotated_cw(&self) -> Self {
        let size = self.side();
        let mut out = [0; MAX_SIDE];

        for (i, &row) in self.rows().iter().enumerate() {
            for (j, dst) in out.iter_mut().enumerate().take(size) {
                let bit = (row >> (size - j - 1)) & 1;
                *dst |= bit << i;
            }
        }

        let rows = &mut out[..size];
        for _ in 0..size {
            if rows[0] != 0 {
                break;
            }
            rows.rotate_left(1);
        }

        Self::new(out, self.side)
    }
}
