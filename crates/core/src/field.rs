//! Field module - the settled part of the board
//!
//! The field is a column of bitmask rows, top row first. Fusing a piece ORs its
//! occupancy into the rows, blanks every full row, then compacts: all rows with
//! any set bit keep their order and sink to the bottom, zero rows refill the top.
//! Empty rows below the stack are swept up the same way, which changes nothing
//! because they carry no cells.

use arrayvec::ArrayVec;

use crate::mask::Occupancy;
use crate::piece::ActivePiece;
use crate::rng::PieceSource;
use crate::types::{Dimensions, Row, MAX_ROWS};

/// Result of fusing a piece: the replacement piece and what was cleared.
#[derive(Debug, Clone, PartialEq)]
pub struct Fusion {
    /// Piece that takes over from the one just fused
    pub next: ActivePiece,
    /// Number of full rows removed
    pub lines_cleared: u32,
}

/// Settled cells, one bitmask row per board row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    dims: Dimensions,
    rows: ArrayVec<Row, MAX_ROWS>,
}

impl Field {
    /// Create an empty field
    pub fn new(dims: Dimensions) -> Self {
        let mut rows = ArrayVec::new();
        for _ in 0..dims.rows() {
            rows.push(0);
        }
        Self { dims, rows }
    }

    /// Field with preset rows (top row first).
    ///
    /// Returns `None` unless there is one row per board row, each within the
    /// board's columns.
    pub fn from_rows(dims: Dimensions, rows: &[Row]) -> Option<Self> {
        let mask = Occupancy::from_rows(dims, rows)?;
        Some(Self {
            dims,
            rows: mask.rows().iter().copied().collect(),
        })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, y: usize) -> Row {
        self.rows.get(y).copied().unwrap_or(0)
    }

    /// Cell test in screen order (`col` 0 is the leftmost column)
    pub fn is_occupied(&self, col: u8, y: usize) -> bool {
        self.row(y) & self.dims.column_bit(col) != 0
    }

    pub fn occupied_cells(&self) -> u32 {
        self.rows.iter().map(|r| r.count_ones()).sum()
    }

    /// Rows with at least one settled cell
    pub fn nonempty_rows(&self) -> usize {
        self.rows.iter().filter(|&&r| r != 0).count()
    }

    /// True iff any row shares a set bit with `mask`.
    ///
    /// A mask built for a different board size never fits and always collides.
    pub fn collides(&self, mask: &Occupancy) -> bool {
        if mask.dimensions() != self.dims {
            return true;
        }
        self.rows
            .iter()
            .zip(mask.rows())
            .any(|(&settled, &piece)| settled & piece != 0)
    }

    /// Merge `occupancy` into the field, clear and compact, then spawn the next piece.
    pub fn fuse(&mut self, occupancy: &Occupancy, pieces: &mut PieceSource) -> Fusion {
        let lines_cleared = self.settle(occupancy);
        Fusion {
            next: pieces.spawn(self.dims),
            lines_cleared,
        }
    }

    /// OR the mask in, blank full rows and compact; returns the number of rows blanked.
    ///
    /// A mask built for a different board size is not merged.
    pub fn settle(&mut self, occupancy: &Occupancy) -> u32 {
        if occupancy.dimensions() != self.dims {
            return 0;
        }
        let full = self.dims.full_row();
        let mut cleared = 0;

        for (settled, &piece) in self.rows.iter_mut().zip(occupancy.rows()) {
            *settled |= piece;
            if *settled == full {
                *settled = 0;
                cleared += 1;
            }
        }

        self.compact();
        cleared
    }

    /// Stable bottom-up filter of nonzero rows, zero-filling the top
    fn compact(&mut self) {
        let height = self.rows.len();
        let mut write_y = height;

        for read_y in (0..height).rev() {
            let row = self.rows[read_y];
            if row != 0 {
                write_y -= 1;
                self.rows[write_y] = row;
            }
        }

        for row in &mut self.rows[..write_y] {
            *row = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(c: u8, r: u8) -> Dimensions {
        Dimensions::new(c, r).unwrap()
    }

    #[test]
    fn new_field_is_empty() {
        let field = Field::new(dims(10, 20));
        assert_eq!(field.rows().len(), 20);
        assert_eq!(field.occupied_cells(), 0);
    }

    #[test]
    fn compact_sweeps_gaps_and_keeps_order() {
        let d = dims(4, 5);
        let mut field = Field::from_rows(d, &[0b0001, 0, 0b0010, 0, 0b0100]).unwrap();
        field.compact();
        assert_eq!(field.rows(), &[0, 0, 0b0001, 0b0010, 0b0100]);
    }

    #[test]
    fn settle_counts_full_rows() {
        let d = dims(4, 4);
        let mut field = Field::from_rows(d, &[0, 0b0001, 0b1110, 0b1110]).unwrap();
        let piece = Occupancy::from_rows(d, &[0, 0, 0b0001, 0b0001]).unwrap();
        assert_eq!(field.settle(&piece), 2);
        assert_eq!(field.rows(), &[0, 0, 0, 0b0001]);
    }

    #[test]
    fn masks_from_another_board_are_refused() {
        let d = dims(10, 4);
        let mut field = Field::from_rows(d, &[0, 0, 0, 0b1000000000]).unwrap();
        let wide = Occupancy::from_rows(dims(24, 4), &[0, 0, 0, 0xFF_FC00]).unwrap();
        let short = Occupancy::from_rows(dims(10, 3), &[0, 0, 0b1]).unwrap();

        assert!(field.collides(&wide));
        assert!(field.collides(&short));

        let before = field.clone();
        assert_eq!(field.settle(&wide), 0);
        assert_eq!(field, before);
        assert!(field.rows().iter().all(|&r| r & !d.full_row() == 0));
    }

    #[test]
    fn is_occupied_uses_screen_order() {
        let d = dims(4, 1);
        let field = Field::from_rows(d, &[0b1000]).unwrap();
        assert!(field.is_occupied(0, 0));
        assert!(!field.is_occupied(3, 0));
        assert!(!field.is_occupied(4, 0));
        assert!(!field.is_occupied(0, 1));
    }
}
