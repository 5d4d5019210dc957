//! Active piece - the single falling shape the player controls
//!
//! `x` counts columns from the field's right edge to the piece's right edge; the
//! shape is placed by shifting it left `columns - x` bits, so moving left lowers
//! `x` and moving right raises it. `y` is the board row holding the top of the
//! bounding box.
//!
//! Moves and descents are checked against walls, floor and settled cells and are
//! silent no-ops when blocked. Rotation is not checked at all: it may overlap
//! settled cells, and cells pushed off the board are dropped.

use crate::field::{Field, Fusion};
use crate::mask::Occupancy;
use crate::pieces::PieceShape;
use crate::rng::PieceSource;
use crate::types::{Dimensions, FusionEvent, PieceKind};

/// Outcome of [`ActivePiece::down`]
#[derive(Debug, Clone, PartialEq)]
pub enum Descent {
    /// The piece moved down one row
    Fell,
    /// The piece could not descend and is now part of the field
    Fused {
        /// Replacement piece
        next: ActivePiece,
        event: FusionEvent,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    kind: PieceKind,
    shape: PieceShape,
    x: i16,
    y: i16,
    dims: Dimensions,
    occupancy: Occupancy,
}

impl ActivePiece {
    /// Spawn at `x = floor(columns / 2) + 1`, `y = 0`
    pub fn spawn(kind: PieceKind, dims: Dimensions) -> Self {
        Self::with_shape(kind, PieceShape::of(kind), dims.spawn_x(), 0, dims)
    }

    /// Piece with an explicit shape and position
    pub fn with_shape(kind: PieceKind, shape: PieceShape, x: i16, y: i16, dims: Dimensions) -> Self {
        Self {
            kind,
            shape,
            x,
            y,
            dims,
            occupancy: Occupancy::place(&shape, x, y, dims),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn shape(&self) -> &PieceShape {
        &self.shape
    }

    pub fn x(&self) -> i16 {
        self.x
    }

    pub fn y(&self) -> i16 {
        self.y
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// Shift one column left; false (and unchanged) when blocked.
    ///
    /// A piece with no cells left on the board cannot move.
    pub fn move_left(&mut self, field: &Field) -> bool {
        if self.occupancy.is_empty() || self.occupancy.touches_left_wall() {
            return false;
        }
        let candidate = self.occupancy.shifted_left();
        if field.collides(&candidate) {
            return false;
        }
        self.occupancy = candidate;
        self.x -= 1;
        true
    }

    /// Shift one column right; false (and unchanged) when blocked
    pub fn move_right(&mut self, field: &Field) -> bool {
        if self.occupancy.is_empty() || self.occupancy.touches_right_wall() {
            return false;
        }
        let candidate = self.occupancy.shifted_right();
        if field.collides(&candidate) {
            return false;
        }
        self.occupancy = candidate;
        self.x += 1;
        true
    }

    /// Descend one row, or fuse into `field` when the floor or a settled cell is in the way.
    ///
    /// A piece whose cells were all clipped off the board by rotation has
    /// nothing left to land on, so it fuses immediately.
    ///
    /// After [`Descent::Fused`] this piece is spent; callers switch to `next`.
    pub fn down(&mut self, field: &mut Field, pieces: &mut PieceSource) -> Descent {
        if !self.occupancy.is_empty() && !self.occupancy.touches_floor() {
            let candidate = self.occupancy.shifted_down();
            if !field.collides(&candidate) {
                self.occupancy = candidate;
                self.y += 1;
                return Descent::Fell;
            }
        }

        let topped_out = self.y == 0;
        let Fusion {
            next,
            lines_cleared,
        } = field.fuse(&self.occupancy, pieces);

        Descent::Fused {
            next,
            event: FusionEvent {
                kind: self.kind,
                lines_cleared,
                topped_out,
            },
        }
    }

    /// Rotate the bounding box clockwise in place, without any legality check
    pub fn rotate(&mut self) {
        self.shape = self.shape.rotated_cw();
        self.occupancy = Occupancy::place(&self.shape, self.x, self.y, self.dims);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(c: u8, r: u8) -> Dimensions {
        Dimensions::new(c, r).unwrap()
    }

    #[test]
    fn spawn_places_piece_at_top_center() {
        let d = dims(10, 20);
        let piece = ActivePiece::spawn(PieceKind::T, d);
        assert_eq!(piece.x(), 6);
        assert_eq!(piece.y(), 0);
        assert_eq!(piece.occupancy().row(0), 0b111 << 4);
        assert_eq!(piece.occupancy().row(1), 0b010 << 4);
    }

    #[test]
    fn moves_track_x() {
        let d = dims(10, 20);
        let field = Field::new(d);
        let mut piece = ActivePiece::spawn(PieceKind::O, d);

        assert!(piece.move_left(&field));
        assert_eq!(piece.x(), 5);
        assert_eq!(piece.occupancy().row(0), 0b11 << 5);

        assert!(piece.move_right(&field));
        assert!(piece.move_right(&field));
        assert_eq!(piece.x(), 7);
        assert_eq!(piece.occupancy().row(0), 0b11 << 3);
    }

    #[test]
    fn committed_moves_agree_with_placement() {
        let d = dims(10, 20);
        let field = Field::new(d);
        let mut piece = ActivePiece::spawn(PieceKind::L, d);
        piece.move_left(&field);
        piece.move_left(&field);
        piece.move_right(&field);
        let mut pieces = PieceSource::new(1);
        let mut f = field.clone();
        assert_eq!(piece.down(&mut f, &mut pieces), Descent::Fell);

        let placed = Occupancy::place(piece.shape(), piece.x(), piece.y(), d);
        assert_eq!(&placed, piece.occupancy());
    }

    #[test]
    fn rotate_recomputes_occupancy_in_place() {
        let d = dims(10, 20);
        let mut piece = ActivePiece::spawn(PieceKind::T, d);
        piece.rotate();
        assert_eq!(piece.x(), 6);
        assert_eq!(piece.y(), 0);
        assert_eq!(piece.occupancy().row(0), 0b001 << 4);
        assert_eq!(piece.occupancy().row(1), 0b011 << 4);
        assert_eq!(piece.occupancy().row(2), 0b001 << 4);
    }

    #[test]
    fn rotate_ignores_settled_cells() {
        let d = dims(10, 6);
        // The horizontal I sits on row 1; its vertical form passes through row 0.
        let field = Field::from_rows(d, &[0b0000100000, 0, 0, 0, 0, 0]).unwrap();
        let mut piece = ActivePiece::spawn(PieceKind::I, d);
        assert!(!field.collides(piece.occupancy()));

        piece.rotate();
        assert!(field.collides(piece.occupancy()));
    }

    #[test]
    fn fully_clipped_piece_fuses_instead_of_falling() {
        let d = dims(10, 20);
        let field = Field::new(d);
        let mut piece = ActivePiece::spawn(PieceKind::I, d);
        // Vertical I in shape column 1, pushed one column past the right wall.
        piece.rotate();
        while piece.move_right(&field) {}
        assert_eq!(piece.x(), 11);
        piece.rotate();
        piece.rotate();
        assert!(piece.occupancy().is_empty());

        let mut f = field.clone();
        let mut pieces = PieceSource::new(1);
        let y = piece.y();
        match piece.down(&mut f, &mut pieces) {
            Descent::Fused { event, .. } => assert_eq!(event.topped_out, y == 0),
            Descent::Fell => panic!("empty piece must not keep falling"),
        }
        assert_eq!(f, field);
    }

    #[test]
    fn down_onto_stack_fuses() {
        let d = dims(4, 3);
        let field_rows = [0, 0, 0b0110];
        let mut field = Field::from_rows(d, &field_rows).unwrap();
        let mut pieces = PieceSource::new(3);
        let mut piece = ActivePiece::spawn(PieceKind::O, d);
        assert_eq!(piece.occupancy().rows(), &[0b0110, 0b0110, 0]);

        match piece.down(&mut field, &mut pieces) {
            Descent::Fused { next, event } => {
                assert!(event.topped_out);
                assert_eq!(event.kind, PieceKind::O);
                assert_eq!(next.y(), 0);
            }
            Descent::Fell => panic!("piece should have been blocked"),
        }
        assert_eq!(field.rows(), &[0b0110, 0b0110, 0b0110]);
    }
}
