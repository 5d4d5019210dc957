//! Plain data shared by every bitris crate: board limits, [`Dimensions`], piece
//! kinds, input actions and fusion events. No dependencies.
//!
//! # Board Representation
//!
//! The playfield is a stack of bitmask rows. Each row is a [`Row`] whose low
//! `columns` bits describe the cells of that row:
//!
//! - **Bit 0** is the rightmost column
//! - **Bit `columns - 1`** is the leftmost column
//! - Row index 0 is the top of the field
//!
//! # Limits
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_COLUMNS` | 10 | Board width used when nothing else is configured |
//! | `MIN_COLUMNS` | 4 | Narrowest board (every catalog shape fits at spawn) |
//! | `MAX_COLUMNS` | 24 | Widest board (a shifted 4-wide shape still fits in a `u32`) |
//! | `DEFAULT_ROWS` | 20 | Board height used when no terminal size is known |
//! | `MIN_ROWS` | 4 | Shortest board the driver derives from a terminal |
//! | `MAX_ROWS` | 64 | Capacity of the fixed-size row storage |
//! | `TICK_MS` | 1000 | Gravity interval; every tick is a soft drop |
//!
//! # Examples
//!
//! ```
//! use bitris_types::{GameAction, PieceKind, Dimensions, DEFAULT_COLUMNS};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//!
//! let dims = Dimensions::new(DEFAULT_COLUMNS, 20).unwrap();
//! assert_eq!(dims.full_row(), 0b11_1111_1111);
//! ```

/// One board row; the low `columns` bits are cells, bit 0 is the rightmost column.
pub type Row = u32;

/// Default board width in columns
pub const DEFAULT_COLUMNS: u8 = 10;

/// Narrowest board; the widest catalog shape fits at spawn
pub const MIN_COLUMNS: u8 = 4;

/// Widest supported board
pub const MAX_COLUMNS: u8 = 24;

/// Default board height in rows
pub const DEFAULT_ROWS: u8 = 20;

/// Shortest board derived from a presentation surface
pub const MIN_ROWS: u8 = 4;

/// Row storage capacity
pub const MAX_ROWS: usize = 64;

/// Gravity interval in milliseconds (one soft drop per tick)
pub const TICK_MS: u32 = 1000;

/// Board size, fixed from one reset to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    columns: u8,
    rows: u8,
}

impl Dimensions {
    /// Validate a board size.
    ///
    /// Returns `None` for fewer than [`MIN_COLUMNS`] columns, zero rows, or sizes
    /// beyond the row storage limits.
    ///
    /// ```
    /// use bitris_types::{Dimensions, MAX_COLUMNS, MIN_COLUMNS};
    ///
    /// assert!(Dimensions::new(10, 20).is_some());
    /// assert!(Dimensions::new(0, 20).is_none());
    /// assert!(Dimensions::new(MIN_COLUMNS - 1, 20).is_none());
    /// assert!(Dimensions::new(MAX_COLUMNS + 1, 20).is_none());
    /// assert!(Dimensions::new(10, 0).is_none());
    /// ```
    pub fn new(columns: u8, rows: u8) -> Option<Self> {
        if !(MIN_COLUMNS..=MAX_COLUMNS).contains(&columns) {
            return None;
        }
        if rows == 0 || rows as usize > MAX_ROWS {
            return None;
        }
        Some(Self { columns, rows })
    }

    pub fn columns(&self) -> u8 {
        self.columns
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Row value with every column set
    pub fn full_row(&self) -> Row {
        (1 << self.columns) - 1
    }

    /// Bit of the leftmost column
    pub fn left_wall(&self) -> Row {
        1 << (self.columns - 1)
    }

    /// Bit of column `col`, counted from the left edge (screen order).
    ///
    /// Returns 0 for columns outside the board.
    pub fn column_bit(&self, col: u8) -> Row {
        if col >= self.columns {
            return 0;
        }
        1 << (self.columns - 1 - col)
    }

    /// Horizontal spawn offset: `floor(columns / 2) + 1`
    pub fn spawn_x(&self) -> i16 {
        (self.columns / 2) as i16 + 1
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
        }
    }
}

/// The seven piece kinds of the shape catalog, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    O,
    T,
    S,
    Z,
    L,
    J,
    I,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
        PieceKind::I,
    ];

    /// Inverse of [`as_str`](Self::as_str), ignoring ASCII case
    ///
    /// ```
    /// use bitris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("I"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::I => "i",
        }
    }
}

/// Discrete input events fed into a game session.
///
/// Ticks are not an action; the driver calls `tick` directly, which behaves like
/// [`GameAction::SoftDrop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Descend one row, fusing the piece when it cannot
    SoftDrop,
    /// Rotate the piece's bounding box 90° clockwise
    RotateCw,
    /// Reset the board and start over (honored even after game over)
    Restart,
}

impl GameAction {
    pub const ALL: [GameAction; 5] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::RotateCw,
        GameAction::Restart,
    ];

    /// Inverse of [`as_str`](Self::as_str), ignoring ASCII case
    ///
    /// ```
    /// use bitris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("rotateCw"), Some(GameAction::RotateCw));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str().eq_ignore_ascii_case(s))
    }

    /// camelCase name, as used in the event log
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::Restart => "restart",
        }
    }
}

/// Emitted by the core each time a piece fuses into the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FusionEvent {
    /// Piece that fused
    pub kind: PieceKind,
    /// Full rows removed by this fusion
    pub lines_cleared: u32,
    /// The piece fused without ever leaving the top row
    pub topped_out: bool,
}
