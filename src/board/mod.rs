//! Board representation for peg solitaire

pub mod board;


// Re-exports
pub use board::Board;

/// Board size (7x7 square, cross carved out by the corners)
pub const BOARD_SIZE: usize = 7;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 49

/// Side of each banned corner block
pub const CORNER_SIZE: usize = 2;

/// Cell kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Outside the cross, never changes
    Banned,
    Empty,
    /// Holds a peg
    Occupied,
}

impl Cell {
    #[inline]
    pub fn is_playable(self) -> bool {
        self != Cell::Banned
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    /// Panics if the coordinate is off the board.
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE,
            "position ({row}, {col}) is off the {BOARD_SIZE}x{BOARD_SIZE} board"
        );
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self::new((idx / BOARD_SIZE) as u8, (idx % BOARD_SIZE) as u8)
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// True for the four 2x2 corner blocks outside the cross
    #[inline]
    pub fn is_banned_square(self) -> bool {
        let far = BOARD_SIZE - CORNER_SIZE;
        let row_edge = (self.row as usize) < CORNER_SIZE || self.row as usize >= far;
        let col_edge = (self.col as usize) < CORNER_SIZE || self.col as usize >= far;
        row_edge && col_edge
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
