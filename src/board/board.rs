//! Board structure with selection tracking

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{Cell, Pos, BOARD_SIZE, TOTAL_CELLS};

/// Peg solitaire board: the cross-shaped grid plus the pending selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    /// Source peg of a move in progress; always an occupied cell
    selected: Option<Pos>,
}

impl Board {
    /// Board with a random starting hole, drawn from the thread RNG
    pub fn new() -> Self {
        Self::with_rng(&mut rand::thread_rng())
    }

    /// Deterministic board for a given seed
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(&mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Board whose starting hole is drawn from `rng`.
    ///
    /// The hole is sampled uniformly over the whole square and redrawn until
    /// it lands inside the cross.
    pub fn with_rng<R: Rng>(rng: &mut R) -> Self {
        let mut board = Self::full();
        let hole = loop {
            let row = rng.gen_range(0..BOARD_SIZE) as u8;
            let col = rng.gen_range(0..BOARD_SIZE) as u8;
            let pos = Pos::new(row, col);
            if board.get(pos) != Cell::Banned {
                break pos;
            }
        };
        board.set(hole, Cell::Empty);
        board
    }

    /// Board with the starting hole at `hole`.
    ///
    /// Panics if `hole` lies outside the cross.
    pub fn with_empty_at(hole: Pos) -> Self {
        let mut board = Self::full();
        board.set(hole, Cell::Empty);
        board
    }

    /// Corners banned, every other cell holding a peg
    fn full() -> Self {
        let mut cells = [[Cell::Occupied; BOARD_SIZE]; BOARD_SIZE];
        for idx in 0..TOTAL_CELLS {
            let pos = Pos::from_index(idx);
            if pos.is_banned_square() {
                cells[pos.row as usize][pos.col as usize] = Cell::Banned;
            }
        }
        Self {
            cells,
            selected: None,
        }
    }

    /// Get the cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Change a playable cell between `Empty` and `Occupied`.
    ///
    /// Panics when asked to write `Banned` or to touch a banned cell, and when
    /// emptying the selected peg.
    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        assert!(cell != Cell::Banned, "cannot ban cell {pos} after setup");
        let slot = &mut self.cells[pos.row as usize][pos.col as usize];
        assert!(*slot != Cell::Banned, "cell {pos} is outside the cross");
        debug_assert!(
            cell == Cell::Occupied || self.selected != Some(pos),
            "emptying selected cell {pos}"
        );
        *slot = cell;
    }

    /// Check if position is inside the cross
    #[inline]
    pub fn is_playable(&self, pos: Pos) -> bool {
        self.get(pos).is_playable()
    }

    /// The pending source cell, if a peg is selected
    #[inline]
    pub fn selected(&self) -> Option<Pos> {
        self.selected
    }

    /// Mark `pos` as the pending source. Panics if it holds no peg.
    pub fn select(&mut self, pos: Pos) {
        assert_eq!(
            self.get(pos),
            Cell::Occupied,
            "only a peg can be selected, got {pos}"
        );
        self.selected = Some(pos);
    }

    #[inline]
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// True iff one legal jump carries a peg from `from` to `to`
    #[inline]
    pub fn is_reachable(&self, from: Pos, to: Pos) -> bool {
        crate::rules::is_reachable(self, from, to)
    }

    /// Midpoint of a jump between `from` and `to`, if they form one
    #[inline]
    pub fn cell_between(from: Pos, to: Pos) -> Option<Pos> {
        crate::rules::cell_between(from, to)
    }

    /// Iterate over every coordinate, row by row
    pub fn positions() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }

    /// Pegs left on the board
    pub fn peg_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Occupied)
            .count()
    }

    /// Vacant playable cells
    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Empty)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// `#` banned, `.` empty, `o` peg, `*` selected peg; one line per row
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Pos::new(row as u8, col as u8);
                let ch = match self.get(pos) {
                    Cell::Banned => '#',
                    Cell::Empty => '.',
                    Cell::Occupied if self.selected == Some(pos) => '*',
                    Cell::Occupied => 'o',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
