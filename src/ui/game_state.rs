//! Game state management for the solitaire GUI

use tracing::info;

use crate::rules::{reachable_targets, ClickOutcome, SelectionController};
use crate::{Board, Pos};

/// Main game state
pub struct GameState {
    pub board: Board,
    pub controller: SelectionController,
    /// Pegs captured this game
    pub score: u32,
    pub last_outcome: Option<ClickOutcome>,
    /// Seed of the current board, when games are reproducible
    seed: Option<u64>,
}

impl GameState {
    /// Start a game. With a seed the starting hole is reproducible, and each
    /// later game uses the next seed.
    pub fn new(seed: Option<u64>) -> Self {
        let board = Self::fresh_board(seed);
        info!(?seed, "new game");
        Self {
            board,
            controller: SelectionController::new(),
            score: 0,
            last_outcome: None,
            seed,
        }
    }

    pub fn reset(&mut self) {
        let seed = self.seed.map(|s| s.wrapping_add(1));
        *self = Self::new(seed);
    }

    fn fresh_board(seed: Option<u64>) -> Board {
        match seed {
            Some(seed) => Board::with_seed(seed),
            None => Board::new(),
        }
    }

    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Feed one cell click through the selection controller.
    ///
    /// Returns true when the board or selection changed and needs a repaint.
    pub fn handle_click(&mut self, pos: Pos) -> bool {
        let score = &mut self.score;
        let outcome = self
            .controller
            .handle_click(pos, &mut self.board, || *score += 1);

        match outcome {
            Some(outcome) => {
                self.last_outcome = Some(outcome);
                true
            }
            None => false,
        }
    }

    /// Release the pending peg, if any, by clicking it again
    pub fn cancel_selection(&mut self) -> bool {
        match self.controller.pending() {
            Some(source) => self.handle_click(source),
            None => false,
        }
    }

    /// Landing cells for the pending peg
    pub fn targets(&self) -> Vec<Pos> {
        self.controller
            .pending()
            .map(|source| reachable_targets(&self.board, source))
            .unwrap_or_default()
    }

    #[inline]
    pub fn pegs_left(&self) -> usize {
        self.board.peg_count()
    }
}
