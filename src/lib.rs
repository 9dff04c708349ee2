//! Peg solitaire on the cross-shaped 7x7 board
//!
//! Rules:
//! - The four 2x2 corners of the square are outside the cross
//! - Every playable cell starts with a marble except one random hole
//! - A marble jumps two cells (horizontally, vertically or diagonally) over
//!   a neighbouring marble into an empty cell; the jumped marble is captured
//! - Each capture scores one point
//!
//! # Architecture
//!
//! - [`board`]: Cell grid, selection slot and starting layout
//! - [`rules`]: Jump geometry and the two-click selection state machine
//! - [`ui`]: egui frontend (screen mapping, painting, score keeping)
//!
//! # Quick Start
//!
//! ```
//! use solitaire::{Board, Pos, SelectionController};
//!
//! let mut board = Board::with_empty_at(Pos::new(3, 3));
//! let mut controller = SelectionController::new();
//! let mut score = 0;
//!
//! // Pick the marble at (3, 1), then jump it into the centre
//! controller.handle_click(Pos::new(3, 1), &mut board, || score += 1);
//! controller.handle_click(Pos::new(3, 3), &mut board, || score += 1);
//!
//! assert_eq!(score, 1);
//! assert_eq!(board.peg_count(), 31);
//! ```

pub mod board;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Pos, BOARD_SIZE};
pub use rules::{ClickOutcome, Phase, SelectionController};
