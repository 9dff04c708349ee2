//! Click-driven selection state machine
//!
//! A move takes two clicks: the first picks a peg, the second picks where it
//! lands. Clicking the picked peg again drops the selection. Clicks that fit
//! neither case are ignored.

use tracing::{debug, trace};

use super::jump::{execute_jump, is_reachable};
use crate::board::{Board, Cell, Pos};

/// Interaction phase
///
/// `Awaiting` carries the pending source peg, which the board mirrors in
/// [`Board::selected`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// No peg picked
    #[default]
    Idle,
    /// A peg is picked and the next click chooses its destination
    Awaiting(Pos),
}

/// What an accepted click did to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Peg picked up as the move source
    Selected(Pos),
    /// Pending peg clicked again and released
    Deselected(Pos),
    /// Peg moved from `from` to `to`; `captured` is the removed peg
    Jumped {
        from: Pos,
        to: Pos,
        captured: Option<Pos>,
    },
}

impl Phase {
    /// Whether a click on `pos` should be acted on. Never mutates.
    pub fn can_click(self, pos: Pos, board: &Board) -> bool {
        match self {
            Phase::Idle => board.selected().is_none() && board.get(pos) == Cell::Occupied,
            Phase::Awaiting(source) => {
                pos == source || (board.get(pos) == Cell::Empty && is_reachable(board, source, pos))
            }
        }
    }

    /// Apply an accepted click.
    ///
    /// `on_capture` runs once when a jump removes a peg, and not at all
    /// otherwise. Only call this after [`Phase::can_click`] returned true.
    pub fn select(self, pos: Pos, board: &mut Board, on_capture: impl FnOnce()) -> ClickOutcome {
        match self {
            Phase::Idle => {
                board.select(pos);
                ClickOutcome::Selected(pos)
            }
            Phase::Awaiting(source) if pos == source => {
                board.clear_selection();
                ClickOutcome::Deselected(pos)
            }
            Phase::Awaiting(source) => {
                // Drop the selection first so it never points at an empty cell
                board.clear_selection();
                let captured = execute_jump(board, source, pos);
                if captured.is_some() {
                    on_capture();
                }
                ClickOutcome::Jumped {
                    from: source,
                    to: pos,
                    captured,
                }
            }
        }
    }

    /// Phase after an accepted click on `pos`
    pub fn next_state(self, pos: Pos) -> Phase {
        match self {
            Phase::Idle => Phase::Awaiting(pos),
            Phase::Awaiting(_) => Phase::Idle,
        }
    }
}

/// Drives [`Phase`] transitions from raw cell clicks
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    phase: Phase,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Source peg of the move in progress
    #[inline]
    pub fn pending(&self) -> Option<Pos> {
        match self.phase {
            Phase::Idle => None,
            Phase::Awaiting(source) => Some(source),
        }
    }

    #[inline]
    pub fn can_click(&self, pos: Pos, board: &Board) -> bool {
        self.phase.can_click(pos, board)
    }

    /// Process one click: check, apply, advance.
    ///
    /// Returns `None` and leaves everything untouched when the click is not
    /// allowed in the current phase.
    pub fn handle_click(
        &mut self,
        pos: Pos,
        board: &mut Board,
        on_capture: impl FnOnce(),
    ) -> Option<ClickOutcome> {
        debug_assert_eq!(self.pending(), board.selected(), "phase out of sync with board");

        if !self.phase.can_click(pos, board) {
            trace!(%pos, phase = ?self.phase, "click ignored");
            return None;
        }

        let outcome = self.phase.select(pos, board, on_capture);
        self.phase = self.phase.next_state(pos);
        debug!(?outcome, phase = ?self.phase, "click accepted");

        Some(outcome)
    }

    /// Back to `Idle`, e.g. for a fresh board
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }
}
