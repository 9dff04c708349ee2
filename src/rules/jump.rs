//! Jump geometry for peg solitaire
//!
//! A peg moves exactly two cells, horizontally, vertically or diagonally,
//! over an occupied cell into an empty one. The jumped peg is removed.
//!
//! Diagonal jumps are part of this rule set, which makes it broader than the
//! classic orthogonal-only game.

use crate::board::{Board, Cell, Pos};

/// Offsets of every jump landing (8 directions, distance 2)
const JUMPS: [(i32, i32); 8] = [
    (0, 2),   // Horizontal →
    (0, -2),  // Horizontal ←
    (2, 0),   // Vertical ↓
    (-2, 0),  // Vertical ↑
    (2, 2),   // Diagonal ↘
    (2, -2),  // Diagonal ↙
    (-2, 2),  // Diagonal ↗
    (-2, -2), // Diagonal ↖
];

/// Cell strictly between `from` and `to` when they are one jump apart.
///
/// Returns `None` unless the pair is two apart on one axis and level on the
/// other, or two apart on both.
pub fn cell_between(from: Pos, to: Pos) -> Option<Pos> {
    let dr = to.row as i32 - from.row as i32;
    let dc = to.col as i32 - from.col as i32;

    match (dr.abs(), dc.abs()) {
        (0, 2) | (2, 0) | (2, 2) => Some(Pos::new(
            (from.row as i32 + dr / 2) as u8,
            (from.col as i32 + dc / 2) as u8,
        )),
        _ => None,
    }
}

/// Check whether a single jump carries a peg from `from` to `to`.
///
/// Requires `to` to be empty and the midpoint to hold a peg. The source cell
/// itself is not inspected; the selection controller only ever passes a
/// selected peg.
pub fn is_reachable(board: &Board, from: Pos, to: Pos) -> bool {
    if from == to || board.get(to) != Cell::Empty {
        return false;
    }

    cell_between(from, to).is_some_and(|mid| board.get(mid) == Cell::Occupied)
}

/// All cells a peg at `from` can jump to right now
pub fn reachable_targets(board: &Board, from: Pos) -> Vec<Pos> {
    JUMPS
        .iter()
        .filter_map(|&(dr, dc)| {
            let row = from.row as i32 + dr;
            let col = from.col as i32 + dc;
            Pos::is_valid(row, col).then(|| Pos::new(row as u8, col as u8))
        })
        .filter(|&to| is_reachable(board, from, to))
        .collect()
}

/// Move the peg from `from` to `to` and remove the jumped peg.
///
/// The caller validates the jump first. Returns the captured position, or
/// `None` if the pair has no midpoint (nothing is removed then).
pub fn execute_jump(board: &mut Board, from: Pos, to: Pos) -> Option<Pos> {
    board.set(to, Cell::Occupied);
    board.set(from, Cell::Empty);

    let captured = cell_between(from, to);
    if let Some(mid) = captured {
        board.set(mid, Cell::Empty);
    }

    captured
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_between_horizontal() {
        assert_eq!(cell_between(Pos::new(3, 1), Pos::new(3, 3)), Some(Pos::new(3, 2)));
        assert_eq!(cell_between(Pos::new(3, 3), Pos::new(3, 1)), Some(Pos::new(3, 2)));
    }

    #[test]
    fn test_cell_between_vertical() {
        assert_eq!(cell_between(Pos::new(1, 3), Pos::new(3, 3)), Some(Pos::new(2, 3)));
        assert_eq!(cell_between(Pos::new(5, 4), Pos::new(3, 4)), Some(Pos::new(4, 4)));
    }

    #[test]
    fn test_cell_between_diagonal() {
        assert_eq!(cell_between(Pos::new(2, 2), Pos::new(4, 4)), Some(Pos::new(3, 3)));
        assert_eq!(cell_between(Pos::new(4, 2), Pos::new(2, 4)), Some(Pos::new(3, 3)));
    }

    #[test]
    fn test_cell_between_other_geometry() {
        // Same cell, adjacent, knight-like and long jumps have no midpoint
        assert_eq!(cell_between(Pos::new(3, 3), Pos::new(3, 3)), None);
        assert_eq!(cell_between(Pos::new(3, 3), Pos::new(3, 4)), None);
        assert_eq!(cell_between(Pos::new(3, 3), Pos::new(4, 4)), None);
        assert_eq!(cell_between(Pos::new(3, 3), Pos::new(5, 4)), None);
        assert_eq!(cell_between(Pos::new(3, 0), Pos::new(3, 6)), None);
        assert_eq!(cell_between(Pos::new(3, 1), Pos::new(3, 4)), None);
    }

    #[test]
    fn test_reachable_over_peg() {
        let board = Board::with_empty_at(Pos::new(3, 3));
        assert!(is_reachable(&board, Pos::new(3, 1), Pos::new(3, 3)));
        assert!(is_reachable(&board, Pos::new(1, 3), Pos::new(3, 3)));
        assert!(is_reachable(&board, Pos::new(3, 5), Pos::new(3, 3)));
    }

    #[test]
    fn test_reachable_diagonal() {
        let board = Board::with_empty_at(Pos::new(3, 3));
        assert!(is_reachable(&board, Pos::new(1, 5), Pos::new(3, 3)));
        // (1,1) is banned but the rule does not look at the source cell
        assert!(is_reachable(&board, Pos::new(1, 1), Pos::new(3, 3)));
        // Knight-like offsets are never jumps
        assert!(!is_reachable(&board, Pos::new(1, 2), Pos::new(3, 3)));
        assert!(!is_reachable(&board, Pos::new(2, 1), Pos::new(3, 3)));
    }

    #[test]
    fn test_not_reachable_into_peg() {
        let board = Board::with_empty_at(Pos::new(3, 3));
        assert!(!is_reachable(&board, Pos::new(3, 0), Pos::new(3, 2)));
    }

    #[test]
    fn test_not_reachable_over_hole() {
        let mut board = Board::with_empty_at(Pos::new(3, 3));
        board.set(Pos::new(3, 2), Cell::Empty);
        assert!(!is_reachable(&board, Pos::new(3, 1), Pos::new(3, 3)));
    }

    #[test]
    fn test_not_reachable_to_self_or_adjacent() {
        let board = Board::with_empty_at(Pos::new(3, 3));
        assert!(!is_reachable(&board, Pos::new(3, 3), Pos::new(3, 3)));
        assert!(!is_reachable(&board, Pos::new(3, 2), Pos::new(3, 3)));
    }

    #[test]
    fn test_reachable_targets_center_hole() {
        let board = Board::with_empty_at(Pos::new(3, 3));
        // Peg at (3,1) can only land on the centre
        assert_eq!(reachable_targets(&board, Pos::new(3, 1)), vec![Pos::new(3, 3)]);
        assert_eq!(reachable_targets(&board, Pos::new(5, 3)), vec![Pos::new(3, 3)]);
        // Surrounded by pegs, nowhere to land
        assert!(reachable_targets(&board, Pos::new(2, 5)).is_empty());
        assert_eq!(reachable_targets(&board, Pos::new(1, 3)), vec![Pos::new(3, 3)]);
        // Diagonal approach
        assert_eq!(reachable_targets(&board, Pos::new(5, 1)), vec![Pos::new(3, 3)]);
        assert!(reachable_targets(&board, Pos::new(3, 2)).is_empty());
    }

    #[test]
    fn test_execute_jump() {
        let mut board = Board::with_empty_at(Pos::new(3, 3));
        let captured = execute_jump(&mut board, Pos::new(3, 1), Pos::new(3, 3));

        assert_eq!(captured, Some(Pos::new(3, 2)));
        assert_eq!(board.get(Pos::new(3, 1)), Cell::Empty);
        assert_eq!(board.get(Pos::new(3, 2)), Cell::Empty);
        assert_eq!(board.get(Pos::new(3, 3)), Cell::Occupied);
        assert_eq!(board.peg_count(), 31);
    }
}
