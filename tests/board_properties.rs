//! Property tests for the starting layout and jump legality.

use proptest::prelude::*;
use solitaire::rules::{cell_between, is_reachable, reachable_targets};
use solitaire::{Board, Cell, Phase, Pos, SelectionController, BOARD_SIZE};

fn any_pos() -> impl Strategy<Value = Pos> {
    (0..BOARD_SIZE as u8, 0..BOARD_SIZE as u8).prop_map(|(row, col)| Pos::new(row, col))
}

/// Seeded board after a few pseudo-random clicks, to get past the opening
fn played_board(seed: u64, clicks: &[Pos]) -> Board {
    let mut board = Board::with_seed(seed);
    let mut controller = SelectionController::new();
    for &pos in clicks {
        controller.handle_click(pos, &mut board, || {});
    }
    if let Phase::Awaiting(source) = controller.phase() {
        controller.handle_click(source, &mut board, || {});
    }
    board
}

proptest! {
    /// Corners are banned and exactly one playable cell starts empty
    #[test]
    fn prop_initial_layout(seed in any::<u64>()) {
        let board = Board::with_seed(seed);

        for pos in Board::positions() {
            let cell = board.get(pos);
            prop_assert_eq!(cell == Cell::Banned, pos.is_banned_square(), "at {}", pos);
        }
        prop_assert_eq!(board.empty_count(), 1);
        prop_assert_eq!(board.peg_count(), 32);
    }

    /// Play never touches the banned corners and never adds pegs
    #[test]
    fn prop_corners_survive_play(
        seed in any::<u64>(),
        clicks in prop::collection::vec(any_pos(), 0..60),
    ) {
        let board = played_board(seed, &clicks);

        for pos in Board::positions().filter(|p| p.is_banned_square()) {
            prop_assert_eq!(board.get(pos), Cell::Banned);
        }
        prop_assert_eq!(board.peg_count() + board.empty_count(), 33);
        prop_assert!(board.peg_count() <= 32);
    }

    /// Reachability needs a distinct empty target and an occupied midpoint
    #[test]
    fn prop_reachable_iff_occupied_midpoint(
        seed in any::<u64>(),
        clicks in prop::collection::vec(any_pos(), 0..40),
        from in any_pos(),
        to in any_pos(),
    ) {
        let board = played_board(seed, &clicks);
        let reachable = is_reachable(&board, from, to);

        if from == to || board.get(to) != Cell::Empty {
            prop_assert!(!reachable);
        }
        match cell_between(from, to) {
            None => prop_assert!(!reachable),
            Some(mid) => {
                let legal = from != to
                    && board.get(to) == Cell::Empty
                    && board.get(mid) == Cell::Occupied;
                prop_assert_eq!(reachable, legal);
            }
        }
    }

    /// The target list is exactly the reachable cells
    #[test]
    fn prop_targets_match_reachability(
        seed in any::<u64>(),
        clicks in prop::collection::vec(any_pos(), 0..40),
        from in any_pos(),
    ) {
        let board = played_board(seed, &clicks);
        let targets = reachable_targets(&board, from);

        for to in Board::positions() {
            prop_assert_eq!(
                targets.contains(&to),
                is_reachable(&board, from, to),
                "{} -> {}",
                from,
                to
            );
        }
    }

    /// Every capture removes exactly one peg
    #[test]
    fn prop_score_tracks_removed_pegs(
        seed in any::<u64>(),
        clicks in prop::collection::vec(any_pos(), 0..80),
    ) {
        let mut board = Board::with_seed(seed);
        let mut controller = SelectionController::new();
        let mut score = 0usize;

        for &pos in &clicks {
            controller.handle_click(pos, &mut board, || score += 1);
            prop_assert_eq!(controller.pending(), board.selected());
        }
        prop_assert_eq!(board.peg_count(), 32 - score);
    }
}
