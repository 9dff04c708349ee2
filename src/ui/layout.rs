//! Screen geometry for the board
//!
//! Everything here is a pure function of the viewport and cell size, so the
//! painter and the click handler always agree on where a cell is.

use egui::{Pos2, Rect, Vec2};

use crate::board::{Board, Pos, BOARD_SIZE, CORNER_SIZE};

/// Placement of the board on screen for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    /// Top-left corner of cell (0, 0)
    pub origin: Pos2,
    pub cell_size: f32,
}

/// Offset that centers the board in `viewport`, clamped so the board never
/// starts above or left of it.
pub fn centered_offset(viewport: Vec2, cell_size: f32) -> Vec2 {
    let side = BOARD_SIZE as f32 * cell_size;
    Vec2::new(
        ((viewport.x - side) / 2.0).max(0.0),
        ((viewport.y - side) / 2.0).max(0.0),
    )
}

impl BoardLayout {
    pub fn centered(viewport: Rect, cell_size: f32) -> Self {
        Self {
            origin: viewport.min + centered_offset(viewport.size(), cell_size),
            cell_size,
        }
    }

    pub fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.origin
            + Vec2::new(pos.col as f32 * self.cell_size, pos.row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    #[inline]
    pub fn cell_center(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }

    /// Cell under `point`, banned or not; `None` off the square
    pub fn cell_at(&self, point: Pos2) -> Option<Pos> {
        let relative = point - self.origin;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        Pos::is_valid(row, col).then(|| Pos::new(row as u8, col as u8))
    }

    /// Closed outline of the cross, clockwise from the top-left of the top arm
    pub fn cross_outline(&self) -> Vec<Pos2> {
        let near = CORNER_SIZE as f32;
        let far = (BOARD_SIZE - CORNER_SIZE) as f32;
        let side = BOARD_SIZE as f32;

        [
            (near, 0.0),
            (far, 0.0),
            (far, near),
            (side, near),
            (side, far),
            (far, far),
            (far, side),
            (near, side),
            (near, far),
            (0.0, far),
            (0.0, near),
            (near, near),
        ]
        .into_iter()
        .map(|(x, y)| self.origin + Vec2::new(x, y) * self.cell_size)
        .collect()
    }
}

/// Map a pointer position to a playable cell.
///
/// Returns `None` for points outside the board and for banned corners.
pub fn cell_from_screen_position(
    point: Pos2,
    viewport: Rect,
    cell_size: f32,
    board: &Board,
) -> Option<Pos> {
    BoardLayout::centered(viewport, cell_size)
        .cell_at(point)
        .filter(|&pos| board.is_playable(pos))
}
