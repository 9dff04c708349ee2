//! Board rendering for the solitaire GUI

use crate::{Board, Cell, Pos, BOARD_SIZE};
use egui::{CornerRadius, Painter, Rect, Sense, Shape, Stroke, Vec2};

use super::layout::{cell_from_screen_position, BoardLayout};
use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Preferred cell size; shrunk when the panel is too small
    cell_size: f32,
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIZE)
    }
}

impl BoardView {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size: cell_size.max(MIN_CELL_SIZE),
        }
    }

    /// Render the board and return the clicked playable cell, if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, targets: &[Pos]) -> Option<Pos> {
        let available = ui.available_size();
        let (response, painter) = ui.allocate_painter(available, Sense::click());
        let viewport = response.rect;

        let fit = viewport.width().min(viewport.height()) / BOARD_SIZE as f32;
        let cell_size = self.cell_size.min(fit).max(MIN_CELL_SIZE);
        let layout = BoardLayout::centered(viewport, cell_size);

        painter.rect_filled(viewport, CornerRadius::ZERO, BACKGROUND);

        self.draw_cells(&painter, &layout, board);
        self.draw_targets(&painter, &layout, targets);
        self.draw_boundary(&painter, &layout);

        if let Some(pos) = board.selected() {
            self.draw_selection(&painter, &layout, pos);
        }

        if response.clicked() {
            response
                .interact_pointer_pos()
                .and_then(|point| cell_from_screen_position(point, viewport, cell_size, board))
        } else {
            None
        }
    }

    /// Draw every playable cell and its marble
    fn draw_cells(&self, painter: &Painter, layout: &BoardLayout, board: &Board) {
        for pos in Board::positions() {
            match board.get(pos) {
                // Banned cells keep the background colour
                Cell::Banned => {}
                Cell::Empty => self.draw_cell(painter, layout.cell_rect(pos)),
                Cell::Occupied => {
                    let rect = layout.cell_rect(pos);
                    self.draw_cell(painter, rect);
                    self.draw_marble(painter, rect);
                }
            }
        }
    }

    fn draw_cell(&self, painter: &Painter, rect: Rect) {
        let radius = CornerRadius::same(CELL_CORNER_RADIUS);
        painter.rect_filled(rect, radius, CELL_FILL);
        painter.add(Shape::closed_line(
            vec![rect.left_top(), rect.right_top(), rect.right_bottom(), rect.left_bottom()],
            Stroke::new(GRID_LINE_WIDTH, GRID_LINE),
        ));
    }

    /// Marble with a light top-left and a shaded bottom-right
    fn draw_marble(&self, painter: &Painter, rect: Rect) {
        let center = rect.center();
        let radius = rect.width() * MARBLE_RADIUS_RATIO;

        painter.circle_filled(center + Vec2::splat(radius * 0.15), radius, MARBLE_SHADE);
        painter.circle_filled(center, radius * 0.9, MARBLE);
        painter.circle_filled(center - Vec2::splat(radius * 0.35), radius * 0.25, MARBLE_HIGHLIGHT);
        painter.circle_stroke(center, radius, Stroke::new(MARBLE_LINE_WIDTH, MARBLE_LINE));
    }

    /// Mark landing cells of the pending peg
    fn draw_targets(&self, painter: &Painter, layout: &BoardLayout, targets: &[Pos]) {
        let radius = layout.cell_size * MARBLE_RADIUS_RATIO * 0.4;
        for &pos in targets {
            painter.circle_filled(layout.cell_center(pos), radius, target_hint());
        }
    }

    fn draw_selection(&self, painter: &Painter, layout: &BoardLayout, pos: Pos) {
        let radius = layout.cell_size * MARBLE_RADIUS_RATIO + SELECTED_RING_WIDTH;
        painter.circle_stroke(
            layout.cell_center(pos),
            radius,
            Stroke::new(SELECTED_RING_WIDTH, SELECTED_RING),
        );
    }

    /// Outline around the cross shape
    fn draw_boundary(&self, painter: &Painter, layout: &BoardLayout) {
        painter.add(Shape::closed_line(
            layout.cross_outline(),
            Stroke::new(BOUNDARY_WIDTH, BOUNDARY),
        ));
    }
}
