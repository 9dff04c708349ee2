//! Main application for the solitaire GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;
use crate::rules::{ClickOutcome, Phase};

/// Main solitaire application
pub struct SolitaireApp {
    state: GameState,
    board_view: BoardView,
}

impl Default for SolitaireApp {
    fn default() -> Self {
        Self {
            state: GameState::new(None),
            board_view: BoardView::default(),
        }
    }
}

impl SolitaireApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, seed: Option<u64>, cell_size: f32) -> Self {
        Self {
            state: GameState::new(seed),
            board_view: BoardView::new(cell_size),
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                    if ui.button("Drop Selection (Esc)").clicked() {
                        self.state.cancel_selection();
                        ui.close_menu();
                    }
                });

                if let Some(seed) = self.state.seed() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(format!("Seed {seed}"));
                    });
                }
            });
        });
    }

    /// Render the side panel with score and status
    fn render_side_panel(&self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(200.0)
            .max_width(240.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(12.0))
            .show(ctx, |ui| {
                ui.label(RichText::new("SOLITAIRE").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_score_card(ui);
                ui.add_space(10.0);
                self.render_status_card(ui);
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.label(
                RichText::new(self.state.score.to_string())
                    .size(28.0)
                    .strong()
                    .color(SCORE_ACCENT),
            );
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("{} pegs left", self.state.pegs_left()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(4.0);

            let prompt = match self.state.controller.phase() {
                Phase::Idle => "Pick a marble".to_string(),
                Phase::Awaiting(source) => format!("Move {source} where?"),
            };
            ui.label(RichText::new(prompt).size(13.0).color(TEXT_PRIMARY));

            if let Some(ClickOutcome::Jumped { from, to, .. }) = self.state.last_outcome {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last: {from} → {to}"))
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BACKGROUND))
            .show(ctx, |ui| {
                let targets = self.state.targets();
                let clicked = self.board_view.show(ui, &self.state.board, &targets);

                if let Some(pos) = clicked {
                    if self.state.handle_click(pos) {
                        ctx.request_repaint();
                    }
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, cancel) =
            ctx.input(|i| (i.key_pressed(egui::Key::N), i.key_pressed(egui::Key::Escape)));

        if new_game {
            self.state.reset();
        }
        if cancel && self.state.cancel_selection() {
            ctx.request_repaint();
        }
    }
}

impl eframe::App for SolitaireApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
