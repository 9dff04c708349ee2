//! GUI module for the solitaire game
//!
//! This module provides a native Rust GUI using egui/eframe. The rules live
//! in [`crate::rules`]; the GUI only maps pixels to cells and paints.

mod app;
mod board_view;
mod game_state;
pub mod layout;
mod theme;

pub use app::SolitaireApp;
pub use game_state::GameState;
pub use layout::{cell_from_screen_position, centered_offset, BoardLayout};
pub use theme::DEFAULT_CELL_SIZE;
