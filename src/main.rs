//! Peg Solitaire GUI
//!
//! A native window for playing peg solitaire with the mouse.

mod cli;

use clap::Parser;
use cli::Cli;
use solitaire::ui::SolitaireApp;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    let cli = Cli::parse();

    let filter = match &cli.log {
        Some(directives) => EnvFilter::try_new(directives).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(seed = ?cli.seed, cell_size = cli.cell_size, "starting solitaire");

    // Room for the board plus the side panel
    let board_side = cli.cell_size * solitaire::BOARD_SIZE as f32;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board_side + 400.0, board_side + 200.0])
            .with_min_inner_size([board_side + 300.0, board_side + 100.0])
            .with_title("Solitaire Game"),
        ..Default::default()
    };

    eframe::run_native(
        "Solitaire",
        options,
        Box::new(move |cc| Ok(Box::new(SolitaireApp::new(cc, cli.seed, cli.cell_size)))),
    )
}
