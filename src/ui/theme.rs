//! Theme constants for the solitaire GUI

use egui::Color32;

// Table
pub const BACKGROUND: Color32 = Color32::from_rgb(255, 69, 0); // Orange red
pub const CELL_FILL: Color32 = Color32::from_rgb(211, 211, 211); // Light gray
pub const GRID_LINE: Color32 = Color32::from_rgb(128, 128, 128);
pub const BOUNDARY: Color32 = Color32::BLACK;

// Marbles
pub const MARBLE: Color32 = Color32::from_rgb(127, 255, 212); // Aquamarine
pub const MARBLE_HIGHLIGHT: Color32 = Color32::from_rgb(167, 255, 252);
pub const MARBLE_SHADE: Color32 = Color32::from_rgb(87, 215, 172);
pub const MARBLE_LINE: Color32 = Color32::from_rgb(0, 0, 139); // Dark blue

// Markers
pub const SELECTED_RING: Color32 = Color32::from_rgb(255, 215, 0);
pub fn target_hint() -> Color32 {
    Color32::from_rgba_unmultiplied(0, 0, 139, 90)
}

// Panel colors - dark theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const SCORE_ACCENT: Color32 = Color32::from_rgb(80, 200, 120);

// Sizes
pub const DEFAULT_CELL_SIZE: f32 = 50.0;
pub const MIN_CELL_SIZE: f32 = 12.0;
pub const MARBLE_RADIUS_RATIO: f32 = 0.4;
pub const CELL_CORNER_RADIUS: u8 = 2;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const BOUNDARY_WIDTH: f32 = 3.0;
pub const MARBLE_LINE_WIDTH: f32 = 2.0;
pub const SELECTED_RING_WIDTH: f32 = 3.0;
