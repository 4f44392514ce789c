//! Theme constants for the Tic-Tac-Toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(32, 34, 37);
pub const GRID_LINE: Color32 = Color32::from_rgb(240, 240, 245);
pub const CELL_HOVER: Color32 = Color32::from_rgba_premultiplied(80, 80, 90, 60);

// Mark colors
pub const X_COLOR: Color32 = Color32::from_rgb(235, 110, 100);
pub const O_COLOR: Color32 = Color32::from_rgb(100, 170, 235);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(255, 200, 80);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Panel colors
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const NOTICE_BG: Color32 = Color32::from_rgb(80, 60, 30);
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const GRID_LINE_WIDTH: f32 = 2.0;
pub const MARK_RADIUS_RATIO: f32 = 0.32;
pub const MARK_STROKE_WIDTH: f32 = 6.0;
pub const WIN_LINE_WIDTH: f32 = 5.0;
