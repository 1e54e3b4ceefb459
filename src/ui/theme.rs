//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors - dark slate
pub const BOARD_BG: Color32 = Color32::from_rgb(30, 32, 36);
pub const GRID_LINE: Color32 = Color32::from_rgb(225, 225, 230);

// Mark colors
pub const X_MARK: Color32 = Color32::from_rgb(235, 80, 80);
pub const O_MARK: Color32 = Color32::from_rgb(80, 200, 220);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(255, 200, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 80)
}

pub fn ghost_mark(base: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(base.r(), base.g(), base.b(), 70)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const DEBUG_CARD_BG: Color32 = Color32::from_rgb(30, 33, 38);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const GAME_OVER_BUTTON_BG: Color32 = Color32::from_rgb(60, 100, 70);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_READY: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WAITING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const GRID_LINE_WIDTH: f32 = 4.0;
pub const MARK_PAD_RATIO: f32 = 0.22;
pub const MARK_STROKE_RATIO: f32 = 0.07;
pub const WIN_LINE_WIDTH: f32 = 6.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;
