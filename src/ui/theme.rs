//! Theme constants for the Gomoku GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(250, 248, 255);
pub const GRID_LINE: Color32 = Color32::from_rgb(205, 190, 235);
pub const AXIS_LINE: Color32 = Color32::from_rgb(160, 135, 215);

// Marks
pub const MARK_X: Color32 = Color32::from_rgb(124, 58, 237);
pub const MARK_O: Color32 = Color32::from_rgb(37, 99, 235);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(253, 224, 71);
pub const SUGGESTION: Color32 = Color32::from_rgb(34, 197, 94);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(124, 58, 237, 40)
}

// Panel colors
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const SIDE_PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const WINNER_BG: Color32 = Color32::from_rgb(120, 90, 20);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Sizes
pub const CELL_SIZE: f32 = 48.0;
pub const MARK_RATIO: f32 = 0.3;
pub const MARK_WIDTH: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;

/// Accent color of a mark
pub fn mark_color(mark: crate::Mark) -> Color32 {
    match mark {
        crate::Mark::First => MARK_X,
        crate::Mark::Second => MARK_O,
    }
}
