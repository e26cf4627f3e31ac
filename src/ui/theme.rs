// AdMapLog - ui/theme.rs
//
// Colour scheme for message-bar styles and log-panel levels, plus layout
// constants. No dependencies on app state or business logic.

use crate::core::model::{MessageStyle, PanelLevel};
use egui::Color32;

/// Background colour of a message-bar widget.
pub fn style_bg_colour(style: MessageStyle) -> Color32 {
    match style {
        MessageStyle::Critical => Color32::from_rgb(185, 28, 28), // Red 800
        MessageStyle::Warning => Color32::from_rgb(180, 83, 9),   // Amber 700
        MessageStyle::Info => Color32::from_rgb(29, 78, 216),     // Blue 700
        MessageStyle::Success => Color32::from_rgb(21, 128, 61),  // Green 700
    }
}

/// Foreground colour for text drawn on a message-bar widget.
pub const BAR_TEXT: Color32 = Color32::from_rgb(249, 250, 251); // Gray 50

/// Colour of the level badge in the log panel.
pub fn level_colour(level: PanelLevel) -> Color32 {
    match level {
        PanelLevel::Critical => Color32::from_rgb(220, 38, 38), // Red 600
        PanelLevel::Warning => Color32::from_rgb(217, 119, 6),  // Amber 600
        PanelLevel::Info => Color32::from_rgb(156, 163, 175),   // Gray 400
    }
}

/// Layout constants.
pub const COMPOSER_WIDTH: f32 = 280.0;
pub const ROW_HEIGHT: f32 = 20.0;
pub const BAR_ROUNDING: u8 = 4;
