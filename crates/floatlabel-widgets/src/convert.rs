//! Conversions between the kurbo/peniko types of the core and egui's.

use egui::{Color32, Pos2};
use peniko::Color;

/// Convert a peniko color to egui.
pub fn to_color32(color: Color) -> Color32 {
    let rgba = color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Convert an egui color to peniko.
pub fn from_color32(color: Color32) -> Color {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    Color::from_rgba8(r, g, b, a)
}

/// Map a rectangle in control coordinates onto the screen.
pub fn to_egui_rect(rect: kurbo::Rect, origin: Pos2) -> egui::Rect {
    egui::Rect::from_min_max(
        Pos2::new(origin.x + rect.x0 as f32, origin.y + rect.y0 as f32),
        Pos2::new(origin.x + rect.x1 as f32, origin.y + rect.y1 as f32),
    )
}
