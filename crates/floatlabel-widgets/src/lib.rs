//! egui host for the floating-label text view.
//!
//! - **Animator**: [`FrameAnimator`], a frame-clock [`floatlabel_core::LabelHost`]
//! - **Widget**: [`FloatingLabelTextEdit`], the control as an egui widget
//! - **Theme**: default colors

pub mod animator;
pub mod convert;
pub mod text_edit;

pub use animator::{FrameAnimator, ease_in_out, lerp_affine};
pub use convert::{from_color32, to_color32, to_egui_rect};
pub use text_edit::{EguiTextView, FloatingLabelTextEdit, egui_text_view};

/// Standard colors for the text view.
pub mod theme {
    use egui::Color32;

    use crate::convert::from_color32;
    use crate::text_edit::EguiTextView;

    /// Body text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Placeholder color
    pub const PLACEHOLDER: Color32 = Color32::from_rgb(120, 120, 120);
    /// Cursor color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);

    /// Apply the theme colors to a control.
    pub fn apply(view: &mut EguiTextView) {
        view.set_colors_with_cursor(
            from_color32(TEXT),
            from_color32(PLACEHOLDER),
            from_color32(ACCENT),
        );
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::convert::to_color32;
        use crate::text_edit::egui_text_view;

        #[test]
        fn test_apply_sets_all_colors() {
            let mut view = egui_text_view();
            apply(&mut view);

            let style = view.style();
            assert_eq!(to_color32(style.text_color), TEXT);
            assert_eq!(to_color32(style.placeholder_color), PLACEHOLDER);
            assert_eq!(to_color32(style.cursor_color), ACCENT);
        }
    }
}
