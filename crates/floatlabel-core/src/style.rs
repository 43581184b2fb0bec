//! Colors and font of the text view.

use peniko::Color;

/// Point size of the text body and the full-size label.
pub const DEFAULT_FONT_SIZE: f64 = 14.0;

/// Visual style. Changing it never touches the label state.
#[derive(Debug, Clone, Copy)]
pub struct TextViewStyle {
    pub text_color: Color,
    pub placeholder_color: Color,
    pub cursor_color: Color,
    pub font_size: f64,
}

impl Default for TextViewStyle {
    fn default() -> Self {
        Self {
            text_color: Color::BLACK,
            placeholder_color: Color::BLACK,
            cursor_color: Color::BLACK,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl TextViewStyle {
    /// Set text and placeholder colors; the cursor follows the text color.
    pub fn set_colors(&mut self, text: Color, placeholder: Color) {
        self.set_colors_with_cursor(text, placeholder, text);
    }

    /// Set text, placeholder and cursor colors.
    pub fn set_colors_with_cursor(&mut self, text: Color, placeholder: Color, cursor: Color) {
        self.text_color = text;
        self.placeholder_color = placeholder;
        self.cursor_color = cursor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_follows_text_color() {
        let mut style = TextViewStyle::default();
        let text = Color::from_rgba8(10, 20, 30, 255);
        style.set_colors(text, Color::from_rgba8(200, 200, 200, 255));
        assert_eq!(style.cursor_color.to_rgba8(), text.to_rgba8());
    }

    #[test]
    fn test_explicit_cursor_color() {
        let mut style = TextViewStyle::default();
        let cursor = Color::from_rgba8(59, 130, 246, 255);
        style.set_colors_with_cursor(Color::BLACK, Color::WHITE, cursor);
        assert_eq!(style.cursor_color.to_rgba8(), cursor.to_rgba8());
        assert_eq!(style.placeholder_color.to_rgba8(), Color::WHITE.to_rgba8());
    }
}
