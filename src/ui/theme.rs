use crate::engine::config::ThemeConfig;
use ratatui::style::Color;

/// Colors used by every view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub marked: Color,
    pub cursor: Color,
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Theme {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38), // #1A1B26 Stormy Dark
            text: Color::Rgb(169, 177, 214),    // #A9B1D6 Light Blue
            marked: Color::Rgb(247, 118, 142),  // #F7768E Coral Red
            cursor: Color::Rgb(122, 162, 247),  // #7AA2F7 Blue
            dimmed: Color::Rgb(100, 110, 150),  // #646E96 Dimmed Blue
        }
    }

    /// Theme from config; colors that fail to parse keep the midnight value.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let base = Self::midnight();
        Self {
            background: parse_hex_color(&config.background_color).unwrap_or(base.background),
            text: parse_hex_color(&config.text_color).unwrap_or(base.text),
            marked: parse_hex_color(&config.marked_color).unwrap_or(base.marked),
            cursor: parse_hex_color(&config.cursor_color).unwrap_or(base.cursor),
            dimmed: parse_hex_color(&config.dimmed_color).unwrap_or(base.dimmed),
        }
    }
}

/// `#RRGGBB` → `Color::Rgb`
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.trim().strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}
