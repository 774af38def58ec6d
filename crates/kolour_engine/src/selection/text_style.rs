use bitflags::bitflags;

use crate::Color;

bitflags! {
    /// Font effects of a text box.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct TextEffects: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const UNDERLINE = 1 << 2;
        const STRIKE_THROUGH = 1 << 3;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextStyle {
    pub font_family: String,
    pub point_size: i32,
    pub effects: TextEffects,
    pub foreground: Color,
    pub background: Color,
    /// When false the box background shows the document beneath.
    pub background_opaque: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "Sans Serif".to_string(),
            point_size: 14,
            effects: TextEffects::empty(),
            foreground: Color::BLACK,
            background: Color::WHITE,
            background_opaque: false,
        }
    }
}

impl TextStyle {
    pub fn new(font_family: impl Into<String>, point_size: i32) -> Self {
        Self {
            font_family: font_family.into(),
            point_size,
            ..Default::default()
        }
    }

    pub fn is_bold(&self) -> bool {
        self.effects.contains(TextEffects::BOLD)
    }

    pub fn is_italic(&self) -> bool {
        self.effects.contains(TextEffects::ITALIC)
    }

    pub fn is_underline(&self) -> bool {
        self.effects.contains(TextEffects::UNDERLINE)
    }

    pub fn is_strike_through(&self) -> bool {
        self.effects.contains(TextEffects::STRIKE_THROUGH)
    }

    /// Height of one line of text in pixels.
    pub fn line_height(&self) -> i32 {
        (self.point_size * 3 / 2).max(1)
    }
}
