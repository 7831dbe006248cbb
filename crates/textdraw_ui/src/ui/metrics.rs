//! Text measurement
//!
//! Widgets never measure glyphs themselves; they ask a [`TextMeasure`]
//! implementation. [`TextDrawMetrics`] is a table-driven approximation of the
//! game's text-draw fonts, good enough for wrapping. Servers with exact font
//! tables can plug in their own implementation.

use crate::foundation::math::Vec2;
use crate::ui::widgets::TextDrawFont;

/// Style inputs that affect measured size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font face
    pub font: TextDrawFont,
    /// Letter size (x scales advances, y scales line height)
    pub letter_size: Vec2,
    /// Proportional spacing
    pub proportional: bool,
}

/// Measures text in canvas units
///
/// Implementations must be pure, and width must not decrease when
/// characters are appended.
pub trait TextMeasure {
    /// Size of `text` when drawn with `style`
    fn measure(&self, text: &str, style: &TextStyle) -> Vec2;

    /// Width of `text` when drawn with `style`
    fn width(&self, text: &str, style: &TextStyle) -> f32 {
        self.measure(text, style).x
    }
}

impl<F> TextMeasure for F
where
    F: Fn(&str, &TextStyle) -> Vec2,
{
    fn measure(&self, text: &str, style: &TextStyle) -> Vec2 {
        self(text, style)
    }
}

/// Height of one line in letter-size units
const LINE_HEIGHT: f32 = 9.0;

/// Glyph advance used by fixed-width rendering
const FIXED_ADVANCE: f32 = 18.0;

/// Approximate text-draw metrics
#[derive(Debug, Clone, Copy, Default)]
pub struct TextDrawMetrics;

impl TextDrawMetrics {
    /// Create the default metrics
    pub fn new() -> Self {
        Self
    }

    /// Advance of one character, before letter-size scaling
    pub fn advance(c: char, style: &TextStyle) -> f32 {
        if !style.proportional {
            return FIXED_ADVANCE * font_scale(style.font);
        }

        let base = match c {
            '\n' => 0.0,
            'i' | 'l' | 'j' | '!' | '.' | ',' | ':' | ';' | '\'' | '|' => 6.0,
            ' ' | 'I' | 'f' | 't' | 'r' | '(' | ')' | '[' | ']' | '-' => 9.0,
            'm' | 'w' | 'M' | 'W' | '@' | '%' => 18.0,
            c if c.is_ascii_uppercase() || c.is_ascii_digit() => 14.0,
            _ => 12.0,
        };
        base * font_scale(style.font)
    }
}

impl TextMeasure for TextDrawMetrics {
    fn measure(&self, text: &str, style: &TextStyle) -> Vec2 {
        let mut widest = 0.0f32;
        let mut current = 0.0f32;
        let mut lines = 1u32;

        for c in text.chars() {
            if c == '\n' {
                widest = widest.max(current);
                current = 0.0;
                lines += 1;
                continue;
            }
            current += Self::advance(c, style);
        }
        widest = widest.max(current);

        Vec2::new(
            widest * style.letter_size.x,
            lines as f32 * LINE_HEIGHT * style.letter_size.y,
        )
    }

    fn width(&self, text: &str, style: &TextStyle) -> f32 {
        // Wrapping only ever measures single-line prefixes
        text.chars()
            .filter(|&c| c != '\n')
            .map(|c| Self::advance(c, style))
            .sum::<f32>()
            * style.letter_size.x
    }
}

fn font_scale(font: TextDrawFont) -> f32 {
    match font {
        TextDrawFont::Diploma => 1.1,
        TextDrawFont::Normal => 1.0,
        TextDrawFont::Slim => 0.85,
        TextDrawFont::Pricedown => 1.2,
    }
}
