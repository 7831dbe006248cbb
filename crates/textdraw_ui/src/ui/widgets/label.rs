//! Label widget - a single text draw
//!
//! The label is the drawable a [`TextArea`](super::TextArea) pushes its
//! batched properties onto. Each setter marks the label for relayout; while
//! layout is suspended the relayouts collapse into one on resume.

use super::core::{SuspendLayout, TextDrawFont, UIElement};
use crate::foundation::color::Color;
use crate::foundation::math::Vec2;

/// Longest string a text draw accepts, in bytes
pub const MAX_TEXT_LENGTH: usize = 1024;

/// Errors raised by label setters
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LabelError {
    /// Text exceeds [`MAX_TEXT_LENGTH`]
    #[error("Text is {0} bytes, text draws hold at most {max}", max = MAX_TEXT_LENGTH)]
    TextTooLong(usize),
}

/// UI label component - one text draw with its style
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Base element properties
    pub element: UIElement,

    font: TextDrawFont,
    fore_color: Color,
    letter_size: Vec2,
    outline: i32,
    proportional: bool,
    shadow: i32,

    /// Literal text, including line separators
    text: String,

    suspend_depth: u32,
    layout_pending: bool,
    layout_passes: u64,
}

impl Label {
    /// Create an empty label
    pub fn new() -> Self {
        Self::default()
    }

    /// Font style
    pub fn font(&self) -> TextDrawFont {
        self.font
    }

    /// Set font style
    pub fn set_font(&mut self, font: TextDrawFont) {
        self.font = font;
        self.request_layout();
    }

    /// Text color
    pub fn fore_color(&self) -> Color {
        self.fore_color
    }

    /// Set text color
    pub fn set_fore_color(&mut self, color: Color) {
        self.fore_color = color;
        self.request_layout();
    }

    /// Letter size
    pub fn letter_size(&self) -> Vec2 {
        self.letter_size
    }

    /// Set letter size
    pub fn set_letter_size(&mut self, size: Vec2) {
        self.letter_size = size;
        self.request_layout();
    }

    /// Outline thickness
    pub fn outline(&self) -> i32 {
        self.outline
    }

    /// Set outline thickness
    pub fn set_outline(&mut self, outline: i32) {
        self.outline = outline;
        self.request_layout();
    }

    /// Proportional spacing
    pub fn proportional(&self) -> bool {
        self.proportional
    }

    /// Set proportional spacing
    pub fn set_proportional(&mut self, proportional: bool) {
        self.proportional = proportional;
        self.request_layout();
    }

    /// Shadow size
    pub fn shadow(&self) -> i32 {
        self.shadow
    }

    /// Set shadow size
    pub fn set_shadow(&mut self, shadow: i32) {
        self.shadow = shadow;
        self.request_layout();
    }

    /// Literal text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set literal text
    pub fn set_text(&mut self, text: &str) -> Result<(), LabelError> {
        if text.len() > MAX_TEXT_LENGTH {
            return Err(LabelError::TextTooLong(text.len()));
        }
        self.text.clear();
        self.text.push_str(text);
        self.request_layout();
        Ok(())
    }

    /// Hide the label
    pub fn hide(&mut self) {
        self.element.visible = false;
    }

    /// Whether layout is currently suspended
    pub fn is_layout_suspended(&self) -> bool {
        self.suspend_depth > 0
    }

    /// Number of layout passes performed so far
    pub fn layout_passes(&self) -> u64 {
        self.layout_passes
    }

    fn request_layout(&mut self) {
        self.layout_pending = true;
        if self.suspend_depth == 0 {
            self.perform_layout();
        }
    }

    fn perform_layout(&mut self) {
        self.layout_pending = false;
        self.layout_passes += 1;
        log::trace!("Label layout pass {} ({} bytes of text)", self.layout_passes, self.text.len());
    }
}

impl Default for Label {
    fn default() -> Self {
        Self {
            element: UIElement::default(),
            font: TextDrawFont::Normal,
            fore_color: Color::WHITE,
            letter_size: Vec2::new(0.48, 1.12),
            outline: 0,
            proportional: true,
            shadow: 2,
            text: String::new(),
            suspend_depth: 0,
            layout_pending: false,
            layout_passes: 0,
        }
    }
}

impl SuspendLayout for Label {
    fn suspend_layout(&mut self) {
        self.suspend_depth += 1;
    }

    fn resume_layout(&mut self) {
        self.suspend_depth = self.suspend_depth.saturating_sub(1);
        if self.suspend_depth == 0 && self.layout_pending {
            self.perform_layout();
        }
    }
}
