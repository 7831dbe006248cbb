//! # Unified Configuration System
//!
//! Configuration for the UI layer: logging, the virtual text-draw canvas and
//! the defaults new widgets start from.
//!
//! ## Configuration Categories
//!
//! - **Screen Config**: Virtual canvas size all text-draw coordinates refer to
//! - **Text Area Config**: Initial style of every [`TextArea`](crate::ui::TextArea)
//! - **UI Config**: Top-level container, loadable from TOML or RON

use serde::{Serialize, Deserialize};

use crate::foundation::color::Color;
use crate::foundation::math::Vec2;
use crate::ui::widgets::TextDrawFont;

// Re-export from the config module for convenience
pub use crate::config::{Config, ConfigError};

/// # Screen Configuration
///
/// Text draws are positioned on a fixed virtual canvas that the game client
/// scales to the real resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Canvas width in text-draw units
    pub width: f32,
    /// Canvas height in text-draw units
    pub height: f32,
}

impl ScreenConfig {
    /// Create a new screen configuration
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(format!(
                "Screen size must be positive, got {}x{}",
                self.width, self.height
            ));
        }
        Ok(())
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self::new(640.0, 480.0)
    }
}

/// # Text Area Configuration
///
/// Style a text area is initialised with. Each value is assigned through the
/// regular setters, so all of them reach the label on the first render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextAreaConfig {
    /// Font style
    pub font: TextDrawFont,
    /// Text color
    pub fore_color: Color,
    /// Panel background color
    pub back_color: Color,
    /// Letter size (x scales advance width, y scales line height)
    pub letter_size: Vec2,
    /// Outline thickness, 0 disables the outline
    pub outline: i32,
    /// Whether glyphs use proportional spacing
    pub proportional: bool,
    /// Drop shadow size, 0 disables the shadow
    pub shadow: i32,
}

impl TextAreaConfig {
    /// Create a configuration with the default style
    pub fn new() -> Self {
        Self {
            font: TextDrawFont::Normal,
            fore_color: Color::WHITE,
            back_color: Color(0x0000_0001),
            letter_size: Vec2::new(0.18, 0.9),
            outline: 0,
            proportional: true,
            shadow: 0,
        }
    }

    /// Set font
    pub fn with_font(mut self, font: TextDrawFont) -> Self {
        self.font = font;
        self
    }

    /// Set text color
    pub fn with_fore_color(mut self, color: impl Into<Color>) -> Self {
        self.fore_color = color.into();
        self
    }

    /// Set background color
    pub fn with_back_color(mut self, color: impl Into<Color>) -> Self {
        self.back_color = color.into();
        self
    }

    /// Set letter size
    pub fn with_letter_size(mut self, x: f32, y: f32) -> Self {
        self.letter_size = Vec2::new(x, y);
        self
    }

    /// Set outline thickness
    pub fn with_outline(mut self, outline: i32) -> Self {
        self.outline = outline;
        self
    }

    /// Enable or disable proportional spacing
    pub fn with_proportional(mut self, proportional: bool) -> Self {
        self.proportional = proportional;
        self
    }

    /// Set shadow size
    pub fn with_shadow(mut self, shadow: i32) -> Self {
        self.shadow = shadow;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.letter_size.x.is_finite() && self.letter_size.y.is_finite()) {
            return Err("Letter size must be finite".to_string());
        }
        if self.letter_size.x <= 0.0 || self.letter_size.y <= 0.0 {
            return Err(format!(
                "Letter size must be positive, got ({}, {})",
                self.letter_size.x, self.letter_size.y
            ));
        }
        if self.outline < 0 || self.shadow < 0 {
            return Err("Outline and shadow cannot be negative".to_string());
        }
        Ok(())
    }
}

impl Default for TextAreaConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Complete UI Configuration
///
/// Top-level configuration that encompasses all UI subsystems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Log filter used by [`init_with_level`](crate::foundation::logging::init_with_level)
    pub log_level: String,
    /// Virtual canvas
    pub screen: ScreenConfig,
    /// Defaults for new text areas
    pub text_area: TextAreaConfig,
}

impl UiConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            screen: ScreenConfig::default(),
            text_area: TextAreaConfig::default(),
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set text area defaults
    pub fn with_text_area(mut self, text_area: TextAreaConfig) -> Self {
        self.text_area = text_area;
        self
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.screen.validate().map_err(ConfigError::Invalid)?;
        self.text_area.validate().map_err(ConfigError::Invalid)?;
        Ok(())
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for UiConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_area_defaults() {
        let config = TextAreaConfig::default();
        assert_eq!(config.shadow, 0);
        assert_eq!(config.letter_size, Vec2::new(0.18, 0.9));
        assert_eq!(config.back_color, Color(0x0000_0001));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_letter_size_rejected() {
        let config =
            UiConfig::new().with_text_area(TextAreaConfig::new().with_letter_size(0.0, 1.0));
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_toml_partial_config_uses_defaults() {
        let config = UiConfig::from_toml_str(
            r#"
            log_level = "debug"

            [text_area]
            font = "Pricedown"
            shadow = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.text_area.font, TextDrawFont::Pricedown);
        assert_eq!(config.text_area.shadow, 2);
        assert_eq!(config.text_area.letter_size, Vec2::new(0.18, 0.9));
        assert_eq!(config.screen, ScreenConfig::default());
    }

    #[test]
    fn test_ron_config() {
        let config = UiConfig::from_ron_str(
            "(log_level: \"warn\", screen: (width: 800.0, height: 600.0))",
        )
        .unwrap();

        assert_eq!(config.log_level, "warn");
        assert_eq!(config.screen, ScreenConfig::new(800.0, 600.0));
        assert_eq!(config.text_area, TextAreaConfig::default());
    }

    #[test]
    fn test_unsupported_extension() {
        let result = UiConfig::load_from_file("settings.json");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = std::env::temp_dir()
            .join(format!("textdraw_ui_config_{}.toml", std::process::id()));
        let config = UiConfig::new()
            .with_log_level("trace")
            .with_text_area(TextAreaConfig::new().with_outline(1).with_fore_color(0xFF00_00FFu32));

        config.save_to_file(&path).unwrap();
        let loaded = UiConfig::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, config);
    }
}
