//! Text area widget - multi-line label that wraps its text to its width
//!
//! Style setters only record values in a [`PropertyStore`]; nothing reaches
//! the underlying [`Label`] until the next render pass, which pushes every
//! changed property at once with the label's layout suspended.

use super::core::{TextDrawFont, UIElement};
use super::label::Label;
use super::panel::UIPanel;
use super::Control;
use crate::core::config::TextAreaConfig;
use crate::events::Event;
use crate::foundation::color::Color;
use crate::foundation::math::Vec2;
use crate::ui::error::UiResult;
use crate::ui::metrics::{TextDrawMetrics, TextMeasure, TextStyle};
use crate::ui::properties::{PropertyError, PropertyKey, PropertyStore, PropertyType};
use crate::ui::reflow::reflow;

const CONTROL: &str = "TextArea";

/// Batched properties of a [`TextArea`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAreaProperty {
    /// Font style
    Font,
    /// Text color
    ForeColor,
    /// Letter size
    LetterSize,
    /// Outline thickness
    Outline,
    /// Proportional spacing
    Proportional,
    /// Shadow size
    Shadow,
    /// Wrapped text
    Text,
}

impl PropertyKey for TextAreaProperty {
    fn name(self) -> &'static str {
        match self {
            TextAreaProperty::Font => "Font",
            TextAreaProperty::ForeColor => "ForeColor",
            TextAreaProperty::LetterSize => "LetterSize",
            TextAreaProperty::Outline => "Outline",
            TextAreaProperty::Proportional => "Proportional",
            TextAreaProperty::Shadow => "Shadow",
            TextAreaProperty::Text => "Text",
        }
    }
}

fn register_properties(
    store: &mut PropertyStore<TextAreaProperty, Label>,
) -> Result<(), PropertyError> {
    store.register(TextAreaProperty::Font, |label: &mut Label, font: &TextDrawFont| {
        label.set_font(*font);
        Ok(())
    })?;
    store.register(TextAreaProperty::ForeColor, |label: &mut Label, color: &Color| {
        label.set_fore_color(*color);
        Ok(())
    })?;
    store.register(TextAreaProperty::LetterSize, |label: &mut Label, size: &Vec2| {
        label.set_letter_size(*size);
        Ok(())
    })?;
    store.register(TextAreaProperty::Outline, |label: &mut Label, outline: &i32| {
        label.set_outline(*outline);
        Ok(())
    })?;
    store.register(TextAreaProperty::Proportional, |label: &mut Label, proportional: &bool| {
        label.set_proportional(*proportional);
        Ok(())
    })?;
    store.register(TextAreaProperty::Shadow, |label: &mut Label, shadow: &i32| {
        label.set_shadow(*shadow);
        Ok(())
    })?;
    store.register(TextAreaProperty::Text, |label: &mut Label, text: &String| {
        label.set_text(text).map_err(Into::into)
    })?;
    Ok(())
}

/// Multi-line text area
///
/// Assigned text is wrapped to the control's width using `M` to measure it.
/// The wrapped text is recomputed whenever the text, the width, or a style
/// property that affects measurement changes.
pub struct TextArea<M: TextMeasure = TextDrawMetrics> {
    panel: UIPanel,
    properties: PropertyStore<TextAreaProperty, Label>,
    text: String,
    metrics: M,
}

impl TextArea<TextDrawMetrics> {
    /// Create a text area with the default style and metrics
    pub fn new() -> UiResult<Self> {
        Self::with_config(&TextAreaConfig::default(), TextDrawMetrics::new())
    }
}

impl<M: TextMeasure> TextArea<M> {
    /// Create a text area styled from `config`, measuring text with `metrics`
    pub fn with_config(config: &TextAreaConfig, metrics: M) -> UiResult<Self> {
        let mut properties = PropertyStore::new();
        register_properties(&mut properties)?;
        properties.bind(Label::new());

        let mut area = Self {
            panel: UIPanel::new(),
            properties,
            text: String::new(),
            metrics,
        };

        area.set_property(TextAreaProperty::Font, config.font)?;
        area.set_property(TextAreaProperty::ForeColor, config.fore_color)?;
        area.set_property(TextAreaProperty::LetterSize, config.letter_size)?;
        area.set_property(TextAreaProperty::Outline, config.outline)?;
        area.set_property(TextAreaProperty::Proportional, config.proportional)?;
        area.set_property(TextAreaProperty::Shadow, config.shadow)?;
        area.panel.set_back_color(config.back_color)?;
        area.refit()?;

        // Nobody can be listening yet
        area.panel.drain_events();
        Ok(area)
    }

    /// Unwrapped text as last assigned
    pub fn text(&self) -> UiResult<&str> {
        self.panel.ensure_not_disposed(CONTROL)?;
        Ok(&self.text)
    }

    /// Text as wrapped for the current width, pending for the next render pass
    pub fn fitted_text(&self) -> UiResult<&str> {
        self.get::<String>(TextAreaProperty::Text).map(String::as_str)
    }

    /// Assign new text and rewrap it
    ///
    /// Returns whether the wrapped text changed.
    pub fn set_text(&mut self, text: impl Into<String>) -> UiResult<bool> {
        self.panel.ensure_not_disposed(CONTROL)?;

        let text = text.into();
        let fitted = self.fit(&text, self.panel.width())?;
        if self.text != text {
            self.text = text;
            self.panel.notify_property_changed("Text");
        }

        self.store_fitted(fitted)
    }

    /// Font style
    pub fn font(&self) -> UiResult<TextDrawFont> {
        self.get(TextAreaProperty::Font).copied()
    }

    /// Set font style
    pub fn set_font(&mut self, font: TextDrawFont) -> UiResult<bool> {
        self.set_measured_property(TextAreaProperty::Font, font)
    }

    /// Text color
    pub fn fore_color(&self) -> UiResult<Color> {
        self.get(TextAreaProperty::ForeColor).copied()
    }

    /// Set text color
    pub fn set_fore_color(&mut self, color: impl Into<Color>) -> UiResult<bool> {
        self.set_property(TextAreaProperty::ForeColor, color.into())
    }

    /// Letter size
    pub fn letter_size(&self) -> UiResult<Vec2> {
        self.get(TextAreaProperty::LetterSize).copied()
    }

    /// Set letter size
    pub fn set_letter_size(&mut self, letter_size: Vec2) -> UiResult<bool> {
        self.set_measured_property(TextAreaProperty::LetterSize, letter_size)
    }

    /// Outline thickness
    pub fn outline(&self) -> UiResult<i32> {
        self.get(TextAreaProperty::Outline).copied()
    }

    /// Set outline thickness
    pub fn set_outline(&mut self, outline: i32) -> UiResult<bool> {
        self.set_property(TextAreaProperty::Outline, outline)
    }

    /// Proportional spacing
    pub fn proportional(&self) -> UiResult<bool> {
        self.get(TextAreaProperty::Proportional).copied()
    }

    /// Set proportional spacing
    pub fn set_proportional(&mut self, proportional: bool) -> UiResult<bool> {
        self.set_measured_property(TextAreaProperty::Proportional, proportional)
    }

    /// Shadow size
    pub fn shadow(&self) -> UiResult<i32> {
        self.get(TextAreaProperty::Shadow).copied()
    }

    /// Set shadow size
    pub fn set_shadow(&mut self, shadow: i32) -> UiResult<bool> {
        self.set_property(TextAreaProperty::Shadow, shadow)
    }

    /// Background color
    pub fn back_color(&self) -> UiResult<Color> {
        self.panel.ensure_not_disposed(CONTROL)?;
        Ok(self.panel.back_color())
    }

    /// Set background color
    pub fn set_back_color(&mut self, color: impl Into<Color>) -> UiResult<()> {
        self.panel.ensure_not_disposed(CONTROL)?;
        self.panel.set_back_color(color.into())
    }

    /// Move the control
    pub fn set_position(&mut self, x: f32, y: f32) -> UiResult<()> {
        self.panel.ensure_not_disposed(CONTROL)?;
        let position = Vec2::new(x, y);
        self.panel.element.position = position;
        if let Some(label) = self.properties.target_mut() {
            label.element.position = position;
        }
        self.panel.invalidate();
        Ok(())
    }

    /// Underlying label, as of the last render pass
    pub fn label(&self) -> Option<&Label> {
        self.properties.target()
    }

    /// Number of properties waiting for the next render pass
    pub fn pending_changes(&self) -> usize {
        self.properties.dirty_count()
    }

    fn get<V: PropertyType>(&self, key: TextAreaProperty) -> UiResult<&V> {
        self.panel.ensure_not_disposed(CONTROL)?;
        Ok(self.properties.get(key)?)
    }

    fn set_property<V: PropertyType>(&mut self, key: TextAreaProperty, value: V) -> UiResult<bool> {
        self.panel.ensure_not_disposed(CONTROL)?;

        let changed = self.properties.set(key, value)?;
        if changed {
            self.panel.notify_property_changed(key.name());
            self.panel.invalidate();
        }
        Ok(changed)
    }

    /// Set a property that changes how text measures, rewrapping on change
    fn set_measured_property<V: PropertyType>(
        &mut self,
        key: TextAreaProperty,
        value: V,
    ) -> UiResult<bool> {
        let changed = self.set_property(key, value)?;
        if changed {
            self.refit()?;
        }
        Ok(changed)
    }

    /// Rewrap the current text at the current width
    fn refit(&mut self) -> UiResult<bool> {
        let fitted = self.fit(&self.text, self.panel.width())?;
        self.store_fitted(fitted)
    }

    /// Wrap `text` at `width` with the current style, without storing it
    fn fit(&self, text: &str, width: f32) -> UiResult<String> {
        let style = TextStyle {
            font: *self.properties.get(TextAreaProperty::Font)?,
            letter_size: *self.properties.get(TextAreaProperty::LetterSize)?,
            proportional: *self.properties.get(TextAreaProperty::Proportional)?,
        };

        let metrics = &self.metrics;
        Ok(reflow(text, |s| metrics.width(s, &style), width)?)
    }

    fn store_fitted(&mut self, fitted: String) -> UiResult<bool> {
        let changed = self.properties.set(TextAreaProperty::Text, fitted)?;
        if changed {
            self.panel.invalidate();
        }
        Ok(changed)
    }
}

impl<M: TextMeasure> Control for TextArea<M> {
    fn element(&self) -> &UIElement {
        &self.panel.element
    }

    fn needs_render(&self) -> bool {
        self.panel.needs_render()
    }

    fn set_size(&mut self, width: f32, height: f32) -> UiResult<()> {
        self.panel.ensure_not_disposed(CONTROL)?;
        let size = Vec2::new(width, height);
        if self.panel.size() == size {
            return Ok(());
        }

        // Nothing changes unless the text fits the new width
        let fitted = self.fit(&self.text, width)?;
        self.panel.resize(size)?;
        if let Some(label) = self.properties.target_mut() {
            label.element.size = size;
        }
        self.store_fitted(fitted)?;
        Ok(())
    }

    fn render(&mut self) -> UiResult<()> {
        self.panel.ensure_not_disposed(CONTROL)?;

        let pushed = self.properties.apply_suspended()?;
        if pushed > 0 {
            log::debug!("TextArea pushed {} properties to its label", pushed);
        }

        self.panel.render()
    }

    fn dispose(&mut self) {
        if self.panel.is_disposed() {
            return;
        }
        if let Some(label) = self.properties.target_mut() {
            label.hide();
        }
        self.panel.dispose();
        log::debug!("TextArea disposed");
    }

    fn is_disposed(&self) -> bool {
        self.panel.is_disposed()
    }

    fn drain_events(&mut self) -> Vec<Event> {
        self.panel.drain_events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventType;
    use crate::ui::error::UiError;
    use crate::ui::properties::PropertyError;
    use crate::ui::widgets::MAX_TEXT_LENGTH;

    /// One unit per character, scaled by letter width
    fn unit_metrics(text: &str, style: &TextStyle) -> Vec2 {
        Vec2::new(text.chars().count() as f32 * style.letter_size.x, 1.0)
    }

    fn unit_config() -> TextAreaConfig {
        TextAreaConfig::new().with_letter_size(1.0, 1.0)
    }

    fn text_area(width: f32) -> TextArea<fn(&str, &TextStyle) -> Vec2> {
        let metrics: fn(&str, &TextStyle) -> Vec2 = unit_metrics;
        let mut area = TextArea::with_config(&unit_config(), metrics).unwrap();
        area.set_size(width, 20.0).unwrap();
        area.render().unwrap();
        area.drain_events();
        area
    }

    fn property_events(area: &mut TextArea<impl TextMeasure>) -> Vec<&'static str> {
        area.drain_events()
            .iter()
            .filter(|event| event.event_type == EventType::PropertyChanged)
            .filter_map(Event::get_property)
            .collect()
    }

    #[test]
    fn test_defaults_are_pushed_on_first_render() {
        let mut area = TextArea::new().unwrap();
        assert_eq!(area.label().unwrap().shadow(), 2);
        assert!(area.needs_render());
        assert!(area.drain_events().is_empty());

        area.render().unwrap();

        let label = area.label().unwrap();
        assert_eq!(label.shadow(), 0);
        assert_eq!(label.letter_size(), Vec2::new(0.18, 0.9));
        assert_eq!(area.back_color().unwrap(), Color(0x0000_0001));
        assert_eq!(area.pending_changes(), 0);
        assert!(!area.needs_render());
    }

    #[test]
    fn test_text_is_wrapped_to_width() {
        let mut area = text_area(5.0);
        assert!(area.set_text("HelloWorld").unwrap());

        assert_eq!(area.text().unwrap(), "HelloWorld");
        assert_eq!(area.fitted_text().unwrap(), "Hello\nWorld");
        assert_eq!(area.label().unwrap().text(), "");

        area.render().unwrap();
        assert_eq!(area.label().unwrap().text(), "Hello\nWorld");
    }

    #[test]
    fn test_resize_rewraps_text() {
        let mut area = text_area(5.0);
        area.set_text("HelloWorld").unwrap();

        area.set_size(10.0, 20.0).unwrap();
        assert_eq!(area.fitted_text().unwrap(), "HelloWorld");

        area.set_size(4.0, 20.0).unwrap();
        assert_eq!(area.fitted_text().unwrap(), "Hell\noWor\nld");
        assert_eq!(area.text().unwrap(), "HelloWorld");
    }

    #[test]
    fn test_letter_size_change_rewraps_text() {
        let mut area = text_area(10.0);
        area.set_text("HelloWorld").unwrap();
        assert_eq!(area.fitted_text().unwrap(), "HelloWorld");

        assert!(area.set_letter_size(Vec2::new(2.0, 1.0)).unwrap());
        assert_eq!(area.fitted_text().unwrap(), "Hello\nWorld");
    }

    #[test]
    fn test_same_fore_color_is_not_pushed() {
        let mut area = text_area(10.0);
        assert_eq!(area.fore_color().unwrap(), Color::WHITE);

        assert!(!area.set_fore_color(Color::WHITE).unwrap());
        assert!(!area.needs_render());
        assert_eq!(area.pending_changes(), 0);
        assert!(property_events(&mut area).is_empty());
    }

    #[test]
    fn test_changed_fore_color_invalidates_and_notifies() {
        let mut area = text_area(10.0);

        assert!(area.set_fore_color(Color(0xFF00_00FF)).unwrap());
        assert!(area.needs_render());
        assert_eq!(property_events(&mut area), ["ForeColor"]);
        assert_eq!(area.label().unwrap().fore_color(), Color::WHITE);

        area.render().unwrap();
        assert_eq!(area.label().unwrap().fore_color(), Color(0xFF00_00FF));
    }

    #[test]
    fn test_render_pass_relayouts_label_once() {
        let mut area = text_area(10.0);
        let passes = area.label().unwrap().layout_passes();

        area.set_fore_color(Color::BLACK).unwrap();
        area.set_outline(1).unwrap();
        area.set_shadow(3).unwrap();
        area.set_font(TextDrawFont::Slim).unwrap();
        area.set_text("batched").unwrap();
        area.render().unwrap();

        let label = area.label().unwrap();
        assert_eq!(label.layout_passes(), passes + 1);
        assert_eq!(label.outline(), 1);
        assert_eq!(label.shadow(), 3);
        assert_eq!(label.font(), TextDrawFont::Slim);
        assert!(!label.is_layout_suspended());
    }

    #[test]
    fn test_render_without_changes_pushes_nothing() {
        let mut area = text_area(10.0);
        let passes = area.label().unwrap().layout_passes();

        area.render().unwrap();
        area.render().unwrap();

        assert_eq!(area.label().unwrap().layout_passes(), passes);
    }

    #[test]
    fn test_text_change_event_only_when_raw_text_changes() {
        let mut area = text_area(5.0);

        area.set_text("abc").unwrap();
        assert_eq!(property_events(&mut area), ["Text"]);

        assert!(!area.set_text("abc").unwrap());
        assert!(property_events(&mut area).is_empty());
    }

    #[test]
    fn test_failed_push_releases_layout_suspension() {
        let mut area = text_area(10_000.0);
        area.set_text("x".repeat(MAX_TEXT_LENGTH + 1)).unwrap();

        let err = area.render().unwrap_err();
        assert!(matches!(err, UiError::Property(PropertyError::Apply { name: "Text", .. })));
        assert!(!area.label().unwrap().is_layout_suspended());

        area.set_text("short").unwrap();
        area.render().unwrap();
        assert_eq!(area.label().unwrap().text(), "short");
    }

    #[test]
    fn test_whitespace_text_fits_to_nothing() {
        let mut area = text_area(5.0);
        area.set_text("    ").unwrap();
        assert_eq!(area.text().unwrap(), "    ");
        assert_eq!(area.fitted_text().unwrap(), "");
    }

    #[test]
    fn test_use_after_dispose() {
        let mut area = text_area(5.0);
        area.dispose();
        area.dispose();

        assert!(area.is_disposed());
        assert!(!area.label().unwrap().element.visible);
        assert!(matches!(
            area.set_fore_color(Color::BLACK),
            Err(UiError::UseAfterDispose { control: "TextArea" })
        ));
        assert!(matches!(area.set_text("late"), Err(UiError::UseAfterDispose { .. })));
        assert!(matches!(area.fore_color(), Err(UiError::UseAfterDispose { .. })));
        assert!(matches!(area.text(), Err(UiError::UseAfterDispose { .. })));
        assert!(matches!(area.set_size(1.0, 1.0), Err(UiError::UseAfterDispose { .. })));
        assert!(matches!(area.render(), Err(UiError::UseAfterDispose { .. })));
    }

    #[test]
    fn test_nan_width_is_invalid_argument() {
        let mut area = text_area(5.0);
        area.set_text("abc").unwrap();
        area.render().unwrap();
        area.drain_events();

        assert!(matches!(area.set_size(f32::NAN, 10.0), Err(UiError::InvalidArgument(_))));
        assert_eq!(area.element().size, Vec2::new(5.0, 20.0));
        assert_eq!(area.label().unwrap().element.size, Vec2::new(5.0, 20.0));
        assert!(!area.needs_render());
        assert!(area.drain_events().is_empty());
    }

    #[test]
    fn test_text_still_fits_after_rejected_width() {
        let mut area = text_area(5.0);
        area.set_text("abc").unwrap();
        let _ = area.set_size(f32::NAN, 10.0);

        assert!(area.set_text("HelloWorld").unwrap());
        assert_eq!(area.text().unwrap(), "HelloWorld");
        assert_eq!(area.fitted_text().unwrap(), "Hello\nWorld");
    }
}
