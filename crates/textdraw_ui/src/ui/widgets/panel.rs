//! Panel widget - rectangular background that hosts other widgets

use super::core::UIElement;
use super::Control;
use crate::events::{Event, EventArg, EventType};
use crate::foundation::color::Color;
use crate::foundation::math::Vec2;
use crate::ui::error::{UiError, UiResult};

/// UI panel component - a colored rectangle background
///
/// Also carries the lifecycle state shared by every control: invalidation,
/// disposal and the queue of events waiting to be collected.
#[derive(Debug, Clone)]
pub struct UIPanel {
    /// Base element properties
    pub element: UIElement,

    back_color: Color,
    invalidated: bool,
    disposed: bool,
    render_passes: u64,
    events: Vec<Event>,
}

impl UIPanel {
    /// Create a panel with the default background
    pub fn new() -> Self {
        Self::default()
    }

    /// Background color
    pub fn back_color(&self) -> Color {
        self.back_color
    }

    /// Set background color
    pub fn set_back_color(&mut self, color: Color) -> UiResult<()> {
        self.ensure_not_disposed("UIPanel")?;
        if self.back_color != color {
            self.back_color = color;
            self.notify_property_changed("BackColor");
            self.invalidate();
        }
        Ok(())
    }

    /// Current size
    pub fn size(&self) -> Vec2 {
        self.element.size
    }

    /// Current width
    pub fn width(&self) -> f32 {
        self.element.size.x
    }

    /// Resize the panel, returning whether the size changed
    pub fn resize(&mut self, size: Vec2) -> UiResult<bool> {
        self.ensure_not_disposed("UIPanel")?;
        if self.element.size == size {
            return Ok(false);
        }
        self.element.size = size;
        let event = Event::new(EventType::SizeChanged, 0.0)
            .with_arg("size", EventArg::Size(size.x, size.y));
        self.events.push(event);
        self.invalidate();
        Ok(true)
    }

    /// Request a render pass
    pub fn invalidate(&mut self) {
        self.invalidated = true;
    }

    /// Whether a render pass has been requested
    pub fn is_invalidated(&self) -> bool {
        self.invalidated
    }

    /// Number of render passes performed
    pub fn render_passes(&self) -> u64 {
        self.render_passes
    }

    /// Queue a property-changed event
    pub fn notify_property_changed(&mut self, property: &'static str) {
        self.events.push(Event::property_changed(property));
    }

    /// Fail with [`UiError::UseAfterDispose`] once disposed
    pub fn ensure_not_disposed(&self, control: &'static str) -> UiResult<()> {
        if self.disposed {
            log::warn!("Rejected operation on disposed {}", control);
            return Err(UiError::UseAfterDispose { control });
        }
        Ok(())
    }
}

impl Default for UIPanel {
    fn default() -> Self {
        Self {
            element: UIElement::default(),
            back_color: Color::TRANSPARENT,
            invalidated: true,
            disposed: false,
            render_passes: 0,
            events: Vec::new(),
        }
    }
}

impl Control for UIPanel {
    fn element(&self) -> &UIElement {
        &self.element
    }

    fn needs_render(&self) -> bool {
        !self.disposed && self.invalidated
    }

    fn set_size(&mut self, width: f32, height: f32) -> UiResult<()> {
        self.resize(Vec2::new(width, height)).map(|_| ())
    }

    fn render(&mut self) -> UiResult<()> {
        self.ensure_not_disposed("UIPanel")?;
        self.invalidated = false;
        self.render_passes += 1;
        log::debug!(
            "Rendered panel {:?} at {:?} ({})",
            self.element.size,
            self.element.position,
            self.back_color
        );
        Ok(())
    }

    fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.element.visible = false;
        self.events.push(Event::new(EventType::Disposed, 0.0));
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_panel_needs_render() {
        let mut panel = UIPanel::new();
        assert!(panel.needs_render());
        panel.render().unwrap();
        assert!(!panel.needs_render());
        assert_eq!(panel.render_passes(), 1);
    }

    #[test]
    fn test_back_color_change_invalidates() {
        let mut panel = UIPanel::new();
        panel.render().unwrap();

        panel.set_back_color(Color::TRANSPARENT).unwrap();
        assert!(!panel.is_invalidated());
        assert!(panel.drain_events().is_empty());

        panel.set_back_color(Color(0x0000_0001)).unwrap();
        assert!(panel.is_invalidated());
        let events = panel.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].get_property(), Some("BackColor"));
    }

    #[test]
    fn test_resize_reports_change() {
        let mut panel = UIPanel::new();
        assert!(panel.resize(Vec2::new(200.0, 40.0)).unwrap());
        assert!(!panel.resize(Vec2::new(200.0, 40.0)).unwrap());
        assert_eq!(panel.width(), 200.0);

        let events = panel.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].get_size(), Some((200.0, 40.0)));
    }

    #[test]
    fn test_disposed_panel_rejects_use() {
        let mut panel = UIPanel::new();
        panel.dispose();
        panel.dispose();

        assert!(panel.is_disposed());
        assert!(!panel.needs_render());
        assert!(matches!(panel.render(), Err(UiError::UseAfterDispose { control: "UIPanel" })));
        assert!(matches!(panel.set_size(1.0, 1.0), Err(UiError::UseAfterDispose { .. })));
        assert_eq!(panel.drain_events().len(), 1);
    }
}
