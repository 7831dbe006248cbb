//! UI widgets module
//!
//! Contains all UI widget types (panels, labels, text areas) and the
//! [`Control`] lifecycle every widget managed by the
//! [`UIManager`](crate::ui::UIManager) implements.

pub mod core;
pub mod label;
pub mod panel;
pub mod text_area;

// Re-export core types
pub use self::core::{Anchor, LayoutGuard, SuspendLayout, TextDrawFont, UIElement};

// Re-export widget types
pub use label::{Label, LabelError, MAX_TEXT_LENGTH};
pub use panel::UIPanel;
pub use text_area::{TextArea, TextAreaProperty};

use crate::events::Event;
use crate::ui::error::UiResult;

/// Lifecycle protocol shared by all controls
pub trait Control {
    /// Base element properties
    fn element(&self) -> &UIElement;

    /// Whether the control asked for a render pass since the last one
    fn needs_render(&self) -> bool;

    /// Resize the control
    fn set_size(&mut self, width: f32, height: f32) -> UiResult<()>;

    /// Render pass hook
    fn render(&mut self) -> UiResult<()>;

    /// Dispose the control; calling it again has no effect
    fn dispose(&mut self);

    /// Whether the control has been disposed
    fn is_disposed(&self) -> bool;

    /// Take the events queued since the last call
    fn drain_events(&mut self) -> Vec<Event>;
}
