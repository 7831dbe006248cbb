//! UI System Module
//!
//! Retained-mode widgets built on text draws.
//!
//! Architecture:
//! - UIManager: Owns controls, runs render passes, forwards control events
//! - widgets/: Widget definitions (Panel, Label, TextArea)
//! - properties: Batched property store flushed once per render pass
//! - reflow: Greedy character-boundary text wrapping
//! - metrics: Text measurement used by reflow

pub mod manager;
pub mod error;
pub mod metrics;
pub mod properties;
pub mod reflow;
pub mod widgets;

#[cfg(test)]
mod tests;

pub use manager::UIManager;
pub use error::{UiError, UiResult};
pub use metrics::{TextDrawMetrics, TextMeasure, TextStyle};
pub use properties::{PropertyError, PropertyKey, PropertyStore, PropertyType, PropertyValue};
pub use reflow::{reflow, wrap_lines, ReflowError};

// Re-export widgets
pub use widgets::{
    Anchor, Control, Label, LabelError, TextArea, TextAreaProperty, TextDrawFont, UIElement,
    UIPanel,
};

// Re-export events
pub use crate::events::EventSystem;

/// Unique identifier for UI elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UINodeId(pub u64);
