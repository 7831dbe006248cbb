//! UI Manager
//!
//! Central UI system that owns controls, drives render passes and collects
//! control events.

use super::error::UiResult;
use super::metrics::TextDrawMetrics;
use super::widgets::{Control, TextArea, UIPanel};
use super::UINodeId;
use crate::core::config::{ScreenConfig, TextAreaConfig, UiConfig};
use crate::events::{EventArg, EventSystem};
use std::collections::HashMap;

/// UI element storage
enum UINode {
    Panel(UIPanel),
    TextArea(TextArea),
}

impl UINode {
    fn control(&self) -> &dyn Control {
        match self {
            UINode::Panel(panel) => panel,
            UINode::TextArea(area) => area,
        }
    }

    fn control_mut(&mut self) -> &mut dyn Control {
        match self {
            UINode::Panel(panel) => panel,
            UINode::TextArea(area) => area,
        }
    }
}

/// Central UI management system
pub struct UIManager {
    /// UI elements by ID
    nodes: HashMap<UINodeId, UINode>,

    /// Next node ID
    next_id: u64,

    /// Event system for control notifications
    event_system: EventSystem,

    /// Style new text areas start from
    text_area_defaults: TextAreaConfig,

    /// Virtual canvas size
    screen: ScreenConfig,

    /// Render pass counter, used as event timestamp
    frame_counter: u64,
}

impl UIManager {
    /// Create a new UI manager with default configuration
    pub fn new() -> Self {
        Self::with_config(&UiConfig::default())
    }

    /// Create a UI manager from configuration
    pub fn with_config(config: &UiConfig) -> Self {
        Self {
            nodes: HashMap::new(),
            next_id: 0,
            event_system: EventSystem::new(),
            text_area_defaults: config.text_area.clone(),
            screen: config.screen.clone(),
            frame_counter: 0,
        }
    }

    fn insert(&mut self, node: UINode) -> UINodeId {
        let id = UINodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, node);
        id
    }

    /// Add a panel to the UI
    pub fn add_panel(&mut self, panel: UIPanel) -> UINodeId {
        self.insert(UINode::Panel(panel))
    }

    /// Add a text area to the UI
    pub fn add_text_area(&mut self, area: TextArea) -> UINodeId {
        self.insert(UINode::TextArea(area))
    }

    /// Create a text area styled with the configured defaults
    pub fn create_text_area(&mut self) -> UiResult<UINodeId> {
        let area = TextArea::with_config(&self.text_area_defaults, TextDrawMetrics::new())?;
        Ok(self.add_text_area(area))
    }

    /// Dispose and remove a UI element
    ///
    /// Events the control queued, including its disposal, are still delivered.
    pub fn remove_element(&mut self, id: UINodeId) -> bool {
        let Some(mut node) = self.nodes.remove(&id) else {
            return false;
        };
        let control = node.control_mut();
        control.dispose();
        self.forward_events(id, control);
        true
    }

    /// Number of controls
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no controls are registered
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get panel reference
    pub fn get_panel(&self, id: UINodeId) -> Option<&UIPanel> {
        match self.nodes.get(&id) {
            Some(UINode::Panel(panel)) => Some(panel),
            _ => None,
        }
    }

    /// Get panel mutable reference
    pub fn get_panel_mut(&mut self, id: UINodeId) -> Option<&mut UIPanel> {
        match self.nodes.get_mut(&id) {
            Some(UINode::Panel(panel)) => Some(panel),
            _ => None,
        }
    }

    /// Get text area reference
    pub fn get_text_area(&self, id: UINodeId) -> Option<&TextArea> {
        match self.nodes.get(&id) {
            Some(UINode::TextArea(area)) => Some(area),
            _ => None,
        }
    }

    /// Get text area mutable reference
    pub fn get_text_area_mut(&mut self, id: UINodeId) -> Option<&mut TextArea> {
        match self.nodes.get_mut(&id) {
            Some(UINode::TextArea(area)) => Some(area),
            _ => None,
        }
    }

    /// Set screen size
    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        self.screen = ScreenConfig::new(width, height);
    }

    /// Get screen size
    pub fn get_screen_size(&self) -> (f32, f32) {
        (self.screen.width, self.screen.height)
    }

    /// Get event system reference
    pub fn event_system(&self) -> &EventSystem {
        &self.event_system
    }

    /// Get event system mutable reference
    pub fn event_system_mut(&mut self) -> &mut EventSystem {
        &mut self.event_system
    }

    /// Run one render pass
    ///
    /// Every control that asked for a render pass is rendered, lowest z-order
    /// first. Events queued by any control are moved to the event system.
    /// A failing control does not stop the pass; the first failure is
    /// returned once every control has been visited. Otherwise returns the
    /// number of controls rendered.
    pub fn render(&mut self) -> UiResult<usize> {
        self.frame_counter += 1;

        let mut ids: Vec<UINodeId> = self.nodes.keys().copied().collect();
        ids.sort_by_key(|id| (self.nodes[id].control().element().z_order, id.0));

        let mut rendered = 0;
        let mut first_error = None;
        for id in ids {
            let Some(node) = self.nodes.get_mut(&id) else {
                continue;
            };
            let control = node.control_mut();
            if control.needs_render() {
                log::debug!("Rendering control {:?} at {:?}", id, control.element().position);
                match control.render() {
                    Ok(()) => rendered += 1,
                    Err(err) => {
                        log::warn!("Control {:?} failed to render: {}", id, err);
                        if first_error.is_none() {
                            first_error = Some(err);
                        }
                    }
                }
            }
            Self::forward_events_to(&mut self.event_system, self.frame_counter, id, control);
        }

        log::debug!(
            "UIManager render pass {} rendered {} of {} controls",
            self.frame_counter,
            rendered,
            self.nodes.len()
        );
        match first_error {
            Some(err) => Err(err),
            None => Ok(rendered),
        }
    }

    /// Dispatch all pending events
    pub fn dispatch_events(&mut self) {
        self.event_system.dispatch();
    }

    fn forward_events(&mut self, id: UINodeId, control: &mut dyn Control) {
        Self::forward_events_to(&mut self.event_system, self.frame_counter, id, control);
    }

    fn forward_events_to(
        event_system: &mut EventSystem,
        frame: u64,
        id: UINodeId,
        control: &mut dyn Control,
    ) {
        for mut event in control.drain_events() {
            event.timestamp = frame as f64;
            event_system.send(event.with_arg("control_id", EventArg::ControlId(id.0)));
        }
    }
}

impl Default for UIManager {
    fn default() -> Self {
        Self::new()
    }
}
