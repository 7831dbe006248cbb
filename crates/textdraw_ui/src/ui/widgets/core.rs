//! Core UI widget primitives
//!
//! Shared types and structures used by all UI widgets.

use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

use crate::foundation::math::Vec2;

/// Anchor point for UI positioning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    /// Top-left corner (0, 0) of the canvas
    TopLeft,
    /// Top-center
    TopCenter,
    /// Top-right corner
    TopRight,
    /// Middle-left
    MiddleLeft,
    /// Center of the canvas
    Center,
    /// Middle-right
    MiddleRight,
    /// Bottom-left corner
    BottomLeft,
    /// Bottom-center
    BottomCenter,
    /// Bottom-right corner
    BottomRight,
}

impl Anchor {
    /// Get the normalized anchor position (0.0 to 1.0)
    pub fn to_normalized(&self) -> (f32, f32) {
        match self {
            Anchor::TopLeft => (0.0, 0.0),
            Anchor::TopCenter => (0.5, 0.0),
            Anchor::TopRight => (1.0, 0.0),
            Anchor::MiddleLeft => (0.0, 0.5),
            Anchor::Center => (0.5, 0.5),
            Anchor::MiddleRight => (1.0, 0.5),
            Anchor::BottomLeft => (0.0, 1.0),
            Anchor::BottomCenter => (0.5, 1.0),
            Anchor::BottomRight => (1.0, 1.0),
        }
    }
}

/// Base UI element properties
#[derive(Debug, Clone, PartialEq)]
pub struct UIElement {
    /// Position on the canvas (units from the anchor point)
    pub position: Vec2,

    /// Size in canvas units (width, height)
    pub size: Vec2,

    /// Anchor point for positioning
    pub anchor: Anchor,

    /// Whether this element is visible
    pub visible: bool,

    /// Z-order for layering (higher = on top)
    pub z_order: i32,
}

impl UIElement {
    /// Absolute top-left position on a canvas of the given size
    pub fn screen_position(&self, screen_width: f32, screen_height: f32) -> Vec2 {
        let (anchor_x, anchor_y) = self.anchor.to_normalized();
        Vec2::new(
            anchor_x * screen_width + self.position.x,
            anchor_y * screen_height + self.position.y,
        )
    }
}

impl Default for UIElement {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            size: Vec2::new(100.0, 50.0),
            anchor: Anchor::TopLeft,
            visible: true,
            z_order: 0,
        }
    }
}

/// Text-draw font styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TextDrawFont {
    /// Gothic "diploma" face
    Diploma,
    /// Plain sans-serif face
    #[default]
    Normal,
    /// Condensed capitals
    Slim,
    /// Bold clean face used in the game's HUD
    Pricedown,
}

impl TextDrawFont {
    /// Numeric font id used by the text-draw natives
    pub fn id(self) -> u8 {
        match self {
            TextDrawFont::Diploma => 0,
            TextDrawFont::Normal => 1,
            TextDrawFont::Slim => 2,
            TextDrawFont::Pricedown => 3,
        }
    }
}

/// Drawables that can batch several changes into a single relayout
pub trait SuspendLayout {
    /// Stop relayouting after every change
    fn suspend_layout(&mut self);

    /// Resume relayouting, performing one pass if anything changed while suspended
    fn resume_layout(&mut self);
}

/// Scoped layout suspension
///
/// Suspends layout on creation and resumes it on drop, so the drawable is
/// released on every exit path including early returns and `?`.
pub struct LayoutGuard<'a, T: SuspendLayout> {
    target: &'a mut T,
}

impl<'a, T: SuspendLayout> LayoutGuard<'a, T> {
    /// Suspend layout on `target` until the guard is dropped
    pub fn new(target: &'a mut T) -> Self {
        target.suspend_layout();
        Self { target }
    }
}

impl<T: SuspendLayout> Deref for LayoutGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.target
    }
}

impl<T: SuspendLayout> DerefMut for LayoutGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.target
    }
}

impl<T: SuspendLayout> Drop for LayoutGuard<'_, T> {
    fn drop(&mut self) {
        self.target.resume_layout();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        depth: u32,
        resumed: u32,
    }

    impl SuspendLayout for Counter {
        fn suspend_layout(&mut self) {
            self.depth += 1;
        }

        fn resume_layout(&mut self) {
            self.depth -= 1;
            self.resumed += 1;
        }
    }

    fn fail_inside(counter: &mut Counter) -> Result<(), String> {
        let guard = LayoutGuard::new(counter);
        assert_eq!(guard.depth, 1);
        Err("push failed".to_string())
    }

    #[test]
    fn test_guard_resumes_on_drop() {
        let mut counter = Counter::default();
        {
            let guard = LayoutGuard::new(&mut counter);
            assert_eq!(guard.depth, 1);
        }
        assert_eq!(counter.depth, 0);
        assert_eq!(counter.resumed, 1);
    }

    #[test]
    fn test_guard_resumes_on_error_path() {
        let mut counter = Counter::default();
        assert!(fail_inside(&mut counter).is_err());
        assert_eq!(counter.depth, 0);
        assert_eq!(counter.resumed, 1);
    }

    #[test]
    fn test_anchor_position() {
        let element = UIElement {
            position: Vec2::new(10.0, -20.0),
            anchor: Anchor::Center,
            ..Default::default()
        };
        assert_eq!(element.screen_position(640.0, 480.0), Vec2::new(330.0, 220.0));
    }

    #[test]
    fn test_font_ids() {
        assert_eq!(TextDrawFont::Diploma.id(), 0);
        assert_eq!(TextDrawFont::default(), TextDrawFont::Normal);
        assert_eq!(TextDrawFont::Pricedown.id(), 3);
    }
}
