//! Packed RGBA colors as used by text draws

use serde::{Deserialize, Serialize};
use std::fmt;

/// Color stored as `0xRRGGBBAA`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    /// Opaque white
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    /// Opaque black
    pub const BLACK: Color = Color(0x0000_00FF);
    /// Fully transparent
    pub const TRANSPARENT: Color = Color(0);

    /// Build a color from its channels
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    /// Red channel
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green channel
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue channel
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Alpha channel
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Same color with a different alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self((self.0 & 0xFFFF_FF00) | a as u32)
    }

    /// Packed `0xAARRGGBB` form, which some text-draw natives expect
    pub const fn to_argb(self) -> u32 {
        self.0.rotate_right(8)
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}
