//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Math types (2D vectors for letter sizes and control sizes)
//! - Packed text-draw colors
//! - Logging utilities

pub mod math;
pub mod color;
pub mod logging;
