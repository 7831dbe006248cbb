//! # Core Module
//!
//! Shared abstractions used throughout the crate.
//!
//! ## Organization
//!
//! - **Config**: Unified configuration for the UI layer and its widgets
//! - **Foundation**: Low-level utilities (math, colors, logging)

pub mod config;

// Re-export foundation modules for convenience
pub use crate::foundation;

// Re-export commonly used config types
pub use config::{
    UiConfig,
    ScreenConfig,
    TextAreaConfig,
    Config,
    ConfigError,
};
