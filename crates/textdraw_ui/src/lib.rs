//! # textdraw_ui
//!
//! Retained-mode widgets for game servers that draw their interface with
//! text draws.
//!
//! ## Features
//!
//! - **Batched properties**: Style changes are recorded freely and flushed to
//!   the drawable once per render pass, only when something changed
//! - **Text reflow**: Text areas wrap their text to their width using a
//!   pluggable measurement function
//! - **Configuration**: Widget defaults loadable from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust
//! use textdraw_ui::prelude::*;
//!
//! fn main() -> Result<(), UiError> {
//!     let mut ui = UIManager::new();
//!     let id = ui.create_text_area()?;
//!
//!     if let Some(area) = ui.get_text_area_mut(id) {
//!         area.set_size(60.0, 40.0)?;
//!         area.set_fore_color(Color(0xFFCC_00FF))?;
//!         area.set_text("Welcome to the server!")?;
//!     }
//!
//!     // Once per frame
//!     ui.render()?;
//!     ui.dispatch_events();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core modules
pub mod core;

pub mod foundation;
pub mod config;
pub mod events;
pub mod ui;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        core::config::{Config, ConfigError, TextAreaConfig, UiConfig},
        events::{Event, EventHandler, EventType},
        foundation::{color::Color, math::Vec2},
        ui::{
            Control, TextArea, TextDrawFont, TextDrawMetrics, TextMeasure, TextStyle, UIManager,
            UINodeId, UiError, UiResult,
        },
    };
}
