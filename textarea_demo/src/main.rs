//! Text area demo
//!
//! Simulates a few frames of a server's render loop: a text area is created,
//! restyled and resized between frames, and each frame flushes the pending
//! changes to the underlying label in one batch.
//!
//! Usage: `textarea_demo [config.toml|config.ron]`

use textdraw_ui::foundation::logging;
use textdraw_ui::prelude::*;
use thiserror::Error;

const MOTD: &str = "Welcome to the server! Read /rules before playing and use /help to list all commands.";

#[derive(Error, Debug)]
enum DemoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("UI error: {0}")]
    Ui(#[from] UiError),

    #[error("Text area {0:?} disappeared")]
    MissingControl(UINodeId),
}

/// Logs every property change the UI reports
struct PropertyLogger;

impl EventHandler for PropertyLogger {
    fn on_event(&mut self, event: &Event) -> bool {
        log::info!(
            "Control {:?} changed {}",
            event.get_control_id(),
            event.get_property().unwrap_or("?")
        );
        false
    }
}

fn load_config() -> Result<UiConfig, DemoError> {
    let config = match std::env::args().nth(1) {
        Some(path) => UiConfig::load_from_file(&path)?,
        None => UiConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn log_label(ui: &UIManager, id: UINodeId, frame: u32) -> Result<(), DemoError> {
    let area = ui.get_text_area(id).ok_or(DemoError::MissingControl(id))?;
    if let Some(label) = area.label() {
        log::info!(
            "Frame {}: label {} layout passes, color {}, text:\n{}",
            frame,
            label.layout_passes(),
            label.fore_color(),
            label.text()
        );
    }
    Ok(())
}

fn run() -> Result<(), DemoError> {
    let config = load_config()?;
    logging::init_with_level(&config.log_level);
    log::info!(
        "Starting text area demo on a {}x{} canvas",
        config.screen.width,
        config.screen.height
    );

    let mut ui = UIManager::with_config(&config);
    ui.event_system_mut()
        .register_handler(EventType::PropertyChanged, Box::new(PropertyLogger));

    let id = ui.create_text_area()?;
    {
        let area = ui.get_text_area_mut(id).ok_or(DemoError::MissingControl(id))?;
        area.set_size(60.0, 80.0)?;
        area.set_text(MOTD)?;
    }

    ui.render()?;
    ui.dispatch_events();
    log_label(&ui, id, 1)?;

    // Several changes between frames still cost a single relayout
    {
        let area = ui.get_text_area_mut(id).ok_or(DemoError::MissingControl(id))?;
        area.set_fore_color(Color(0xFFCC_00FF))?;
        area.set_outline(1)?;
        area.set_font(TextDrawFont::Slim)?;
        area.set_size(100.0, 80.0)?;
    }

    ui.render()?;
    ui.dispatch_events();
    log_label(&ui, id, 2)?;

    // Nothing changed, nothing is pushed
    let rendered = ui.render()?;
    log::info!("Frame 3: {} controls needed rendering", rendered);

    ui.remove_element(id);
    ui.dispatch_events();
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("textarea_demo failed: {}", e);
        std::process::exit(1);
    }
}
