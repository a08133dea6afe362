//! Native desktop window for the soil-health data manager.
//!
//! Built on egui/eframe with egui_plot for the nutrient chart. The window owns
//! one [`soil_core::Controller`] over a SQLite [`Store`] for its lifetime; every
//! button runs synchronously on the UI thread.

mod app;
mod components;
mod dialogs;
mod grid;
mod plot;
mod state;
mod theme;

use std::path::PathBuf;

use anyhow::{Context, Result};
use eframe::egui;
use soil_core::{Controller, DEFAULT_BATCH_SIZE, ExportFormat, RandomGenerator, Store};
use tracing::info;

pub use app::SoilApp;
pub use dialogs::{Dialog, DialogKind, Modal, ModalResponse};
pub use state::{Action, AppState};
pub use theme::{Theme, ThemeMode};

/// Window title.
pub const WINDOW_TITLE: &str = "Soil Health Data Manager";

/// Settings for launching the window.
#[derive(Debug, Clone)]
pub struct GuiOptions {
    /// SQLite database file.
    pub database: PathBuf,
    /// Readings per "Insert Random Data" click.
    pub batch_size: usize,
    /// Destination of "Export Data as CSV".
    pub export_path: PathBuf,
    pub export_format: ExportFormat,
    pub theme: ThemeMode,
    pub window_size: [f32; 2],
}

impl Default for GuiOptions {
    fn default() -> Self {
        Self {
            database: soil_store::default_db_path(),
            batch_size: DEFAULT_BATCH_SIZE,
            export_path: PathBuf::from(crate::config::DEFAULT_EXPORT_FILE),
            export_format: ExportFormat::Csv,
            theme: ThemeMode::Dark,
            window_size: [1000.0, 720.0],
        }
    }
}

impl GuiOptions {
    /// Options from the loaded config file.
    pub fn from_config(config: &crate::config::Config, database: PathBuf) -> Self {
        Self {
            database,
            batch_size: config.batch_size,
            export_path: config.export_path.clone(),
            export_format: config.export_format,
            theme: ThemeMode::from_config(&config.gui.theme),
            window_size: [config.gui.window_width, config.gui.window_height],
        }
    }
}

/// Open the database and run the window until it is closed.
///
/// Failing to open the database or create the schema is fatal and returned
/// before any window appears. The caller installs the tracing subscriber.
pub fn run(options: GuiOptions) -> Result<()> {
    info!("Using database at: {}", options.database.display());
    let store = Store::open(&options.database).with_context(|| {
        format!("Failed to open database: {}", options.database.display())
    })?;

    let mut controller =
        Controller::new(store, RandomGenerator::new()).with_batch_size(options.batch_size);
    controller
        .ensure_schema()
        .context("Failed to prepare database schema")?;
    let mut state = AppState::new(controller, options.export_path, options.export_format);
    state.reload();

    let viewport = egui::ViewportBuilder::default()
        .with_title(WINDOW_TITLE)
        .with_inner_size(options.window_size)
        .with_min_inner_size([640.0, 480.0]);

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let theme = options.theme;
    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |cc| Ok(Box::new(SoilApp::new(cc, state, theme)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run eframe: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_options_from_config() {
        let mut config = Config::default();
        config.batch_size = 12;
        config.gui.theme = "light".to_string();

        let options = GuiOptions::from_config(&config, PathBuf::from("x.db"));
        assert_eq!(options.database, PathBuf::from("x.db"));
        assert_eq!(options.batch_size, 12);
        assert_eq!(options.theme, ThemeMode::Light);
        assert_eq!(options.export_path, PathBuf::from("soil_health_data.csv"));
    }
}
