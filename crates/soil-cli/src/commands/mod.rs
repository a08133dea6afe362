//! Command implementations for the CLI.

mod delete;
mod export;
mod generate;
mod list;
mod status;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use soil_core::{Controller, RandomGenerator, Store};

use crate::config::Config;

pub use delete::{cmd_clear, cmd_delete};
pub use export::{cmd_export, resolve_export_format};
pub use generate::cmd_generate;
pub use list::cmd_list;
pub use status::cmd_status;

/// Settings shared by every headless command.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Resolved database file.
    pub database: PathBuf,
    pub config: Config,
    pub quiet: bool,
    pub no_color: bool,
}

impl CommandContext {
    pub fn new(database: PathBuf, config: Config, quiet: bool, no_color: bool) -> Self {
        Self {
            database,
            config,
            quiet,
            no_color,
        }
    }

    /// Print a status line unless `--quiet` was given.
    fn note(&self, line: &str) {
        if !self.quiet {
            println!("{}", line);
        }
    }
}

/// Open the database and wrap it in a controller.
pub fn open_controller(
    database: &Path,
    generator: RandomGenerator,
    batch_size: usize,
) -> Result<Controller<Store, RandomGenerator>> {
    let store = Store::open(database)
        .with_context(|| format!("Failed to open database: {}", database.display()))?;
    let mut controller = Controller::new(store, generator).with_batch_size(batch_size);
    controller
        .ensure_schema()
        .context("Failed to prepare database schema")?;
    Ok(controller)
}
