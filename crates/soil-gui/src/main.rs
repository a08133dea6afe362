//! Standalone GUI binary for the soil-health data manager.
//!
//! Thin wrapper around soil-cli's window for users who only want the desktop app.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use soil_cli::commands::resolve_export_format;
use soil_cli::config::Config;
use soil_gui::GuiOptions;
use tracing_subscriber::EnvFilter;

/// Soil Health GUI - record, chart and export soil test results
#[derive(Parser, Debug)]
#[command(name = "soil-gui", version, about)]
struct Args {
    /// SQLite database file (overrides config)
    #[arg(long, value_name = "PATH")]
    database: Option<PathBuf>,

    /// Readings added per "Insert Random Data" click
    #[arg(long)]
    batch_size: Option<usize>,

    /// Export destination
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load();
    let mut options = GuiOptions::from_config(&config, config.resolve_database(args.database));
    if let Some(batch_size) = args.batch_size {
        options.batch_size = batch_size;
    }
    if let Some(export) = args.export {
        options.export_format = resolve_export_format(None, Some(&export), options.export_format);
        options.export_path = export;
    }

    soil_gui::run(options)
}
