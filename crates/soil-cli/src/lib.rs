//! Desktop and command-line front ends for the soil-health data manager.
//!
//! The `soil-health` binary opens the desktop window by default and also
//! offers headless subcommands driving the same controller.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `gui` | Open the desktop window (default) |
//! | `generate` | Insert a batch of random readings |
//! | `list` | Print all readings as text, JSON or CSV |
//! | `export` | Write all readings to a CSV or JSON file |
//! | `delete` | Delete one reading by id |
//! | `clear` | Delete all readings after confirmation |
//! | `status` | Show database location and record count |
//! | `completions` | Generate shell completions |
//!
//! # Configuration
//!
//! Settings are read from `~/.config/soil-health/config.toml` (or platform
//! equivalent):
//!
//! - `database`: SQLite file (default under the platform data directory)
//! - `export_path`: export destination (default `soil_health_data.csv`)
//! - `export_format`: `csv` or `json`
//! - `batch_size`: readings per random batch (default 100)
//! - `[gui]`: `theme`, `window_width`, `window_height`
//!
//! # Environment Variables
//!
//! - `SOIL_HEALTH_DB`: database file, same as `--database`
//! - `NO_COLOR`: disable colored output
//! - `RUST_LOG`: log filter when neither `--verbose` nor `--quiet` is given

pub mod cli;
pub mod commands;
pub mod config;
pub mod format;
pub mod style;

#[cfg(feature = "gui")]
pub mod gui;
