//! # Soil Health GUI
//!
//! Standalone desktop binary for the soil-health data manager.
//!
//! ## Usage
//!
//! ```sh
//! soil-gui
//! soil-gui --database ./farm.db --batch-size 25
//! ```
//!
//! ### Options
//!
//! - `--database <PATH>` - SQLite file to open instead of the configured one
//! - `--batch-size <N>` - readings added per "Insert Random Data" click
//! - `--export <PATH>` - destination of "Export Data as CSV"
//!
//! Other settings come from the shared `soil-health` config file. The window
//! itself is implemented in [`soil_cli::gui`].

pub use soil_cli::gui::{GuiOptions, run};
