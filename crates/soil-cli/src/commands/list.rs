//! List command - print every stored reading.

use std::io::{self, Write};

use anyhow::{Context, Result};
use soil_core::RandomGenerator;

use super::{CommandContext, open_controller};
use crate::cli::OutputFormat;
use crate::format::format_readings;

/// Execute the list command.
pub fn cmd_list(ctx: &CommandContext, format: OutputFormat) -> Result<()> {
    let controller = open_controller(
        &ctx.database,
        RandomGenerator::new(),
        ctx.config.batch_size,
    )?;
    let readings = controller.refresh().context("Failed to fetch readings")?;

    let content = format_readings(&readings, format)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
