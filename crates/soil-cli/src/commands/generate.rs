//! Generate command - insert random readings.

use anyhow::{Context, Result};
use soil_core::RandomGenerator;

use super::{CommandContext, open_controller};
use crate::style;

/// Execute the generate command.
pub fn cmd_generate(ctx: &CommandContext, count: Option<usize>, seed: Option<u64>) -> Result<()> {
    let generator = match seed {
        Some(seed) => RandomGenerator::seeded(seed),
        None => RandomGenerator::new(),
    };
    let batch_size = count.unwrap_or(ctx.config.batch_size);
    let mut controller = open_controller(&ctx.database, generator, batch_size)?;

    let inserted = controller
        .insert_random_batch()
        .context("Failed to insert random readings")?;

    ctx.note(&style::format_success(
        &format!("Inserted {} random readings", inserted),
        ctx.no_color,
    ));
    Ok(())
}
