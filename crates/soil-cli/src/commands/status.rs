//! Status command - database location and record count.

use anyhow::{Context, Result};
use soil_core::{NutrientChart, RandomGenerator};
use soil_types::format_test_date;

use super::{CommandContext, open_controller};
use crate::config::Config;
use crate::style;

/// Execute the status command.
pub fn cmd_status(ctx: &CommandContext) -> Result<()> {
    let controller = open_controller(
        &ctx.database,
        RandomGenerator::new(),
        ctx.config.batch_size,
    )?;
    let count = controller
        .gateway()
        .count()
        .context("Failed to count readings")?;
    let readings = controller.refresh().context("Failed to fetch readings")?;

    println!("{}", style::format_title("Soil Health Database", ctx.no_color));
    println!("Database:   {}", ctx.database.display());
    println!("Readings:   {}", count);
    if let Some(chart) = NutrientChart::from_readings(&readings) {
        let (first, last) = chart.date_range();
        println!(
            "Test dates: {} to {}",
            format_test_date(first),
            format_test_date(last)
        );
    }
    println!("Config:     {}", Config::path().display());
    Ok(())
}
