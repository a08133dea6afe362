//! Export command - write all readings to a file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use soil_core::{ExportFormat, RandomGenerator};

use super::{CommandContext, open_controller};
use crate::style;

/// Pick the export format: explicit flag, then file extension, then config.
pub fn resolve_export_format(
    explicit: Option<ExportFormat>,
    output: Option<&PathBuf>,
    configured: ExportFormat,
) -> ExportFormat {
    explicit
        .or_else(|| output.map(|p| ExportFormat::from_path(p)))
        .unwrap_or(configured)
}

/// Execute the export command.
pub fn cmd_export(
    ctx: &CommandContext,
    output: Option<PathBuf>,
    format: Option<ExportFormat>,
) -> Result<()> {
    let format = resolve_export_format(format, output.as_ref(), ctx.config.export_format);
    let path = output.unwrap_or_else(|| ctx.config.export_path.clone());

    let controller = open_controller(
        &ctx.database,
        RandomGenerator::new(),
        ctx.config.batch_size,
    )?;
    let summary = controller
        .export(&path, format)
        .with_context(|| format!("Failed to export to {}", path.display()))?;

    ctx.note(&style::format_success(
        &format!(
            "Exported {} readings as {} to {}",
            summary.records,
            summary.format.label(),
            summary.path.display()
        ),
        ctx.no_color,
    ));
    Ok(())
}
