//! Delete and clear commands.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result, bail};
use dialoguer::Confirm;
use dialoguer::theme::ColorfulTheme;
use soil_core::{Confirmation, RandomGenerator};

use super::{CommandContext, open_controller};
use crate::style;

/// Prompt shown before deleting every reading.
pub const CLEAR_PROMPT: &str = "Are you sure you want to delete all records?";

/// Execute the delete command.
pub fn cmd_delete(ctx: &CommandContext, id: i64) -> Result<()> {
    let mut controller = open_controller(
        &ctx.database,
        RandomGenerator::new(),
        ctx.config.batch_size,
    )?;
    let removed = controller
        .delete_selected(Some(id))
        .with_context(|| format!("Failed to delete reading {}", id))?;

    let line = if removed {
        style::format_success(&format!("Deleted reading {}", id), ctx.no_color)
    } else {
        style::format_warning(&format!("No reading with id {}", id), ctx.no_color)
    };
    ctx.note(&line);
    Ok(())
}

/// Execute the clear command.
pub fn cmd_clear(ctx: &CommandContext, yes: bool) -> Result<()> {
    let answer = if yes {
        Confirmation::Yes
    } else {
        confirm_clear()?
    };

    let mut controller = open_controller(
        &ctx.database,
        RandomGenerator::new(),
        ctx.config.batch_size,
    )?;
    match controller
        .delete_all(answer)
        .context("Failed to delete readings")?
    {
        Some(removed) => ctx.note(&style::format_success(
            &format!("Deleted {} readings", removed),
            ctx.no_color,
        )),
        None => ctx.note(&style::format_info("Nothing deleted", ctx.no_color)),
    }
    Ok(())
}

fn confirm_clear() -> Result<Confirmation> {
    if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
        bail!("Refusing to delete all readings without a terminal. Pass --yes to confirm.");
    }
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(CLEAR_PROMPT)
        .default(false)
        .interact()
        .context("Failed to read confirmation")?;
    Ok(Confirmation::from(confirmed))
}
