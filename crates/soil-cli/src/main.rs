use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use soil_cli::cli::{Cli, Commands};
use soil_cli::commands::{self, CommandContext};
use soil_cli::config::Config;

fn main() -> Result<()> {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    // Completions need neither logging nor the database.
    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "soil-health", &mut io::stdout());
        return Ok(());
    }

    let filter = if cli.quiet {
        EnvFilter::new("warn")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load();
    let database = config.resolve_database(cli.database.clone());
    let ctx = CommandContext::new(database, config, cli.quiet, cli.no_color);

    match cli.command.unwrap_or(Commands::Gui) {
        Commands::Gui => run_gui(&ctx),
        Commands::Generate { count, seed } => commands::cmd_generate(&ctx, count, seed),
        Commands::List { format } => commands::cmd_list(&ctx, format),
        Commands::Export { output, format } => {
            commands::cmd_export(&ctx, output, format.map(Into::into))
        }
        Commands::Delete { id } => commands::cmd_delete(&ctx, id),
        Commands::Clear { yes } => commands::cmd_clear(&ctx, yes),
        Commands::Status => commands::cmd_status(&ctx),
        Commands::Completions { .. } => Ok(()),
    }
}

#[cfg(feature = "gui")]
fn run_gui(ctx: &CommandContext) -> Result<()> {
    use soil_cli::gui::{self, GuiOptions};

    gui::run(GuiOptions::from_config(&ctx.config, ctx.database.clone()))
}

#[cfg(not(feature = "gui"))]
fn run_gui(_ctx: &CommandContext) -> Result<()> {
    anyhow::bail!("This build has no desktop window. Rebuild with the `gui` feature.")
}
