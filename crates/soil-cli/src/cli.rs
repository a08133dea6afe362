//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use soil_store::ExportFormat;

/// Output format for the `list` command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// File format for the `export` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormatArg {
    Csv,
    Json,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(value: ExportFormatArg) -> Self {
        match value {
            ExportFormatArg::Csv => ExportFormat::Csv,
            ExportFormatArg::Json => ExportFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "soil-health")]
#[command(author, version, about = "Soil health data manager", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// SQLite database file (overrides config)
    #[arg(long, global = true, value_name = "PATH", env = "SOIL_HEALTH_DB")]
    pub database: Option<PathBuf>,

    /// Command to run (defaults to opening the desktop window)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the desktop data manager window
    Gui,

    /// Insert a batch of random soil readings
    Generate {
        /// Number of readings (defaults to the configured batch size)
        #[arg(short, long)]
        count: Option<usize>,

        /// Seed for reproducible data
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print all readings, oldest test date first
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Write all readings to a file
    Export {
        /// Destination file (defaults to the configured export path)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// File format (defaults to the output file extension)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormatArg>,
    },

    /// Delete one reading by id
    Delete {
        /// Reading id
        #[arg(long)]
        id: i64,
    },

    /// Delete all readings
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show database location and record count
    Status,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_gui() {
        let cli = Cli::try_parse_from(["soil-health"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_generate_args() {
        let cli = Cli::try_parse_from(["soil-health", "generate", "--count", "5", "--seed", "9"])
            .unwrap();
        match cli.command {
            Some(Commands::Generate { count, seed }) => {
                assert_eq!(count, Some(5));
                assert_eq!(seed, Some(9));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_database_after_subcommand() {
        let cli = Cli::try_parse_from(["soil-health", "status", "--database", "x.db"]).unwrap();
        assert_eq!(cli.database, Some(PathBuf::from("x.db")));
    }

    #[test]
    fn test_export_format_conversion() {
        assert_eq!(ExportFormat::from(ExportFormatArg::Json), ExportFormat::Json);
        assert_eq!(ExportFormat::from(ExportFormatArg::Csv), ExportFormat::Csv);
    }

    #[test]
    fn test_completions_shell() {
        let cli = Cli::try_parse_from(["soil-health", "completions", "bash"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Completions {
                shell: clap_complete::Shell::Bash
            })
        ));
    }

    #[test]
    fn test_delete_requires_id() {
        assert!(Cli::try_parse_from(["soil-health", "delete"]).is_err());
    }
}
