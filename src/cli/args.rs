//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Malla - Track passed courses and unlocked prerequisites.
#[derive(Debug, Parser)]
#[command(name = "malla")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to curriculum file (overrides default .malla/curriculum.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides discovery from the current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Path to progress file (overrides settings.progress_file)
    #[arg(long, global = true, env = "MALLA_PROGRESS")]
    pub progress: Option<PathBuf>,

    /// Show course ids and credits in listings
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print warnings, errors, and data output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show every course with its status (default if no command specified)
    Status(StatusArgs),

    /// Mark courses as passed or not passed
    Toggle(ToggleArgs),

    /// List the prerequisites a course is still missing
    Missing(MissingArgs),

    /// List courses that can be taken now
    Available(AvailableArgs),

    /// Show overall and per-semester statistics
    Stats(StatsArgs),

    /// Clear all progress
    Reset(ResetArgs),

    /// Export progress to a JSON document
    Export(ExportArgs),

    /// Replace progress with an exported JSON document
    Import(ImportArgs),

    /// Create a starter curriculum file
    Init(InitArgs),

    /// Validate the curriculum file
    Check,

    /// Print the JSON schema of the curriculum file
    Schema,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Only show one semester
    #[arg(short, long, value_name = "NAME")]
    pub semester: Option<String>,

    /// Print course reports as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `toggle` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ToggleArgs {
    /// Course ids to toggle, applied in order
    #[arg(required = true, value_name = "ID")]
    pub courses: Vec<String>,
}

/// Arguments for the `missing` command.
#[derive(Debug, Clone, clap::Args)]
pub struct MissingArgs {
    /// Course id
    #[arg(value_name = "ID")]
    pub course: String,
}

/// Arguments for the `available` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct AvailableArgs {
    /// Print available courses as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `stats` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatsArgs {
    /// Print statistics as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `reset` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResetArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `export` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ExportArgs {
    /// Output file (default: malla-progress-YYYY-MM-DD.json, "-" for stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `import` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ImportArgs {
    /// Exported JSON document
    #[arg(value_name = "PATH")]
    pub file: PathBuf,
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// Overwrite an existing curriculum file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["malla"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn toggle_accepts_multiple_ids() {
        let cli = Cli::try_parse_from(["malla", "toggle", "mat1", "fis1"]).unwrap();
        match cli.command {
            Some(Commands::Toggle(args)) => assert_eq!(args.courses, vec!["mat1", "fis1"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn toggle_requires_an_id() {
        assert!(Cli::try_parse_from(["malla", "toggle"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "malla",
            "status",
            "--semester",
            "Semestre 1",
            "--project",
            "/plan",
            "--no-color",
        ])
        .unwrap();
        assert_eq!(cli.project, Some(PathBuf::from("/plan")));
        assert!(cli.no_color);
        match cli.command {
            Some(Commands::Status(args)) => {
                assert_eq!(args.semester.as_deref(), Some("Semestre 1"))
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["malla", "-q", "-v", "status"]).is_err());
    }

    #[test]
    fn export_output_dash() {
        let cli = Cli::try_parse_from(["malla", "export", "-o", "-"]).unwrap();
        match cli.command {
            Some(Commands::Export(args)) => assert_eq!(args.output, Some(PathBuf::from("-"))),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn completions_parses_shell() {
        let cli = Cli::try_parse_from(["malla", "completions", "zsh"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Completions(CompletionsArgs { shell: Shell::Zsh }))
        ));
    }
}
