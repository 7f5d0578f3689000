//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands, StatusArgs};
use crate::error::Result;
use crate::ui::UserInterface;

use super::context::ProjectContext;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: ProjectContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher for a project.
    pub fn new(context: ProjectContext) -> Self {
        Self { context }
    }

    /// Get the project context.
    pub fn context(&self) -> &ProjectContext {
        &self.context
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. No subcommand means `status`.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = self.context.clone();
        match &cli.command {
            Some(Commands::Status(args)) => {
                super::status::StatusCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Toggle(args)) => {
                super::toggle::ToggleCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Missing(args)) => {
                super::missing::MissingCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Available(args)) => {
                super::available::AvailableCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Stats(args)) => {
                super::stats::StatsCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Reset(args)) => {
                super::reset::ResetCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Export(args)) => {
                super::export::ExportCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Import(args)) => {
                super::import::ImportCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Init(args)) => {
                super::init::InitCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Check) => super::check::CheckCommand::new(ctx).execute(ui),
            Some(Commands::Schema) => super::schema::SchemaCommand.execute(ui),
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            None => super::status::StatusCommand::new(ctx, StatusArgs::default()).execute(ui),
        }
    }
}
