//! Shell completions generation.
//!
//! The `malla completions` command generates shell completion scripts.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

/// Render the completion script for a shell.
pub fn completion_script(shell: Shell) -> String {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "malla", &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

impl Command for CompletionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.output(completion_script(self.args.shell).trim_end());
        Ok(CommandResult::success())
    }
}
