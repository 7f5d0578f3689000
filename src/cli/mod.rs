//! Command-line interface for malla.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    AvailableArgs, Cli, Commands, CompletionsArgs, ExportArgs, ImportArgs, InitArgs, MissingArgs,
    ResetArgs, StatsArgs, StatusArgs, ToggleArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult, ProjectContext};
