//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Commands that read progress open a
//! [`Tracker`](crate::tracker::Tracker) through the shared [`ProjectContext`],
//! so the curriculum and progress file resolve the same way everywhere.

pub mod available;
pub mod check;
pub mod completions;
pub mod context;
pub mod dispatcher;
pub mod display;
pub mod export;
pub mod import;
pub mod init;
pub mod missing;
pub mod reset;
pub mod schema;
pub mod stats;
pub mod status;
pub mod toggle;

pub use context::{ProjectContext, EXIT_NO_CURRICULUM};
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
