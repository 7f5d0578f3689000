//! Malla CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use malla::cli::{Cli, CommandDispatcher, ProjectContext};
use malla::config::find_project_root;
use malla::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, so normal runs only print command output
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("malla=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("malla=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Malla starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Explicit --project wins, then the nearest ancestor with a .malla directory.
    let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let project_root = cli
        .project
        .clone()
        .or_else(|| find_project_root(&working_dir))
        .unwrap_or_else(|| working_dir.clone());
    tracing::debug!("Project root: {}", project_root.display());

    let context = ProjectContext::new(project_root)
        .with_working_dir(working_dir)
        .with_config(cli.config.clone())
        .with_progress(cli.progress.clone());

    let mut ui = create_ui(true, output_mode);
    let dispatcher = CommandDispatcher::new(context);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
