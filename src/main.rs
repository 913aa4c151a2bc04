//! imagetag CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use imagetag::cli::{Cli, CommandDispatcher};
use imagetag::config::find_project_root;
use imagetag::ui::{ConsoleUI, OutputMode, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit code for configuration problems (bad config, env file, or override).
const EXIT_CONFIG: u8 = 2;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout is reserved for results.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("imagetag=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("imagetag=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("imagetag starting with args: {:?}", cli);

    let mut ui = ConsoleUI::new(OutputMode::from_flags(cli.verbose, cli.quiet));

    let project_root = match &cli.project {
        Some(path) => path.clone(),
        None => match std::env::current_dir() {
            Ok(dir) => find_project_root(&dir).unwrap_or(dir),
            Err(e) => {
                ui.error(&format!("Cannot determine current directory: {}", e));
                return ExitCode::from(1);
            }
        },
    };

    let dispatcher = CommandDispatcher::new(project_root, CommandDispatcher::options_from_cli(&cli));

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui.error(&e.to_string());
            if e.is_config_error() {
                ExitCode::from(EXIT_CONFIG)
            } else {
                ExitCode::from(1)
            }
        }
    }
}
