//! plugin-depcheck CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use plugin_depcheck::cli::{Cli, CommandDispatcher};
use plugin_depcheck::config::ProbeSettings;
use plugin_depcheck::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout carries only the command's document.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("plugin_depcheck=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("plugin_depcheck=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("plugin-depcheck starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(OutputMode::from_quiet(cli.quiet));
    let probe_settings = ProbeSettings::default().with_timeout_secs(cli.probe_timeout);
    let dispatcher = CommandDispatcher::new(cli.claude_dir.clone(), probe_settings);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
