//! CivitasAuth CLI - citizen onboarding and registration

use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use civitas_cli::cli::{Cli, Command};
use civitas_cli::infra::log_file;
use civitas_cli::output::json;

/// Environment variable holding the tracing filter directive.
const LOG_ENV: &str = "CIVITAS_LOG";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Log to stderr, or to a file while the full-screen UI owns the terminal.
fn init_tracing(full_screen: bool) {
    if !full_screen {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .init();
        return;
    }

    if let Some((path, file)) = log_file::open_first(&log_file::candidates()) {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .with(env_filter())
            .init();
        tracing::debug!(path = %path.display(), "logging to file");
        return;
    }

    // No writable log file: drop events rather than draw over the screen.
    tracing_subscriber::registry().with(env_filter()).init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(matches!(cli.command, Command::Onboard));

    let json_mode = cli.json;
    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            if json_mode {
                match json::format_error(&format!("{e:#}"), "command_failed") {
                    Ok(obj) => println!("{obj}"),
                    Err(_) => eprintln!("Error: {e:#}"),
                }
            } else {
                eprintln!("Error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}
