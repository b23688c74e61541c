//! `civitas onboard`: full-screen introduction and registration form.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::domain::error::FlowError;

/// Run the onboard command.
///
/// # Errors
///
/// Returns `FlowError::NotInteractive` without a terminal (or with `--json`),
/// and any terminal I/O error raised while the screen is up.
#[cfg(feature = "tui")]
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    use std::io::IsTerminal as _;

    use crate::tui::{self, FlowExit};

    if app.is_json() || !app.output.is_tty || !std::io::stdin().is_terminal() {
        return Err(FlowError::NotInteractive.into());
    }

    let config = app.config()?;
    match tui::run(&config).await? {
        FlowExit::Registered(form) => {
            app.output
                .success(&format!("Registered {} <{}>", form.full_name, form.email));
        }
        FlowExit::Cancelled => app.output.info("Registration cancelled"),
    }
    Ok(ExitCode::SUCCESS)
}

/// Run the onboard command.
///
/// # Errors
///
/// Always returns `FlowError::NotInteractive`: this build has no terminal UI.
#[cfg(not(feature = "tui"))]
#[allow(clippy::unused_async)]
pub async fn run(_app: &AppContext) -> Result<ExitCode> {
    Err(FlowError::NotInteractive.into())
}
