//! Full-screen onboarding: two intro pages then the registration form.

pub mod input;
pub mod state;
pub mod view;

use std::io::{Stdout, stdout};
use std::time::Duration;

use anyhow::Result;
use civitas_common::RegistrationForm;
use crossterm::event::{Event, EventStream};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures_util::StreamExt as _;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::time::MissedTickBehavior;

use crate::application::services::email_check::EmailCheckDebouncer;
use crate::application::services::registration::RegistrationFlow;
use crate::domain::config::CivitasConfig;
use crate::domain::schema::RegistrationSchema;
use crate::infra::email_check::SimulatedEmailCheck;

pub use state::{Focus, LogNavigator, Modal, OnboardingApp};

const FRAME_INTERVAL: Duration = Duration::from_millis(80);

/// How the interactive flow ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowExit {
    /// The form was accepted and the success dialog dismissed.
    Registered(RegistrationForm),
    /// The user quit before finishing.
    Cancelled,
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let mut out = stdout();
                let _ = execute!(out, LeaveAlternateScreen);
                return Err(err.into());
            }
        };
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Run the flow until the user registers or quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to, or read from.
pub async fn run(config: &CivitasConfig) -> Result<FlowExit> {
    let flow = RegistrationFlow::new(RegistrationSchema::new(config.schema_options()))
        .with_navigator(LogNavigator);
    let email_check = EmailCheckDebouncer::new(
        SimulatedEmailCheck,
        config.email_check_trigger(),
        config.debounce_delay(),
    );
    let mut app = OnboardingApp::new(flow, email_check);

    let mut session = TerminalSession::new()?;
    let mut events = EventStream::new();
    let mut email_status = app.subscribe_email_check();
    let mut frames = tokio::time::interval(FRAME_INTERVAL);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        if let Some(exit) = app.take_exit() {
            tracing::debug!(?exit, "onboarding finished");
            return Ok(exit);
        }
        session.terminal.draw(|frame| view::draw(frame, &app))?;

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => app.handle_key(key),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => return Ok(FlowExit::Cancelled),
            },
            _ = frames.tick(), if app.is_checking_email() => app.on_tick(),
            Ok(()) = email_status.changed() => {}
        }
    }
}
