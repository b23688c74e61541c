//! Screen state and key handling for the interactive flow.

use std::cell::RefCell;

use civitas_common::Field;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::watch;

use crate::application::ports::{
    Acknowledger, Destination, EmailAvailability, EmailAvailabilityCheck, Navigator,
};
use crate::application::services::email_check::{EmailCheckDebouncer, EmailCheckStatus};
use crate::application::services::registration::RegistrationFlow;
use crate::tui::input::InputKind;
use crate::tui::FlowExit;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Which control on the form has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Submit,
}

impl Focus {
    const ORDER: [Self; 5] = [
        Self::Field(Field::FullName),
        Self::Field(Field::Email),
        Self::Field(Field::Password),
        Self::Field(Field::ConfirmPassword),
        Self::Submit,
    ];

    fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|f| *f == self)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// A dialog waiting to be dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub title: String,
    pub body: String,
}

/// Collects the acknowledgment raised during a submit so it can be shown
/// as a modal on the next frame.
#[derive(Default)]
struct ModalSlot(RefCell<Option<Modal>>);

impl ModalSlot {
    fn into_inner(self) -> Option<Modal> {
        self.0.into_inner()
    }
}

impl Acknowledger for ModalSlot {
    fn acknowledge(&self, title: &str, body: &str) {
        *self.0.borrow_mut() = Some(Modal {
            title: title.to_string(),
            body: body.to_string(),
        });
    }
}

/// Navigation in the full-screen flow is a redraw; the event is only logged.
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, destination: Destination) {
        tracing::info!(destination = destination.as_str(), "navigate");
    }
}

/// Everything the view needs to draw one frame.
pub struct OnboardingApp<C: EmailAvailabilityCheck> {
    flow: RegistrationFlow,
    email_check: EmailCheckDebouncer<C>,
    focus: Focus,
    modal: Option<Modal>,
    exit: Option<FlowExit>,
    tick: usize,
}

impl<C: EmailAvailabilityCheck> OnboardingApp<C> {
    #[must_use]
    pub fn new(flow: RegistrationFlow, email_check: EmailCheckDebouncer<C>) -> Self {
        Self {
            flow,
            email_check,
            focus: Focus::Field(Field::FullName),
            modal: None,
            exit: None,
            tick: 0,
        }
    }

    #[must_use]
    pub fn flow(&self) -> &RegistrationFlow {
        &self.flow
    }

    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    #[must_use]
    pub fn is_checking_email(&self) -> bool {
        self.email_check.is_validating()
    }

    #[must_use]
    pub fn email_outcome(&self) -> Option<EmailAvailability> {
        self.email_check.status().outcome()
    }

    /// Receiver that wakes the event loop when the email check settles.
    #[must_use]
    pub fn subscribe_email_check(&self) -> watch::Receiver<EmailCheckStatus> {
        self.email_check.subscribe()
    }

    #[must_use]
    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.tick % SPINNER_FRAMES.len()]
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Set once the user finishes or leaves the flow.
    pub fn take_exit(&mut self) -> Option<FlowExit> {
        self.exit.take()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.exit = Some(FlowExit::Cancelled);
            return;
        }

        if self.modal.is_some() {
            self.handle_modal_key(key.code);
        } else if self.flow.step().is_form() {
            self.handle_form_key(key.code, ctrl);
        } else {
            self.handle_intro_key(key.code);
        }
    }

    fn handle_modal_key(&mut self, code: KeyCode) {
        if !matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            return;
        }
        self.modal = None;
        if self.flow.is_complete() {
            self.exit = Some(FlowExit::Registered(self.flow.form().clone()));
        }
    }

    fn handle_intro_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('c') => {
                self.flow.continue_onboarding();
            }
            KeyCode::Char('s') => {
                self.flow.skip_onboarding();
            }
            KeyCode::Esc | KeyCode::Char('q') => self.exit = Some(FlowExit::Cancelled),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, code: KeyCode, ctrl: bool) {
        match code {
            KeyCode::Esc => self.exit = Some(FlowExit::Cancelled),
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Enter => match self.focus {
                Focus::Submit => self.submit(),
                Focus::Field(_) => self.focus = self.focus.next(),
            },
            KeyCode::Backspace => {
                if let Focus::Field(field) = self.focus
                    && self.flow.field_mut(field).pop().is_some()
                {
                    self.field_changed(field);
                }
            }
            KeyCode::Char(c) if !ctrl => {
                if let Focus::Field(field) = self.focus
                    && InputKind::for_field(field).accepts(c)
                {
                    self.flow.field_mut(field).push(c);
                    self.field_changed(field);
                }
            }
            _ => {}
        }
    }

    fn field_changed(&mut self, field: Field) {
        if field == Field::Email {
            self.email_check.on_input(&self.flow.form().email);
        }
    }

    fn submit(&mut self) {
        let slot = ModalSlot::default();
        match self.flow.submit(&slot) {
            Ok(_) => self.modal = slot.into_inner(),
            Err(e) => tracing::warn!(error = %e, "submit ignored"),
        }
    }
}
