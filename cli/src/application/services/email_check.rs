//! Application service: debounced email availability check.
//!
//! Each qualifying change to the email input schedules one lookup after a
//! fixed delay. A newer change cancels the scheduled one before it fires, so
//! at most one timer is ever pending.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::application::ports::{EmailAvailability, EmailAvailabilityCheck};
use crate::domain::trigger::EmailCheckTrigger;

/// Delay between the last qualifying change and the lookup.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1000);

/// Observable state of the email check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailCheckStatus {
    validating: bool,
    outcome: Option<EmailAvailability>,
    // Bumped on every input; a completing task only applies its result if
    // its ticket is still current.
    ticket: u64,
}

impl EmailCheckStatus {
    /// `true` while a lookup is scheduled or running.
    #[must_use]
    pub fn is_validating(&self) -> bool {
        self.validating
    }

    /// Answer of the last lookup that completed for the current input.
    #[must_use]
    pub fn outcome(&self) -> Option<EmailAvailability> {
        self.outcome
    }
}

/// Debounces email input into at most one pending availability lookup.
///
/// Must be driven from inside a tokio runtime: `on_input` spawns the timer
/// task. Dropping the debouncer cancels any pending lookup.
pub struct EmailCheckDebouncer<C> {
    checker: Arc<C>,
    trigger: EmailCheckTrigger,
    delay: Duration,
    status: Arc<watch::Sender<EmailCheckStatus>>,
    pending: Option<JoinHandle<()>>,
}

impl<C: EmailAvailabilityCheck> EmailCheckDebouncer<C> {
    #[must_use]
    pub fn new(checker: C, trigger: EmailCheckTrigger, delay: Duration) -> Self {
        let (status, _) = watch::channel(EmailCheckStatus::default());
        Self {
            checker: Arc::new(checker),
            trigger,
            delay,
            status: Arc::new(status),
            pending: None,
        }
    }

    #[must_use]
    pub fn is_validating(&self) -> bool {
        self.status.borrow().validating
    }

    /// Snapshot of the current status.
    #[must_use]
    pub fn status(&self) -> EmailCheckStatus {
        self.status.borrow().clone()
    }

    /// Receiver notified on every status change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<EmailCheckStatus> {
        self.status.subscribe()
    }

    /// React to a new email input value.
    ///
    /// Any pending lookup is discarded first. A qualifying value flips the
    /// status to validating immediately and schedules a lookup after the
    /// delay; a non-qualifying value leaves the status idle.
    pub fn on_input(&mut self, value: &str) {
        let qualifies = self.trigger.is_satisfied_by(value);
        let ticket = self.reset(qualifies);
        if !qualifies {
            return;
        }

        tracing::debug!(
            delay = ?self.delay,
            trigger = %self.trigger,
            "email check scheduled"
        );

        let checker = Arc::clone(&self.checker);
        let status = Arc::clone(&self.status);
        let delay = self.delay;
        let email = value.to_owned();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let outcome = match checker.check(&email).await {
                Ok(outcome) => Some(outcome),
                Err(e) => {
                    tracing::warn!(error = %e, "email availability check failed");
                    None
                }
            };
            let applied = status.send_if_modified(|s| {
                if s.ticket != ticket {
                    return false;
                }
                s.validating = false;
                s.outcome = outcome;
                true
            });
            if applied {
                tracing::debug!(?outcome, "email check completed");
            }
        }));
    }

    /// Abort the pending task and start a new ticket. Returns the ticket.
    fn reset(&mut self, validating: bool) -> u64 {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
        let mut ticket = 0;
        self.status.send_modify(|s| {
            s.ticket = s.ticket.wrapping_add(1);
            s.validating = validating;
            s.outcome = None;
            ticket = s.ticket;
        });
        ticket
    }
}

impl<C> Drop for EmailCheckDebouncer<C> {
    fn drop(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}
