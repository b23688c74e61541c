//! Shared manual mocks for unit tests.
//!
//! Each mock records what it was asked to do so tests can assert on calls
//! without reaching for a mocking framework.

#![allow(clippy::expect_used, dead_code)]

use std::sync::{Arc, Mutex};

use anyhow::Result;
use civitas_cli::application::ports::{
    Acknowledger, Destination, EmailAvailability, EmailAvailabilityCheck, Navigator,
};

// ── Acknowledger ──────────────────────────────────────────────────────────────

/// Records every `(title, body)` pair it is asked to show.
#[derive(Default, Clone)]
pub struct RecordingAcknowledger {
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingAcknowledger {
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().expect("lock").clone()
    }

    pub fn titles(&self) -> Vec<String> {
        self.calls().into_iter().map(|(title, _)| title).collect()
    }
}

impl Acknowledger for RecordingAcknowledger {
    fn acknowledge(&self, title: &str, body: &str) {
        self.calls
            .lock()
            .expect("lock")
            .push((title.to_string(), body.to_string()));
    }
}

// ── Navigator ─────────────────────────────────────────────────────────────────

/// Records every destination; clones share the same log.
#[derive(Default, Clone)]
pub struct RecordingNavigator {
    calls: Arc<Mutex<Vec<Destination>>>,
}

impl RecordingNavigator {
    pub fn calls(&self) -> Vec<Destination> {
        self.calls.lock().expect("lock").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, destination: Destination) {
        self.calls.lock().expect("lock").push(destination);
    }
}

// ── Email availability ────────────────────────────────────────────────────────

/// Answers with a fixed result and records each address it was asked about.
#[derive(Clone)]
pub struct RecordingCheck {
    answer: Option<EmailAvailability>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingCheck {
    pub fn answering(answer: EmailAvailability) -> Self {
        Self {
            answer: Some(answer),
            calls: Arc::default(),
        }
    }

    /// A check whose every lookup fails.
    pub fn failing() -> Self {
        Self {
            answer: None,
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("lock").clone()
    }
}

impl EmailAvailabilityCheck for RecordingCheck {
    async fn check(&self, email: &str) -> Result<EmailAvailability> {
        self.calls.lock().expect("lock").push(email.to_string());
        match self.answer {
            Some(answer) => Ok(answer),
            None => anyhow::bail!("directory unreachable"),
        }
    }
}
