//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure and presentation
//! must fulfill. This file imports only from `crate::domain`, never from
//! `crate::infra`, `crate::commands`, `crate::output`, or `crate::tui`.

use std::future::Future;
use std::path::PathBuf;

use anyhow::Result;

use crate::domain::config::CivitasConfig;

// ── Email Availability Port ───────────────────────────────────────────────────

/// Answer of an email availability lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailAvailability {
    /// No account uses the address.
    Available,
    /// The address is already registered.
    Taken,
}

/// Looks up whether an email address can be registered.
///
/// Lookups run on a spawned task behind the debounce timer, hence the `Send`
/// and `'static` bounds.
pub trait EmailAvailabilityCheck: Send + Sync + 'static {
    /// Check `email` against the account directory.
    fn check(&self, email: &str) -> impl Future<Output = Result<EmailAvailability>> + Send;
}

// ── Acknowledgment Port ───────────────────────────────────────────────────────

/// Blocking, modal-style notification shown after each submit.
pub trait Acknowledger {
    /// Present `title` and `body` to the user.
    fn acknowledge(&self, title: &str, body: &str);
}

// ── Navigation Port ───────────────────────────────────────────────────────────

/// Named destinations the onboarding flow can hand off to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Register,
}

impl Destination {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Register => "Register",
        }
    }
}

/// Fire-and-forget navigation callback.
pub trait Navigator {
    /// Move to `destination`. No result is consumed.
    fn navigate(&self, destination: Destination);
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts configuration persistence (load/save).
pub trait ConfigStore {
    /// Load the configuration, returning defaults if none exists.
    fn load(&self) -> Result<CivitasConfig>;
    /// Persist the configuration.
    fn save(&self, config: &CivitasConfig) -> Result<()>;
    /// Location of the backing file.
    fn path(&self) -> Result<PathBuf>;
}
