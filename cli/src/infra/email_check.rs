//! Simulated email availability backend.
//!
//! No directory exists yet; every address is reported as available. Swapping
//! in a real lookup means implementing `EmailAvailabilityCheck` elsewhere and
//! handing it to the debouncer.

use anyhow::Result;

use crate::application::ports::{EmailAvailability, EmailAvailabilityCheck};

/// Always answers `Available`, without any I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedEmailCheck;

impl EmailAvailabilityCheck for SimulatedEmailCheck {
    async fn check(&self, email: &str) -> Result<EmailAvailability> {
        tracing::debug!(email, "simulated availability lookup");
        Ok(EmailAvailability::Available)
    }
}
