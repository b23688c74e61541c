//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Flow errors ───────────────────────────────────────────────────────────────

/// Errors raised by the onboarding/registration flow itself.
///
/// Validation failures are not errors here: they are ordinary outcomes of a
/// submit and live in `civitas_common::ValidationErrors`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlowError {
    #[error("Registration form not reached yet (currently on step {step}).")]
    FormNotReached { step: u8 },

    #[error("'civitas onboard' needs an interactive terminal. Use 'civitas register' instead.")]
    NotInteractive,
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\nValid values: {valid}")]
    InvalidValue {
        key: String,
        value: String,
        valid: String,
    },
}
