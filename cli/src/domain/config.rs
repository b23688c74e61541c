//! Domain types and validators for CivitasAuth configuration.
//!
//! Pure functions only; no I/O.

use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;
use crate::domain::schema::SchemaOptions;
use crate::domain::trigger::{DEFAULT_MIN_LENGTH, EmailCheckTrigger};

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &[
    "validation.require_digit",
    "email_check.trigger",
    "email_check.min_length",
    "email_check.delay_ms",
];
pub const VALID_BOOLS: &[&str] = &["true", "false"];
pub const VALID_TRIGGERS: &[&str] = &["contains-at", "min-length"];

/// Debounce delay applied when nothing is configured.
pub const DEFAULT_DELAY_MS: u64 = 1000;
/// Upper bound accepted by `config set email_check.delay_ms`.
pub const MAX_DELAY_MS: u64 = 60_000;

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.civitas/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CivitasConfig {
    /// Registration form rules.
    pub validation: ValidationConfig,
    /// Debounced email availability check.
    pub email_check: EmailCheckConfig,
}

/// Registration form rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Require at least one digit in the password (default `true`).
    #[serde(default = "default_require_digit")]
    pub require_digit: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            require_digit: default_require_digit(),
        }
    }
}

/// Which predicate schedules an email availability lookup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TriggerKind {
    #[default]
    ContainsAt,
    MinLength,
}

/// Debounced email availability check settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailCheckConfig {
    /// `contains-at` (default) or `min-length`.
    #[serde(default)]
    pub trigger: TriggerKind,
    /// Length the input must exceed when `trigger` is `min-length`.
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    /// Debounce delay in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for EmailCheckConfig {
    fn default() -> Self {
        Self {
            trigger: TriggerKind::default(),
            min_length: default_min_length(),
            delay_ms: default_delay_ms(),
        }
    }
}

fn default_require_digit() -> bool {
    true
}

fn default_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

impl CivitasConfig {
    /// Schema options derived from `validation.*`.
    #[must_use]
    pub fn schema_options(&self) -> SchemaOptions {
        SchemaOptions {
            require_digit: self.validation.require_digit,
        }
    }

    /// Trigger predicate derived from `email_check.*`.
    #[must_use]
    pub fn email_check_trigger(&self) -> EmailCheckTrigger {
        match self.email_check.trigger {
            TriggerKind::ContainsAt => EmailCheckTrigger::ContainsAt,
            TriggerKind::MinLength => EmailCheckTrigger::MinLength(self.email_check.min_length),
        }
    }

    #[must_use]
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.email_check.delay_ms)
    }

    /// Current value of a whitelisted key, rendered as `config set` accepts it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "validation.require_digit" => Some(self.validation.require_digit.to_string()),
            "email_check.trigger" => Some(
                match self.email_check.trigger {
                    TriggerKind::ContainsAt => "contains-at",
                    TriggerKind::MinLength => "min-length",
                }
                .to_string(),
            ),
            "email_check.min_length" => Some(self.email_check.min_length.to_string()),
            "email_check.delay_ms" => Some(self.email_check.delay_ms.to_string()),
            _ => None,
        }
    }

    /// Validate and apply `key = value`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value is invalid for it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_config_value(key, value)?;
        match key {
            "validation.require_digit" => self.validation.require_digit = value == "true",
            "email_check.trigger" => {
                self.email_check.trigger = if value == "min-length" {
                    TriggerKind::MinLength
                } else {
                    TriggerKind::ContainsAt
                };
            }
            "email_check.min_length" => self.email_check.min_length = value.parse()?,
            "email_check.delay_ms" => self.email_check.delay_ms = value.parse()?,
            _ => validate_config_key(key)?,
        }
        Ok(())
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    let invalid = |valid: String| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        valid,
    };
    match key {
        "validation.require_digit" if !VALID_BOOLS.contains(&value) => {
            Err(invalid(VALID_BOOLS.join(", ")).into())
        }
        "email_check.trigger" if !VALID_TRIGGERS.contains(&value) => {
            Err(invalid(VALID_TRIGGERS.join(", ")).into())
        }
        "email_check.min_length" if value.parse::<usize>().is_err() => {
            Err(invalid("a non-negative integer".to_string()).into())
        }
        "email_check.delay_ms"
            if !value
                .parse::<u64>()
                .is_ok_and(|ms| ms <= MAX_DELAY_MS) =>
        {
            Err(invalid(format!("0..={MAX_DELAY_MS} (milliseconds)")).into())
        }
        _ => Ok(()),
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
