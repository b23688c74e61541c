//! Registration form schema: per-field rules plus the password confirmation
//! cross-check.
//!
//! Pure functions only; no I/O.

use civitas_common::{Field, RegistrationForm, ValidationErrors};

use crate::domain::email::is_valid_email;

// ── Constants ────────────────────────────────────────────────────────────────

pub const MIN_FULL_NAME_CHARS: usize = 3;
pub const MIN_PASSWORD_CHARS: usize = 8;

pub const FULL_NAME_TOO_SHORT: &str = "Full name must be at least 3 characters";
pub const EMAIL_INVALID: &str = "Enter a valid email address";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const PASSWORD_MISSING_DIGIT: &str = "Password must include at least one number";
pub const PASSWORDS_MISMATCH: &str = "Passwords do not match";

// ── Options ──────────────────────────────────────────────────────────────────

/// Knobs that differ between registration surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaOptions {
    /// Reject passwords without at least one ASCII digit.
    pub require_digit: bool,
}

impl Default for SchemaOptions {
    fn default() -> Self {
        Self {
            require_digit: true,
        }
    }
}

// ── Schema ───────────────────────────────────────────────────────────────────

/// Validates a [`RegistrationForm`] in one pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationSchema {
    options: SchemaOptions,
}

impl RegistrationSchema {
    #[must_use]
    pub fn new(options: SchemaOptions) -> Self {
        Self { options }
    }

    /// Validate `form`, collecting every violation.
    ///
    /// Per-field rules run first and independently; the confirmation
    /// cross-check runs afterwards regardless of their outcome. On success the
    /// caller gets an unchanged copy of the input.
    ///
    /// # Errors
    ///
    /// Returns the full per-field error map if any rule fails.
    pub fn validate(&self, form: &RegistrationForm) -> Result<RegistrationForm, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if form.full_name.chars().count() < MIN_FULL_NAME_CHARS {
            errors.push(Field::FullName, FULL_NAME_TOO_SHORT);
        }

        if !is_valid_email(&form.email) {
            errors.push(Field::Email, EMAIL_INVALID);
        }

        if form.password.chars().count() < MIN_PASSWORD_CHARS {
            errors.push(Field::Password, PASSWORD_TOO_SHORT);
        }
        if self.options.require_digit && !form.password.chars().any(|c| c.is_ascii_digit()) {
            errors.push(Field::Password, PASSWORD_MISSING_DIGIT);
        }

        if form.password != form.confirm_password {
            errors.push(Field::ConfirmPassword, PASSWORDS_MISMATCH);
        }

        if errors.is_empty() {
            Ok(form.clone())
        } else {
            Err(errors)
        }
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
