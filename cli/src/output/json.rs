//! JSON output helpers.
//!
//! Provides the error-object formatter used by all `--json` code paths when
//! a command fails, and the registration result objects printed by
//! `civitas register --json`.

use anyhow::{Context, Result};
use civitas_common::{RegistrationForm, ValidationErrors};

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails (should not happen in
/// practice: `serde_json` only fails on non-finite floats and maps with
/// non-string keys, neither of which appear here).
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Format an accepted registration. Passwords are never included.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_accepted(form: &RegistrationForm) -> Result<String> {
    let obj = serde_json::json!({
        "valid": true,
        "registration": {
            "fullName": form.full_name,
            "email": form.email,
        },
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Format a rejected registration with every message per field.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_rejected(errors: &ValidationErrors) -> Result<String> {
    let obj = serde_json::json!({
        "valid": false,
        "errors": errors,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}
