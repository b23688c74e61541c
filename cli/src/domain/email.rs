//! Syntactic email address check.
//!
//! Pure function. Availability is checked elsewhere.

use regex::Regex;
use std::sync::LazyLock;

/// Local part may contain `_ ' + - .` but must end on a word-ish character;
/// domain is one or more `label.` groups followed by an alphabetic TLD.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Constant pattern; cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("valid regex")
});

/// Returns `true` if `value` is a syntactically valid email address.
///
/// Leading dots and consecutive dots are rejected before the pattern runs;
/// the `regex` crate has no look-around.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.starts_with('.') || value.contains("..") {
        return false;
    }
    EMAIL_RE.is_match(value)
}
