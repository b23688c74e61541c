//! When an email input is worth an availability lookup.

use std::fmt;

/// Threshold used by the length-based trigger unless configured otherwise.
pub const DEFAULT_MIN_LENGTH: usize = 5;

/// Predicate deciding whether an email input schedules a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmailCheckTrigger {
    /// Fires once the input is strictly longer than `n` characters.
    MinLength(usize),
    /// Fires once the input contains an `@`.
    #[default]
    ContainsAt,
}

impl EmailCheckTrigger {
    /// Returns `true` if `value` should schedule a lookup.
    #[must_use]
    pub fn is_satisfied_by(self, value: &str) -> bool {
        match self {
            Self::MinLength(n) => value.chars().count() > n,
            Self::ContainsAt => value.contains('@'),
        }
    }
}

impl fmt::Display for EmailCheckTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinLength(n) => write!(f, "min-length ({n})"),
            Self::ContainsAt => f.write_str("contains-at"),
        }
    }
}
