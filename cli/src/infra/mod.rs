//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: configuration files on disk,
//! the log file, and the email availability backend.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands`, `crate::output`, or `crate::tui` are
//! forbidden.

pub mod config;
pub mod email_check;
pub mod log_file;

pub use config::YamlConfigStore;
pub use email_check::SimulatedEmailCheck;
