//! Application layer: port trait definitions and use-case orchestration.
//!
//! This module depends only on `crate::domain`, never on `crate::infra`,
//! `crate::commands`, `crate::output`, or `crate::tui`.

pub mod ports;
pub mod services;

pub use ports::{
    Acknowledger, ConfigStore, Destination, EmailAvailability, EmailAvailabilityCheck, Navigator,
};
