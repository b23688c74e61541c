//! Command implementations

pub mod config;
pub mod onboard;
pub mod register;
pub mod version;
