//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod email;
pub mod error;
pub mod onboarding;
pub mod schema;
pub mod trigger;

pub use config::{CivitasConfig, validate_config_key, validate_config_value};
pub use email::is_valid_email;
pub use error::{ConfigError, FlowError};
pub use onboarding::{IntroPage, OnboardingStep};
pub use schema::{RegistrationSchema, SchemaOptions};
pub use trigger::EmailCheckTrigger;
