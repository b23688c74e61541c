//! Application services: use-case orchestration.
//!
//! Each service module implements a single use-case by composing domain logic
//! with port trait calls. Services import only from `crate::domain` and
//! `crate::application::ports`, never from `crate::infra`, `crate::commands`,
//! `crate::output`, or `crate::tui`.

pub mod config_service;
pub mod email_check;
pub mod registration;
