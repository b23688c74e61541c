//! Integration tests for the civitas CLI
//!
//! These tests spawn the actual binary and test end-to-end behavior.
//! Every test points `CIVITAS_CONFIG` at a temp path or passes only flags
//! that never touch the config file.

mod config_command;
