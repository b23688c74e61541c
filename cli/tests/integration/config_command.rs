//! Integration tests for `civitas config` command.
//!
//! All filesystem-touching tests set `CIVITAS_CONFIG` to a temp path so they
//! never read or write `~/.civitas/config.yaml`.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn civitas() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("civitas"));
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Returns a `TempDir` and the path string for a config file inside it.
fn temp_config_path() -> (TempDir, String) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir
        .path()
        .join("config.yaml")
        .to_string_lossy()
        .into_owned();
    (dir, path)
}

// ---------------------------------------------------------------------------
// Subcommand registration
// ---------------------------------------------------------------------------

#[test]
fn test_config_help_shows_show_and_set_subcommands() {
    civitas()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("set"));
}

// ---------------------------------------------------------------------------
// `civitas config show`
// ---------------------------------------------------------------------------

#[test]
fn test_config_show_no_config_file_lists_defaults() {
    let (_dir, path) = temp_config_path();
    civitas()
        .args(["config", "show"])
        .env("CIVITAS_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("validation.require_digit"))
        .stdout(predicate::str::contains("contains-at"))
        .stdout(predicate::str::contains("1000"));
}

#[test]
fn test_config_show_displays_env_var_label() {
    let (_dir, path) = temp_config_path();
    civitas()
        .args(["config", "show"])
        .env("CIVITAS_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("CIVITAS_CONFIG"));
}

#[test]
fn test_config_show_does_not_create_file() {
    let (dir, path) = temp_config_path();
    civitas()
        .args(["config", "show"])
        .env("CIVITAS_CONFIG", &path)
        .assert()
        .success();
    assert!(!dir.path().join("config.yaml").exists());
}

#[test]
fn test_config_show_json_includes_path() {
    let (_dir, path) = temp_config_path();
    let output = civitas()
        .args(["config", "show", "--json"])
        .env("CIVITAS_CONFIG", &path)
        .output()
        .expect("run civitas");
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(value["path"], path.as_str());
    assert_eq!(value["validation"]["require_digit"], true);
    assert_eq!(value["email_check"]["trigger"], "contains-at");
    assert_eq!(value["email_check"]["delay_ms"], 1000);
}

// ---------------------------------------------------------------------------
// `civitas config set`
// ---------------------------------------------------------------------------

#[test]
fn test_config_set_then_show_roundtrip() {
    let (_dir, path) = temp_config_path();
    civitas()
        .args(["config", "set", "email_check.trigger", "min-length"])
        .env("CIVITAS_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Set email_check.trigger = min-length"));

    civitas()
        .args(["config", "show"])
        .env("CIVITAS_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("min-length"));
}

#[test]
fn test_config_set_json_echoes_pair() {
    let (_dir, path) = temp_config_path();
    let output = civitas()
        .args(["config", "set", "email_check.delay_ms", "250", "--json"])
        .env("CIVITAS_CONFIG", &path)
        .output()
        .expect("run civitas");
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(value["key"], "email_check.delay_ms");
    assert_eq!(value["value"], "250");
}

#[cfg(unix)]
#[test]
fn test_config_set_writes_owner_only_file() {
    use std::os::unix::fs::PermissionsExt;

    let (dir, path) = temp_config_path();
    civitas()
        .args(["config", "set", "validation.require_digit", "false"])
        .env("CIVITAS_CONFIG", &path)
        .assert()
        .success();

    let mode = std::fs::metadata(dir.path().join("config.yaml"))
        .expect("config written")
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_config_set_unknown_key_fails() {
    let (dir, path) = temp_config_path();
    civitas()
        .args(["config", "set", "ui.theme", "dark"])
        .env("CIVITAS_CONFIG", &path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown setting"))
        .stderr(predicate::str::contains("email_check.delay_ms"));
    assert!(!dir.path().join("config.yaml").exists());
}

#[test]
fn test_config_set_invalid_value_fails() {
    let (_dir, path) = temp_config_path();
    civitas()
        .args(["config", "set", "email_check.trigger", "on-blur"])
        .env("CIVITAS_CONFIG", &path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value"))
        .stderr(predicate::str::contains("contains-at, min-length"));
}

#[test]
fn test_config_set_delay_over_limit_fails() {
    let (_dir, path) = temp_config_path();
    civitas()
        .args(["config", "set", "email_check.delay_ms", "60001"])
        .env("CIVITAS_CONFIG", &path)
        .assert()
        .failure();
}
