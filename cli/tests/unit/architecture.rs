//! Structural tests for layer boundaries.
//!
//! These scan source files so an import that crosses a layer fails the build
//! of the test suite rather than a code review.

use std::path::{Path, PathBuf};

/// Collect all `.rs` files under a directory recursively.
fn collect_rs_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(collect_rs_files(&path));
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                files.push(path);
            }
        }
    }
    files
}

/// Read a file and strip comment lines to avoid false positives.
fn read_non_comment_lines(path: &Path) -> Vec<String> {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Vec::new();
    };
    content
        .lines()
        .filter(|l| {
            let trimmed = l.trim();
            !trimmed.starts_with("//") && !trimmed.starts_with("/*") && !trimmed.starts_with('*')
        })
        .map(String::from)
        .collect()
}

fn src_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src")
}

/// Every line under `dir` containing one of `forbidden`, as `path:line: text`.
fn find_violations(dir: &Path, forbidden: &[&str]) -> Vec<String> {
    let mut violations = Vec::new();
    for file in collect_rs_files(dir) {
        let rel = file
            .strip_prefix(env!("CARGO_MANIFEST_DIR"))
            .unwrap_or(&file)
            .display()
            .to_string();
        for (i, line) in read_non_comment_lines(&file).iter().enumerate() {
            for pattern in forbidden {
                if line.contains(pattern) {
                    violations.push(format!("{rel}:{}: `{pattern}`: {line}", i + 1));
                }
            }
        }
    }
    violations
}

#[test]
fn domain_imports_nothing_outside_domain() {
    let violations = find_violations(
        &src_dir().join("domain"),
        &[
            "crate::application",
            "crate::infra",
            "crate::commands",
            "crate::output",
            "crate::tui",
            "tokio::",
            "std::fs",
        ],
    );
    assert!(
        violations.is_empty(),
        "domain/ must stay pure:\n{}",
        violations.join("\n")
    );
}

#[test]
fn application_does_not_import_adapters() {
    let violations = find_violations(
        &src_dir().join("application"),
        &[
            "crate::infra",
            "crate::commands",
            "crate::output",
            "crate::tui",
            "println!",
        ],
    );
    assert!(
        violations.is_empty(),
        "application/ must depend only on domain/ and its ports:\n{}",
        violations.join("\n")
    );
}

#[test]
fn infra_has_no_imports_from_commands_or_output() {
    let violations = find_violations(
        &src_dir().join("infra"),
        &["crate::commands", "crate::output", "crate::tui"],
    );
    assert!(
        violations.is_empty(),
        "infra/ must not import from presentation layers:\n{}",
        violations.join("\n")
    );
}

#[test]
fn terminal_ui_crates_stay_in_tui() {
    let mut violations = Vec::new();
    for dir in ["domain", "application", "infra", "output", "commands"] {
        violations.extend(find_violations(
            &src_dir().join(dir),
            &["ratatui::", "crossterm::"],
        ));
    }
    assert!(
        violations.is_empty(),
        "ratatui/crossterm belong under tui/:\n{}",
        violations.join("\n")
    );
}
