//! Log file used while the full-screen UI owns the terminal.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

/// Environment variable overriding the log file location.
pub const LOG_FILE_ENV: &str = "CIVITAS_LOG_FILE";

const LOG_FILE_NAME: &str = "civitas.log";

/// Where to try to put the log, most specific first.
#[must_use]
pub fn candidates() -> Vec<PathBuf> {
    candidates_from(
        std::env::var_os(LOG_FILE_ENV).map(PathBuf::from),
        dirs::home_dir(),
        &std::env::temp_dir(),
    )
}

/// `override_path`, then `<home>/.civitas/logs/civitas.log`, then the temp dir.
#[must_use]
pub fn candidates_from(
    override_path: Option<PathBuf>,
    home: Option<PathBuf>,
    temp: &Path,
) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(3);
    paths.extend(override_path);
    paths.extend(home.map(|h| h.join(".civitas").join("logs").join(LOG_FILE_NAME)));
    paths.push(temp.join("civitas").join(LOG_FILE_NAME));
    paths
}

/// Open the first candidate that can be appended to, creating parent
/// directories as needed. `None` if every candidate fails.
#[must_use]
pub fn open_first(candidates: &[PathBuf]) -> Option<(PathBuf, File)> {
    candidates.iter().find_map(|path| {
        if let Some(parent) = path.parent()
            && fs::create_dir_all(parent).is_err()
        {
            return None;
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok()
            .map(|file| (path.clone(), file))
    })
}
