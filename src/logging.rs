use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;

use chrono::Local;

static LOG_FILE: OnceLock<PathBuf> = OnceLock::new();

pub fn timestamp_prefix() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Turns logging on for the rest of the process. Only the first call counts.
pub fn init(path: PathBuf) {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        let _ = fs::create_dir_all(parent);
    }
    let _ = LOG_FILE.set(path);
}

/// Appends one line to the log file. Silently does nothing when logging is
/// off or the file cannot be opened; the terminal belongs to the editor.
pub fn log(message: &str) {
    let Some(path) = LOG_FILE.get() else {
        return;
    };
    if let Ok(mut file) = fs::OpenOptions::new().create(true).append(true).open(path) {
        let _ = writeln!(file, "{} {}", timestamp_prefix(), message);
    }
}
