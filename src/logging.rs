//! Timestamped logging to console and an append-only log file.

use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// Optional per-session log file. When unset, the default log file under
/// the data directory is used.
static SESSION_LOG: Mutex<Option<PathBuf>> = Mutex::new(None);

/// Logs a message to both console and log file with timestamp.
pub fn log(msg: &str) {
    let timestamp = Local::now().format("%H:%M:%S%.3f");
    let line = format!("[{}] {}\n", timestamp, msg);
    print!("{}", line);

    let path = SESSION_LOG
        .lock()
        .ok()
        .and_then(|p| p.clone())
        .unwrap_or_else(|| crate::paths::get_logs_dir().join("hud_coach.log"));
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&path) {
        let _ = file.write_all(line.as_bytes());
    }
}

/// Redirects log output to a per-session file, or back to the default
/// when passed `None`.
pub fn set_session_log(path: Option<PathBuf>) {
    if let Ok(mut p) = SESSION_LOG.lock() {
        *p = path;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_session_log_receives_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.log");

        set_session_log(Some(path.clone()));
        log("hello from the test");
        set_session_log(None);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("hello from the test"));
    }
}
