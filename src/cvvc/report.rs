use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

/// Write the end-of-run error report into `dir`.
///
/// Nothing is written when `messages` is empty. The file is named
/// `error_report_<YYYYMMDD_HHMMSS>.txt` after `now`. A failure to write is
/// logged and swallowed; the returned path is `Some` only if the report
/// landed on disk.
pub fn write_report<S: AsRef<str>>(
    dir: &Path,
    messages: &[S],
    now: NaiveDateTime,
) -> Option<PathBuf> {
    if messages.is_empty() {
        return None;
    }

    let path = dir.join(format!("error_report_{}.txt", now.format("%Y%m%d_%H%M%S")));
    match std::fs::write(&path, render_report(messages, now)) {
        Ok(()) => {
            log::info!("Error report generated: {}", path.display());
            Some(path)
        }
        Err(e) => {
            log::error!("Failed to write error report {}: {e}", path.display());
            None
        }
    }
}

/// Report body: header, total count, then one numbered line per message.
pub fn render_report<S: AsRef<str>>(messages: &[S], now: NaiveDateTime) -> String {
    let mut out = String::new();
    out.push_str("Audio Concatenation Error Report\n");
    let _ = writeln!(out, "Generated: {}", now.format("%Y-%m-%d %H:%M:%S"));
    out.push_str(&"=".repeat(50));
    out.push_str("\n\n");
    let _ = writeln!(out, "Total errors: {}\n", messages.len());
    for (i, message) in messages.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, message.as_ref());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(9, 30, 5)
            .unwrap()
    }

    #[test]
    fn renders_header_count_and_numbered_messages() {
        let body = render_report(&["first", "second"], at());
        let expected = format!(
            "Audio Concatenation Error Report\n\
             Generated: 2026-10-16 09:30:05\n\
             {}\n\n\
             Total errors: 2\n\n\
             1. first\n\
             2. second\n",
            "=".repeat(50)
        );
        assert_eq!(body, expected);
    }

    #[test]
    fn writes_timestamped_file() {
        let dir = tempdir().unwrap();
        let path = write_report(dir.path(), &["line ka: boom".to_string()], at()).unwrap();
        assert_eq!(path, dir.path().join("error_report_20261016_093005.txt"));
        let body = std::fs::read_to_string(&path).unwrap();
        assert!(body.contains("1. line ka: boom"));
    }

    #[test]
    fn no_messages_no_file() {
        let dir = tempdir().unwrap();
        let none: [&str; 0] = [];
        assert!(write_report(dir.path(), &none, at()).is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn unwritable_directory_is_swallowed() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("gone");
        assert!(write_report(&missing, &["x"], at()).is_none());
    }
}
