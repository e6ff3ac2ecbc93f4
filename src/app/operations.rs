//! Event log side effects: clipboard and file export

use crate::config;
use crate::logging::LogStore;
use crate::platform;
use std::fs;
use std::path::{Path, PathBuf};

/// Put the filtered events on the clipboard. Returns how many were copied.
pub fn copy_to_clipboard(logs: &LogStore) -> Result<usize, String> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| format!("Clipboard unavailable: {}", e))?;
    clipboard
        .set_text(logs.to_text())
        .map_err(|e| format!("Clipboard error: {}", e))?;
    Ok(logs.filtered_count())
}

/// A finished export
#[derive(Debug)]
pub struct Export {
    pub path: PathBuf,
    pub line_count: usize,
    /// False when the file was written but no viewer could be launched
    pub opened: bool,
}

/// Export next to the config file and open it with the default viewer
pub fn export_and_open(logs: &LogStore, max_export: usize) -> Result<Export, String> {
    let dir = config::data_dir().map_err(|e| format!("No export directory: {}", e))?;
    let (path, line_count) =
        write_export(logs, max_export, &dir).map_err(|e| format!("Export failed: {}", e))?;
    let opened = platform::open_file(&path).is_ok();

    Ok(Export {
        path,
        line_count,
        opened,
    })
}

/// Write the most recent `max_export` filtered events to
/// `prop-panel-log-<stamp>.txt` in `dir`.
pub fn write_export(
    logs: &LogStore,
    max_export: usize,
    dir: &Path,
) -> std::io::Result<(PathBuf, usize)> {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("prop-panel-log-{}.txt", timestamp));

    let text = logs.to_text_limited(max_export);
    let line_count = text.lines().count();
    fs::write(&path, text)?;

    Ok((path, line_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogEntry;

    #[test]
    fn test_write_export_limits_lines() {
        let dir = tempfile::tempdir().unwrap();
        let mut logs = LogStore::new(10);
        for i in 0..5 {
            logs.add(LogEntry::system(format!("line {}", i)));
        }

        let (path, count) = write_export(&logs, 3, dir.path()).unwrap();
        assert_eq!(count, 3);
        assert!(path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with("prop-panel-log-")));

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("line 4"));
        assert!(!content.contains("line 1"));
    }

    #[test]
    fn test_write_export_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let logs = LogStore::new(10);
        assert!(write_export(&logs, 10, &dir.path().join("gone")).is_err());
    }
}
