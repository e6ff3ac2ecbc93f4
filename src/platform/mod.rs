//! Platform abstraction layer
//!
//! Centralizes the few platform-specific calls the panel needs.

use crate::error::{PanelError, Result};
use std::path::Path;
use std::process::Command;

/// Open a file with the system's default application
///
/// - Windows: `cmd /C start`
/// - macOS: `open`
/// - Linux and others: `xdg-open`
pub fn open_file(path: &Path) -> Result<()> {
    let (program, mut cmd) = opener();
    cmd.arg(path);
    cmd.spawn()
        .map(|_| ())
        .map_err(|source| PanelError::OsCommand { program, source })
}

#[cfg(windows)]
fn opener() -> (&'static str, Command) {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]);
    ("cmd", cmd)
}

#[cfg(target_os = "macos")]
fn opener() -> (&'static str, Command) {
    ("open", Command::new("open"))
}

#[cfg(not(any(windows, target_os = "macos")))]
fn opener() -> (&'static str, Command) {
    ("xdg-open", Command::new("xdg-open"))
}
