//! Event log actions
//!
//! Destructive actions (cut, clear) leave a system entry behind so the
//! operator can tell the log was emptied on purpose.

use super::operations::{self, Export};
use super::App;
use crate::config;
use crate::logging::LogEntry;

impl App {
    /// Freeze the view. Send outcomes keep being recorded while frozen.
    pub fn toggle_pause(&mut self) {
        if self.logs.toggle_pause() {
            self.set_status("Log frozen");
        } else {
            self.set_status("Log following");
        }
    }

    pub fn copy_logs(&mut self) {
        match operations::copy_to_clipboard(&self.logs) {
            Ok(n) => self.set_status(format!("{} events on clipboard", n)),
            Err(e) => self.set_status(e),
        }
    }

    pub fn cut_logs(&mut self) {
        match operations::copy_to_clipboard(&self.logs) {
            Ok(n) => {
                self.empty_log(format!("{} events moved to clipboard", n));
                self.set_status(format!("{} events on clipboard", n));
            }
            Err(e) => self.set_status(e),
        }
    }

    pub fn clear_logs(&mut self) {
        let n = self.logs.entries().len();
        self.empty_log(format!("{} events cleared", n));
        self.set_status("Log cleared");
    }

    fn empty_log(&mut self, breadcrumb: String) {
        self.logs.clear();
        self.logs.add(LogEntry::system(breadcrumb));
    }

    pub fn export_logs(&mut self) {
        match operations::export_and_open(&self.logs, self.config.logs.export_max) {
            Ok(export) => self.record_export(&export),
            Err(e) => {
                self.logs.add(LogEntry::rejected(e.clone()));
                self.set_status(e);
            }
        }
    }

    pub(super) fn record_export(&mut self, export: &Export) {
        let path = export.path.display();
        self.logs.add(LogEntry::system(format!(
            "Exported {} events to {}",
            export.line_count, path
        )));
        if export.opened {
            self.set_status(format!("Exported to {}", path));
        } else {
            self.set_status(format!("Exported to {} (no viewer)", path));
        }
    }

    pub fn open_config(&mut self) {
        match config::open_in_editor() {
            Ok(path) => self.set_status(format!("Editing {}", path.display())),
            Err(e) => self.set_status(format!("Config: {}", e)),
        }
    }
}
