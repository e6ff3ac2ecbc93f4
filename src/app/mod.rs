//! Application state and orchestration
//!
//! Single source of truth for the control screen. Owns the form, the
//! continuous-update scheduler and the event log. All methods run on the
//! TUI loop; send tasks report back through a channel drained by `poll()`.

mod commands;
mod form;
mod logs;
pub mod operations;
pub mod state;

pub use state::{AppState, LoopState};

use crate::config::Config;
use crate::constants::{CHANNEL_CAPACITY, STATUS_MESSAGE_TIMEOUT_SECS};
use crate::form::{FormField, FormModel, SoundTarget};
use crate::input;
use crate::logging::{FilterMode, LogEntry, LogFilter, LogKind, LogStore};
use crate::scheduler::UpdateScheduler;
use crate::sender::{Dispatcher, RequestSender, SendStats};
use crossterm::event::KeyEvent;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{mpsc, watch};

/// Main application
pub struct App {
    // Config
    pub(super) config: Config,

    // Form + continuous updates
    pub(super) form: FormModel,
    form_tx: watch::Sender<SoundTarget>,
    pub(super) scheduler: UpdateScheduler,
    pub(super) dispatcher: Dispatcher,

    // Logs
    pub(super) logs: LogStore,
    events_rx: mpsc::Receiver<LogEntry>,

    // UI state
    pub(super) selected: FormField,
    /// Some while a text field is being edited
    pub(super) edit_buffer: Option<String>,
    status_message: Option<(String, Instant)>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, sender: Arc<dyn RequestSender>) -> Self {
        let form = FormModel::new(config.device.base_url.clone(), &config.sound);
        let (form_tx, form_rx) = watch::channel(form.sound_target());

        let (events_tx, events_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let dispatcher = Dispatcher::new(sender, Arc::new(SendStats::new()), Some(events_tx));
        let scheduler = UpdateScheduler::new(
            dispatcher.clone(),
            form_rx,
            config.device.repeat_interval(),
        );

        let logs = LogStore::new(config.logs.max_entries);

        let mut app = Self {
            config,
            form,
            form_tx,
            scheduler,
            dispatcher,
            logs,
            events_rx,
            selected: FormField::Frequency,
            edit_buffer: None,
            status_message: None,
            should_quit: false,
        };

        app.log_welcome_message();
        app
    }

    fn log_welcome_message(&mut self) {
        self.logs.add(LogEntry::system("Prop panel ready"));
        self.logs.add(LogEntry::system(format!(
            "Target: {}",
            self.form.base_url
        )));
    }

    // =========================================================================
    // State access
    // =========================================================================

    pub fn state(&self) -> AppState<'_> {
        let stats = self.dispatcher.stats();
        let loop_state = match self.scheduler.active_generation() {
            Some(generation) => LoopState::Running { generation },
            None => LoopState::Idle,
        };

        AppState {
            base_url: &self.form.base_url,
            loop_state,
            interval: self.scheduler.interval(),
            succeeded: stats.succeeded(),
            failed: stats.failed(),
            last: stats.last(),
            paused: self.logs.is_paused(),
            editing: self.edit_buffer.is_some(),
            status_message: self.status_text(),
        }
    }

    pub fn form(&self) -> &FormModel {
        &self.form
    }

    pub fn selected_field(&self) -> FormField {
        self.selected
    }

    pub fn edit_buffer(&self) -> Option<&str> {
        self.edit_buffer.as_deref()
    }

    pub fn stats(&self) -> &Arc<SendStats> {
        self.dispatcher.stats()
    }

    pub fn is_updating(&self) -> bool {
        self.scheduler.is_active()
    }

    /// Drain send outcomes into the log and the status line
    pub fn poll(&mut self) {
        while let Ok(entry) = self.events_rx.try_recv() {
            if let LogKind::Request {
                endpoint, result, ..
            } = &entry.kind
            {
                let message = if result.success {
                    endpoint.success_message().to_string()
                } else {
                    format!("{} ({})", endpoint.failure_message(), result.describe())
                };
                self.set_status(message);
            }
            self.logs.add(entry);
        }
    }

    /// Push the current sound values to the running loop
    pub(super) fn publish_form(&mut self) {
        self.form_tx.send_replace(self.form.sound_target());
    }

    // =========================================================================
    // Status message
    // =========================================================================

    pub(super) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    fn status_text(&self) -> Option<&str> {
        self.status_message
            .as_ref()
            .filter(|(_, t)| t.elapsed().as_secs() < STATUS_MESSAGE_TIMEOUT_SECS)
            .map(|(s, _)| s.as_str())
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    pub fn quit(&mut self) {
        self.scheduler.cancel();
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // =========================================================================
    // Log access
    // =========================================================================

    pub fn logs(&self) -> &VecDeque<LogEntry> {
        self.logs.entries()
    }

    pub fn filter(&self) -> &LogFilter {
        self.logs.filter()
    }

    pub fn filter_mode(&self) -> FilterMode {
        self.logs.filter_mode()
    }

    pub fn scroll_position(&self) -> usize {
        self.logs.scroll_position()
    }

    // =========================================================================
    // Input handling
    // =========================================================================

    /// Handle keyboard input. Returns true if app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Route to the field editor if one is open
        if self.edit_buffer.is_some() {
            self.handle_edit_key(key.code);
            return false;
        }

        let cmd = input::translate_key(key);
        self.execute_command(cmd)
    }

    /// Handle mouse scroll
    pub fn handle_scroll(&mut self, up: bool) {
        if up {
            self.logs.scroll_up();
        } else {
            self.logs.scroll_down();
        }
    }
}
