//! Form editing and device actions
//!
//! Slider moves restart the continuous-update loop; every other sound edit
//! is published to the running loop and picked up on its next send.

use super::App;
use crate::config::validate_base_url;
use crate::constants::{MAX_NUMBER_INPUT_LEN, MAX_URL_INPUT_LEN};
use crate::form::{FieldKind, FormField};
use crate::logging::LogEntry;
use crate::sender::{Endpoint, Origin};
use crossterm::event::KeyCode;
use tracing::info;

impl App {
    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn select_next(&mut self) {
        self.selected = self.selected.next();
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.prev();
    }

    pub fn select(&mut self, field: FormField) {
        self.cancel_edit();
        self.selected = field;
    }

    // =========================================================================
    // Sliders and switch
    // =========================================================================

    /// Move the selected slider. A real change restarts the loop.
    pub fn adjust_slider(&mut self, delta: i32) {
        let Some(slider) = self.form.slider_mut(self.selected) else {
            return;
        };
        if !slider.step(delta) {
            return;
        }
        self.publish_form();
        self.scheduler.notify_parameter_changed();
    }

    pub fn toggle_enable(&mut self) {
        self.form.enable = !self.form.enable;
        self.publish_form();
        self.set_status(if self.form.enable {
            "Sound enabled"
        } else {
            "Sound disabled"
        });
    }

    /// Enter on the selected field
    pub fn activate(&mut self) {
        match self.selected.kind() {
            FieldKind::Switch => self.toggle_enable(),
            FieldKind::Text | FieldKind::Number => {
                let current = self.form.text(self.selected).unwrap_or_default();
                self.edit_buffer = Some(current.to_string());
            }
            FieldKind::Slider => self.set_status("Use ←/→ to move the slider"),
        }
    }

    // =========================================================================
    // Text editing
    // =========================================================================

    pub(super) fn handle_edit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => self.push_edit_char(c),
            KeyCode::Backspace => {
                if let Some(buffer) = self.edit_buffer.as_mut() {
                    buffer.pop();
                }
            }
            KeyCode::Enter => self.commit_edit(),
            KeyCode::Esc => self.cancel_edit(),
            _ => {}
        }
    }

    fn push_edit_char(&mut self, c: char) {
        let max_len = match self.selected.kind() {
            FieldKind::Text => MAX_URL_INPUT_LEN,
            _ => MAX_NUMBER_INPUT_LEN,
        };
        if let Some(buffer) = self.edit_buffer.as_mut() {
            if !c.is_control() && buffer.chars().count() < max_len {
                buffer.push(c);
            }
        }
    }

    /// Store the edited text into the selected field
    pub fn commit_edit(&mut self) {
        let Some(buffer) = self.edit_buffer.take() else {
            return;
        };
        let field = self.selected;
        let Some(text) = self.form.text_mut(field) else {
            return;
        };
        *text = buffer;

        if field == FormField::BaseUrl {
            match validate_base_url(&self.form.base_url) {
                Ok(()) => self.logs.add(LogEntry::system(format!(
                    "Target: {}",
                    self.form.base_url
                ))),
                Err(e) => self.logs.add(LogEntry::rejected(e.to_string())),
            }
        }

        if !field.is_game_state() {
            self.publish_form();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit_buffer = None;
    }

    // =========================================================================
    // Device actions
    // =========================================================================

    /// One-shot POST of the current sound settings
    pub fn update_sound(&mut self) {
        let target = self.form.sound_target();
        let dispatcher = self.dispatcher.clone();
        tokio::spawn(async move {
            dispatcher
                .submit(
                    &target.base_url,
                    Endpoint::Sound,
                    &target.settings,
                    Origin::Manual,
                )
                .await;
        });
        self.set_status("Sending sound...");
    }

    /// One-shot POST of the game state, rejected locally on bad input
    pub fn update_game_state(&mut self) {
        let state = match self.form.game_state() {
            Ok(state) => state,
            Err(e) => {
                let message = e.to_string();
                self.logs.add(LogEntry::rejected(message.clone()));
                self.set_status(message);
                return;
            }
        };

        let base_url = self.form.base_url.clone();
        let dispatcher = self.dispatcher.clone();
        tokio::spawn(async move {
            dispatcher
                .submit(&base_url, Endpoint::GameState, &state, Origin::Manual)
                .await;
        });
        self.set_status("Sending game state...");
    }

    /// Restore sliders and volumes to the configured defaults (no send)
    pub fn reset_sound(&mut self) {
        self.cancel_edit();
        self.form.reset_sound(&self.config.sound);
        self.publish_form();
        self.set_status("Sound reset");
    }

    /// Stop the continuous-update loop
    pub fn stop_updates(&mut self) {
        if self.scheduler.cancel() {
            info!("continuous update stopped by operator");
            self.logs.add(LogEntry::system("Continuous update stopped"));
            self.set_status("Updates stopped");
        } else {
            self.set_status("No update running");
        }
    }
}
