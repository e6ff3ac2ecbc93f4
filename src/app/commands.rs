//! Command execution
//!
//! Translates AppCommand into method calls on App.

use super::App;
use crate::constants::PAGE_SCROLL_LINES;
use crate::input::AppCommand;
use crate::logging::FilterMode;

impl App {
    /// Execute an application command. Returns true if app should quit.
    pub fn execute_command(&mut self, cmd: AppCommand) -> bool {
        match cmd {
            AppCommand::Quit => {
                self.quit();
                return true;
            }
            AppCommand::NextField => self.select_next(),
            AppCommand::PrevField => self.select_prev(),
            AppCommand::Adjust(delta) => self.adjust_slider(delta),
            AppCommand::Activate => self.activate(),
            AppCommand::UpdateSound => self.update_sound(),
            AppCommand::UpdateGameState => self.update_game_state(),
            AppCommand::ResetSound => self.reset_sound(),
            AppCommand::StopUpdates => self.stop_updates(),
            AppCommand::ScrollUp => self.logs.scroll_up(),
            AppCommand::ScrollDown => self.logs.scroll_down(),
            AppCommand::ScrollPageUp => {
                for _ in 0..PAGE_SCROLL_LINES {
                    self.logs.scroll_up();
                }
            }
            AppCommand::ScrollPageDown => {
                for _ in 0..PAGE_SCROLL_LINES {
                    self.logs.scroll_down();
                }
            }
            AppCommand::ScrollToTop => self.logs.scroll_to_top(),
            AppCommand::ScrollToBottom => self.logs.scroll_to_bottom(),
            AppCommand::Filter(mode) => {
                self.logs.set_filter(mode);
                self.set_status(filter_status(mode));
            }
            AppCommand::TogglePause => self.toggle_pause(),
            AppCommand::CopyLogs => self.copy_logs(),
            AppCommand::CutLogs => self.cut_logs(),
            AppCommand::ClearLogs => self.clear_logs(),
            AppCommand::ExportLogs => self.export_logs(),
            AppCommand::OpenConfig => self.open_config(),
            AppCommand::None => {}
        }
        false
    }
}

/// Get status message for a filter mode
fn filter_status(mode: FilterMode) -> &'static str {
    match mode {
        FilterMode::All => "Showing all logs",
        FilterMode::Requests => "Showing requests",
        FilterMode::Failures => "Showing failures",
    }
}
