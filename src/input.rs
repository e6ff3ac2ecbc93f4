//! Input event handling
//!
//! Translates keyboard events into app commands. Keys typed while a text
//! field is being edited never reach this module; `App` routes them to
//! the field editor first.

use crate::constants::{SLIDER_COARSE_STEP, SLIDER_STEP};
use crate::logging::FilterMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Command to execute on the App
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Quit,

    // Form navigation
    NextField,
    PrevField,
    /// Move the selected slider by this many steps
    Adjust(i32),
    /// Edit the selected text field or flip the switch
    Activate,

    // Device actions
    UpdateSound,
    UpdateGameState,
    ResetSound,
    StopUpdates,

    // Scrolling
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    ScrollToTop,
    ScrollToBottom,

    // Filtering
    Filter(FilterMode),

    // Log actions
    TogglePause,
    CopyLogs,
    CutLogs,
    ClearLogs,
    ExportLogs,
    OpenConfig,

    None,
}

/// Translate a key press into an AppCommand
pub fn translate_key(key: KeyEvent) -> AppCommand {
    let coarse = key.modifiers.contains(KeyModifiers::SHIFT);
    let step = if coarse { SLIDER_COARSE_STEP } else { SLIDER_STEP };

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => AppCommand::Quit,

        // Form navigation
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => AppCommand::NextField,
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => AppCommand::PrevField,
        KeyCode::Right | KeyCode::Char('l') => AppCommand::Adjust(step),
        KeyCode::Left | KeyCode::Char('h') => AppCommand::Adjust(-step),
        KeyCode::Char('L') => AppCommand::Adjust(SLIDER_COARSE_STEP),
        KeyCode::Char('H') => AppCommand::Adjust(-SLIDER_COARSE_STEP),
        KeyCode::Enter | KeyCode::Char(' ') => AppCommand::Activate,

        // Device actions
        KeyCode::Char('u') | KeyCode::Char('U') => AppCommand::UpdateSound,
        KeyCode::Char('g') | KeyCode::Char('G') => AppCommand::UpdateGameState,
        KeyCode::Char('r') | KeyCode::Char('R') => AppCommand::ResetSound,
        KeyCode::Char('s') | KeyCode::Char('S') => AppCommand::StopUpdates,

        // Log scrolling
        KeyCode::PageUp => AppCommand::ScrollPageUp,
        KeyCode::PageDown => AppCommand::ScrollPageDown,
        KeyCode::Home => AppCommand::ScrollToTop,
        KeyCode::End => AppCommand::ScrollToBottom,

        // Filter shortcuts
        KeyCode::Char('1') => AppCommand::Filter(FilterMode::All),
        KeyCode::Char('2') => AppCommand::Filter(FilterMode::Requests),
        KeyCode::Char('3') => AppCommand::Filter(FilterMode::Failures),

        // Clipboard operations
        KeyCode::Char('c') | KeyCode::Char('C') => AppCommand::CopyLogs,
        KeyCode::Char('x') | KeyCode::Char('X') => AppCommand::CutLogs,
        KeyCode::Backspace => AppCommand::ClearLogs,

        // Pause toggle
        KeyCode::Char('p') | KeyCode::Char('P') => AppCommand::TogglePause,

        // Export/Config
        KeyCode::Char('e') | KeyCode::Char('E') => AppCommand::ExportLogs,
        KeyCode::Char('f') | KeyCode::Char('F') => AppCommand::OpenConfig,

        _ => AppCommand::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(translate_key(key(KeyCode::Char('q'))), AppCommand::Quit);
        assert_eq!(translate_key(key(KeyCode::Esc)), AppCommand::Quit);
    }

    #[test]
    fn test_slider_steps() {
        assert_eq!(
            translate_key(key(KeyCode::Right)),
            AppCommand::Adjust(SLIDER_STEP)
        );
        assert_eq!(
            translate_key(key(KeyCode::Left)),
            AppCommand::Adjust(-SLIDER_STEP)
        );
        assert_eq!(
            translate_key(KeyEvent::new(KeyCode::Right, KeyModifiers::SHIFT)),
            AppCommand::Adjust(SLIDER_COARSE_STEP)
        );
        assert_eq!(
            translate_key(key(KeyCode::Char('H'))),
            AppCommand::Adjust(-SLIDER_COARSE_STEP)
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(translate_key(key(KeyCode::Char('u'))), AppCommand::UpdateSound);
        assert_eq!(
            translate_key(key(KeyCode::Char('g'))),
            AppCommand::UpdateGameState
        );
        assert_eq!(translate_key(key(KeyCode::Char('r'))), AppCommand::ResetSound);
        assert_eq!(translate_key(key(KeyCode::Char('s'))), AppCommand::StopUpdates);
    }

    #[test]
    fn test_filter_keys() {
        assert_eq!(
            translate_key(key(KeyCode::Char('3'))),
            AppCommand::Filter(FilterMode::Failures)
        );
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(translate_key(key(KeyCode::Tab)), AppCommand::NextField);
        assert_eq!(translate_key(key(KeyCode::BackTab)), AppCommand::PrevField);
        assert_eq!(translate_key(key(KeyCode::Enter)), AppCommand::Activate);
    }
}
