//! Application state types
//!
//! Contains the state snapshot used for rendering.

use crate::sender::stats::LastOutcome;
use std::time::Duration;

/// Continuous-update loop as seen by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// No loop running
    Idle,
    /// Loop running, re-sending sound settings every interval
    Running { generation: u64 },
}

/// Application state snapshot for rendering
///
/// Borrowed view of the application state, rebuilt every frame.
#[derive(Debug, Clone)]
pub struct AppState<'a> {
    // Target
    pub base_url: &'a str,

    // Continuous updates
    pub loop_state: LoopState,
    pub interval: Duration,

    // Requests
    pub succeeded: u64,
    pub failed: u64,
    pub last: Option<LastOutcome>,

    // UI state
    pub paused: bool,
    pub editing: bool,
    pub status_message: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_state_variants() {
        assert_ne!(LoopState::Idle, LoopState::Running { generation: 1 });
        assert_ne!(
            LoopState::Running { generation: 1 },
            LoopState::Running { generation: 2 }
        );
    }
}
