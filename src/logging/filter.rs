//! Log filtering
//!
//! Filter configuration for displaying logs in the UI.

use super::{LogEntry, LogKind};

/// Active filter mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Show everything
    All,
    /// Show only request outcomes
    Requests,
    /// Show only failed requests and rejected submissions
    Failures,
}

/// Log filter configuration
#[derive(Debug, Clone)]
pub struct LogFilter {
    pub show_requests: bool,
    pub show_rejected: bool,
    pub show_system: bool,
    /// Hide successful requests
    pub failures_only: bool,
}

impl Default for LogFilter {
    fn default() -> Self {
        Self {
            show_requests: true,
            show_rejected: true,
            show_system: true,
            failures_only: false,
        }
    }
}

impl LogFilter {
    pub fn for_mode(mode: FilterMode) -> Self {
        match mode {
            FilterMode::All => Self::default(),
            FilterMode::Requests => Self {
                show_requests: true,
                show_rejected: false,
                show_system: false,
                failures_only: false,
            },
            FilterMode::Failures => Self {
                show_requests: true,
                show_rejected: true,
                show_system: false,
                failures_only: true,
            },
        }
    }

    /// Check if a log entry passes the filter
    pub fn matches(&self, entry: &LogEntry) -> bool {
        match &entry.kind {
            LogKind::Request { .. } => {
                self.show_requests && (!self.failures_only || entry.is_failure())
            }
            LogKind::Rejected { .. } => self.show_rejected,
            LogKind::System { .. } => self.show_system,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sender::{Endpoint, Origin, SendResult};

    fn ok_request() -> LogEntry {
        LogEntry::request(Endpoint::Sound, Origin::Manual, SendResult::from_status(200))
    }

    fn failed_request() -> LogEntry {
        LogEntry::request(
            Endpoint::GameState,
            Origin::Manual,
            SendResult::from_status(500),
        )
    }

    #[test]
    fn test_default_matches_all() {
        let filter = LogFilter::default();
        assert!(filter.matches(&ok_request()));
        assert!(filter.matches(&failed_request()));
        assert!(filter.matches(&LogEntry::rejected("bad input")));
        assert!(filter.matches(&LogEntry::system("ready")));
    }

    #[test]
    fn test_requests_mode() {
        let filter = LogFilter::for_mode(FilterMode::Requests);
        assert!(filter.matches(&ok_request()));
        assert!(filter.matches(&failed_request()));
        assert!(!filter.matches(&LogEntry::rejected("bad input")));
        assert!(!filter.matches(&LogEntry::system("ready")));
    }

    #[test]
    fn test_failures_mode() {
        let filter = LogFilter::for_mode(FilterMode::Failures);
        assert!(!filter.matches(&ok_request()));
        assert!(filter.matches(&failed_request()));
        assert!(filter.matches(&LogEntry::rejected("bad input")));
        assert!(!filter.matches(&LogEntry::system("ready")));
    }
}
