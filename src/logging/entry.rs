//! Log entry types
//!
//! Core types for the operator-facing event log.

use crate::sender::{Endpoint, Origin, SendResult};
use serde::Serialize;

/// Type of log entry
#[derive(Debug, Clone, Serialize)]
pub enum LogKind {
    /// A POST went out (or tried to)
    Request {
        endpoint: Endpoint,
        origin: Origin,
        result: SendResult,
    },
    /// Submission blocked locally by input validation
    Rejected { message: String },
    /// Message from the panel itself
    System { message: String },
}

/// Log entry shown in the TUI and exported to text
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub timestamp: String, // HH:MM:SS.mmm
    pub kind: LogKind,
}

impl LogEntry {
    /// Current timestamp as HH:MM:SS.mmm
    #[inline]
    fn now() -> String {
        chrono::Local::now().format("%H:%M:%S%.3f").to_string()
    }

    /// Create a system log entry
    pub fn system(message: impl Into<String>) -> Self {
        Self {
            timestamp: Self::now(),
            kind: LogKind::System {
                message: message.into(),
            },
        }
    }

    /// Create an entry for a locally rejected submission
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            timestamp: Self::now(),
            kind: LogKind::Rejected {
                message: message.into(),
            },
        }
    }

    /// Create an entry for a request outcome
    pub fn request(endpoint: Endpoint, origin: Origin, result: SendResult) -> Self {
        Self {
            timestamp: Self::now(),
            kind: LogKind::Request {
                endpoint,
                origin,
                result,
            },
        }
    }

    /// Failed request or rejected submission
    pub fn is_failure(&self) -> bool {
        match &self.kind {
            LogKind::Request { result, .. } => !result.success,
            LogKind::Rejected { .. } => true,
            LogKind::System { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_format() {
        let entry = LogEntry::system("hello");
        // HH:MM:SS.mmm
        assert_eq!(entry.timestamp.len(), 12);
        assert_eq!(&entry.timestamp[2..3], ":");
        assert_eq!(&entry.timestamp[8..9], ".");
    }

    #[test]
    fn test_is_failure() {
        assert!(!LogEntry::system("x").is_failure());
        assert!(LogEntry::rejected("bad").is_failure());
        assert!(!LogEntry::request(
            Endpoint::Sound,
            Origin::Manual,
            SendResult::from_status(200)
        )
        .is_failure());
        assert!(LogEntry::request(
            Endpoint::Sound,
            Origin::Loop { generation: 1 },
            SendResult::failed("refused")
        )
        .is_failure());
    }
}
