//! Request sending
//!
//! - `RequestSender` - one POST of a JSON body, reported as a `SendResult`
//! - `HttpSender` - reqwest implementation
//! - `Dispatcher` - encodes a payload, sends it, records stats and emits a
//!   log entry for the UI
//!
//! No retries: a failed send is reported once and forgotten.

pub mod dispatch;
pub mod http;
pub mod stats;

pub use dispatch::{Dispatcher, Origin};
pub use http::HttpSender;
pub use stats::SendStats;

use crate::constants::{GAMESTATE_PATH, SOUND_PATH};
use async_trait::async_trait;
use serde::Serialize;

/// Remote endpoints exposed by the prop controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Endpoint {
    Sound,
    GameState,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Sound => SOUND_PATH,
            Endpoint::GameState => GAMESTATE_PATH,
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Endpoint::Sound => "Sound Updated!",
            Endpoint::GameState => "Game State Updated!",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Endpoint::Sound => "Sound Update Failed!",
            Endpoint::GameState => "Game State Update Failed!",
        }
    }

    /// Full URL for this endpoint under `base_url`
    ///
    /// A trailing `/` on the base is tolerated.
    pub fn url(self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim().trim_end_matches('/'), self.path())
    }
}

/// Outcome of a single POST
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendResult {
    /// True iff the device answered with a 2xx status
    pub success: bool,
    /// HTTP status, absent when no response was received
    pub status: Option<u16>,
    /// Transport error, absent when a response was received
    pub error: Option<String>,
}

impl SendResult {
    pub fn from_status(status: u16) -> Self {
        Self {
            success: (200..300).contains(&status),
            status: Some(status),
            error: None,
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            status: None,
            error: Some(reason.into()),
        }
    }

    /// Short human description ("200", "HTTP 500", "connection refused")
    pub fn describe(&self) -> String {
        match (&self.status, &self.error) {
            (Some(status), _) if self.success => status.to_string(),
            (Some(status), _) => format!("HTTP {}", status),
            (None, Some(error)) => error.clone(),
            (None, None) => "no response".to_string(),
        }
    }
}

/// Something that can POST a JSON body to a URL
#[async_trait]
pub trait RequestSender: Send + Sync {
    async fn send(&self, url: &str, payload: &serde_json::Value) -> SendResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url() {
        assert_eq!(
            Endpoint::Sound.url("http://192.168.127.137"),
            "http://192.168.127.137/sound"
        );
        assert_eq!(
            Endpoint::GameState.url("http://10.0.0.2:8080/"),
            "http://10.0.0.2:8080/gamestate"
        );
    }

    #[test]
    fn test_send_result_success_range() {
        assert!(SendResult::from_status(200).success);
        assert!(SendResult::from_status(204).success);
        assert!(SendResult::from_status(299).success);
        assert!(!SendResult::from_status(199).success);
        assert!(!SendResult::from_status(301).success);
        assert!(!SendResult::from_status(404).success);
        assert!(!SendResult::from_status(500).success);
    }

    #[test]
    fn test_send_result_describe() {
        assert_eq!(SendResult::from_status(200).describe(), "200");
        assert_eq!(SendResult::from_status(503).describe(), "HTTP 503");
        assert_eq!(SendResult::failed("timed out").describe(), "timed out");
    }

    #[test]
    fn test_endpoint_messages() {
        assert_eq!(Endpoint::Sound.success_message(), "Sound Updated!");
        assert_eq!(
            Endpoint::GameState.failure_message(),
            "Game State Update Failed!"
        );
    }
}
