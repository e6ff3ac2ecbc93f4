//! Payload dispatch
//!
//! Glue between a payload and the UI: encode, send, count, notify.
//! Cloning a `Dispatcher` is cheap; every send task gets its own clone.

use super::{Endpoint, RequestSender, SendResult, SendStats};
use crate::logging::{self, LogEntry};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// What triggered a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Origin {
    /// Operator pressed an update action
    Manual,
    /// Continuous-update loop with the given generation
    Loop { generation: u64 },
}

#[derive(Clone)]
pub struct Dispatcher {
    sender: Arc<dyn RequestSender>,
    stats: Arc<SendStats>,
    events: Option<mpsc::Sender<LogEntry>>,
}

impl Dispatcher {
    pub fn new(
        sender: Arc<dyn RequestSender>,
        stats: Arc<SendStats>,
        events: Option<mpsc::Sender<LogEntry>>,
    ) -> Self {
        Self {
            sender,
            stats,
            events,
        }
    }

    pub fn stats(&self) -> &Arc<SendStats> {
        &self.stats
    }

    /// POST `payload` to `endpoint` under `base_url` and report the outcome
    pub async fn submit<T: Serialize>(
        &self,
        base_url: &str,
        endpoint: Endpoint,
        payload: &T,
        origin: Origin,
    ) -> SendResult {
        let url = endpoint.url(base_url);

        let result = match serde_json::to_value(payload) {
            Ok(body) => {
                debug!(%url, %body, ?origin, "POST");
                self.sender.send(&url, &body).await
            }
            Err(e) => SendResult::failed(format!("cannot encode payload: {}", e)),
        };

        if result.success {
            debug!(%url, status = ?result.status, "request delivered");
        } else {
            warn!(%url, outcome = %result.describe(), "request failed");
        }

        self.stats.record(endpoint, &result);
        logging::try_log(
            &self.events,
            LogEntry::request(endpoint, origin, result.clone()),
        );

        result
    }
}
