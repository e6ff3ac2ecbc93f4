//! Shared test doubles

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use prop_panel::config::SoundConfig;
use prop_panel::form::{FormModel, SoundTarget};
use prop_panel::sender::{RequestSender, SendResult};
use serde_json::Value;
use std::time::Duration;
use tokio::time::Instant;

/// One POST seen by the recording sender
#[derive(Debug, Clone)]
pub struct Call {
    pub at: Instant,
    pub url: String,
    pub payload: Value,
}

/// Mock sender: records every call and answers with a fixed status
/// after an optional delay
pub struct RecordingSender {
    calls: Mutex<Vec<Call>>,
    status: u16,
    delay: Duration,
}

impl RecordingSender {
    pub fn ok() -> Self {
        Self::with_status(200)
    }

    pub fn with_status(status: u16) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            status,
            delay: Duration::ZERO,
        }
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::ok()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl RequestSender for RecordingSender {
    async fn send(&self, url: &str, payload: &Value) -> SendResult {
        self.calls.lock().push(Call {
            at: Instant::now(),
            url: url.to_string(),
            payload: payload.clone(),
        });
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        SendResult::from_status(self.status)
    }
}

pub fn default_target() -> SoundTarget {
    FormModel::new("http://device.test", &SoundConfig::default()).sound_target()
}
