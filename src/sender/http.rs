//! HTTP sender backed by reqwest

use super::{RequestSender, SendResult};
use crate::error::{PanelError, Result};
use async_trait::async_trait;
use std::time::Duration;

/// POSTs JSON with a shared connection pool and a per-request timeout
#[derive(Debug, Clone)]
pub struct HttpSender {
    client: reqwest::Client,
}

impl HttpSender {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| PanelError::HttpClient { source })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl RequestSender for HttpSender {
    async fn send(&self, url: &str, payload: &serde_json::Value) -> SendResult {
        // `json()` sets Content-Type: application/json
        match self.client.post(url).json(payload).send().await {
            Ok(response) => SendResult::from_status(response.status().as_u16()),
            Err(e) => SendResult::failed(describe_error(&e)),
        }
    }
}

fn describe_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "timed out".to_string()
    } else if e.is_connect() {
        "connection failed".to_string()
    } else if e.is_builder() {
        "invalid URL".to_string()
    } else {
        e.to_string()
    }
}
