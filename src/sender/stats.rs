//! Request statistics
//!
//! Shared between the UI and every send task. Counters are lock-free;
//! the last outcome sits behind a short-held mutex.

use super::{Endpoint, SendResult};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Most recent request outcome
#[derive(Debug, Clone)]
pub struct LastOutcome {
    pub endpoint: Endpoint,
    pub result: SendResult,
    pub at: Instant,
}

#[derive(Debug, Default)]
pub struct SendStats {
    succeeded: AtomicU64,
    failed: AtomicU64,
    last: Mutex<Option<LastOutcome>>,
}

impl SendStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, endpoint: Endpoint, result: &SendResult) {
        if result.success {
            self.succeeded.fetch_add(1, Ordering::Relaxed);
        } else {
            self.failed.fetch_add(1, Ordering::Relaxed);
        }
        *self.last.lock() = Some(LastOutcome {
            endpoint,
            result: result.clone(),
            at: Instant::now(),
        });
    }

    #[inline]
    pub fn succeeded(&self) -> u64 {
        self.succeeded.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    pub fn total(&self) -> u64 {
        self.succeeded() + self.failed()
    }

    pub fn last(&self) -> Option<LastOutcome> {
        self.last.lock().clone()
    }
}
