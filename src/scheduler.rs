//! Continuous-update scheduler
//!
//! Owns a single slot for the repeating sound task. Every slider change
//! calls `notify_parameter_changed()`, which cancels the task in the slot
//! and spawns a fresh one. The task loops:
//!
//! ```text
//! snapshot form -> POST /sound -> wait interval (or cancel) -> repeat
//! ```
//!
//! Cancellation is cooperative. A request already on the wire when its
//! task is superseded is allowed to finish and its outcome is still
//! reported; only the following iterations are suppressed.

use crate::form::SoundTarget;
use crate::sender::{Dispatcher, Endpoint, Origin};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Handle to the live repeating task
pub struct RepeatingTask {
    generation: u64,
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl RepeatingTask {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

pub struct UpdateScheduler {
    dispatcher: Dispatcher,
    form: watch::Receiver<SoundTarget>,
    interval: Duration,
    active: Option<RepeatingTask>,
    next_generation: u64,
}

impl UpdateScheduler {
    /// `form` is read at the start of every iteration, so edits made while
    /// the loop runs are picked up on the next send.
    pub fn new(
        dispatcher: Dispatcher,
        form: watch::Receiver<SoundTarget>,
        interval: Duration,
    ) -> Self {
        Self {
            dispatcher,
            form,
            interval,
            active: None,
            next_generation: 0,
        }
    }

    /// Cancel the running loop (if any) and start a new one.
    ///
    /// Must be called from within a tokio runtime. Returns the generation
    /// of the new loop.
    pub fn notify_parameter_changed(&mut self) -> u64 {
        self.cancel();

        self.next_generation += 1;
        let generation = self.next_generation;
        let cancel = CancellationToken::new();

        let handle = tokio::spawn(run_loop(
            self.dispatcher.clone(),
            self.form.clone(),
            self.interval,
            cancel.clone(),
            generation,
        ));

        info!(generation, "continuous update started");
        self.active = Some(RepeatingTask {
            generation,
            cancel,
            handle,
        });
        generation
    }

    /// Stop the running loop. Returns true if a loop was live.
    pub fn cancel(&mut self) -> bool {
        match self.active.take() {
            Some(task) => {
                task.cancel.cancel();
                debug!(generation = task.generation, "continuous update cancelled");
                !task.is_finished()
            }
            None => false,
        }
    }

    /// Cancel and wait for the loop to wind down (in-flight send included)
    pub async fn shutdown(&mut self) {
        if let Some(task) = self.active.take() {
            task.cancel.cancel();
            let _ = task.handle.await;
            info!(generation = task.generation, "continuous update stopped");
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.as_ref().is_some_and(|t| !t.is_finished())
    }

    pub fn active_generation(&self) -> Option<u64> {
        self.active
            .as_ref()
            .filter(|t| !t.is_finished())
            .map(RepeatingTask::generation)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Drop for UpdateScheduler {
    fn drop(&mut self) {
        if let Some(task) = self.active.take() {
            task.cancel.cancel();
        }
    }
}

async fn run_loop(
    dispatcher: Dispatcher,
    form: watch::Receiver<SoundTarget>,
    interval: Duration,
    cancel: CancellationToken,
    generation: u64,
) {
    while !cancel.is_cancelled() {
        let target = form.borrow().clone();
        dispatcher
            .submit(
                &target.base_url,
                Endpoint::Sound,
                &target.settings,
                Origin::Loop { generation },
            )
            .await;

        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = tokio::time::sleep(interval) => {}
        }
    }
    debug!(generation, "continuous update loop exited");
}
