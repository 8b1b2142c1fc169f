//! Cancellable scheduled tasks.
//!
//! A `ScheduledTask` owns at most one spawned tokio task. Starting a new
//! schedule cancels the previous one; stopping is idempotent.

use std::future::Future;
use std::ops::ControlFlow;
use std::time::Duration;

use log::{debug, warn};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Whether a tokio runtime is available on this thread.
pub fn has_runtime() -> bool {
    tokio::runtime::Handle::try_current().is_ok()
}

#[derive(Debug)]
struct Running {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

/// Handle to a single cancellable timer.
#[derive(Debug, Default)]
pub struct ScheduledTask {
    name: &'static str,
    running: Option<Running>,
}

impl ScheduledTask {
    /// Create an idle task handle. `name` is used in log output.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            running: None,
        }
    }

    /// Call `tick` every `period`, first after one full period.
    ///
    /// Any previous schedule is cancelled first. The schedule ends when
    /// `tick` returns `ControlFlow::Break`, or on `stop()`.
    ///
    /// Returns false (and schedules nothing) outside a tokio runtime or
    /// for a zero period.
    pub fn start_repeating<F>(&mut self, period: Duration, mut tick: F) -> bool
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        if period.is_zero() {
            self.stop();
            warn!("{}: zero period, not scheduling", self.name);
            return false;
        }
        self.spawn(move |token| async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = interval.tick() => {
                        if tick().is_break() {
                            break;
                        }
                    }
                }
            }
        })
    }

    /// Call `f` once after `delay`.
    pub fn start_once<F>(&mut self, delay: Duration, f: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        self.spawn(move |token| async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => f(),
            }
        })
    }

    /// Run an arbitrary future under this handle's cancellation.
    ///
    /// The future receives the token and should return promptly once it
    /// is cancelled.
    pub fn spawn<F, Fut>(&mut self, make: F) -> bool
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.stop();

        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            warn!("{}: no async runtime, not scheduling", self.name);
            return false;
        };

        let cancel = CancellationToken::new();
        let future = make(cancel.clone());
        let handle = handle.spawn(future);
        debug!("{}: scheduled", self.name);
        self.running = Some(Running { cancel, handle });
        true
    }

    /// Cancel the pending schedule, if any. Safe to call repeatedly.
    ///
    /// Returns true if something was actually cancelled.
    pub fn stop(&mut self) -> bool {
        match self.running.take() {
            Some(running) => {
                running.cancel.cancel();
                running.handle.abort();
                debug!("{}: cancelled", self.name);
                true
            }
            None => false,
        }
    }

    /// Whether a schedule is pending.
    pub fn is_running(&self) -> bool {
        self.running
            .as_ref()
            .is_some_and(|running| !running.handle.is_finished())
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.stop();
    }
}
