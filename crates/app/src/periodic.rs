//! Start/stop lifecycle around a repeating timer.

use std::time::Duration;

use crate::ports::Scheduler;

/// A repeating task owned by a controller.
///
/// Holds the scheduler's timer handle; the timer is cancelled when the
/// handle is dropped, so stopping (or dropping the owner) never leaves an
/// orphaned interval behind.
#[derive(Debug)]
pub struct PeriodicTask<H> {
    handle: Option<H>,
}

impl<H> PeriodicTask<H> {
    #[must_use]
    pub const fn new() -> Self {
        Self { handle: None }
    }

    /// Start ticking every `period`, replacing (and cancelling) any timer
    /// already running.
    pub fn start<S>(&mut self, scheduler: &S, period: Duration, tick: Box<dyn FnMut()>)
    where
        S: Scheduler<Handle = H>,
    {
        self.handle = Some(scheduler.every(period, tick));
    }

    /// Cancel the timer. Returns whether one was running.
    pub fn stop(&mut self) -> bool {
        self.handle.take().is_some()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl<H> Default for PeriodicTask<H> {
    fn default() -> Self {
        Self::new()
    }
}
