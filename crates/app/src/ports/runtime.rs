//! Runtime ports: task spawning, interval timers and wall-clock time.
//!
//! The browser adapter backs these with `spawn_local`, `gloo-timers` and
//! `chrono`; tests back them with a manually driven scheduler.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use camwatch_domain::time::Timestamp;

/// A future spawned on the local (single-threaded) executor.
pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// Spawns local tasks and schedules repeating ticks.
pub trait Scheduler {
    /// Handle of a repeating timer. Dropping it cancels the timer.
    type Handle;

    /// Run `task` to completion in the background.
    fn spawn(&self, task: LocalTask);

    /// Call `tick` every `period` until the returned handle is dropped.
    ///
    /// The first call happens one `period` from now.
    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> Timestamp;
}
