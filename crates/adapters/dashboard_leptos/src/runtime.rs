//! Browser runtime: `spawn_local`, `gloo-timers` intervals and wall-clock time.

use std::time::Duration;

use camwatch_app::ports::{Clock, LocalTask, Scheduler};
use camwatch_domain::time::{self, Timestamp};
use gloo_timers::callback::Interval;

/// Scheduler and clock backed by the browser event loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRuntime;

impl Scheduler for BrowserRuntime {
    /// Dropping the interval clears it.
    type Handle = Interval;

    fn spawn(&self, task: LocalTask) {
        leptos::task::spawn_local(task);
    }

    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> Interval {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        Interval::new(millis, tick)
    }
}

impl Clock for BrowserRuntime {
    fn now(&self) -> Timestamp {
        time::now()
    }
}
