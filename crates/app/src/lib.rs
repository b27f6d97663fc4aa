//! # camwatch-app
//!
//! Application layer: controllers and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **driven/outbound ports** that adapters must implement:
//!   - `CameraApi`, `RiskApi`, `DashboardApi`: calls to the monitoring backend
//!   - `CameraView`, `RiskView`, `DashboardView`: sinks for rendered view models
//!   - `Notifier`: transient notifications
//!   - `ConfirmPrompt`: synchronous yes/no confirmation
//!   - `Scheduler`, `Clock`: timers, local task spawning, current time
//! - Define **driving/inbound** controllers:
//!   - `CameraFeedController`: camera selection, feed, status and detections polling
//!   - `RiskLevelController`: risk level state machine and confirmation modal
//!   - `DashboardManager`: dashboard/camera admin forms
//! - Provide the `PeriodicTask` lifecycle and request sequencing used to
//!   discard out-of-order poll responses
//!
//! ## Dependency rule
//! Depends on `camwatch-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.
//!
//! ## Threading
//! Everything here runs on a single-threaded event loop (the browser).
//! Controllers are shared through `Rc`, keep their state in `Cell`/`RefCell`
//! and never hold a borrow across an `.await`.

pub mod controllers;
pub mod periodic;
pub mod ports;
pub mod sequence;
pub mod view_model;

#[cfg(test)]
pub(crate) mod testing;
