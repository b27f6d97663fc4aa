//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the controllers and the outside world.
//! They are defined here (in `app`) so that both the controllers and the
//! adapters can depend on them without creating circular dependencies.
//!
//! None of the returned futures are required to be `Send`: they run on the
//! browser's single-threaded executor.

pub mod api;
pub mod confirm;
pub mod notify;
pub mod runtime;
pub mod view;

pub use api::{CameraApi, DashboardApi, RiskApi};
pub use confirm::ConfirmPrompt;
pub use notify::{Notice, NoticeKind, Notifier};
pub use runtime::{Clock, LocalTask, Scheduler};
pub use view::{CameraView, DashboardView, RiskView};
