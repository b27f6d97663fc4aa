//! Controllers: the use-cases behind each dashboard panel.
//!
//! Each controller accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from the browser.
//! Controllers are the outermost catch sites: API failures are logged and
//! turned into view states or notices, never propagated.

pub mod camera_feed;
pub mod dashboard_manager;
pub mod risk_level;

pub use camera_feed::CameraFeedController;
pub use dashboard_manager::DashboardManager;
pub use risk_level::RiskLevelController;
