//! View ports: sinks the controllers render view models into.
//!
//! Each call replaces the previous content of that part of the page.

use crate::ports::notify::Notice;
use crate::view_model::{
    DashboardCard, DetectionsState, FeedState, ModalView, RiskPanelState, SelectOption,
    StatusState,
};

/// Camera feed, status widget and detections table.
pub trait CameraView {
    fn render_feed(&self, feed: &FeedState);
    fn render_status(&self, status: &StatusState);
    fn render_detections(&self, detections: &DetectionsState);
}

/// Risk indicator panel and the change-level modal.
pub trait RiskView {
    fn render_panel(&self, panel: &RiskPanelState);
    fn render_modal(&self, modal: &ModalView);
}

/// Dashboard admin panel.
pub trait DashboardView {
    fn render_dashboards(&self, cards: &[DashboardCard]);
    /// Options of the "add camera to" select; only dashboards with room.
    fn render_camera_targets(&self, options: &[SelectOption]);
    /// Replace the status banner.
    fn show_banner(&self, banner: &Notice);
    fn clear_banner(&self);
    fn reset_dashboard_form(&self);
    fn reset_camera_form(&self);
}
