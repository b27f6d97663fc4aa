//! Backend API ports: the HTTP calls each controller makes.
//!
//! One trait per controller so fakes in tests only implement what they
//! exercise. Implementations own the base URL and the wire decoding; every
//! failure is folded into [`ApiError`].

use std::future::Future;

use camwatch_domain::dashboard::{Dashboard, NewCamera, NewDashboard};
use camwatch_domain::detection::DetectionRecord;
use camwatch_domain::error::ApiError;
use camwatch_domain::id::{CameraId, DashboardId};
use camwatch_domain::risk::{RiskLevel, RiskLevelSet};
use camwatch_domain::wire::{CameraStatusResponse, DashboardRiskResponse, RiskChange};

/// Camera status and detections.
pub trait CameraApi {
    /// `GET {base}/cameras/{id}/`
    fn fetch_status(
        &self,
        camera_id: &CameraId,
    ) -> impl Future<Output = Result<CameraStatusResponse, ApiError>>;

    /// `GET {base}/cameras/{id}/detections/`
    ///
    /// Implementations normalize a single-object or `null` body into a
    /// sequence.
    fn fetch_detections(
        &self,
        camera_id: &CameraId,
    ) -> impl Future<Output = Result<Vec<DetectionRecord>, ApiError>>;

    /// URL of the MJPEG stream for `camera_id`, with a cache-busting query.
    fn stream_url(&self, camera_id: &CameraId, cache_bust: i64) -> String;
}

/// Risk level catalogue and per-dashboard risk.
pub trait RiskApi {
    /// `GET {base}/dashboards/risk-levels/`
    fn fetch_risk_levels(&self) -> impl Future<Output = Result<RiskLevelSet, ApiError>>;

    /// `GET {base}/dashboards/{id}/`
    fn fetch_current_risk(
        &self,
        dashboard_id: &DashboardId,
    ) -> impl Future<Output = Result<DashboardRiskResponse, ApiError>>;

    /// `PATCH {base}/dashboards/{id}/update-risk/`
    fn update_risk(
        &self,
        dashboard_id: &DashboardId,
        level: RiskLevel,
    ) -> impl Future<Output = Result<RiskChange, ApiError>>;
}

/// Dashboard administration.
pub trait DashboardApi {
    /// `GET {base}/dashboards/`
    fn list_dashboards(&self) -> impl Future<Output = Result<Vec<Dashboard>, ApiError>>;

    /// `POST {base}/dashboards/`
    fn create_dashboard(
        &self,
        form: &NewDashboard,
    ) -> impl Future<Output = Result<(), ApiError>>;

    /// `POST {base}/dashboards/{id}/add-camera/`
    fn add_camera(
        &self,
        dashboard_id: &DashboardId,
        form: &NewCamera,
    ) -> impl Future<Output = Result<(), ApiError>>;
}
