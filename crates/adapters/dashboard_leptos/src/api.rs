//! HTTP API client wrapping `gloo-net` for calls to the monitoring backend.
//!
//! Implements the backend ports of `camwatch-app`. Every failure is mapped
//! into the domain's [`ApiError`]: network failures to `Transport`, non-2xx
//! answers to `Status` (carrying the body's `error` field), undecodable
//! bodies to `Malformed`.

use camwatch_app::ports::{CameraApi, DashboardApi, RiskApi};
use camwatch_domain::camera;
use camwatch_domain::dashboard::{Dashboard, NewCamera, NewDashboard};
use camwatch_domain::detection::{self, DetectionRecord};
use camwatch_domain::error::ApiError;
use camwatch_domain::id::{CameraId, DashboardId};
use camwatch_domain::risk::{RiskLevel, RiskLevelSet};
use camwatch_domain::wire::{
    CameraStatusResponse, DashboardRiskResponse, ErrorBody, RiskChange, RiskLevelsResponse,
    RiskUpdateRequest, RiskUpdateResponse,
};
use gloo_net::http::{Request, Response};

/// Client bound to one API base path (e.g. `/api`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClient {
    base: String,
}

impl HttpClient {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }
}

/// Map a failure that happened before a response arrived.
fn transport(err: gloo_net::Error) -> ApiError {
    match err {
        gloo_net::Error::SerdeError(err) => ApiError::Malformed(err.to_string()),
        other => ApiError::Transport(other.to_string()),
    }
}

/// Map a failure while decoding a response body.
fn malformed(err: gloo_net::Error) -> ApiError {
    ApiError::Malformed(err.to_string())
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let message = resp.json::<ErrorBody>().await.ok().map(|body| body.error);
    Err(ApiError::Status { status, message })
}

async fn get(url: &str) -> Result<Response, ApiError> {
    check_response(Request::get(url).send().await.map_err(transport)?).await
}

impl CameraApi for HttpClient {
    async fn fetch_status(&self, camera_id: &CameraId) -> Result<CameraStatusResponse, ApiError> {
        let resp = get(&self.url(&format!("/cameras/{camera_id}/"))).await?;
        resp.json().await.map_err(malformed)
    }

    async fn fetch_detections(
        &self,
        camera_id: &CameraId,
    ) -> Result<Vec<DetectionRecord>, ApiError> {
        let resp = get(&self.url(&format!("/cameras/{camera_id}/detections/"))).await?;
        let body = resp.text().await.map_err(malformed)?;
        detection::parse_body(&body).map_err(|err| ApiError::Malformed(err.to_string()))
    }

    fn stream_url(&self, camera_id: &CameraId, cache_bust: i64) -> String {
        camera::stream_url(&self.base, camera_id, cache_bust)
    }
}

impl RiskApi for HttpClient {
    async fn fetch_risk_levels(&self) -> Result<RiskLevelSet, ApiError> {
        let resp = get(&self.url("/dashboards/risk-levels/")).await?;
        let body: RiskLevelsResponse = resp.json().await.map_err(malformed)?;
        Ok(body.into())
    }

    async fn fetch_current_risk(
        &self,
        dashboard_id: &DashboardId,
    ) -> Result<DashboardRiskResponse, ApiError> {
        let resp = get(&self.url(&format!("/dashboards/{dashboard_id}/"))).await?;
        resp.json().await.map_err(malformed)
    }

    async fn update_risk(
        &self,
        dashboard_id: &DashboardId,
        level: RiskLevel,
    ) -> Result<RiskChange, ApiError> {
        let url = self.url(&format!("/dashboards/{dashboard_id}/update-risk/"));
        let resp = check_response(
            Request::patch(&url)
                .json(&RiskUpdateRequest { risco: level })
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?,
        )
        .await?;
        let body: RiskUpdateResponse = resp.json().await.map_err(malformed)?;
        Ok(body.into())
    }
}

impl DashboardApi for HttpClient {
    async fn list_dashboards(&self) -> Result<Vec<Dashboard>, ApiError> {
        let resp = get(&self.url("/dashboards/")).await?;
        resp.json().await.map_err(malformed)
    }

    async fn create_dashboard(&self, form: &NewDashboard) -> Result<(), ApiError> {
        let request = Request::post(&self.url("/dashboards/"))
            .json(form)
            .map_err(transport)?;
        check_response(request.send().await.map_err(transport)?).await?;
        Ok(())
    }

    async fn add_camera(
        &self,
        dashboard_id: &DashboardId,
        form: &NewCamera,
    ) -> Result<(), ApiError> {
        let url = self.url(&format!("/dashboards/{dashboard_id}/add-camera/"));
        let request = Request::post(&url).json(form).map_err(transport)?;
        check_response(request.send().await.map_err(transport)?).await?;
        Ok(())
    }
}
