//! Request and response bodies exchanged with the monitoring backend.
//!
//! Field names follow the backend's JSON exactly; conversions into domain
//! types happen here so nothing downstream sees the wire naming.

use serde::{Deserialize, Serialize};

use crate::camera::CameraStatus;
use crate::risk::{CurrentRisk, RiskLevel, RiskLevelInfo, RiskLevelSet};
use crate::time::Timestamp;

/// JSON error body returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `GET /cameras/{id}/`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CameraStatusResponse {
    #[serde(default)]
    pub camera_status: CameraStatus,
    #[serde(default)]
    pub camera_loc: Option<String>,
}

/// `GET /dashboards/risk-levels/`
#[derive(Debug, Clone, Deserialize)]
pub struct RiskLevelsResponse {
    pub risk_levels: Vec<RiskLevelInfo>,
}

impl From<RiskLevelsResponse> for RiskLevelSet {
    fn from(resp: RiskLevelsResponse) -> Self {
        RiskLevelSet::from_levels(resp.risk_levels)
    }
}

/// `GET /dashboards/{id}/`
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardRiskResponse {
    pub risco: RiskLevel,
    pub risco_display: String,
    pub risco_color: String,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

impl DashboardRiskResponse {
    /// Convert into a snapshot, stamping `loaded_at` when the server sent
    /// no `updated_at`.
    #[must_use]
    pub fn into_current(self, loaded_at: Timestamp) -> CurrentRisk {
        CurrentRisk {
            value: self.risco,
            display: self.risco_display,
            color: self.risco_color,
            updated_at: self.updated_at.unwrap_or(loaded_at),
        }
    }
}

/// `PATCH /dashboards/{id}/update-risk/` request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskUpdateRequest {
    pub risco: RiskLevel,
}

/// `PATCH /dashboards/{id}/update-risk/` success body.
#[derive(Debug, Clone, Deserialize)]
pub struct RiskUpdateResponse {
    pub new_risk: RiskLevel,
    pub new_risk_display: String,
    pub new_risk_color: String,
    pub updated_at: Timestamp,
    #[serde(default)]
    pub message: String,
}

/// Server-confirmed outcome of a risk change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskChange {
    pub current: CurrentRisk,
    pub message: String,
}

impl From<RiskUpdateResponse> for RiskChange {
    fn from(resp: RiskUpdateResponse) -> Self {
        Self {
            current: CurrentRisk {
                value: resp.new_risk,
                display: resp.new_risk_display,
                color: resp.new_risk_color,
                updated_at: resp.updated_at,
            },
            message: resp.message,
        }
    }
}
