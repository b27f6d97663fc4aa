//! Dashboard: the monitored entity that owns a risk level and its cameras.

use serde::{Deserialize, Serialize};

use crate::camera::CameraStatus;
use crate::error::ValidationError;
use crate::id::{CameraId, DashboardId};
use crate::risk::RiskLevel;

/// A dashboard never holds more cameras than this.
pub const MAX_CAMERAS_PER_DASHBOARD: usize = 3;

/// A dashboard as listed by `GET /dashboards/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    pub dashboard_id: DashboardId,
    pub name: String,
    #[serde(default)]
    pub risco: Option<RiskLevel>,
    #[serde(default)]
    pub cameras: Vec<DashboardCamera>,
}

impl Dashboard {
    /// Whether another camera may be attached.
    #[must_use]
    pub fn can_add_camera(&self) -> bool {
        self.cameras.len() < MAX_CAMERAS_PER_DASHBOARD
    }

    /// Check that another camera may be attached.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DashboardFull`] when the dashboard already
    /// holds [`MAX_CAMERAS_PER_DASHBOARD`] cameras.
    pub fn ensure_can_add_camera(&self) -> Result<(), ValidationError> {
        if self.can_add_camera() {
            Ok(())
        } else {
            Err(ValidationError::DashboardFull {
                dashboard_id: self.dashboard_id.to_string(),
                max: MAX_CAMERAS_PER_DASHBOARD,
            })
        }
    }

    /// Label used in lists and selects: `"Name (id)"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.dashboard_id)
    }
}

/// A camera attached to a dashboard, in the backend's field naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardCamera {
    pub camera_id: CameraId,
    #[serde(default)]
    pub camera_loc: String,
    #[serde(default)]
    pub camera_status: CameraStatus,
    #[serde(default)]
    pub camera_link: Option<String>,
}

/// Payload of the "create dashboard" form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewDashboard {
    pub dashboard_id: String,
    pub name: String,
    pub risco: RiskLevel,
}

impl NewDashboard {
    /// Trim fields and check required ones are present.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`] naming the first blank field.
    pub fn validated(self) -> Result<Self, ValidationError> {
        let dashboard_id = DashboardId::new(self.dashboard_id)?;
        let name = required(self.name, "name")?;
        Ok(Self {
            dashboard_id: dashboard_id.to_string(),
            name,
            risco: self.risco,
        })
    }
}

/// Payload of the "add camera" form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCamera {
    pub camera_id: String,
    pub camera_link: String,
    pub camera_loc: String,
    pub camera_status: String,
}

impl NewCamera {
    /// Trim fields and check required ones are present.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`] naming the first blank field.
    pub fn validated(self) -> Result<Self, ValidationError> {
        let camera_id = CameraId::new(self.camera_id)?;
        Ok(Self {
            camera_id: camera_id.to_string(),
            camera_link: required(self.camera_link, "camera_link")?,
            camera_loc: required(self.camera_loc, "camera_loc")?,
            camera_status: required(self.camera_status, "camera_status")?,
        })
    }
}

fn required(value: String, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyField(field))
    } else {
        Ok(trimmed.to_string())
    }
}
