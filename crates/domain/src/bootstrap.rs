//! Bootstrap data embedded in the hosting page.
//!
//! The page that serves the dashboard renders a JSON object with the
//! camera list and a risk snapshot. Controllers use it to select a first
//! camera and as a fallback when their first network calls fail.

use serde::Deserialize;

use crate::camera::Camera;
use crate::config::{ClientConfig, ConfigError};
use crate::id::DashboardId;
use crate::risk::{CurrentRisk, RiskLevel, RiskLevelInfo};
use crate::time::Timestamp;

/// Page-embedded initial data. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InitialData {
    pub dashboard_id: Option<DashboardId>,
    pub dashboard_name: Option<String>,
    pub cameras: Vec<Camera>,
    pub dashboard_risco: Option<RiskLevel>,
    pub dashboard_risco_display: Option<String>,
    pub dashboard_risco_color: Option<String>,
    /// Set by the page when the requested dashboard does not exist.
    pub error: Option<String>,
    pub config: Option<ClientConfig>,
}

impl InitialData {
    /// Parse the bootstrap JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed input.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The camera selected on page load.
    #[must_use]
    pub fn first_camera(&self) -> Option<&Camera> {
        self.cameras.first()
    }

    /// The embedded risk snapshot, stamped with `loaded_at`.
    ///
    /// Missing display name or color fall back to the built-in presentation
    /// of the level. Returns `None` when no level was embedded.
    #[must_use]
    pub fn initial_risk(&self, loaded_at: Timestamp) -> Option<CurrentRisk> {
        let level = self.dashboard_risco?;
        let builtin = RiskLevelInfo::builtin(level);
        Some(CurrentRisk {
            value: level,
            display: self
                .dashboard_risco_display
                .clone()
                .unwrap_or(builtin.display),
            color: self.dashboard_risco_color.clone().unwrap_or(builtin.color),
            updated_at: loaded_at,
        })
    }

    /// The embedded client config, validated; defaults when absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when an embedded config is out of
    /// range.
    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        match &self.config {
            Some(config) => {
                config.validate()?;
                Ok(config.clone())
            }
            None => Ok(ClientConfig::default()),
        }
    }
}
