//! Client configuration: API location and polling cadence.
//!
//! Embedded by the hosting page inside the bootstrap data. Every field has a
//! sensible default so the whole object is optional.

use std::time::Duration;

use serde::Deserialize;

/// Top-level client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base path of the monitoring API (e.g. `/api`).
    pub api_base: String,
    /// Seconds between camera status/detections polls.
    pub camera_poll_secs: u64,
    /// Seconds between risk level refreshes.
    pub risk_refresh_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            camera_poll_secs: 5,
            risk_refresh_secs: 30,
        }
    }
}

impl ClientConfig {
    /// Longest camera poll interval accepted.
    pub const MAX_CAMERA_POLL_SECS: u64 = 60;

    /// Check semantic constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when the base path is blank or an
    /// interval is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base.trim().is_empty() {
            return Err(ConfigError::Validation(
                "api_base must not be empty".to_string(),
            ));
        }
        if self.camera_poll_secs == 0 || self.camera_poll_secs > Self::MAX_CAMERA_POLL_SECS {
            return Err(ConfigError::Validation(format!(
                "camera_poll_secs must be within 1..={}",
                Self::MAX_CAMERA_POLL_SECS
            )));
        }
        if self.risk_refresh_secs == 0 {
            return Err(ConfigError::Validation(
                "risk_refresh_secs must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse a JSON config object and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Validation`] for out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// API base without a trailing slash.
    #[must_use]
    pub fn api_base(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }

    #[must_use]
    pub fn camera_poll_interval(&self) -> Duration {
        Duration::from_secs(self.camera_poll_secs)
    }

    #[must_use]
    pub fn risk_refresh_interval(&self) -> Duration {
        Duration::from_secs(self.risk_refresh_secs)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parse failure.
    #[error("failed to parse client config")]
    Parse(#[from] serde_json::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
