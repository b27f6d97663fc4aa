//! Camera: a monitored video source registered in the backend.

use serde::{Deserialize, Serialize};

use crate::id::CameraId;

/// Operational status reported by the backend for a camera.
///
/// The backend stores status as free text; `active` and `error` are the
/// values the dashboard distinguishes, everything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CameraStatus {
    Active,
    Error,
    #[default]
    Unknown,
    Other(String),
}

impl CameraStatus {
    /// Indicator color bucket for this status.
    #[must_use]
    pub fn indicator(&self) -> StatusIndicator {
        match self {
            Self::Active => StatusIndicator::Green,
            Self::Error => StatusIndicator::Red,
            Self::Unknown | Self::Other(_) => StatusIndicator::Amber,
        }
    }

    /// Text shown in the status widget.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Error => "error",
            Self::Unknown => "unknown",
            Self::Other(raw) => raw.as_str(),
        }
    }
}

impl From<String> for CameraStatus {
    fn from(value: String) -> Self {
        match value.trim() {
            "active" => Self::Active,
            "error" => Self::Error,
            "" | "unknown" => Self::Unknown,
            _ => Self::Other(value),
        }
    }
}

impl From<CameraStatus> for String {
    fn from(status: CameraStatus) -> Self {
        status.label().to_string()
    }
}

impl std::fmt::Display for CameraStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The fixed three-way status color mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIndicator {
    Green,
    Red,
    Amber,
}

impl StatusIndicator {
    /// Hex color of the status dot.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Green => "#10b981",
            Self::Red => "#ef4444",
            Self::Amber => "#f59e0b",
        }
    }
}

/// A camera as listed in the page bootstrap data and the camera select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camera {
    pub id: CameraId,
    #[serde(default)]
    pub status: CameraStatus,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// Build the cache-busted stream URL for a camera.
///
/// `cache_bust` is typically the current epoch time in milliseconds so the
/// browser never reuses a stale multipart stream.
#[must_use]
pub fn stream_url(api_base: &str, camera_id: &CameraId, cache_bust: i64) -> String {
    format!(
        "{}/cameras/{}/stream/?t={cache_bust}",
        api_base.trim_end_matches('/'),
        camera_id
    )
}
