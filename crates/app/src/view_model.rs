//! View models: what the controllers hand to the view ports.
//!
//! Plain data with all presentation decisions (texts, colors, enabled
//! states) already made, so views only bind them to elements.

use camwatch_domain::camera::{CameraStatus, StatusIndicator};
use camwatch_domain::dashboard::{Dashboard, MAX_CAMERAS_PER_DASHBOARD};
use camwatch_domain::detection::DetectionRow;
use camwatch_domain::id::DashboardId;
use camwatch_domain::risk::{CurrentRisk, RiskLevel, RiskLevelSet};
use camwatch_domain::time::format_timestamp;
use camwatch_domain::wire::CameraStatusResponse;

/// Status text shown while no camera is selected.
pub const NEUTRAL_STATUS_TEXT: &str = "Status";
/// Location text shown while no camera is selected or none is known.
pub const NEUTRAL_LOCATION_TEXT: &str = "City, State, Country";
/// Status text shown when the status fetch failed.
pub const STATUS_ERROR_TEXT: &str = "Error";

pub const SELECT_CAMERA_TEXT: &str = "Select a camera";
pub const NO_DETECTIONS_TEXT: &str = "No detections found";
pub const DETECTIONS_ERROR_TEXT: &str = "Failed to load detections";

// ---------------------------------------------------------------------------
// Camera
// ---------------------------------------------------------------------------

/// What the video area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedState {
    Placeholder,
    Live { url: String },
}

/// Camera status widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusState {
    /// No camera selected.
    Idle,
    Loaded {
        status: CameraStatus,
        location: Option<String>,
    },
    /// The last fetch failed; nothing from earlier fetches is kept.
    Error,
}

impl StatusState {
    #[must_use]
    pub fn from_response(resp: CameraStatusResponse) -> Self {
        Self::Loaded {
            status: resp.camera_status,
            location: resp.camera_loc.filter(|loc| !loc.trim().is_empty()),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Idle => NEUTRAL_STATUS_TEXT,
            Self::Loaded { status, .. } => status.label(),
            Self::Error => STATUS_ERROR_TEXT,
        }
    }

    /// Indicator dot color; `None` leaves the dot in its neutral style.
    #[must_use]
    pub fn color(&self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Loaded { status, .. } => Some(status.indicator().color()),
            Self::Error => Some(StatusIndicator::Red.color()),
        }
    }

    #[must_use]
    pub fn location_text(&self) -> &str {
        match self {
            Self::Loaded {
                location: Some(location),
                ..
            } => location,
            _ => NEUTRAL_LOCATION_TEXT,
        }
    }
}

/// Detections table content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectionsState {
    Unselected,
    Rows(Vec<DetectionRow>),
    Empty,
    Error,
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    Detection(DetectionRow),
    /// A full-width message row.
    Message { text: &'static str, is_error: bool },
}

impl DetectionsState {
    /// Build from already flattened rows.
    #[must_use]
    pub fn from_rows(rows: Vec<DetectionRow>) -> Self {
        if rows.is_empty() {
            Self::Empty
        } else {
            Self::Rows(rows)
        }
    }

    /// Rows to render. Every state other than `Rows` yields exactly one
    /// message row.
    #[must_use]
    pub fn table_rows(&self) -> Vec<TableRow> {
        let message = |text, is_error| vec![TableRow::Message { text, is_error }];
        match self {
            Self::Unselected => message(SELECT_CAMERA_TEXT, false),
            Self::Empty => message(NO_DETECTIONS_TEXT, false),
            Self::Error => message(DETECTIONS_ERROR_TEXT, true),
            Self::Rows(rows) => rows.iter().cloned().map(TableRow::Detection).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Risk
// ---------------------------------------------------------------------------

/// A quick-action button for one risk level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelButton {
    pub level: RiskLevel,
    pub display: String,
    pub color: String,
}

/// An `<option>` of a select element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

/// Everything the risk panel shows for a loaded risk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskPanel {
    pub current: CurrentRisk,
    pub summary: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub can_escalate: bool,
    pub can_deescalate: bool,
    /// Every level except the current one.
    pub quick_actions: Vec<LevelButton>,
}

impl RiskPanel {
    #[must_use]
    pub fn build(current: &CurrentRisk, levels: &RiskLevelSet) -> Self {
        let level = current.value;
        Self {
            current: current.clone(),
            summary: level.summary(),
            description: level.description(),
            icon: level.icon(),
            can_escalate: level.next().is_some(),
            can_deescalate: level.previous().is_some(),
            quick_actions: levels
                .iter()
                .filter(|info| info.value != level)
                .map(|info| LevelButton {
                    level: info.value,
                    display: info.display.clone(),
                    color: info.color.clone(),
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn last_updated_text(&self) -> String {
        format!("Last updated: {}", format_timestamp(&self.current.updated_at))
    }
}

/// Risk panel content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RiskPanelState {
    /// Neither the server nor the page provided a risk level.
    Unavailable,
    Ready(RiskPanel),
}

/// Preview of the level picked in the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskPreview {
    pub display: String,
    pub color: String,
    pub summary: &'static str,
}

/// The change-level modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub open: bool,
    pub current: Option<CurrentRisk>,
    /// One option per level; the current one disabled and suffixed.
    pub options: Vec<SelectOption>,
    pub selected: Option<RiskLevel>,
    pub preview: Option<RiskPreview>,
    pub escalation_warning: bool,
    pub acknowledged: bool,
    pub submitting: bool,
    pub confirm_enabled: bool,
}

/// Build the modal's level options.
#[must_use]
pub fn modal_options(levels: &RiskLevelSet, current: Option<RiskLevel>) -> Vec<SelectOption> {
    levels
        .iter()
        .map(|info| {
            let is_current = Some(info.value) == current;
            SelectOption {
                value: info.value.as_str().to_string(),
                label: if is_current {
                    format!("{} (current)", info.display)
                } else {
                    info.display.clone()
                },
                disabled: is_current,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Dashboards
// ---------------------------------------------------------------------------

/// One card of the admin dashboard list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardCard {
    pub dashboard_id: DashboardId,
    pub name: String,
    pub risk: Option<RiskLevel>,
    /// `"camera_id - location (status)"` per attached camera.
    pub cameras: Vec<String>,
    pub is_full: bool,
}

impl DashboardCard {
    /// `"2/3 cameras"`
    #[must_use]
    pub fn capacity_text(&self) -> String {
        format!("{}/{MAX_CAMERAS_PER_DASHBOARD} cameras", self.cameras.len())
    }
}

impl From<&Dashboard> for DashboardCard {
    fn from(dashboard: &Dashboard) -> Self {
        Self {
            dashboard_id: dashboard.dashboard_id.clone(),
            name: dashboard.name.clone(),
            risk: dashboard.risco,
            cameras: dashboard
                .cameras
                .iter()
                .map(|camera| {
                    format!(
                        "{} - {} ({})",
                        camera.camera_id, camera.camera_loc, camera.camera_status
                    )
                })
                .collect(),
            is_full: !dashboard.can_add_camera(),
        }
    }
}

/// Add-camera target options: dashboards that still have room.
#[must_use]
pub fn camera_targets(dashboards: &[Dashboard]) -> Vec<SelectOption> {
    dashboards
        .iter()
        .filter(|dashboard| dashboard.can_add_camera())
        .map(|dashboard| SelectOption {
            value: dashboard.dashboard_id.to_string(),
            label: dashboard.label(),
            disabled: false,
        })
        .collect()
}
