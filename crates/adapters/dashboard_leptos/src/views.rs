//! Signal-backed implementations of the view ports.
//!
//! Controllers write view models into these signals; components read them.
//! All handles are `Copy`, so the same sink can be given to a controller and
//! to the components that render it.

use camwatch_app::ports::{CameraView, ConfirmPrompt, DashboardView, Notice, RiskView};
use camwatch_app::view_model::{
    DashboardCard, DetectionsState, FeedState, ModalView, RiskPanelState, SelectOption,
    StatusState,
};
use camwatch_domain::dashboard::{NewCamera, NewDashboard};
use camwatch_domain::error::ValidationError;
use camwatch_domain::risk::RiskLevel;
use leptos::prelude::*;

/// Camera feed, status and detections.
#[derive(Debug, Clone, Copy)]
pub struct CameraSignals {
    pub feed: RwSignal<FeedState>,
    pub status: RwSignal<StatusState>,
    pub detections: RwSignal<DetectionsState>,
}

impl Default for CameraSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraSignals {
    pub fn new() -> Self {
        Self {
            feed: RwSignal::new(FeedState::Placeholder),
            status: RwSignal::new(StatusState::Idle),
            detections: RwSignal::new(DetectionsState::Unselected),
        }
    }
}

impl CameraView for CameraSignals {
    fn render_feed(&self, feed: &FeedState) {
        self.feed.set(feed.clone());
    }

    fn render_status(&self, status: &StatusState) {
        self.status.set(status.clone());
    }

    fn render_detections(&self, detections: &DetectionsState) {
        self.detections.set(detections.clone());
    }
}

/// Risk panel and modal.
#[derive(Debug, Clone, Copy)]
pub struct RiskSignals {
    pub panel: RwSignal<RiskPanelState>,
    pub modal: RwSignal<Option<ModalView>>,
}

impl Default for RiskSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl RiskSignals {
    pub fn new() -> Self {
        Self {
            panel: RwSignal::new(RiskPanelState::Unavailable),
            modal: RwSignal::new(None),
        }
    }
}

impl RiskView for RiskSignals {
    fn render_panel(&self, panel: &RiskPanelState) {
        self.panel.set(panel.clone());
    }

    fn render_modal(&self, modal: &ModalView) {
        self.modal.set(Some(modal.clone()));
    }
}

/// Fields of the "create dashboard" form.
#[derive(Debug, Clone, Copy)]
pub struct DashboardForm {
    pub dashboard_id: RwSignal<String>,
    pub name: RwSignal<String>,
    pub risco: RwSignal<String>,
}

impl DashboardForm {
    fn new() -> Self {
        Self {
            dashboard_id: RwSignal::new(String::new()),
            name: RwSignal::new(String::new()),
            risco: RwSignal::new(RiskLevel::Baixo.as_str().to_string()),
        }
    }

    fn reset(&self) {
        self.dashboard_id.set(String::new());
        self.name.set(String::new());
        self.risco.set(RiskLevel::Baixo.as_str().to_string());
    }

    /// Read the current field values.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownRiskLevel`] when the risk select holds
    /// an unexpected value.
    pub fn submission(&self) -> Result<NewDashboard, ValidationError> {
        Ok(NewDashboard {
            dashboard_id: self.dashboard_id.get_untracked(),
            name: self.name.get_untracked(),
            risco: self.risco.get_untracked().parse()?,
        })
    }
}

/// Fields of the "add camera" form.
#[derive(Debug, Clone, Copy)]
pub struct CameraForm {
    pub dashboard_id: RwSignal<String>,
    pub camera_id: RwSignal<String>,
    pub camera_link: RwSignal<String>,
    pub camera_loc: RwSignal<String>,
    pub camera_status: RwSignal<String>,
}

impl CameraForm {
    fn new() -> Self {
        Self {
            dashboard_id: RwSignal::new(String::new()),
            camera_id: RwSignal::new(String::new()),
            camera_link: RwSignal::new(String::new()),
            camera_loc: RwSignal::new(String::new()),
            camera_status: RwSignal::new("active".to_string()),
        }
    }

    fn reset(&self) {
        self.dashboard_id.set(String::new());
        self.camera_id.set(String::new());
        self.camera_link.set(String::new());
        self.camera_loc.set(String::new());
        self.camera_status.set("active".to_string());
    }

    /// Target dashboard id and camera payload as currently typed.
    pub fn submission(&self) -> (String, NewCamera) {
        (
            self.dashboard_id.get_untracked(),
            NewCamera {
                camera_id: self.camera_id.get_untracked(),
                camera_link: self.camera_link.get_untracked(),
                camera_loc: self.camera_loc.get_untracked(),
                camera_status: self.camera_status.get_untracked(),
            },
        )
    }
}

/// Admin panel: dashboard cards, add-camera targets, banner and forms.
#[derive(Debug, Clone, Copy)]
pub struct DashboardSignals {
    pub cards: RwSignal<Vec<DashboardCard>>,
    pub targets: RwSignal<Vec<SelectOption>>,
    pub banner: RwSignal<Option<Notice>>,
    pub dashboard_form: DashboardForm,
    pub camera_form: CameraForm,
}

impl Default for DashboardSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardSignals {
    pub fn new() -> Self {
        Self {
            cards: RwSignal::new(Vec::new()),
            targets: RwSignal::new(Vec::new()),
            banner: RwSignal::new(None),
            dashboard_form: DashboardForm::new(),
            camera_form: CameraForm::new(),
        }
    }
}

impl DashboardView for DashboardSignals {
    fn render_dashboards(&self, cards: &[DashboardCard]) {
        self.cards.set(cards.to_vec());
    }

    fn render_camera_targets(&self, options: &[SelectOption]) {
        self.targets.set(options.to_vec());
    }

    fn show_banner(&self, banner: &Notice) {
        self.banner.set(Some(banner.clone()));
    }

    fn clear_banner(&self) {
        self.banner.set(None);
    }

    fn reset_dashboard_form(&self) {
        self.dashboard_form.reset();
    }

    fn reset_camera_form(&self) {
        self.camera_form.reset();
    }
}

/// `window.confirm()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPrompt;

impl ConfirmPrompt for BrowserPrompt {
    fn confirm(&self, message: &str) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        window.confirm_with_message(message).unwrap_or_else(|err| {
            leptos::logging::warn!("confirm prompt failed: {err:?}");
            false
        })
    }
}
