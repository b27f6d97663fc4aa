//! In-memory port fakes shared by the controller tests.
//!
//! Every fake is a cheap `Clone` handle over shared state so a test can keep
//! one copy for assertions and hand another to the controller.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use camwatch_domain::dashboard::{Dashboard, NewCamera, NewDashboard};
use camwatch_domain::detection::DetectionRecord;
use camwatch_domain::error::ApiError;
use camwatch_domain::id::{CameraId, DashboardId};
use camwatch_domain::risk::{RiskLevel, RiskLevelSet};
use camwatch_domain::time::Timestamp;
use camwatch_domain::wire::{CameraStatusResponse, DashboardRiskResponse, RiskChange};
use chrono::{TimeZone, Utc};
use tokio::sync::oneshot;

use crate::ports::{
    CameraApi, CameraView, Clock, ConfirmPrompt, DashboardApi, DashboardView, LocalTask, Notice,
    Notifier, RiskApi, RiskView, Scheduler,
};
use crate::view_model::{
    DashboardCard, DetectionsState, FeedState, ModalView, RiskPanelState, SelectOption,
    StatusState,
};

/// Let spawned local tasks run until they block.
pub async fn settle() {
    for _ in 0..32 {
        tokio::task::yield_now().await;
    }
}

pub fn fixed_time() -> Timestamp {
    Utc.with_ymd_and_hms(2025, 3, 7, 12, 0, 0).unwrap()
}

// ---------------------------------------------------------------------------
// Runtime
// ---------------------------------------------------------------------------

struct TimerSlot {
    period: Duration,
    cancelled: Rc<Cell<bool>>,
    tick: Box<dyn FnMut()>,
}

/// Scheduler whose timers fire only when the test says so.
///
/// Spawned tasks go to the surrounding `tokio::task::LocalSet`.
#[derive(Clone)]
pub struct ManualRuntime {
    timers: Rc<RefCell<Vec<TimerSlot>>>,
    now: Timestamp,
}

impl Default for ManualRuntime {
    fn default() -> Self {
        Self {
            timers: Rc::default(),
            now: fixed_time(),
        }
    }
}

impl ManualRuntime {
    /// Call every live timer once.
    pub fn fire_timers(&self) {
        for slot in self.timers.borrow_mut().iter_mut() {
            if !slot.cancelled.get() {
                (slot.tick)();
            }
        }
    }

    pub fn active_timers(&self) -> usize {
        self.timers
            .borrow()
            .iter()
            .filter(|slot| !slot.cancelled.get())
            .count()
    }

    pub fn timer_periods(&self) -> Vec<Duration> {
        self.timers
            .borrow()
            .iter()
            .filter(|slot| !slot.cancelled.get())
            .map(|slot| slot.period)
            .collect()
    }
}

/// Cancels its timer when dropped.
pub struct ManualTimer {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for ManualTimer {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

impl Scheduler for ManualRuntime {
    type Handle = ManualTimer;

    fn spawn(&self, task: LocalTask) {
        tokio::task::spawn_local(task);
    }

    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> ManualTimer {
        let cancelled = Rc::new(Cell::new(false));
        self.timers.borrow_mut().push(TimerSlot {
            period,
            cancelled: Rc::clone(&cancelled),
            tick,
        });
        ManualTimer { cancelled }
    }
}

impl Clock for ManualRuntime {
    fn now(&self) -> Timestamp {
        self.now
    }
}

// ---------------------------------------------------------------------------
// Scripted replies
// ---------------------------------------------------------------------------

/// A scripted API reply: available now, or when the test sends it.
pub enum Reply<T> {
    Ready(Result<T, ApiError>),
    Deferred(oneshot::Receiver<Result<T, ApiError>>),
}

impl<T> Reply<T> {
    pub fn ok(value: T) -> Self {
        Self::Ready(Ok(value))
    }

    pub fn err(err: ApiError) -> Self {
        Self::Ready(Err(err))
    }

    /// A reply the test resolves later through the returned sender.
    pub fn deferred() -> (Self, oneshot::Sender<Result<T, ApiError>>) {
        let (tx, rx) = oneshot::channel();
        (Self::Deferred(rx), tx)
    }

    async fn resolve(self) -> Result<T, ApiError> {
        match self {
            Self::Ready(result) => result,
            Self::Deferred(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::Transport("reply dropped".to_string()))),
        }
    }
}

/// FIFO of scripted replies with a fallback when the script runs out.
struct Script<T> {
    replies: RefCell<VecDeque<Reply<T>>>,
    fallback: fn() -> Result<T, ApiError>,
}

impl<T> Script<T> {
    fn new(fallback: fn() -> Result<T, ApiError>) -> Self {
        Self {
            replies: RefCell::default(),
            fallback,
        }
    }

    fn push(&self, reply: Reply<T>) {
        self.replies.borrow_mut().push_back(reply);
    }

    fn next(&self) -> impl Future<Output = Result<T, ApiError>> + use<T> {
        let reply = self.replies.borrow_mut().pop_front();
        let fallback = self.fallback;
        async move {
            match reply {
                Some(reply) => reply.resolve().await,
                None => fallback(),
            }
        }
    }
}

pub fn server_error(message: &str) -> ApiError {
    ApiError::Status {
        status: 400,
        message: Some(message.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Camera API
// ---------------------------------------------------------------------------

struct CameraApiState {
    status: Script<CameraStatusResponse>,
    detections: Script<Vec<DetectionRecord>>,
    calls: RefCell<Vec<String>>,
}

#[derive(Clone)]
pub struct FakeCameraApi {
    state: Rc<CameraApiState>,
}

impl Default for FakeCameraApi {
    fn default() -> Self {
        Self {
            state: Rc::new(CameraApiState {
                status: Script::new(|| {
                    Ok(CameraStatusResponse {
                        camera_status: camwatch_domain::camera::CameraStatus::Active,
                        camera_loc: None,
                    })
                }),
                detections: Script::new(|| Ok(Vec::new())),
                calls: RefCell::default(),
            }),
        }
    }
}

impl FakeCameraApi {
    pub fn push_status(&self, reply: Reply<CameraStatusResponse>) {
        self.state.status.push(reply);
    }

    pub fn push_detections(&self, reply: Reply<Vec<DetectionRecord>>) {
        self.state.detections.push(reply);
    }

    /// `"status:<id>"` / `"detections:<id>"` in call order.
    pub fn calls(&self) -> Vec<String> {
        self.state.calls.borrow().clone()
    }
}

impl CameraApi for FakeCameraApi {
    fn fetch_status(
        &self,
        camera_id: &CameraId,
    ) -> impl Future<Output = Result<CameraStatusResponse, ApiError>> {
        self.state.calls.borrow_mut().push(format!("status:{camera_id}"));
        self.state.status.next()
    }

    fn fetch_detections(
        &self,
        camera_id: &CameraId,
    ) -> impl Future<Output = Result<Vec<DetectionRecord>, ApiError>> {
        self.state
            .calls
            .borrow_mut()
            .push(format!("detections:{camera_id}"));
        self.state.detections.next()
    }

    fn stream_url(&self, camera_id: &CameraId, cache_bust: i64) -> String {
        camwatch_domain::camera::stream_url("/api", camera_id, cache_bust)
    }
}

// ---------------------------------------------------------------------------
// Risk API
// ---------------------------------------------------------------------------

struct RiskApiState {
    levels: Script<RiskLevelSet>,
    current: Script<DashboardRiskResponse>,
    updates: Script<RiskChange>,
    update_requests: RefCell<Vec<(DashboardId, RiskLevel)>>,
    current_requests: Cell<usize>,
}

#[derive(Clone)]
pub struct FakeRiskApi {
    state: Rc<RiskApiState>,
}

impl Default for FakeRiskApi {
    fn default() -> Self {
        Self {
            state: Rc::new(RiskApiState {
                levels: Script::new(|| Ok(RiskLevelSet::defaults())),
                current: Script::new(|| {
                    Err(ApiError::Transport("no current risk scripted".to_string()))
                }),
                updates: Script::new(|| {
                    Err(ApiError::Transport("no update scripted".to_string()))
                }),
                update_requests: RefCell::default(),
                current_requests: Cell::new(0),
            }),
        }
    }
}

impl FakeRiskApi {
    pub fn push_levels(&self, reply: Reply<RiskLevelSet>) {
        self.state.levels.push(reply);
    }

    pub fn push_current(&self, reply: Reply<DashboardRiskResponse>) {
        self.state.current.push(reply);
    }

    pub fn push_update(&self, reply: Reply<RiskChange>) {
        self.state.updates.push(reply);
    }

    pub fn update_requests(&self) -> Vec<(DashboardId, RiskLevel)> {
        self.state.update_requests.borrow().clone()
    }

    pub fn current_requests(&self) -> usize {
        self.state.current_requests.get()
    }
}

impl RiskApi for FakeRiskApi {
    fn fetch_risk_levels(&self) -> impl Future<Output = Result<RiskLevelSet, ApiError>> {
        self.state.levels.next()
    }

    fn fetch_current_risk(
        &self,
        _dashboard_id: &DashboardId,
    ) -> impl Future<Output = Result<DashboardRiskResponse, ApiError>> {
        self.state
            .current_requests
            .set(self.state.current_requests.get() + 1);
        self.state.current.next()
    }

    fn update_risk(
        &self,
        dashboard_id: &DashboardId,
        level: RiskLevel,
    ) -> impl Future<Output = Result<RiskChange, ApiError>> {
        self.state
            .update_requests
            .borrow_mut()
            .push((dashboard_id.clone(), level));
        self.state.updates.next()
    }
}

// ---------------------------------------------------------------------------
// Dashboard API
// ---------------------------------------------------------------------------

struct DashboardApiState {
    lists: Script<Vec<Dashboard>>,
    creates: Script<()>,
    adds: Script<()>,
    created: RefCell<Vec<NewDashboard>>,
    added: RefCell<Vec<(DashboardId, NewCamera)>>,
}

#[derive(Clone)]
pub struct FakeDashboardApi {
    state: Rc<DashboardApiState>,
}

impl Default for FakeDashboardApi {
    fn default() -> Self {
        Self {
            state: Rc::new(DashboardApiState {
                lists: Script::new(|| Ok(Vec::new())),
                creates: Script::new(|| Ok(())),
                adds: Script::new(|| Ok(())),
                created: RefCell::default(),
                added: RefCell::default(),
            }),
        }
    }
}

impl FakeDashboardApi {
    pub fn push_list(&self, reply: Reply<Vec<Dashboard>>) {
        self.state.lists.push(reply);
    }

    pub fn push_create(&self, reply: Reply<()>) {
        self.state.creates.push(reply);
    }

    pub fn push_add(&self, reply: Reply<()>) {
        self.state.adds.push(reply);
    }

    pub fn created(&self) -> Vec<NewDashboard> {
        self.state.created.borrow().clone()
    }

    pub fn added(&self) -> Vec<(DashboardId, NewCamera)> {
        self.state.added.borrow().clone()
    }
}

impl DashboardApi for FakeDashboardApi {
    fn list_dashboards(&self) -> impl Future<Output = Result<Vec<Dashboard>, ApiError>> {
        self.state.lists.next()
    }

    fn create_dashboard(&self, form: &NewDashboard) -> impl Future<Output = Result<(), ApiError>> {
        self.state.created.borrow_mut().push(form.clone());
        self.state.creates.next()
    }

    fn add_camera(
        &self,
        dashboard_id: &DashboardId,
        form: &NewCamera,
    ) -> impl Future<Output = Result<(), ApiError>> {
        self.state
            .added
            .borrow_mut()
            .push((dashboard_id.clone(), form.clone()));
        self.state.adds.next()
    }
}

// ---------------------------------------------------------------------------
// Views, notifier, prompt
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
pub struct RecordingCameraView {
    pub feeds: Rc<RefCell<Vec<FeedState>>>,
    pub statuses: Rc<RefCell<Vec<StatusState>>>,
    pub detections: Rc<RefCell<Vec<DetectionsState>>>,
}

impl RecordingCameraView {
    pub fn last_feed(&self) -> Option<FeedState> {
        self.feeds.borrow().last().cloned()
    }

    pub fn last_status(&self) -> Option<StatusState> {
        self.statuses.borrow().last().cloned()
    }

    pub fn last_detections(&self) -> Option<DetectionsState> {
        self.detections.borrow().last().cloned()
    }
}

impl CameraView for RecordingCameraView {
    fn render_feed(&self, feed: &FeedState) {
        self.feeds.borrow_mut().push(feed.clone());
    }

    fn render_status(&self, status: &StatusState) {
        self.statuses.borrow_mut().push(status.clone());
    }

    fn render_detections(&self, detections: &DetectionsState) {
        self.detections.borrow_mut().push(detections.clone());
    }
}

#[derive(Clone, Default)]
pub struct RecordingRiskView {
    pub panels: Rc<RefCell<Vec<RiskPanelState>>>,
    pub modals: Rc<RefCell<Vec<ModalView>>>,
}

impl RecordingRiskView {
    pub fn last_panel(&self) -> Option<RiskPanelState> {
        self.panels.borrow().last().cloned()
    }

    pub fn last_modal(&self) -> Option<ModalView> {
        self.modals.borrow().last().cloned()
    }
}

impl RiskView for RecordingRiskView {
    fn render_panel(&self, panel: &RiskPanelState) {
        self.panels.borrow_mut().push(panel.clone());
    }

    fn render_modal(&self, modal: &ModalView) {
        self.modals.borrow_mut().push(modal.clone());
    }
}

#[derive(Clone, Default)]
pub struct RecordingDashboardView {
    pub cards: Rc<RefCell<Vec<DashboardCard>>>,
    pub targets: Rc<RefCell<Vec<SelectOption>>>,
    pub banners: Rc<RefCell<Vec<Notice>>>,
    pub banner_clears: Rc<Cell<usize>>,
    pub dashboard_form_resets: Rc<Cell<usize>>,
    pub camera_form_resets: Rc<Cell<usize>>,
}

impl RecordingDashboardView {
    pub fn last_banner(&self) -> Option<Notice> {
        self.banners.borrow().last().cloned()
    }
}

impl DashboardView for RecordingDashboardView {
    fn render_dashboards(&self, cards: &[DashboardCard]) {
        *self.cards.borrow_mut() = cards.to_vec();
    }

    fn render_camera_targets(&self, options: &[SelectOption]) {
        *self.targets.borrow_mut() = options.to_vec();
    }

    fn show_banner(&self, banner: &Notice) {
        self.banners.borrow_mut().push(banner.clone());
    }

    fn clear_banner(&self) {
        self.banner_clears.set(self.banner_clears.get() + 1);
    }

    fn reset_dashboard_form(&self) {
        self.dashboard_form_resets
            .set(self.dashboard_form_resets.get() + 1);
    }

    fn reset_camera_form(&self) {
        self.camera_form_resets.set(self.camera_form_resets.get() + 1);
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    pub notices: Rc<RefCell<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn last(&self) -> Option<Notice> {
        self.notices.borrow().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

/// Answers every confirmation with a fixed value and records the questions.
#[derive(Clone)]
pub struct ScriptedPrompt {
    pub answer: Rc<Cell<bool>>,
    pub asked: Rc<RefCell<Vec<String>>>,
}

impl Default for ScriptedPrompt {
    fn default() -> Self {
        Self {
            answer: Rc::new(Cell::new(true)),
            asked: Rc::default(),
        }
    }
}

impl ConfirmPrompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.asked.borrow_mut().push(message.to_string());
        self.answer.get()
    }
}
