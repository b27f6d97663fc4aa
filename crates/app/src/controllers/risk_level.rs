//! Risk level controller: one dashboard's risk indicator and its changes.
//!
//! Owns the session's level set and the current risk snapshot. Every change
//! goes through the server; the snapshot is replaced only with what the
//! server confirms, and left untouched when a request fails.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use camwatch_domain::error::CamwatchError;
use camwatch_domain::id::DashboardId;
use camwatch_domain::risk::{CurrentRisk, RiskLevel, RiskLevelSet, RiskTransition};

use crate::periodic::PeriodicTask;
use crate::ports::{Clock, ConfirmPrompt, Notice, Notifier, RiskApi, RiskView, Scheduler};
use crate::sequence::RequestSequence;
use crate::view_model::{ModalView, RiskPanel, RiskPanelState, RiskPreview, modal_options};

const LEVELS_LOAD_FAILED: &str = "Failed to load risk levels";
const AT_CEILING: &str = "Risk level cannot be raised any further";
const AT_FLOOR: &str = "Risk level cannot be lowered any further";
const RISK_NOT_LOADED: &str = "Current risk level is not available yet";
const SELECT_LEVEL: &str = "Select a risk level";
const ACKNOWLEDGE_CHANGE: &str = "Confirm that you understand the impact of this change";
const DATA_UPDATED: &str = "Data updated";

#[derive(Debug, Default)]
struct ModalState {
    open: bool,
    selected: Option<RiskLevel>,
    acknowledged: bool,
    submitting: bool,
}

/// Drives the risk panel of one dashboard.
pub struct RiskLevelController<A, V, N, P, R: Scheduler> {
    api: A,
    view: V,
    notifier: N,
    prompt: P,
    runtime: R,
    dashboard_id: DashboardId,
    refresh_interval: Duration,
    /// Snapshot embedded in the page, used until the server answers.
    fallback: Option<CurrentRisk>,
    levels: RefCell<RiskLevelSet>,
    current: RefCell<Option<CurrentRisk>>,
    modal: RefCell<ModalState>,
    refresher: RefCell<PeriodicTask<R::Handle>>,
    /// Current-risk reads; advanced when a change is confirmed so that
    /// reads sent before it cannot overwrite it.
    reads: RequestSequence,
}

impl<A, V, N, P, R> RiskLevelController<A, V, N, P, R>
where
    A: RiskApi + 'static,
    V: RiskView + 'static,
    N: Notifier + 'static,
    P: ConfirmPrompt + 'static,
    R: Scheduler + Clock + 'static,
{
    /// Create a controller for `dashboard_id`.
    ///
    /// `fallback` is the page-embedded snapshot; it is shown when the first
    /// fetch of the current risk fails.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        api: A,
        view: V,
        notifier: N,
        prompt: P,
        runtime: R,
        dashboard_id: DashboardId,
        refresh_interval: Duration,
        fallback: Option<CurrentRisk>,
    ) -> Rc<Self> {
        Rc::new(Self {
            api,
            view,
            notifier,
            prompt,
            runtime,
            dashboard_id,
            refresh_interval,
            fallback,
            levels: RefCell::new(RiskLevelSet::defaults()),
            current: RefCell::new(None),
            modal: RefCell::new(ModalState::default()),
            refresher: RefCell::new(PeriodicTask::new()),
            reads: RequestSequence::new(),
        })
    }

    pub fn current_risk(&self) -> Option<CurrentRisk> {
        self.current.borrow().clone()
    }

    pub fn levels(&self) -> RiskLevelSet {
        self.levels.borrow().clone()
    }

    pub fn is_refreshing(&self) -> bool {
        self.refresher.borrow().is_running()
    }

    /// Load the level set and current risk, render, and start the periodic
    /// refresh.
    #[tracing::instrument(skip(self), fields(dashboard_id = %self.dashboard_id))]
    pub async fn initialize(self: &Rc<Self>) {
        self.load_levels().await;
        self.load_current_risk().await;
        self.render();
        self.start_auto_refresh();
    }

    /// Fetch the level set, falling back to the built-in levels.
    pub async fn load_levels(&self) {
        let levels = match self.api.fetch_risk_levels().await {
            Ok(levels) if levels.is_empty() => {
                tracing::warn!("server returned no risk levels, using defaults");
                RiskLevelSet::defaults()
            }
            Ok(levels) => {
                tracing::debug!(count = levels.len(), "risk levels loaded");
                levels
            }
            Err(err) => {
                tracing::error!(%err, "failed to load risk levels, using defaults");
                self.notifier.notify(Notice::error(LEVELS_LOAD_FAILED));
                RiskLevelSet::defaults()
            }
        };
        *self.levels.borrow_mut() = levels;
    }

    /// Fetch the current risk.
    ///
    /// On failure the snapshot already held is kept; when there is none yet
    /// the page-embedded one is used. A response overtaken by a newer read
    /// or by a confirmed change is dropped. Returns whether the fetch
    /// succeeded and was applied.
    pub async fn load_current_risk(&self) -> bool {
        let ticket = self.reads.issue();
        let result = self.api.fetch_current_risk(&self.dashboard_id).await;
        if !self.reads.accept(ticket) {
            tracing::debug!(dashboard_id = %self.dashboard_id, "dropping stale risk response");
            return false;
        }
        match result {
            Ok(resp) => {
                let current = resp.into_current(self.runtime.now());
                tracing::debug!(
                    dashboard_id = %self.dashboard_id,
                    risk = %current.value,
                    "current risk loaded"
                );
                *self.current.borrow_mut() = Some(current);
                true
            }
            Err(err) => {
                tracing::warn!(%err, dashboard_id = %self.dashboard_id, "failed to load current risk");
                let mut current = self.current.borrow_mut();
                if current.is_none() {
                    *current = self.fallback.clone();
                }
                false
            }
        }
    }

    /// Re-fetch the current risk and re-render. Driven by the refresh timer.
    pub async fn refresh(&self) {
        self.load_current_risk().await;
        self.render();
    }

    /// User-triggered refresh; confirms with a notice.
    pub async fn refresh_now(&self) {
        self.refresh().await;
        self.notifier.notify(Notice::success(DATA_UPDATED));
    }

    pub fn start_auto_refresh(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        let tick = Box::new(move || {
            if let Some(this) = weak.upgrade() {
                tracing::debug!(dashboard_id = %this.dashboard_id, "risk refresh tick");
                let task = Rc::clone(&this);
                this.runtime
                    .spawn(Box::pin(async move { task.refresh().await }));
            }
        });
        self.refresher
            .borrow_mut()
            .start(&self.runtime, self.refresh_interval, tick);
    }

    pub fn stop_auto_refresh(&self) {
        self.refresher.borrow_mut().stop();
    }

    /// Render the panel and the modal from the current state.
    pub fn render(&self) {
        let panel = match self.current.borrow().as_ref() {
            Some(current) => {
                RiskPanelState::Ready(RiskPanel::build(current, &self.levels.borrow()))
            }
            None => RiskPanelState::Unavailable,
        };
        self.view.render_panel(&panel);
        self.render_modal();
    }

    fn current_level(&self) -> Option<RiskLevel> {
        self.current.borrow().as_ref().map(|current| current.value)
    }

    // -- quick transitions ---------------------------------------------------

    /// Raise the risk one level, after confirmation.
    ///
    /// At `critico` nothing is sent and an informational notice is shown.
    /// Returns whether the server accepted a change.
    pub async fn escalate(&self) -> bool {
        let Some(level) = self.current_level() else {
            self.notifier.notify(Notice::info(RISK_NOT_LOADED));
            return false;
        };
        match level.escalate() {
            RiskTransition::Change { to, .. } => self.quick_change(to).await,
            _ => {
                self.notifier.notify(Notice::info(AT_CEILING));
                false
            }
        }
    }

    /// Lower the risk one level, after confirmation.
    ///
    /// At `baixo` nothing is sent and an informational notice is shown.
    pub async fn deescalate(&self) -> bool {
        let Some(level) = self.current_level() else {
            self.notifier.notify(Notice::info(RISK_NOT_LOADED));
            return false;
        };
        match level.deescalate() {
            RiskTransition::Change { to, .. } => self.quick_change(to).await,
            _ => {
                self.notifier.notify(Notice::info(AT_FLOOR));
                false
            }
        }
    }

    /// Move to `target` after a yes/no confirmation (quick-action buttons).
    pub async fn quick_change(&self, target: RiskLevel) -> bool {
        let display = self.levels.borrow().info_or_builtin(target).display;
        let question =
            format!("Are you sure you want to change the risk level to \"{display}\"?");
        if !self.prompt.confirm(&question) {
            tracing::debug!(risk = %target, "risk change declined");
            return false;
        }
        self.set_level(target).await
    }

    /// Move directly to `target`, adjacent or not.
    ///
    /// Refused locally when `target` is already the current level.
    pub async fn set_level(&self, target: RiskLevel) -> bool {
        let Some(level) = self.current_level() else {
            self.notifier.notify(Notice::info(RISK_NOT_LOADED));
            return false;
        };
        match level.transition_to(target) {
            RiskTransition::Change { from, to } => self.send_change(from, to).await,
            _ => {
                let display = self.levels.borrow().info_or_builtin(target).display;
                self.notifier
                    .notify(Notice::info(format!("Risk level is already {display}")));
                false
            }
        }
    }

    async fn send_change(&self, from: RiskLevel, to: RiskLevel) -> bool {
        tracing::info!(dashboard_id = %self.dashboard_id, %from, %to, "requesting risk change");
        match self.api.update_risk(&self.dashboard_id, to).await {
            Ok(change) => {
                tracing::info!(
                    dashboard_id = %self.dashboard_id,
                    risk = %change.current.value,
                    "risk changed"
                );
                self.reads.advance();
                *self.current.borrow_mut() = Some(change.current);
                self.render();
                self.notifier.notify(Notice::success(change.message));
                true
            }
            Err(err) => {
                let err = CamwatchError::from(err);
                tracing::error!(%err, dashboard_id = %self.dashboard_id, "risk change failed");
                self.notifier.notify(Notice::error(err.user_message()));
                false
            }
        }
    }

    // -- modal -----------------------------------------------------------------

    /// Show the modal with a fresh form.
    pub fn open_modal(&self) {
        *self.modal.borrow_mut() = ModalState {
            open: true,
            ..ModalState::default()
        };
        self.render_modal();
    }

    /// Escape key, backdrop click or cancel button.
    pub fn close_modal(&self) {
        self.modal.borrow_mut().open = false;
        self.render_modal();
    }

    /// Pick (or clear) the level in the modal's select.
    pub fn select_modal_level(&self, level: Option<RiskLevel>) {
        self.modal.borrow_mut().selected = level;
        self.render_modal();
    }

    /// Toggle the acknowledgement checkbox.
    pub fn set_acknowledged(&self, acknowledged: bool) {
        self.modal.borrow_mut().acknowledged = acknowledged;
        self.render_modal();
    }

    /// Confirm button. Closes the modal when the server accepts the change.
    pub async fn submit_modal(&self) -> bool {
        let (selected, acknowledged, submitting) = {
            let modal = self.modal.borrow();
            (modal.selected, modal.acknowledged, modal.submitting)
        };
        let Some(target) = selected else {
            self.notifier.notify(Notice::error(SELECT_LEVEL));
            return false;
        };
        if submitting {
            return false;
        }
        if !acknowledged {
            self.notifier.notify(Notice::error(ACKNOWLEDGE_CHANGE));
            return false;
        }

        self.modal.borrow_mut().submitting = true;
        self.render_modal();

        let changed = self.set_level(target).await;

        {
            let mut modal = self.modal.borrow_mut();
            modal.submitting = false;
            if changed {
                modal.open = false;
            }
        }
        self.render_modal();
        changed
    }

    /// The modal as it should currently be shown.
    pub fn modal_view(&self) -> ModalView {
        let modal = self.modal.borrow();
        let current = self.current.borrow().clone();
        let levels = self.levels.borrow();
        let current_level = current.as_ref().map(|c| c.value);

        let preview = modal.selected.map(|level| {
            let info = levels.info_or_builtin(level);
            RiskPreview {
                display: info.display,
                color: info.color,
                summary: level.summary(),
            }
        });
        let escalation_warning = match (current_level, modal.selected) {
            (Some(from), Some(to)) => from.transition_to(to).is_escalation(),
            _ => false,
        };

        ModalView {
            open: modal.open,
            options: modal_options(&levels, current_level),
            current,
            selected: modal.selected,
            preview,
            escalation_warning,
            acknowledged: modal.acknowledged,
            submitting: modal.submitting,
            confirm_enabled: modal.selected.is_some() && modal.acknowledged && !modal.submitting,
        }
    }

    fn render_modal(&self) {
        let view = self.modal_view();
        self.view.render_modal(&view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::NoticeKind;
    use crate::testing::{
        FakeRiskApi, ManualRuntime, RecordingNotifier, RecordingRiskView, Reply, ScriptedPrompt,
        fixed_time, server_error, settle,
    };
    use camwatch_domain::error::ApiError;
    use camwatch_domain::risk::RiskLevelInfo;
    use camwatch_domain::wire::{DashboardRiskResponse, RiskChange};
    use chrono::{TimeZone, Utc};
    use tokio::task::LocalSet;

    type Controller = RiskLevelController<
        FakeRiskApi,
        RecordingRiskView,
        RecordingNotifier,
        ScriptedPrompt,
        ManualRuntime,
    >;

    struct Harness {
        api: FakeRiskApi,
        view: RecordingRiskView,
        notifier: RecordingNotifier,
        prompt: ScriptedPrompt,
        runtime: ManualRuntime,
        controller: Rc<Controller>,
    }

    fn harness_with_fallback(fallback: Option<CurrentRisk>) -> Harness {
        let api = FakeRiskApi::default();
        let view = RecordingRiskView::default();
        let notifier = RecordingNotifier::default();
        let prompt = ScriptedPrompt::default();
        let runtime = ManualRuntime::default();
        let controller = RiskLevelController::new(
            api.clone(),
            view.clone(),
            notifier.clone(),
            prompt.clone(),
            runtime.clone(),
            DashboardId::new("control-room").unwrap(),
            Duration::from_secs(30),
            fallback,
        );
        Harness {
            api,
            view,
            notifier,
            prompt,
            runtime,
            controller,
        }
    }

    fn harness() -> Harness {
        harness_with_fallback(None)
    }

    fn risk_response(level: RiskLevel) -> DashboardRiskResponse {
        let info = RiskLevelInfo::builtin(level);
        DashboardRiskResponse {
            risco: level,
            risco_display: info.display,
            risco_color: info.color,
            updated_at: Some(Utc.with_ymd_and_hms(2025, 3, 7, 8, 0, 0).unwrap()),
        }
    }

    fn change_to(level: RiskLevel) -> RiskChange {
        let info = RiskLevelInfo::builtin(level);
        RiskChange {
            current: CurrentRisk {
                value: level,
                display: info.display.clone(),
                color: info.color,
                updated_at: Utc.with_ymd_and_hms(2025, 3, 7, 10, 30, 0).unwrap(),
            },
            message: format!("Risk changed to {}", info.display),
        }
    }

    /// Harness whose current risk has been loaded as `level`.
    async fn loaded(level: RiskLevel) -> Harness {
        let h = harness();
        h.api.push_current(Reply::ok(risk_response(level)));
        assert!(h.controller.load_current_risk().await);
        h
    }

    #[tokio::test]
    async fn should_render_panel_when_initialized() {
        LocalSet::new()
            .run_until(async {
                let h = harness();
                h.api.push_current(Reply::ok(risk_response(RiskLevel::Medio)));

                h.controller.initialize().await;

                match h.view.last_panel().unwrap() {
                    RiskPanelState::Ready(panel) => {
                        assert_eq!(panel.current.value, RiskLevel::Medio);
                        assert_eq!(panel.current.display, "Médio");
                        assert_eq!(panel.quick_actions.len(), 3);
                    }
                    RiskPanelState::Unavailable => panic!("expected a loaded panel"),
                }
                let modal = h.view.last_modal().unwrap();
                assert!(!modal.open);
                assert!(modal.options.iter().any(|o| o.disabled && o.value == "medio"));
                assert!(h.controller.is_refreshing());
                assert_eq!(h.runtime.timer_periods(), vec![Duration::from_secs(30)]);
                assert!(h.notifier.notices.borrow().is_empty());
            })
            .await;
    }

    #[tokio::test]
    async fn should_fall_back_to_default_levels_when_fetch_fails() {
        let h = harness();
        h.api
            .push_levels(Reply::err(ApiError::Transport("offline".to_string())));

        h.controller.load_levels().await;

        assert_eq!(h.controller.levels(), RiskLevelSet::defaults());
        assert_eq!(h.notifier.last(), Some(Notice::error(LEVELS_LOAD_FAILED)));
    }

    #[tokio::test]
    async fn should_fall_back_to_default_levels_when_server_set_empty() {
        let h = harness();
        h.api.push_levels(Reply::ok(RiskLevelSet::from_levels(Vec::new())));

        h.controller.load_levels().await;

        assert_eq!(h.controller.levels().len(), 4);
        assert!(h.notifier.notices.borrow().is_empty());
    }

    #[tokio::test]
    async fn should_use_page_snapshot_when_first_fetch_fails() {
        let snapshot = CurrentRisk::from_info(RiskLevelInfo::builtin(RiskLevel::Alto), fixed_time());
        let h = harness_with_fallback(Some(snapshot.clone()));

        assert!(!h.controller.load_current_risk().await);

        assert_eq!(h.controller.current_risk(), Some(snapshot));
    }

    #[tokio::test]
    async fn should_keep_current_risk_when_refresh_fails() {
        let fallback = CurrentRisk::from_info(RiskLevelInfo::builtin(RiskLevel::Baixo), fixed_time());
        let h = harness_with_fallback(Some(fallback));
        h.api.push_current(Reply::ok(risk_response(RiskLevel::Critico)));
        h.controller.load_current_risk().await;

        h.api
            .push_current(Reply::err(ApiError::Transport("offline".to_string())));
        h.controller.refresh().await;

        assert_eq!(
            h.controller.current_risk().map(|c| c.value),
            Some(RiskLevel::Critico)
        );
    }

    #[tokio::test]
    async fn should_keep_confirmed_change_when_earlier_refresh_resolves_after_it() {
        LocalSet::new()
            .run_until(async {
                let h = loaded(RiskLevel::Baixo).await;
                let (slow_read, slow_tx) = Reply::deferred();
                h.api.push_current(slow_read);

                let controller = Rc::clone(&h.controller);
                let refresh = tokio::task::spawn_local(async move { controller.refresh().await });
                settle().await;

                h.api.push_update(Reply::ok(change_to(RiskLevel::Alto)));
                assert!(h.controller.set_level(RiskLevel::Alto).await);

                slow_tx.send(Ok(risk_response(RiskLevel::Baixo))).unwrap();
                refresh.await.unwrap();

                let current = h.controller.current_risk().unwrap();
                assert_eq!(current.value, RiskLevel::Alto);
                assert_eq!(
                    current.updated_at,
                    Utc.with_ymd_and_hms(2025, 3, 7, 10, 30, 0).unwrap()
                );
            })
            .await;
    }

    #[tokio::test]
    async fn should_drop_older_read_when_newer_read_already_applied() {
        LocalSet::new()
            .run_until(async {
                let h = harness();
                let (slow_read, slow_tx) = Reply::deferred();
                h.api.push_current(slow_read);
                h.api.push_current(Reply::ok(risk_response(RiskLevel::Critico)));

                let controller = Rc::clone(&h.controller);
                let first =
                    tokio::task::spawn_local(async move { controller.load_current_risk().await });
                settle().await;
                assert!(h.controller.load_current_risk().await);

                slow_tx.send(Ok(risk_response(RiskLevel::Baixo))).unwrap();
                assert!(!first.await.unwrap());

                assert_eq!(
                    h.controller.current_risk().map(|c| c.value),
                    Some(RiskLevel::Critico)
                );
            })
            .await;
    }

    #[tokio::test]
    async fn should_render_unavailable_panel_when_no_risk_known() {
        let h = harness();
        h.controller.load_current_risk().await;
        h.controller.render();
        assert_eq!(h.view.last_panel(), Some(RiskPanelState::Unavailable));
    }

    #[tokio::test]
    async fn should_stamp_load_time_when_server_omits_updated_at() {
        let h = harness();
        let mut resp = risk_response(RiskLevel::Baixo);
        resp.updated_at = None;
        h.api.push_current(Reply::ok(resp));

        h.controller.load_current_risk().await;

        assert_eq!(h.controller.current_risk().unwrap().updated_at, fixed_time());
    }

    #[tokio::test]
    async fn should_not_send_request_when_escalating_at_critico() {
        let h = loaded(RiskLevel::Critico).await;

        assert!(!h.controller.escalate().await);

        assert!(h.api.update_requests().is_empty());
        assert!(h.prompt.asked.borrow().is_empty());
        assert_eq!(h.notifier.last(), Some(Notice::info(AT_CEILING)));
    }

    #[tokio::test]
    async fn should_not_send_request_when_deescalating_at_baixo() {
        let h = loaded(RiskLevel::Baixo).await;

        assert!(!h.controller.deescalate().await);

        assert!(h.api.update_requests().is_empty());
        assert_eq!(h.notifier.last(), Some(Notice::info(AT_FLOOR)));
    }

    #[tokio::test]
    async fn should_escalate_one_level_when_confirmed() {
        let h = loaded(RiskLevel::Medio).await;
        h.api.push_update(Reply::ok(change_to(RiskLevel::Alto)));

        assert!(h.controller.escalate().await);

        assert_eq!(
            h.api.update_requests(),
            vec![(DashboardId::new("control-room").unwrap(), RiskLevel::Alto)]
        );
        assert_eq!(
            h.prompt.asked.borrow().as_slice(),
            ["Are you sure you want to change the risk level to \"Alto\"?"]
        );
        let current = h.controller.current_risk().unwrap();
        assert_eq!(current.value, RiskLevel::Alto);
        assert_eq!(
            current.updated_at,
            Utc.with_ymd_and_hms(2025, 3, 7, 10, 30, 0).unwrap()
        );
        assert_eq!(h.notifier.last(), Some(Notice::success("Risk changed to Alto")));
        assert!(matches!(
            h.view.last_panel(),
            Some(RiskPanelState::Ready(panel)) if panel.current.value == RiskLevel::Alto
        ));
    }

    #[tokio::test]
    async fn should_deescalate_one_level_when_confirmed() {
        let h = loaded(RiskLevel::Alto).await;
        h.api.push_update(Reply::ok(change_to(RiskLevel::Medio)));

        assert!(h.controller.deescalate().await);

        assert_eq!(h.api.update_requests()[0].1, RiskLevel::Medio);
    }

    #[tokio::test]
    async fn should_not_send_request_when_confirmation_declined() {
        let h = loaded(RiskLevel::Baixo).await;
        h.prompt.answer.set(false);

        assert!(!h.controller.quick_change(RiskLevel::Critico).await);

        assert!(h.api.update_requests().is_empty());
        assert_eq!(h.controller.current_risk().unwrap().value, RiskLevel::Baixo);
    }

    #[tokio::test]
    async fn should_keep_current_risk_when_update_fails() {
        let h = loaded(RiskLevel::Medio).await;
        let before = h.controller.current_risk();
        h.api
            .push_update(Reply::err(server_error("Insufficient permission to change risk")));

        assert!(!h.controller.set_level(RiskLevel::Critico).await);

        assert_eq!(h.controller.current_risk(), before);
        assert_eq!(
            h.notifier.last(),
            Some(Notice::error("Insufficient permission to change risk"))
        );
    }

    #[tokio::test]
    async fn should_refuse_change_to_current_level() {
        let h = loaded(RiskLevel::Alto).await;

        assert!(!h.controller.set_level(RiskLevel::Alto).await);

        assert!(h.api.update_requests().is_empty());
        assert_eq!(h.notifier.last().unwrap().kind, NoticeKind::Info);
    }

    #[tokio::test]
    async fn should_jump_non_adjacent_levels() {
        let h = loaded(RiskLevel::Baixo).await;
        h.api.push_update(Reply::ok(change_to(RiskLevel::Critico)));

        assert!(h.controller.set_level(RiskLevel::Critico).await);

        assert_eq!(h.controller.current_risk().unwrap().value, RiskLevel::Critico);
        assert!(h.prompt.asked.borrow().is_empty());
    }

    #[tokio::test]
    async fn should_warn_in_modal_only_when_target_is_higher() {
        for current in RiskLevel::ALL {
            let h = loaded(current).await;
            h.controller.open_modal();
            for target in RiskLevel::ALL {
                h.controller.select_modal_level(Some(target));
                let modal = h.view.last_modal().unwrap();
                assert_eq!(
                    modal.escalation_warning,
                    target.order() > current.order(),
                    "{current} -> {target}"
                );
            }
        }
    }

    #[tokio::test]
    async fn should_enable_confirm_only_when_selected_and_acknowledged() {
        let h = loaded(RiskLevel::Baixo).await;
        h.controller.open_modal();
        assert!(!h.view.last_modal().unwrap().confirm_enabled);

        h.controller.set_acknowledged(true);
        assert!(!h.view.last_modal().unwrap().confirm_enabled);

        h.controller.select_modal_level(Some(RiskLevel::Alto));
        let modal = h.view.last_modal().unwrap();
        assert!(modal.confirm_enabled);
        let preview = modal.preview.unwrap();
        assert_eq!(preview.display, "Alto");
        assert_eq!(preview.summary, RiskLevel::Alto.summary());

        h.controller.select_modal_level(None);
        let modal = h.view.last_modal().unwrap();
        assert!(!modal.confirm_enabled);
        assert!(modal.preview.is_none());
        assert!(!modal.escalation_warning);
    }

    #[tokio::test]
    async fn should_reset_form_when_modal_reopened() {
        let h = loaded(RiskLevel::Baixo).await;
        h.controller.open_modal();
        h.controller.select_modal_level(Some(RiskLevel::Medio));
        h.controller.set_acknowledged(true);
        h.controller.close_modal();
        assert!(!h.view.last_modal().unwrap().open);

        h.controller.open_modal();

        let modal = h.view.last_modal().unwrap();
        assert!(modal.open);
        assert!(modal.selected.is_none());
        assert!(!modal.acknowledged);
        assert!(modal.preview.is_none());
        assert_eq!(modal.current.unwrap().value, RiskLevel::Baixo);
    }

    #[tokio::test]
    async fn should_require_selection_before_submitting() {
        let h = loaded(RiskLevel::Baixo).await;
        h.controller.open_modal();

        assert!(!h.controller.submit_modal().await);

        assert_eq!(h.notifier.last(), Some(Notice::error(SELECT_LEVEL)));
        assert!(h.api.update_requests().is_empty());
    }

    #[tokio::test]
    async fn should_require_acknowledgement_before_submitting() {
        let h = loaded(RiskLevel::Baixo).await;
        h.controller.open_modal();
        h.controller.select_modal_level(Some(RiskLevel::Alto));

        assert!(!h.controller.submit_modal().await);

        assert!(h.api.update_requests().is_empty());
    }

    #[tokio::test]
    async fn should_close_modal_when_submit_succeeds() {
        let h = loaded(RiskLevel::Baixo).await;
        h.api.push_update(Reply::ok(change_to(RiskLevel::Alto)));
        h.controller.open_modal();
        h.controller.select_modal_level(Some(RiskLevel::Alto));
        h.controller.set_acknowledged(true);

        assert!(h.controller.submit_modal().await);

        let modals = h.view.modals.borrow();
        assert!(modals.iter().any(|m| m.submitting && !m.confirm_enabled));
        let last = modals.last().unwrap();
        assert!(!last.open);
        assert!(!last.submitting);
        assert!(h.prompt.asked.borrow().is_empty());
    }

    #[tokio::test]
    async fn should_keep_modal_open_when_submit_fails() {
        let h = loaded(RiskLevel::Baixo).await;
        h.api.push_update(Reply::err(server_error("Dashboard locked")));
        h.controller.open_modal();
        h.controller.select_modal_level(Some(RiskLevel::Alto));
        h.controller.set_acknowledged(true);

        assert!(!h.controller.submit_modal().await);

        let modal = h.view.last_modal().unwrap();
        assert!(modal.open);
        assert!(modal.confirm_enabled);
        assert_eq!(h.notifier.last(), Some(Notice::error("Dashboard locked")));
    }

    #[tokio::test]
    async fn should_notify_when_refreshed_on_demand() {
        let h = loaded(RiskLevel::Baixo).await;
        h.api.push_current(Reply::ok(risk_response(RiskLevel::Medio)));

        h.controller.refresh_now().await;

        assert_eq!(h.controller.current_risk().unwrap().value, RiskLevel::Medio);
        assert_eq!(h.notifier.last(), Some(Notice::success(DATA_UPDATED)));
    }

    #[tokio::test]
    async fn should_refetch_current_risk_on_each_refresh_tick() {
        LocalSet::new()
            .run_until(async {
                let h = harness();
                h.api.push_current(Reply::ok(risk_response(RiskLevel::Baixo)));
                h.controller.initialize().await;
                h.api.push_current(Reply::ok(risk_response(RiskLevel::Alto)));

                h.runtime.fire_timers();
                settle().await;

                assert_eq!(h.api.current_requests(), 2);
                assert_eq!(h.controller.current_risk().unwrap().value, RiskLevel::Alto);
                assert!(h.notifier.notices.borrow().is_empty());

                h.controller.stop_auto_refresh();
                h.runtime.fire_timers();
                settle().await;
                assert_eq!(h.api.current_requests(), 2);
            })
            .await;
    }
}
