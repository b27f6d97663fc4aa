//! Live view: camera feed, detections and the dashboard's risk level.

use camwatch_app::controllers::{CameraFeedController, RiskLevelController};
use camwatch_domain::time;
use leptos::prelude::*;

use crate::components::{
    CameraFeed, CameraSelect, CameraStatusLine, DetectionsTable, RiskCard, RiskModal, use_toasts,
};
use crate::runtime::BrowserRuntime;
use crate::views::{BrowserPrompt, CameraSignals, RiskSignals};
use crate::wiring::{AppContext, RiskController, Stored, spawn_with, use_app};

#[component]
pub fn LiveDashboard() -> impl IntoView {
    let app = use_app();

    if let Some(message) = app.bootstrap.data.error.clone() {
        tracing::warn!(%message, "dashboard unavailable");
        return view! {
            <section class="card error-card">
                <i class="fas fa-exclamation-triangle"></i>
                <h2>"Dashboard unavailable"</h2>
                <p>{message}</p>
                <a href="/manage">"Manage dashboards"</a>
            </section>
        }
        .into_any();
    }

    let cameras = app.bootstrap.data.cameras.clone();
    let camera_signals = CameraSignals::new();
    let camera = CameraFeedController::new(
        app.client.clone(),
        camera_signals,
        BrowserRuntime,
        app.bootstrap.config.camera_poll_interval(),
    );
    camera.select_camera(app.bootstrap.data.first_camera().map(|c| c.id.clone()));
    let camera = StoredValue::new_local(camera);

    let risk = risk_controller(&app).map(|(controller, signals)| {
        view! {
            <RiskCard controller signals/>
            <RiskModal controller signals/>
        }
        .into_any()
    });

    view! {
        <div class="live-grid">
            <div class="live-main">
                <section class="card camera-card">
                    <div class="card-header">
                        <h2>"Camera"</h2>
                        <CameraSelect cameras controller=camera/>
                    </div>
                    <CameraFeed controller=camera signals=camera_signals/>
                    <CameraStatusLine signals=camera_signals/>
                </section>
                <section class="card">
                    <h2>"Recent detections"</h2>
                    <DetectionsTable signals=camera_signals/>
                </section>
            </div>
            <aside class="live-side">
                {risk.unwrap_or_else(|| {
                    view! { <section class="card"><p class="muted">"No dashboard selected"</p></section> }
                        .into_any()
                })}
            </aside>
        </div>
    }
    .into_any()
}

/// Build and start the risk controller when the page names a dashboard.
fn risk_controller(app: &AppContext) -> Option<(Stored<RiskController>, RiskSignals)> {
    let dashboard_id = app.bootstrap.data.dashboard_id.clone()?;
    let signals = RiskSignals::new();
    let controller = RiskLevelController::new(
        app.client.clone(),
        signals,
        use_toasts(),
        BrowserPrompt,
        BrowserRuntime,
        dashboard_id,
        app.bootstrap.config.risk_refresh_interval(),
        app.bootstrap.data.initial_risk(time::now()),
    );
    let controller = StoredValue::new_local(controller);
    spawn_with(controller, |c| async move {
        c.initialize().await;
    });
    Some((controller, signals))
}
