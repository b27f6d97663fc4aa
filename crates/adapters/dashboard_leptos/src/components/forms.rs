//! Admin forms: create a dashboard, attach a camera to one.

use camwatch_app::ports::Notice;
use camwatch_domain::risk::RiskLevel;
use leptos::prelude::*;

use crate::views::DashboardSignals;
use crate::wiring::{AdminController, Stored, spawn_with};

#[component]
pub fn CreateDashboardForm(
    controller: Stored<AdminController>,
    signals: DashboardSignals,
) -> impl IntoView {
    let form = signals.dashboard_form;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match form.submission() {
            Ok(submission) => spawn_with(controller, |c| async move {
                c.create_dashboard(submission).await;
            }),
            Err(err) => signals.banner.set(Some(Notice::error(err.to_string()))),
        }
    };

    view! {
        <form class="card admin-form" on:submit=on_submit>
            <h2>"New dashboard"</h2>
            <label>
                "Dashboard id"
                <input type="text" required bind:value=form.dashboard_id/>
            </label>
            <label>
                "Name"
                <input type="text" required bind:value=form.name/>
            </label>
            <label>
                "Risk level"
                <select bind:value=form.risco>
                    {RiskLevel::ALL
                        .into_iter()
                        .map(|level| view! { <option value=level.as_str()>{level.as_str()}</option> })
                        .collect_view()}
                </select>
            </label>
            <button class="primary" type="submit">"Create dashboard"</button>
        </form>
    }
}

#[component]
pub fn AddCameraForm(controller: Stored<AdminController>, signals: DashboardSignals) -> impl IntoView {
    let form = signals.camera_form;
    let targets = signals.targets;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (dashboard_id, camera) = form.submission();
        spawn_with(controller, |c| async move {
            c.add_camera(&dashboard_id, camera).await;
        });
    };

    view! {
        <form class="card admin-form" on:submit=on_submit>
            <h2>"Add camera"</h2>
            <label>
                "Dashboard"
                <select bind:value=form.dashboard_id>
                    <option value="">"Select a dashboard"</option>
                    {move || {
                        targets
                            .get()
                            .into_iter()
                            .map(|option| view! { <option value=option.value>{option.label}</option> })
                            .collect_view()
                    }}
                </select>
            </label>
            <label>
                "Camera id"
                <input type="text" required bind:value=form.camera_id/>
            </label>
            <label>
                "Stream link"
                <input type="text" required placeholder="rtsp://" bind:value=form.camera_link/>
            </label>
            <label>
                "Location"
                <input type="text" required bind:value=form.camera_loc/>
            </label>
            <label>
                "Status"
                <input type="text" required bind:value=form.camera_status/>
            </label>
            <button class="primary" type="submit">"Add camera"</button>
        </form>
    }
}
