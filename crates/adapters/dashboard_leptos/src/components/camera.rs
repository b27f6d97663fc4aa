//! Camera select, live feed and status line.

use camwatch_app::view_model::{FeedState, SELECT_CAMERA_TEXT};
use camwatch_domain::camera::Camera;
use camwatch_domain::id::CameraId;
use leptos::prelude::*;

use crate::views::CameraSignals;
use crate::wiring::{CameraController, Stored};

#[component]
pub fn CameraSelect(cameras: Vec<Camera>, controller: Stored<CameraController>) -> impl IntoView {
    let initial = controller.with_value(|c| c.selected_camera());

    let on_change = move |ev: web_sys::Event| {
        // The empty placeholder option clears the selection.
        let camera_id = CameraId::new(event_target_value(&ev)).ok();
        controller.with_value(|c| c.select_camera(camera_id));
    };

    view! {
        <select class="camera-select" on:change=on_change>
            <option value="" selected=initial.is_none()>{SELECT_CAMERA_TEXT}</option>
            {cameras
                .into_iter()
                .map(|camera| {
                    let selected = initial.as_ref() == Some(&camera.id);
                    let label = if camera.location.is_empty() {
                        camera.id.to_string()
                    } else {
                        format!("{} - {}", camera.id, camera.location)
                    };
                    view! {
                        <option value=camera.id.to_string() selected=selected>
                            {label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

/// The MJPEG stream, or a placeholder while no stream is available.
#[component]
pub fn CameraFeed(controller: Stored<CameraController>, signals: CameraSignals) -> impl IntoView {
    view! {
        <div class="video-container">
            {move || match signals.feed.get() {
                FeedState::Live { url } => view! {
                    <img
                        class="video-feed"
                        src=url
                        alt="Live camera feed"
                        on:error=move |_| controller.with_value(|c| c.feed_failed())
                    />
                }
                .into_any(),
                FeedState::Placeholder => view! {
                    <div class="video-placeholder">
                        <i class="fas fa-video-slash"></i>
                        <span>"No live feed"</span>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
pub fn CameraStatusLine(signals: CameraSignals) -> impl IntoView {
    let status = signals.status;

    view! {
        <div class="camera-status">
            <span
                class="status-dot"
                style:background-color=move || status.with(|s| s.color().unwrap_or_default())
            ></span>
            <span class="status-text">{move || status.with(|s| s.text().to_string())}</span>
            <span class="location">
                <i class="fas fa-map-marker-alt"></i>
                " "
                {move || status.with(|s| s.location_text().to_string())}
            </span>
        </div>
    }
}
