//! Admin page: list dashboards, create one, attach cameras.

use camwatch_app::controllers::DashboardManager;
use leptos::prelude::*;

use crate::components::{AddCameraForm, CreateDashboardForm, DashboardList, Loading};
use crate::runtime::BrowserRuntime;
use crate::views::DashboardSignals;
use crate::wiring::{spawn_with, use_app};

#[component]
pub fn Manage() -> impl IntoView {
    let app = use_app();
    let signals = DashboardSignals::new();
    let controller = StoredValue::new_local(DashboardManager::new(app.client, signals, BrowserRuntime));
    let (loading, set_loading) = signal(true);

    spawn_with(controller, move |c| async move {
        c.load().await;
        set_loading.set(false);
    });

    let banner = move || {
        signals.banner.get().map(|notice| {
            let class = format!("banner banner-{}", notice.kind);
            view! {
                <div class=class>
                    <span>{notice.text}</span>
                    <button class="toast-dismiss" on:click=move |_| controller.with_value(|c| c.dismiss_banner())>
                        "\u{00D7}"
                    </button>
                </div>
            }
        })
    };

    view! {
        <div>
            <h1>"Dashboards"</h1>
            {banner}
            <div class="manage-grid">
                <div>
                    {move || {
                        if loading.get() {
                            view! { <Loading message="Loading dashboards\u{2026}"/> }.into_any()
                        } else {
                            view! { <DashboardList cards=signals.cards.get()/> }.into_any()
                        }
                    }}
                </div>
                <div>
                    <CreateDashboardForm controller signals/>
                    <AddCameraForm controller signals/>
                </div>
            </div>
        </div>
    }
}
