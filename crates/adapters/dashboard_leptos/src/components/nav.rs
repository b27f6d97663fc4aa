use leptos::prelude::*;

use super::HeaderClock;
use crate::wiring::use_app;

#[component]
pub fn Nav() -> impl IntoView {
    let title = use_app()
        .bootstrap
        .data
        .dashboard_name
        .unwrap_or_else(|| "Camwatch".to_string());

    view! {
        <header class="top-bar">
            <div class="brand">
                <i class="fas fa-shield-alt"></i>
                <span>{title}</span>
            </div>
            <nav>
                <ul>
                    <li><a href="/">"Live"</a></li>
                    <li><a href="/manage">"Manage"</a></li>
                </ul>
            </nav>
            <HeaderClock/>
        </header>
    }
}
