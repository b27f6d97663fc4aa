use camwatch_app::view_model::DashboardCard;
use leptos::prelude::*;

/// Dashboards with their risk level and attached cameras.
#[component]
pub fn DashboardList(cards: Vec<DashboardCard>) -> impl IntoView {
    if cards.is_empty() {
        return view! { <p class="muted">"No dashboards yet."</p> }.into_any();
    }

    view! {
        <div class="dashboard-list">
            {cards.into_iter().map(|card| view! { <DashboardCardView card/> }).collect_view()}
        </div>
    }
    .into_any()
}

#[component]
fn DashboardCardView(card: DashboardCard) -> impl IntoView {
    let capacity = card.capacity_text();
    let risk = card.risk.map(|level| {
        let class = format!("risk-badge risk-{level}");
        view! { <span class=class>{level.as_str()}</span> }
    });
    let cameras = if card.cameras.is_empty() {
        view! { <li class="muted">"No cameras registered"</li> }.into_any()
    } else {
        card.cameras
            .into_iter()
            .map(|camera| view! { <li>{camera}</li> })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="card dashboard-card" class:full=card.is_full>
            <div class="card-header">
                <h3>{card.name}</h3>
                {risk}
            </div>
            <p class="muted">
                <code>{card.dashboard_id.to_string()}</code>
                " \u{00B7} "
                {capacity}
            </p>
            <ul class="camera-list">{cameras}</ul>
        </div>
    }
}
