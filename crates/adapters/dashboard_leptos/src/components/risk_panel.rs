//! The dashboard's risk level panel.

use camwatch_app::view_model::{RiskPanel, RiskPanelState};
use leptos::prelude::*;

use crate::views::RiskSignals;
use crate::wiring::{RiskController, Stored, spawn_with};

#[component]
pub fn RiskCard(controller: Stored<RiskController>, signals: RiskSignals) -> impl IntoView {
    let refresh_now = move |_| {
        spawn_with(controller, |c| async move {
            c.refresh_now().await;
        });
    };

    view! {
        <section class="card risk-card">
            <div class="card-header">
                <h2>"Risk level"</h2>
                <button class="icon-button" title="Refresh" on:click=refresh_now>
                    <i class="fas fa-sync-alt"></i>
                </button>
            </div>
            {move || match signals.panel.get() {
                RiskPanelState::Unavailable => view! {
                    <p class="muted">"Risk level unavailable"</p>
                }
                .into_any(),
                RiskPanelState::Ready(panel) => view! {
                    <RiskDetails controller panel/>
                }
                .into_any(),
            }}
        </section>
    }
}

#[component]
fn RiskDetails(controller: Stored<RiskController>, panel: RiskPanel) -> impl IntoView {
    let last_updated = panel.last_updated_text();
    let color = panel.current.color.clone();
    let display = panel.current.display.clone();
    let escalate_disabled = !panel.can_escalate;
    let deescalate_disabled = !panel.can_deescalate;

    let escalate = move |_| {
        spawn_with(controller, |c| async move {
            c.escalate().await;
        });
    };
    let deescalate = move |_| {
        spawn_with(controller, |c| async move {
            c.deescalate().await;
        });
    };
    let open_modal = move |_| controller.with_value(|c| c.open_modal());
    let icon_class = format!("{} risk-icon", panel.icon);

    view! {
        <div class="risk-header">
            <span class="risk-indicator" style:background-color=color.clone()></span>
            <span class="risk-badge" style:color=color.clone() style:border-color=color.clone()>
                {display.clone()}
            </span>
            <small class="muted">{last_updated}</small>
        </div>
        <div class="risk-main-display">
            <i class=icon_class style:color=color.clone()></i>
            <div class="risk-main" style:color=color>
                {display}
            </div>
            <p class="risk-summary">{panel.summary}</p>
        </div>
        <p class="risk-description">{panel.description}</p>
        <div class="risk-actions">
            <button on:click=escalate disabled=escalate_disabled>
                <i class="fas fa-arrow-up"></i>
                " Escalate"
            </button>
            <button on:click=deescalate disabled=deescalate_disabled>
                <i class="fas fa-arrow-down"></i>
                " De-escalate"
            </button>
            <button class="primary" on:click=open_modal>
                "Change level\u{2026}"
            </button>
        </div>
        <div class="risk-quick">
            {panel
                .quick_actions
                .into_iter()
                .map(|button| {
                    let level = button.level;
                    let class = format!("risk-quick-btn risk-{level}");
                    let on_click = move |_| {
                        spawn_with(controller, move |c| async move {
                            c.quick_change(level).await;
                        });
                    };
                    view! {
                        <button
                            class=class
                            style:border-color=button.color
                            on:click=on_click
                        >
                            {button.display}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
