//! Change-level modal with preview, escalation warning and acknowledgement.

use camwatch_app::view_model::ModalView;
use camwatch_domain::risk::RiskLevel;
use leptos::prelude::*;

use crate::views::RiskSignals;
use crate::wiring::{RiskController, Stored, spawn_with};

#[component]
pub fn RiskModal(controller: Stored<RiskController>, signals: RiskSignals) -> impl IntoView {
    let escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            controller.with_value(|c| c.close_modal());
        }
    });
    on_cleanup(move || escape.remove());

    move || {
        signals
            .modal
            .get()
            .filter(|modal| modal.open)
            .map(|modal| view! { <ModalDialog controller modal/> })
    }
}

#[component]
fn ModalDialog(controller: Stored<RiskController>, modal: ModalView) -> impl IntoView {
    let close = move || controller.with_value(|c| c.close_modal());

    let on_select = move |ev: web_sys::Event| {
        let level = event_target_value(&ev).parse::<RiskLevel>().ok();
        controller.with_value(|c| c.select_modal_level(level));
    };
    let on_acknowledge = move |ev: web_sys::Event| {
        let checked = event_target_checked(&ev);
        controller.with_value(|c| c.set_acknowledged(checked));
    };
    let on_confirm = move |_| {
        spawn_with(controller, |c| async move {
            c.submit_modal().await;
        });
    };

    let current = modal.current.map(|current| {
        view! {
            <p>
                "Current level: "
                <strong style:color=current.color>{current.display}</strong>
            </p>
        }
    });
    let selected = modal.selected.map(RiskLevel::as_str);
    let preview = modal.preview.map(|preview| {
        view! {
            <div class="risk-preview" style:border-color=preview.color.clone()>
                <strong style:color=preview.color>{preview.display}</strong>
                <p>{preview.summary}</p>
            </div>
        }
    });
    let warning = modal.escalation_warning.then(|| {
        view! {
            <div class="escalation-warning">
                <i class="fas fa-exclamation-triangle"></i>
                <span>"This change escalates the risk level. Make sure the situation requires it."</span>
            </div>
        }
    });
    let confirm_disabled = !modal.confirm_enabled;
    let confirm_label = if modal.submitting {
        "Saving\u{2026}"
    } else {
        "Confirm change"
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| close()>
            <div class="card modal" on:click=|ev| ev.stop_propagation()>
                <h3>"Change risk level"</h3>
                {current}
                <select class="risk-select" on:change=on_select>
                    <option value="" selected=selected.is_none()>"Select a level"</option>
                    {modal
                        .options
                        .into_iter()
                        .map(|option| {
                            let is_selected = selected == Some(option.value.as_str());
                            view! {
                                <option
                                    value=option.value
                                    disabled=option.disabled
                                    selected=is_selected
                                >
                                    {option.label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                {preview}
                {warning}
                <label class="acknowledge">
                    <input type="checkbox" prop:checked=modal.acknowledged on:change=on_acknowledge/>
                    " I understand the impact of this change"
                </label>
                <div class="modal-actions">
                    <button on:click=move |_| close()>"Cancel"</button>
                    <button class="primary" disabled=confirm_disabled on:click=on_confirm>
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
