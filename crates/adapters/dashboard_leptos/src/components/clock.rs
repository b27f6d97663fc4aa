//! Header clock, ticking once a second in the browser's local time.

use chrono::Local;
use gloo_timers::callback::Interval;
use leptos::prelude::*;

fn now_text() -> String {
    Local::now().format("%H:%M - %d/%m/%Y").to_string()
}

#[component]
pub fn HeaderClock() -> impl IntoView {
    let text = RwSignal::new(now_text());
    let ticker = Interval::new(1000, move || text.set(now_text()));
    // Dropped (and cancelled) with the component.
    let _ticker = StoredValue::new_local(ticker);

    view! {
        <span class="header-clock">
            <i class="far fa-clock"></i>
            " "
            {move || text.get()}
        </span>
    }
}
