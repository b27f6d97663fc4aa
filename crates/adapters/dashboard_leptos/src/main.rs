use camwatch_adapter_dashboard_leptos::{App, logging};

fn main() {
    logging::init();
    leptos::mount::mount_to_body(App);
}
