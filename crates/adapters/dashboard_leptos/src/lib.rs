//! Browser dashboard for the camwatch backend.
//!
//! A Leptos CSR app wiring the `camwatch-app` controllers to the DOM:
//! - [`api::HttpClient`] implements the API ports over `gloo-net`;
//! - [`runtime::BrowserRuntime`] provides timers, task spawning and the clock;
//! - [`views`] holds the signal-backed view ports the components render from.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod api;
pub mod bootstrap;
mod components;
pub mod logging;
mod pages;
pub mod runtime;
pub mod views;
mod wiring;

use components::{Nav, ToastContainer};
use pages::{LiveDashboard, Manage, NotFound};
use wiring::AppContext;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    let bootstrap = bootstrap::load();
    let client = api::HttpClient::new(bootstrap.config.api_base());
    provide_context(AppContext { bootstrap, client });

    view! {
        <ToastContainer>
            <Router>
                <Nav/>
                <main>
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=LiveDashboard/>
                        <Route path=path!("manage") view=Manage/>
                    </Routes>
                </main>
            </Router>
        </ToastContainer>
    }
}
