//! Application context and the concrete controller types.

use std::future::Future;
use std::rc::Rc;

use camwatch_app::controllers::{CameraFeedController, DashboardManager, RiskLevelController};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpClient;
use crate::bootstrap::Bootstrap;
use crate::components::ToastProvider;
use crate::runtime::BrowserRuntime;
use crate::views::{BrowserPrompt, CameraSignals, DashboardSignals, RiskSignals};

pub type CameraController = CameraFeedController<HttpClient, CameraSignals, BrowserRuntime>;
pub type RiskController =
    RiskLevelController<HttpClient, RiskSignals, ToastProvider, BrowserPrompt, BrowserRuntime>;
pub type AdminController = DashboardManager<HttpClient, DashboardSignals, BrowserRuntime>;

/// A controller owned by the component that created it.
///
/// Disposed with the component's owner, which drops the controller and
/// with it every timer it started.
pub type Stored<C> = StoredValue<Rc<C>, LocalStorage>;

/// Page-wide state provided once by `App`.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub bootstrap: Bootstrap,
    pub client: HttpClient,
}

/// Access the application context.
///
/// Must be called within the component tree under `<App/>`.
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext not found in context")
}

/// Run an async controller action in the background.
pub fn spawn_with<C, F, Fut>(controller: Stored<C>, action: F)
where
    C: 'static,
    F: FnOnce(Rc<C>) -> Fut,
    Fut: Future<Output = ()> + 'static,
{
    let Some(controller) = controller.try_get_value() else {
        leptos::logging::warn!("controller already disposed");
        return;
    };
    spawn_local(action(controller));
}
