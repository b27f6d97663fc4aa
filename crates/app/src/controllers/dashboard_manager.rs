//! Dashboard manager: the admin panel listing dashboards and their cameras.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use camwatch_domain::dashboard::{Dashboard, NewCamera, NewDashboard};
use camwatch_domain::error::CamwatchError;
use camwatch_domain::id::DashboardId;

use crate::periodic::PeriodicTask;
use crate::ports::{DashboardApi, DashboardView, Notice, Scheduler};
use crate::view_model::{DashboardCard, camera_targets};

const LOAD_FAILED: &str = "Failed to load dashboards";
const DASHBOARD_CREATED: &str = "Dashboard created successfully!";
const CAMERA_ADDED: &str = "Camera added successfully!";

/// How long a status banner stays up before it clears itself.
pub const BANNER_LIFETIME: Duration = Duration::from_secs(3);

/// Create/list admin forms over dashboards and their cameras.
pub struct DashboardManager<A, V, R: Scheduler> {
    api: A,
    view: V,
    runtime: R,
    dashboards: RefCell<Vec<Dashboard>>,
    banner_timer: RefCell<PeriodicTask<R::Handle>>,
    // Bumped per banner; a pending dismissal only clears its own banner.
    banners_shown: Cell<u64>,
}

impl<A, V, R> DashboardManager<A, V, R>
where
    A: DashboardApi + 'static,
    V: DashboardView + 'static,
    R: Scheduler + 'static,
{
    pub fn new(api: A, view: V, runtime: R) -> Rc<Self> {
        Rc::new(Self {
            api,
            view,
            runtime,
            dashboards: RefCell::new(Vec::new()),
            banner_timer: RefCell::new(PeriodicTask::new()),
            banners_shown: Cell::new(0),
        })
    }

    /// Dashboards from the last successful load.
    pub fn dashboards(&self) -> Vec<Dashboard> {
        self.dashboards.borrow().clone()
    }

    /// Fetch the list and replace the cards and the add-camera targets.
    ///
    /// Returns whether the list was loaded.
    #[tracing::instrument(skip(self))]
    pub async fn load(self: &Rc<Self>) -> bool {
        match self.api.list_dashboards().await {
            Ok(dashboards) => {
                tracing::debug!(count = dashboards.len(), "dashboards loaded");
                let cards: Vec<DashboardCard> = dashboards.iter().map(DashboardCard::from).collect();
                self.view.render_dashboards(&cards);
                self.view.render_camera_targets(&camera_targets(&dashboards));
                *self.dashboards.borrow_mut() = dashboards;
                true
            }
            Err(err) => {
                tracing::error!(%err, "failed to load dashboards");
                self.show_banner(&Notice::error(LOAD_FAILED));
                false
            }
        }
    }

    /// Submit the "create dashboard" form.
    #[tracing::instrument(skip(self, form), fields(dashboard_id = %form.dashboard_id))]
    pub async fn create_dashboard(self: &Rc<Self>, form: NewDashboard) -> bool {
        match self.try_create_dashboard(form).await {
            Ok(()) => {
                self.show_banner(&Notice::success(DASHBOARD_CREATED));
                self.view.reset_dashboard_form();
                self.load().await;
                true
            }
            Err(err) => {
                tracing::warn!(%err, "failed to create dashboard");
                self.show_banner(&Notice::error(err.user_message()));
                false
            }
        }
    }

    async fn try_create_dashboard(&self, form: NewDashboard) -> Result<(), CamwatchError> {
        let form = form.validated()?;
        self.api.create_dashboard(&form).await?;
        Ok(())
    }

    /// Submit the "add camera" form for the dashboard picked in the select.
    #[tracing::instrument(skip(self, form), fields(camera_id = %form.camera_id))]
    pub async fn add_camera(self: &Rc<Self>, dashboard_id: &str, form: NewCamera) -> bool {
        match self.try_add_camera(dashboard_id, form).await {
            Ok(()) => {
                self.show_banner(&Notice::success(CAMERA_ADDED));
                self.view.reset_camera_form();
                self.load().await;
                true
            }
            Err(err) => {
                tracing::warn!(%err, "failed to add camera");
                self.show_banner(&Notice::error(err.user_message()));
                false
            }
        }
    }

    async fn try_add_camera(&self, dashboard_id: &str, form: NewCamera) -> Result<(), CamwatchError> {
        let dashboard_id = DashboardId::new(dashboard_id)?;
        let form = form.validated()?;
        // Only known dashboards can be checked; the server enforces the rest.
        let known = self
            .dashboards
            .borrow()
            .iter()
            .find(|d| d.dashboard_id == dashboard_id)
            .cloned();
        if let Some(dashboard) = known {
            dashboard.ensure_can_add_camera()?;
        }
        self.api.add_camera(&dashboard_id, &form).await?;
        Ok(())
    }

    /// Whether a banner is waiting to be cleared.
    pub fn banner_pending(&self) -> bool {
        self.banner_timer.borrow().is_running()
    }

    /// Clear the banner now and cancel its pending dismissal.
    pub fn dismiss_banner(&self) {
        self.banner_timer.borrow_mut().stop();
        self.view.clear_banner();
    }

    fn show_banner(self: &Rc<Self>, banner: &Notice) {
        let generation = self.banners_shown.get() + 1;
        self.banners_shown.set(generation);
        self.view.show_banner(banner);

        // The timer is dropped from a task, never from inside its own tick.
        let weak = Rc::downgrade(self);
        let tick = Box::new(move || {
            if let Some(this) = weak.upgrade() {
                let task = Rc::clone(&this);
                this.runtime.spawn(Box::pin(async move {
                    if task.banners_shown.get() == generation {
                        task.dismiss_banner();
                    }
                }));
            }
        });
        self.banner_timer
            .borrow_mut()
            .start(&self.runtime, BANNER_LIFETIME, tick);
    }
}
