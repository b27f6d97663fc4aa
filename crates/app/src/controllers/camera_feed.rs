//! Camera feed controller: selected camera, live feed, status and detections.
//!
//! At most one camera is selected. Selecting a camera refreshes the feed,
//! status and detections once, then polls status and detections on a fixed
//! interval until another selection is made. With no camera selected no
//! request is sent.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use camwatch_domain::detection::flatten;
use camwatch_domain::id::CameraId;

use crate::periodic::PeriodicTask;
use crate::ports::{CameraApi, CameraView, Clock, LocalTask, Scheduler};
use crate::sequence::RequestSequence;
use crate::view_model::{DetectionsState, FeedState, StatusState};

/// Drives the camera panel.
///
/// Shared through `Rc`: timer ticks and spawned requests hold a reference
/// back to the controller.
pub struct CameraFeedController<A, V, R: Scheduler> {
    api: A,
    view: V,
    runtime: R,
    poll_interval: Duration,
    selected: RefCell<Option<CameraId>>,
    poller: RefCell<PeriodicTask<R::Handle>>,
    status_seq: RequestSequence,
    detections_seq: RequestSequence,
}

impl<A, V, R> CameraFeedController<A, V, R>
where
    A: CameraApi + 'static,
    V: CameraView + 'static,
    R: Scheduler + Clock + 'static,
{
    /// Create a controller with nothing selected.
    pub fn new(api: A, view: V, runtime: R, poll_interval: Duration) -> Rc<Self> {
        Rc::new(Self {
            api,
            view,
            runtime,
            poll_interval,
            selected: RefCell::new(None),
            poller: RefCell::new(PeriodicTask::new()),
            status_seq: RequestSequence::new(),
            detections_seq: RequestSequence::new(),
        })
    }

    /// The currently selected camera.
    pub fn selected_camera(&self) -> Option<CameraId> {
        self.selected.borrow().clone()
    }

    /// Whether the status/detections poller is running.
    pub fn is_polling(&self) -> bool {
        self.poller.borrow().is_running()
    }

    /// Change the active camera.
    ///
    /// `None` resets the panel to its neutral state and stops polling.
    /// Responses to requests issued for the previous selection are dropped.
    pub fn select_camera(self: &Rc<Self>, camera_id: Option<CameraId>) {
        self.status_seq.advance();
        self.detections_seq.advance();
        *self.selected.borrow_mut() = camera_id.clone();

        match camera_id {
            None => {
                tracing::info!("camera selection cleared");
                self.poller.borrow_mut().stop();
                self.view.render_feed(&FeedState::Placeholder);
                self.view.render_status(&StatusState::Idle);
                self.view.render_detections(&DetectionsState::Unselected);
            }
            Some(camera_id) => {
                tracing::info!(%camera_id, "camera selected");
                self.refresh_feed();
                self.refresh_status();
                self.refresh_detections();
                self.start_polling();
            }
        }
    }

    /// Point the video element at a fresh stream URL for the selection.
    pub fn refresh_feed(&self) {
        let feed = match self.selected.borrow().as_ref() {
            Some(camera_id) => FeedState::Live {
                url: self
                    .api
                    .stream_url(camera_id, self.runtime.now().timestamp_millis()),
            },
            None => FeedState::Placeholder,
        };
        self.view.render_feed(&feed);
    }

    /// The media element failed to load the stream.
    pub fn feed_failed(&self) {
        tracing::warn!(camera_id = ?self.selected_camera(), "camera stream failed to load");
        self.view.render_feed(&FeedState::Placeholder);
    }

    /// Fetch and render the selected camera's status in the background.
    pub fn refresh_status(self: &Rc<Self>) {
        self.runtime.spawn(Rc::clone(self).status_task());
    }

    /// Fetch and render the selected camera's detections in the background.
    pub fn refresh_detections(self: &Rc<Self>) {
        self.runtime.spawn(Rc::clone(self).detections_task());
    }

    fn start_polling(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        let tick = Box::new(move || {
            if let Some(this) = weak.upgrade() {
                tracing::debug!(camera_id = ?this.selected_camera(), "camera poll tick");
                this.refresh_status();
                this.refresh_detections();
            }
        });
        self.poller
            .borrow_mut()
            .start(&self.runtime, self.poll_interval, tick);
    }

    // The target and ticket are taken when the task is built, so a request
    // always belongs to the selection that was current when it was issued.
    fn status_task(self: Rc<Self>) -> LocalTask {
        let target = self.selected_camera().map(|id| (id, self.status_seq.issue()));
        Box::pin(async move {
            let Some((camera_id, ticket)) = target else {
                return;
            };
            let result = self.api.fetch_status(&camera_id).await;
            if !self.status_seq.accept(ticket) {
                tracing::debug!(%camera_id, "dropping stale status response");
                return;
            }
            let state = match result {
                Ok(resp) => StatusState::from_response(resp),
                Err(err) => {
                    tracing::warn!(%err, %camera_id, "failed to fetch camera status");
                    StatusState::Error
                }
            };
            self.view.render_status(&state);
        })
    }

    fn detections_task(self: Rc<Self>) -> LocalTask {
        let target = self
            .selected_camera()
            .map(|id| (id, self.detections_seq.issue()));
        Box::pin(async move {
            let Some((camera_id, ticket)) = target else {
                return;
            };
            let result = self.api.fetch_detections(&camera_id).await;
            if !self.detections_seq.accept(ticket) {
                tracing::debug!(%camera_id, "dropping stale detections response");
                return;
            }
            let state = match result {
                Ok(records) => DetectionsState::from_rows(flatten(&records)),
                Err(err) => {
                    tracing::warn!(%err, %camera_id, "failed to fetch detections");
                    DetectionsState::Error
                }
            };
            self.view.render_detections(&state);
        })
    }
}
