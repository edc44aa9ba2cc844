// ── Navigation/selection session ──
//
// Owns the active view identity and routes selected-entity context to
// detail views through the bus. Transitions are always enabled; there
// is no terminal state.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::backend::SimulatedBackend;
use crate::bus::{Selection, SettingsPane, ViewBus};
use crate::error::CoreError;
use crate::model::{Alert, Camera, CameraId};
use crate::view::ViewId;

/// The per-user navigation session.
///
/// Cheaply cloneable; all clones share the active-view channel and the
/// bus. The presentation layer observes the active view through
/// [`watch_active_view`](Self::watch_active_view) and constructs views
/// from it; constructed views subscribe to their bus topic for context.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    backend: SimulatedBackend,
    active_view: watch::Sender<ViewId>,
    bus: ViewBus,
}

impl Session {
    /// A fresh session, landing on the dashboard.
    pub fn new(backend: SimulatedBackend) -> Self {
        let (active_view, _) = watch::channel(ViewId::Dashboard);
        Self {
            inner: Arc::new(SessionInner {
                backend,
                active_view,
                bus: ViewBus::new(),
            }),
        }
    }

    pub fn backend(&self) -> &SimulatedBackend {
        &self.inner.backend
    }

    pub fn bus(&self) -> &ViewBus {
        &self.inner.bus
    }

    /// The currently active view.
    pub fn active_view(&self) -> ViewId {
        self.inner.active_view.borrow().clone()
    }

    /// Observe active-view transitions.
    pub fn watch_active_view(&self) -> watch::Receiver<ViewId> {
        self.inner.active_view.subscribe()
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// Switch to `view` unconditionally. Selections staged for other
    /// views are dropped so they can never reach a view the user has
    /// already left behind.
    pub fn navigate_to(&self, view: ViewId) {
        debug!(%view, "navigating");
        self.inner.bus.clear_except(&view);
        self.inner.active_view.send_replace(view);
    }

    /// Open the issue-details view for a camera with problems.
    pub fn open_issue_details(&self, camera: Arc<Camera>) {
        info!(camera = %camera.id, name = %camera.name, "opening issue details");
        self.navigate_to(ViewId::CameraIssueDetails);
        self.inner
            .bus
            .stage(ViewId::CameraIssueDetails, Selection::Issue(camera));
    }

    /// Open the alert-details view for an alert.
    pub fn open_alert_details(&self, alert: Arc<Alert>) {
        info!(alert = %alert.id, "opening alert details");
        self.navigate_to(ViewId::AlertDetails);
        self.inner
            .bus
            .stage(ViewId::AlertDetails, Selection::Alert(alert));
    }

    /// Open the settings view for a camera, landing on the overview pane.
    pub fn open_camera_settings(&self, camera: Arc<Camera>) {
        info!(camera = %camera.id, name = %camera.name, "opening camera settings");
        self.navigate_to(ViewId::CameraSettings);
        self.inner.bus.stage(
            ViewId::CameraSettings,
            Selection::CameraSettings {
                camera,
                pane: SettingsPane::Overview,
            },
        );
    }

    /// Jump from an alert to the live feed of the camera behind it.
    ///
    /// Resolves the camera through the backend (so the latency contract
    /// holds) by canonical id; any accepted id representation finds the
    /// same record. If no camera matches, the error is returned for the
    /// presentation layer to surface and neither the active view nor any
    /// staged selection changes.
    pub async fn open_camera_live(&self, id: CameraId) -> Result<(), CoreError> {
        let cameras = self.inner.backend.list_cameras().await?;

        let Some(camera) = cameras.iter().find(|c| c.id == id).cloned() else {
            warn!(camera = %id, "live-view target not found");
            return Err(CoreError::CameraNotFound {
                identifier: id.to_string(),
            });
        };

        info!(camera = %camera.id, name = %camera.name, "opening live camera view");
        self.navigate_to(ViewId::CameraSettings);
        self.inner.bus.stage(
            ViewId::CameraSettings,
            Selection::CameraSettings {
                camera,
                pane: SettingsPane::Live,
            },
        );
        Ok(())
    }

    /// [`open_camera_live`](Self::open_camera_live) from a raw id
    /// representation as carried by presentation-layer events. Both
    /// `"cam-006"` and `"6"` forms resolve to the same camera.
    pub async fn open_camera_live_raw(&self, raw: &str) -> Result<(), CoreError> {
        self.open_camera_live(raw.parse::<CameraId>()?).await
    }
}
