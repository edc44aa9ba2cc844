// ── Central reactive data store ──
//
// Single source of truth for cameras, alerts, and the baseline system
// status. Seeded once at startup; mutation only happens through the
// simulated backend service. Mutations are broadcast to subscribers
// via `watch` channels.

mod collection;
mod seed;

use std::sync::Arc;

use tracing::debug;

use collection::EntityCollection;

use crate::model::{Alert, AlertId, AlertStatus, Camera, CameraId, SystemStatus};
use crate::stream::{EntityStream, Snapshot};

/// Central store for all dashboard entities.
///
/// Reads are wait-free snapshots; writes use fine-grained per-shard
/// locks within `DashMap`, so concurrent readers always observe a
/// consistent state.
pub struct DataStore {
    locations: Vec<String>,
    cameras: EntityCollection<CameraId, Camera>,
    alerts: EntityCollection<AlertId, Alert>,
    baseline_status: SystemStatus,
}

impl DataStore {
    /// An empty store with the default baseline status. Mainly useful
    /// for tests; production consumers want [`with_seed_data`](Self::with_seed_data).
    pub fn new() -> Self {
        Self {
            locations: seed::LOCATIONS.iter().map(|&l| l.to_owned()).collect(),
            cameras: EntityCollection::new(),
            alerts: EntityCollection::new(),
            baseline_status: seed::baseline_status(),
        }
    }

    /// A store populated with the fixed startup dataset.
    pub fn with_seed_data() -> Self {
        let store = Self::new();
        seed::populate(&store);
        debug!(
            cameras = store.camera_count(),
            alerts = store.alert_count(),
            "store seeded"
        );
        store
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    /// Known site locations, in fixed display order.
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn cameras_snapshot(&self) -> Snapshot<Camera> {
        self.cameras.snapshot()
    }

    pub fn alerts_snapshot(&self) -> Snapshot<Alert> {
        self.alerts.snapshot()
    }

    /// The stored baseline. Display reads derive jittered copies from
    /// this; nothing ever writes it back.
    pub fn baseline_status(&self) -> &SystemStatus {
        &self.baseline_status
    }

    // ── Single-entity lookups ────────────────────────────────────────

    pub fn camera_by_id(&self, id: CameraId) -> Option<Arc<Camera>> {
        self.cameras.get(&id)
    }

    pub fn alert_by_id(&self, id: AlertId) -> Option<Arc<Alert>> {
        self.alerts.get(&id)
    }

    // ── Count accessors ──────────────────────────────────────────────

    pub fn camera_count(&self) -> usize {
        self.cameras.len()
    }

    pub fn alert_count(&self) -> usize {
        self.alerts.len()
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe_cameras(&self) -> EntityStream<Camera> {
        EntityStream::new(self.cameras.subscribe())
    }

    pub fn subscribe_alerts(&self) -> EntityStream<Alert> {
        EntityStream::new(self.alerts.subscribe())
    }

    // ── Mutations (crate-internal; the backend service is the door) ──

    pub(crate) fn insert_camera(&self, camera: Camera) -> bool {
        self.cameras.upsert(camera.id, camera)
    }

    pub(crate) fn insert_alert(&self, alert: Alert) -> bool {
        self.alerts.upsert(alert.id, alert)
    }

    /// Unread→Read. Returns whether a transition happened.
    pub(crate) fn acknowledge_alert(&self, id: AlertId) -> bool {
        let changed = self.alerts.update(&id, |alert| {
            alert.is_unread().then(|| Alert {
                status: AlertStatus::Read,
                ..alert.clone()
            })
        });
        if changed {
            debug!(alert = %id, "alert acknowledged");
        }
        changed
    }

    /// Acknowledge every unread alert. Returns how many transitioned.
    pub(crate) fn acknowledge_all_alerts(&self) -> usize {
        let changed = self.alerts.update_all(|alert| {
            alert.is_unread().then(|| Alert {
                status: AlertStatus::Read,
                ..alert.clone()
            })
        });
        debug!(count = changed, "acknowledged all unread alerts");
        changed
    }

    /// Any non-resolved state → Resolved. Returns whether a transition
    /// happened.
    pub(crate) fn resolve_alert(&self, id: AlertId) -> bool {
        let changed = self.alerts.update(&id, |alert| {
            (!alert.is_resolved()).then(|| Alert {
                status: AlertStatus::Resolved,
                ..alert.clone()
            })
        });
        if changed {
            debug!(alert = %id, "alert resolved");
        }
        changed
    }

    /// Remove the alert entirely. Returns whether it existed.
    pub(crate) fn delete_alert(&self, id: AlertId) -> bool {
        let removed = self.alerts.remove(&id).is_some();
        if removed {
            debug!(alert = %id, "alert deleted");
        }
        removed
    }

    /// Alert collection version, bumped on every alert mutation.
    pub fn alerts_version(&self) -> u64 {
        self.alerts.version()
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}
