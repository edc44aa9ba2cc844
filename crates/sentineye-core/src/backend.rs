// ── Simulated backend service ──
//
// The async facade every view talks to. Each operation resolves only
// after an artificial latency so consumers are forced to handle a
// genuinely asynchronous contract: loading states, out-of-order
// completion, results that outlive the view that requested them.
//
// The latencies are the wire contract a real backend integration must
// preserve; the store behind them is process-local.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::debug;

use crate::error::CoreError;
use crate::model::{
    Alert, AlertFilter, AlertId, Camera, CameraSummary, DashboardData, PREVIEW_LIMIT,
};
use crate::store::DataStore;
use crate::stream::Snapshot;

/// Per-operation artificial latency. Defaults document the contract;
/// tests typically use [`instant`](Self::instant).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatencyProfile {
    pub locations: Duration,
    pub dashboard: Duration,
    pub cameras: Duration,
    pub alerts: Duration,
    pub acknowledge: Duration,
    pub acknowledge_all: Duration,
    pub resolve: Duration,
    pub delete: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            locations: Duration::from_millis(200),
            dashboard: Duration::from_millis(800),
            cameras: Duration::from_millis(600),
            alerts: Duration::from_millis(500),
            acknowledge: Duration::from_millis(200),
            acknowledge_all: Duration::from_millis(400),
            resolve: Duration::from_millis(200),
            delete: Duration::from_millis(200),
        }
    }
}

impl LatencyProfile {
    /// Zero delay everywhere. For tests that don't care about timing.
    pub fn instant() -> Self {
        Self {
            locations: Duration::ZERO,
            dashboard: Duration::ZERO,
            cameras: Duration::ZERO,
            alerts: Duration::ZERO,
            acknowledge: Duration::ZERO,
            acknowledge_all: Duration::ZERO,
            resolve: Duration::ZERO,
            delete: Duration::ZERO,
        }
    }
}

/// The simulated backend.
///
/// Cheaply cloneable via `Arc`; all clones share one store and one
/// latency profile.
#[derive(Clone)]
pub struct SimulatedBackend {
    inner: Arc<BackendInner>,
}

struct BackendInner {
    store: Arc<DataStore>,
    latency: LatencyProfile,
    /// One-shot fault: the next operation fails with it instead of
    /// touching the store.
    fault: Mutex<Option<String>>,
}

impl SimulatedBackend {
    pub fn new(store: Arc<DataStore>) -> Self {
        Self::with_latency(store, LatencyProfile::default())
    }

    pub fn with_latency(store: Arc<DataStore>, latency: LatencyProfile) -> Self {
        Self {
            inner: Arc::new(BackendInner {
                store,
                latency,
                fault: Mutex::new(None),
            }),
        }
    }

    /// Access the underlying store (read-only surface).
    pub fn store(&self) -> &Arc<DataStore> {
        &self.inner.store
    }

    /// Make the next operation fail with `message` after its latency
    /// elapses, like a transport error would.
    pub async fn inject_fault(&self, message: impl Into<String>) {
        *self.inner.fault.lock().await = Some(message.into());
    }

    /// Sleep out the artificial latency, then surface any injected fault.
    async fn simulate(&self, delay: Duration) -> Result<(), CoreError> {
        sleep(delay).await;
        if let Some(message) = self.inner.fault.lock().await.take() {
            return Err(CoreError::Injected { message });
        }
        Ok(())
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Known site locations.
    pub async fn list_locations(&self) -> Result<Vec<String>, CoreError> {
        self.simulate(self.inner.latency.locations).await?;
        Ok(self.inner.store.locations().to_vec())
    }

    /// The dashboard aggregate, freshly derived: summary counts, a
    /// jittered health snapshot, and capped previews of camera issues
    /// and unread alerts.
    pub async fn get_dashboard(&self) -> Result<DashboardData, CoreError> {
        self.simulate(self.inner.latency.dashboard).await?;

        let store = &self.inner.store;
        let cameras = store.cameras_snapshot();

        let camera_summary = CameraSummary::tally(&cameras);

        let camera_issues: Vec<Arc<Camera>> = cameras
            .iter()
            .filter(|c| c.status.needs_attention())
            .take(PREVIEW_LIMIT)
            .cloned()
            .collect();

        let alerts: Vec<Arc<Alert>> = store
            .alerts_snapshot()
            .iter()
            .filter(|a| a.is_unread())
            .take(PREVIEW_LIMIT)
            .cloned()
            .collect();

        let system_status = store.baseline_status().jittered(&mut rand::thread_rng());

        debug!(
            total = camera_summary.total,
            issues = camera_issues.len(),
            unread = alerts.len(),
            "dashboard derived"
        );

        Ok(DashboardData {
            camera_summary,
            system_status,
            camera_issues,
            alerts,
        })
    }

    /// All cameras, ordered by id. The snapshot is immutable; treat it
    /// as a point-in-time view.
    pub async fn list_cameras(&self) -> Result<Snapshot<Camera>, CoreError> {
        self.simulate(self.inner.latency.cameras).await?;
        Ok(self.inner.store.cameras_snapshot())
    }

    /// Alerts matching `filter`, ordered by id.
    pub async fn list_alerts(&self, filter: &AlertFilter) -> Result<Vec<Arc<Alert>>, CoreError> {
        self.simulate(self.inner.latency.alerts).await?;
        Ok(self
            .inner
            .store
            .alerts_snapshot()
            .iter()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect())
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Unread→Read. `Ok(true)` iff a transition happened.
    pub async fn acknowledge_alert(&self, id: AlertId) -> Result<bool, CoreError> {
        self.simulate(self.inner.latency.acknowledge).await?;
        Ok(self.inner.store.acknowledge_alert(id))
    }

    /// Acknowledge every unread alert. `Ok(true)` iff at least one
    /// transitioned.
    pub async fn acknowledge_all_alerts(&self) -> Result<bool, CoreError> {
        self.simulate(self.inner.latency.acknowledge_all).await?;
        Ok(self.inner.store.acknowledge_all_alerts() > 0)
    }

    /// Any live state → Resolved. `Ok(true)` iff a transition happened.
    pub async fn resolve_alert(&self, id: AlertId) -> Result<bool, CoreError> {
        self.simulate(self.inner.latency.resolve).await?;
        Ok(self.inner.store.resolve_alert(id))
    }

    /// Remove the alert. `Ok(true)` iff it existed.
    pub async fn delete_alert(&self, id: AlertId) -> Result<bool, CoreError> {
        self.simulate(self.inner.latency.delete).await?;
        Ok(self.inner.store.delete_alert(id))
    }
}
