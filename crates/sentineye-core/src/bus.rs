// ── View event bus ──
//
// Delivers selection context from the session to the view that will
// render it. View construction is asynchronous relative to navigation,
// so delivery must tolerate the subscriber not existing yet: each view
// has a `watch`-backed topic holding the latest staged payload, and
// subscribing IS the ready signal: a late subscriber observes the
// current value immediately, with no delivery delay to guess at.
//
// Broadcast-style: any number of subscribers observe the same staged
// payload. A subscriber dropped before observing is a no-op.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use tokio::sync::watch;
use tracing::debug;

use crate::model::{Alert, Camera};
use crate::view::ViewId;

/// Which pane a camera-settings view should open on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsPane {
    #[default]
    Overview,
    Live,
}

/// Entity context staged for a detail view.
#[derive(Debug, Clone)]
pub enum Selection {
    /// A camera with a non-online status, for the issue-details view.
    Issue(Arc<Camera>),
    /// An alert, for the alert-details view.
    Alert(Arc<Alert>),
    /// A camera plus the pane to open, for the camera-settings view.
    CameraSettings {
        camera: Arc<Camera>,
        pane: SettingsPane,
    },
}

/// A staged payload as observed by subscribers. The sequence number is
/// monotonic across the bus, letting a long-lived subscriber discard
/// values it has already acted on.
#[derive(Debug)]
pub struct Staged {
    pub seq: u64,
    pub view: ViewId,
    pub selection: Selection,
}

type Topic = watch::Sender<Option<Arc<Staged>>>;

/// Per-view topics carrying the latest staged selection.
#[derive(Default)]
pub struct ViewBus {
    topics: DashMap<ViewId, Topic>,
    next_seq: AtomicU64,
}

impl ViewBus {
    pub fn new() -> Self {
        Self::default()
    }

    fn topic(&self, view: &ViewId) -> Topic {
        self.topics
            .entry(view.clone())
            .or_insert_with(|| watch::channel(None).0)
            .clone()
    }

    /// Publish `selection` on `view`'s topic, replacing anything staged
    /// there before. Returns the payload's sequence number.
    pub fn stage(&self, view: ViewId, selection: Selection) -> u64 {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        debug!(%view, seq, "staging selection");
        let topic = self.topic(&view);
        topic.send_replace(Some(Arc::new(Staged {
            seq,
            view,
            selection,
        })));
        seq
    }

    /// Subscribe to `view`'s topic. The subscription immediately exposes
    /// whatever is currently staged; that observation is the handshake
    /// that replaces any fixed delivery delay.
    pub fn subscribe(&self, view: &ViewId) -> TopicSubscription {
        TopicSubscription {
            rx: self.topic(view).subscribe(),
        }
    }

    /// Peek at the payload currently staged for `view`.
    pub fn staged(&self, view: &ViewId) -> Option<Arc<Staged>> {
        self.topics.get(view).and_then(|t| t.borrow().clone())
    }

    /// Drop staged payloads for every topic except `keep`. Called on
    /// navigation so a view the user has moved away from can never be
    /// handed a stale selection.
    pub fn clear_except(&self, keep: &ViewId) {
        for topic in self.topics.iter() {
            if topic.key() != keep && topic.value().borrow().is_some() {
                debug!(view = %topic.key(), "dropping stale staged selection");
                topic.value().send_replace(None);
            }
        }
    }
}

/// One subscriber's handle on a view topic.
pub struct TopicSubscription {
    rx: watch::Receiver<Option<Arc<Staged>>>,
}

impl TopicSubscription {
    /// The payload staged right now, if any.
    pub fn current(&self) -> Option<Arc<Staged>> {
        self.rx.borrow().clone()
    }

    /// Wait until a payload is staged (skipping clears), returning it.
    /// Returns `None` if the bus has been dropped.
    pub async fn observed(&mut self) -> Option<Arc<Staged>> {
        loop {
            if let Some(staged) = self.rx.borrow_and_update().clone() {
                return Some(staged);
            }
            self.rx.changed().await.ok()?;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{CameraId, CameraStatus};
    use std::net::IpAddr;

    fn camera() -> Arc<Camera> {
        Arc::new(Camera {
            id: CameraId::from(5),
            name: "Building A West".into(),
            location: "Building A".into(),
            status: CameraStatus::Warning,
            ip: IpAddr::from([192, 168, 1, 105]),
            recording: false,
            last_activity: "20m ago".into(),
        })
    }

    #[test]
    fn late_subscriber_observes_staged_payload() {
        let bus = ViewBus::new();
        bus.stage(ViewId::CameraIssueDetails, Selection::Issue(camera()));

        // The view is constructed after the navigation already staged.
        let sub = bus.subscribe(&ViewId::CameraIssueDetails);
        let staged = sub.current().unwrap();
        assert_eq!(staged.view, ViewId::CameraIssueDetails);
        assert!(matches!(staged.selection, Selection::Issue(_)));
    }

    #[test]
    fn topics_are_isolated() {
        let bus = ViewBus::new();
        bus.stage(ViewId::CameraIssueDetails, Selection::Issue(camera()));

        assert!(bus.staged(&ViewId::Dashboard).is_none());
        assert!(bus.subscribe(&ViewId::Dashboard).current().is_none());
    }

    #[test]
    fn sequence_numbers_are_monotonic() {
        let bus = ViewBus::new();
        let a = bus.stage(ViewId::CameraIssueDetails, Selection::Issue(camera()));
        let b = bus.stage(ViewId::CameraIssueDetails, Selection::Issue(camera()));
        assert!(b > a);
    }

    #[test]
    fn clear_except_spares_only_the_target() {
        let bus = ViewBus::new();
        bus.stage(ViewId::CameraIssueDetails, Selection::Issue(camera()));
        bus.stage(
            ViewId::CameraSettings,
            Selection::CameraSettings {
                camera: camera(),
                pane: SettingsPane::Live,
            },
        );

        bus.clear_except(&ViewId::CameraSettings);
        assert!(bus.staged(&ViewId::CameraIssueDetails).is_none());
        assert!(bus.staged(&ViewId::CameraSettings).is_some());
    }

    #[tokio::test]
    async fn observed_skips_clears_and_waits_for_payloads() {
        let bus = Arc::new(ViewBus::new());
        let mut sub = bus.subscribe(&ViewId::AlertDetails);

        let publisher = Arc::clone(&bus);
        let handle = tokio::spawn(async move {
            publisher.clear_except(&ViewId::Dashboard);
            publisher.stage(ViewId::AlertDetails, Selection::Issue(camera()));
        });

        let staged = sub.observed().await.unwrap();
        assert_eq!(staged.view, ViewId::AlertDetails);
        handle.await.unwrap();
    }

    #[test]
    fn dropped_subscriber_is_a_no_op() {
        let bus = ViewBus::new();
        let sub = bus.subscribe(&ViewId::CameraIssueDetails);
        drop(sub);
        // Staging with no live subscriber must not fail or panic.
        bus.stage(ViewId::CameraIssueDetails, Selection::Issue(camera()));
        assert!(bus.staged(&ViewId::CameraIssueDetails).is_some());
    }
}
