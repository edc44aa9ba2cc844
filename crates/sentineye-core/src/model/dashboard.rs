// ── Derived dashboard aggregates ──
//
// Everything here is recomputed from store snapshots at query time.
// Nothing is cached, so the aggregates can never drift from the records.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::alert::{Alert, AlertSeverity, AlertStatus};
use super::camera::Camera;
use super::system::SystemStatus;

/// How many entries the dashboard widgets show at most.
pub const PREVIEW_LIMIT: usize = 5;

/// Fleet-wide camera counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraSummary {
    pub total: usize,
    pub online: usize,
    pub offline: usize,
    pub recording: usize,
}

impl CameraSummary {
    /// Tally a camera snapshot.
    pub fn tally(cameras: &[Arc<Camera>]) -> Self {
        Self {
            total: cameras.len(),
            online: cameras.iter().filter(|c| c.status.is_online()).count(),
            offline: cameras
                .iter()
                .filter(|c| matches!(c.status, super::camera::CameraStatus::Offline))
                .count(),
            recording: cameras.iter().filter(|c| c.recording).count(),
        }
    }
}

/// The aggregate a dashboard view renders from: summary counts, a
/// jittered health snapshot, and bounded previews of issues and
/// unread alerts.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub camera_summary: CameraSummary,
    pub system_status: SystemStatus,
    pub camera_issues: Vec<Arc<Camera>>,
    pub alerts: Vec<Arc<Alert>>,
}

/// Conjunctive filter for alert listings. The default matches everything,
/// which reproduces the unfiltered full-list behavior for callers that
/// pass no criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertFilter {
    pub severity: Option<AlertSeverity>,
    pub status: Option<AlertStatus>,
    pub location: Option<String>,
}

impl AlertFilter {
    pub fn severity(mut self, severity: AlertSeverity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn status(mut self, status: AlertStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn matches(&self, alert: &Alert) -> bool {
        self.severity.is_none_or(|s| alert.severity == s)
            && self.status.is_none_or(|s| alert.status == s)
            && self
                .location
                .as_ref()
                .is_none_or(|loc| alert.location == *loc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AlertId, CameraId, CameraStatus};
    use chrono::Utc;
    use std::net::IpAddr;

    fn camera(id: u32, status: CameraStatus, recording: bool) -> Arc<Camera> {
        Arc::new(Camera {
            id: CameraId::from(id),
            name: format!("Camera {id}"),
            location: "Lobby".into(),
            status,
            ip: IpAddr::from([192, 168, 1, 100]),
            recording,
            last_activity: "1m ago".into(),
        })
    }

    fn alert(id: u32, severity: AlertSeverity, status: AlertStatus, location: &str) -> Alert {
        Alert {
            id: AlertId::from(id),
            kind: "Motion".into(),
            severity,
            location: location.into(),
            camera_name: "Camera".into(),
            description: "Motion detected".into(),
            timestamp: Utc::now(),
            status,
        }
    }

    #[test]
    fn tally_counts_each_bucket() {
        let cameras = vec![
            camera(1, CameraStatus::Online, true),
            camera(2, CameraStatus::Offline, false),
            camera(3, CameraStatus::Warning, true),
            camera(4, CameraStatus::Online, false),
        ];
        let summary = CameraSummary::tally(&cameras);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.online, 2);
        assert_eq!(summary.offline, 1);
        assert_eq!(summary.recording, 2);
    }

    #[test]
    fn default_filter_matches_everything() {
        let filter = AlertFilter::default();
        let a = alert(1, AlertSeverity::Low, AlertStatus::Resolved, "Warehouse");
        assert!(filter.matches(&a));
    }

    #[test]
    fn criteria_combine_conjunctively() {
        let filter = AlertFilter::default()
            .severity(AlertSeverity::Critical)
            .location("Warehouse");

        let hit = alert(1, AlertSeverity::Critical, AlertStatus::Unread, "Warehouse");
        let wrong_severity = alert(2, AlertSeverity::Low, AlertStatus::Unread, "Warehouse");
        let wrong_location = alert(3, AlertSeverity::Critical, AlertStatus::Unread, "Lobby");

        assert!(filter.matches(&hit));
        assert!(!filter.matches(&wrong_severity));
        assert!(!filter.matches(&wrong_location));
    }

    #[test]
    fn status_criterion_applies() {
        let filter = AlertFilter::default().status(AlertStatus::Unread);
        assert!(filter.matches(&alert(1, AlertSeverity::Low, AlertStatus::Unread, "Lobby")));
        assert!(!filter.matches(&alert(2, AlertSeverity::Low, AlertStatus::Read, "Lobby")));
    }
}
