// ── Alert domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity_id::AlertId;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, strum::Display,
)]
#[non_exhaustive]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// Alert lifecycle state. Unread→Read via acknowledge, any→Resolved
/// via resolve; deletion removes the record entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[non_exhaustive]
pub enum AlertStatus {
    Unread,
    Read,
    Resolved,
}

/// A persistent alert raised against a camera or location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: AlertId,
    /// Alert category label ("Intrusion", "Motion", ...).
    pub kind: String,
    pub severity: AlertSeverity,
    pub location: String,
    pub camera_name: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub status: AlertStatus,
}

impl Alert {
    pub fn is_unread(&self) -> bool {
        matches!(self.status, AlertStatus::Unread)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.status, AlertStatus::Resolved)
    }
}
