// ── Camera domain types ──

use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use super::entity_id::CameraId;

/// Camera operational status as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[non_exhaustive]
pub enum CameraStatus {
    Online,
    Offline,
    Warning,
}

impl CameraStatus {
    pub fn is_online(self) -> bool {
        matches!(self, Self::Online)
    }

    /// Anything that is not plainly online shows up on the issues widget.
    pub fn needs_attention(self) -> bool {
        !self.is_online()
    }
}

/// A registered camera. Static for the process lifetime in this scope;
/// only the backend service may mutate the collection it lives in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    pub id: CameraId,
    pub name: String,
    pub location: String,
    pub status: CameraStatus,
    pub ip: IpAddr,
    pub recording: bool,
    /// Relative-time label ("2m ago") carried verbatim for display.
    pub last_activity: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_online_is_free_of_attention() {
        assert!(CameraStatus::Online.is_online());
        assert!(!CameraStatus::Online.needs_attention());
        assert!(CameraStatus::Offline.needs_attention());
        assert!(CameraStatus::Warning.needs_attention());
    }
}
