// ── View identifiers ──

use strum::{Display, EnumString};

/// Identifies a dashboard view.
///
/// Open enumeration: the named variants cover the views the core routes
/// entity context to; anything else round-trips through [`Named`](Self::Named)
/// so the presentation layer can add views without touching the core.
/// Kebab-case string forms ("camera-issue-details") parse and display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ViewId {
    #[default]
    Dashboard,
    Cameras,
    Alerts,
    CameraIssueDetails,
    AlertDetails,
    CameraSettings,
    #[strum(default)]
    Named(String),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn kebab_case_round_trip() {
        let view: ViewId = "camera-issue-details".parse().unwrap();
        assert_eq!(view, ViewId::CameraIssueDetails);
        assert_eq!(view.to_string(), "camera-issue-details");
    }

    #[test]
    fn unknown_names_stay_open() {
        let view: ViewId = "retention-settings".parse().unwrap();
        assert_eq!(view, ViewId::Named("retention-settings".into()));
        assert_eq!(view.to_string(), "retention-settings");
    }
}
