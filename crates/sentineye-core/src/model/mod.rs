// ── Domain model ──
//
// Canonical entity types for the dashboard core. Identifiers are
// normalized at ingestion (see `entity_id`); aggregates are derived,
// never stored.

mod alert;
mod camera;
mod dashboard;
mod entity_id;
mod system;

pub use alert::{Alert, AlertSeverity, AlertStatus};
pub use camera::{Camera, CameraStatus};
pub use dashboard::{AlertFilter, CameraSummary, DashboardData, PREVIEW_LIMIT};
pub use entity_id::{AlertId, CameraId, ParseIdError};
pub use system::SystemStatus;
