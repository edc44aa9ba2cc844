// sentineye-core: state and data-simulation layer behind the VMS
// dashboard client. The presentation layer renders from this crate's
// queries, watch channels, and bus topics; it contributes no logic.

pub mod backend;
pub mod bus;
pub mod error;
pub mod locale;
pub mod model;
pub mod session;
pub mod store;
pub mod stream;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use backend::{LatencyProfile, SimulatedBackend};
pub use bus::{Selection, SettingsPane, Staged, TopicSubscription, ViewBus};
pub use error::CoreError;
pub use locale::{DEFAULT_LANGUAGE, FsLocaleSource, LocaleSource, Translator};
pub use session::Session;
pub use store::DataStore;
pub use stream::{EntityStream, Snapshot};
pub use view::ViewId;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    // Core entities
    Alert, AlertId, AlertSeverity, AlertStatus, Camera, CameraId, CameraStatus,
    // Derived aggregates
    AlertFilter, CameraSummary, DashboardData, SystemStatus,
};
