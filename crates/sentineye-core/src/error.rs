// ── Core error types ──
//
// User-facing errors from sentineye-core. Consumers surface these
// directly; none of them represents a crash-worthy condition.

use thiserror::Error;

use crate::model::ParseIdError;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Lookup errors ────────────────────────────────────────────────
    #[error("Camera not found: {identifier}")]
    CameraNotFound { identifier: String },

    #[error("Invalid {kind} id: {raw}")]
    InvalidId { kind: &'static str, raw: String },

    // ── Resource errors ──────────────────────────────────────────────
    #[error("Language '{code}' unavailable: {reason}")]
    LocaleUnavailable { code: String, reason: String },

    // ── Simulation errors ────────────────────────────────────────────
    #[error("Injected backend fault: {message}")]
    Injected { message: String },
}

impl From<ParseIdError> for CoreError {
    fn from(err: ParseIdError) -> Self {
        Self::InvalidId {
            kind: err.kind,
            raw: err.raw,
        }
    }
}
