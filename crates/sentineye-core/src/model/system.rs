// ── System health domain types ──

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Bounds for the per-read fluctuation of a load metric.
struct JitterBand {
    spread: f64,
    min: f64,
    max: f64,
}

const CPU_BAND: JitterBand = JitterBand {
    spread: 5.0,
    min: 10.0,
    max: 95.0,
};

const MEMORY_BAND: JitterBand = JitterBand {
    spread: 2.0,
    min: 20.0,
    max: 90.0,
};

/// Server health snapshot.
///
/// The store keeps one immutable baseline; every dashboard read derives
/// a fresh copy with [`jittered`](Self::jittered), so reads never drift
/// the stored values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemStatus {
    pub storage_usage_pct: u8,
    pub retention_days: u32,
    pub cpu_load_pct: u8,
    pub memory_usage_pct: u8,
    pub server_status: String,
    pub uptime: String,
}

impl SystemStatus {
    /// Derive a display snapshot with bounded random fluctuation applied
    /// to the load metrics. Clamp bounds are exact; the result is rounded
    /// to the nearest integer.
    pub fn jittered<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        Self {
            cpu_load_pct: fluctuate(self.cpu_load_pct, &CPU_BAND, rng),
            memory_usage_pct: fluctuate(self.memory_usage_pct, &MEMORY_BAND, rng),
            ..self.clone()
        }
    }
}

fn fluctuate<R: Rng + ?Sized>(baseline: u8, band: &JitterBand, rng: &mut R) -> u8 {
    let drawn = f64::from(baseline) + rng.gen_range(-band.spread..=band.spread);
    let clamped = drawn.clamp(band.min, band.max).round();
    // Clamp bounds fit u8 by construction.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let display = clamped as u8;
    display
}
