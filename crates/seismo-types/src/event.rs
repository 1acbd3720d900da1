//! The canonical enriched seismic event record.
//!
//! One [`EnrichedEvent`] is produced per validator-accepted feed feature
//! per fetch cycle. Events are immutable once built and are discarded and
//! replaced wholesale on the next fetch -- there is no incremental merge.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Alert Level
// ---------------------------------------------------------------------------

/// Feed-assigned impact alert level for an event.
///
/// Mirrors the four-color alert scheme used by the upstream feed. Absent
/// from most events; carried through untouched when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    /// No expected impact.
    Green,
    /// Localized impact possible.
    Yellow,
    /// Significant regional impact likely.
    Orange,
    /// Severe, widespread impact expected.
    Red,
}

impl AlertLevel {
    /// Parse a feed alert string, returning `None` for unknown values.
    ///
    /// The feed occasionally carries empty or unexpected strings here;
    /// those are treated the same as a missing field.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "green" => Some(Self::Green),
            "yellow" => Some(Self::Yellow),
            "orange" => Some(Self::Orange),
            "red" => Some(Self::Red),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Enriched Event
// ---------------------------------------------------------------------------

/// The canonical normalized seismic event used by all derived computations.
///
/// Invariant: every numeric field is finite. The normalizer coerces any
/// non-finite or missing source value to a safe default (typically 0)
/// rather than letting NaN or infinity propagate downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedEvent {
    /// Stable unique identifier from the feed.
    pub id: String,
    /// Latitude in degrees, in `[-90, 90]`.
    pub latitude: f64,
    /// Longitude in degrees, in `[-180, 180]`.
    pub longitude: f64,
    /// Event magnitude. May be negative for micro-events; unbounded
    /// above in theory.
    pub magnitude: f64,
    /// Hypocenter depth in kilometers, always non-negative (the sign of
    /// the source depth is discarded, not meaningful).
    pub depth_km: f64,
    /// Human-readable place description. May be empty.
    pub place: String,
    /// Origin time as epoch milliseconds. May coincidentally lie in the
    /// future due to feed clock skew; downstream logic must tolerate it.
    pub occurred_at_ms: i64,
    /// Depth-band display color as a hex string.
    pub color: String,
    /// Magnitude-scaled display size hint, in `[0.1, 2.0]`.
    pub size: f64,
    /// Number of felt reports, when the feed carries one.
    pub felt_count: Option<u32>,
    /// Maximum reported community intensity (decimal, roughly 1-12).
    pub community_intensity: Option<f64>,
    /// Feed-assigned alert level, when present.
    pub alert_level: Option<AlertLevel>,
    /// Whether the event carried a tsunami flag.
    pub tsunami: bool,
    /// Feed significance score. Defaults to 0 when absent.
    pub significance: u32,
}

impl EnrichedEvent {
    /// Age of this event in hours relative to `now_ms`, floored at zero.
    ///
    /// Clock-skewed future timestamps therefore read as "just happened"
    /// rather than producing negative ages.
    #[must_use]
    pub fn age_hours(&self, now_ms: i64) -> f64 {
        let delta_ms = now_ms.saturating_sub(self.occurred_at_ms);
        #[allow(clippy::cast_precision_loss)]
        let hours = delta_ms as f64 / 3_600_000.0;
        hours.max(0.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
