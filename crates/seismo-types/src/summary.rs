//! Batch-level aggregate types.
//!
//! [`SummaryStatistics`] feeds the situational summary panel;
//! [`MoodState`] is the single recency- and magnitude-weighted severity
//! classification for a whole batch.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Summary Statistics
// ---------------------------------------------------------------------------

/// Aggregate statistics over one enriched-event batch.
///
/// An empty batch yields a well-defined zero-valued structure with the
/// literal `"None"`/`"Global"` fallback labels, never an error or NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Number of events in the batch.
    pub count: u32,
    /// Largest magnitude in the batch, 0 when empty.
    pub strongest_magnitude: f64,
    /// Place label of the largest-magnitude event, `"None"` when empty.
    pub strongest_place: String,
    /// Most frequently occurring region label, `"Global"` when no region
    /// token dominates.
    pub most_active_region: String,
    /// Mean hypocenter depth in kilometers, rounded to one decimal.
    pub mean_depth_km: f64,
    /// Total felt reports across the batch.
    pub total_felt: u64,
    /// Number of tsunami-flagged events.
    pub tsunami_count: u32,
    /// Summed feed significance scores.
    pub total_significance: u64,
}

impl SummaryStatistics {
    /// The zero-valued summary returned for an empty batch.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            count: 0,
            strongest_magnitude: 0.0,
            strongest_place: String::from("None"),
            most_active_region: String::from("Global"),
            mean_depth_km: 0.0,
            total_felt: 0,
            tsunami_count: 0,
            total_significance: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Mood
// ---------------------------------------------------------------------------

/// Batch-level severity band, ordered calmest to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodLevel {
    /// Nothing of note anywhere.
    Serene,
    /// Routine background seismicity.
    Calm,
    /// Noticeable regional activity.
    Uneasy,
    /// Strong recent events or a busy planet.
    Restless,
    /// A major recent event or sustained high energy.
    Alarmed,
    /// A great earthquake within the last two days.
    Cataclysmic,
}

impl MoodLevel {
    /// Display color associated with this band.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Serene => "#4ade80",
            Self::Calm => "#a3e635",
            Self::Uneasy => "#facc15",
            Self::Restless => "#fb923c",
            Self::Alarmed => "#f87171",
            Self::Cataclysmic => "#dc2626",
        }
    }
}

/// The recency- and magnitude-weighted mood classification for a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodState {
    /// Severity band.
    pub level: MoodLevel,
    /// Normalized intensity in `[0, 1]`.
    pub intensity: f64,
    /// Human-readable description, stable within a one-second bucket.
    pub description: String,
    /// Display color for the band.
    pub color: String,
    /// Largest magnitude among events less than 48 hours old, 0 when
    /// none qualify.
    pub recent_biggest: f64,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_summary_uses_fallback_labels() {
        let summary = SummaryStatistics::empty();
        assert_eq!(summary.count, 0);
        assert_eq!(summary.strongest_place, "None");
        assert_eq!(summary.most_active_region, "Global");
        assert!(summary.strongest_magnitude.abs() < f64::EPSILON);
        assert!(summary.mean_depth_km.is_finite());
    }

    #[test]
    fn mood_levels_order_calmest_to_most_severe() {
        assert!(MoodLevel::Serene < MoodLevel::Calm);
        assert!(MoodLevel::Restless < MoodLevel::Alarmed);
        assert!(MoodLevel::Alarmed < MoodLevel::Cataclysmic);
    }
}
