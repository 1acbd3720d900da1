//! Log-energy-normalized heatmap weights.
//!
//! One [`DensityPoint`] per input event, no filtering and no cap. The
//! weight is a bounded proxy for released energy: the raw energy
//! `10^(1.5 * mag)` spans many orders of magnitude, so each event's
//! `log10(energy + 1)` is normalized across the batch into `[0.1, 1.0]`.
//!
//! A batch where every event shares one magnitude has zero log-weight
//! span; the normalization denominator is replaced by 1 and every weight
//! collapses to 0.1. That degenerate behavior is load-bearing for the
//! heatmap renderer (a uniform batch reads as uniformly faint, not
//! uniformly saturated) and is preserved exactly.

use seismo_types::{DensityPoint, EnrichedEvent};

/// Per-event log weight: `log10(10^(1.5 * mag) + 1)`.
///
/// For magnitudes large enough that the raw power overflows f64 the
/// `+ 1` is negligible and the weight degenerates to `1.5 * mag`, which
/// keeps the result finite for any finite magnitude.
fn log_weight(magnitude: f64) -> f64 {
    let raw_energy = 10.0_f64.powf(1.5 * magnitude);
    if raw_energy.is_finite() {
        (raw_energy + 1.0).log10()
    } else {
        1.5 * magnitude
    }
}

/// Compute one density point per input event, in input order.
///
/// Every weight lies in `[0.1, 1.0]` and is finite for any batch of
/// finite-magnitude events, including all-identical, all-zero, and
/// extreme-range magnitudes.
#[must_use]
pub fn density_map(events: &[EnrichedEvent]) -> Vec<DensityPoint> {
    let log_weights: Vec<f64> = events.iter().map(|e| log_weight(e.magnitude)).collect();

    let min = log_weights.iter().copied().fold(f64::INFINITY, f64::min);
    let max = log_weights
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    // Uniform batch: avoid dividing by zero, collapse to weight 0.1.
    let span = if span > 0.0 { span } else { 1.0 };

    events
        .iter()
        .zip(log_weights)
        .map(|(event, lw)| DensityPoint {
            latitude: event.latitude,
            longitude: event.longitude,
            weight: 0.9f64.mul_add((lw - min) / span, 0.1).clamp(0.1, 1.0),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
