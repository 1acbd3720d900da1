//! Ripple-ring annotation selection.
//!
//! Selects the top-N highest-magnitude qualifying events and parameterizes
//! a concentric ripple ring for each: radius capped by magnitude, slower
//! propagation and faster repetition for fresher, stronger events, and a
//! three-band color policy that fades with ring progress.

use seismo_types::{EnrichedEvent, RippleAnnotation, RippleBand};

use crate::config::RippleConfig;

/// Select at most `config.max_count` ripple annotations for the highest
/// magnitude events at or above `config.min_magnitude`.
///
/// Ties between equal magnitudes keep their input-list order (stable
/// sort). `now_ms` anchors the event-age term of the repeat period;
/// future-dated events read as age zero.
#[must_use]
pub fn select_ripples(
    events: &[EnrichedEvent],
    config: &RippleConfig,
    now_ms: i64,
) -> Vec<RippleAnnotation> {
    let mut qualifying: Vec<&EnrichedEvent> = events
        .iter()
        .filter(|e| e.magnitude >= config.min_magnitude)
        .collect();
    qualifying.sort_by(|a, b| b.magnitude.total_cmp(&a.magnitude));

    qualifying
        .iter()
        .take(config.max_count)
        .map(|event| annotate(event, now_ms))
        .collect()
}

/// Build the ripple parameters for one selected event.
fn annotate(event: &EnrichedEvent, now_ms: i64) -> RippleAnnotation {
    let age_hours = event.age_hours(now_ms);

    RippleAnnotation {
        latitude: event.latitude,
        longitude: event.longitude,
        magnitude: event.magnitude,
        max_radius: (event.magnitude * 0.8).min(8.0),
        speed: event.magnitude.mul_add(-0.5, 6.0).max(1.0),
        // Fresher events repeat faster.
        repeat_ms: age_hours.mul_add(200.0, 400.0).clamp(600.0, 3000.0),
        band: RippleBand::for_magnitude(event.magnitude),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
