//! Spatial-temporal correlation of enriched events.
//!
//! Finds pairs of events that are close in both space and time and emits
//! a [`CorrelationEdge`] per pair -- the plausible triggered-aftershock
//! relationships a reader expects to see drawn along a fault.
//!
//! The search is the sort-then-prune pattern: events are time-sorted, and
//! the forward scan for each event stops as soon as the time gap exceeds
//! the configured maximum. That early exit is only correct over a
//! time-sorted list, so the sort is performed here unconditionally rather
//! than trusted as a caller precondition. For temporally dispersed data
//! this keeps the effective cost well below O(n^2) while still examining
//! every pair inside a tightly-clustered burst.
//!
//! A hard global edge cap bounds wall-clock time on large bursts: once
//! hit, both loops short-circuit and no further pairs are evaluated.

use seismo_types::{CorrelationEdge, EnrichedEvent};

use crate::config::CorrelationConfig;

/// Fixed Earth radius for great-circle distances, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points, in kilometers.
///
/// Haversine form on a sphere of radius [`EARTH_RADIUS_KM`]. Unlike the
/// law-of-cosines form, the haversine is numerically stable near zero
/// separation: identical coordinates yield exactly 0 rather than the
/// ~1e-4 km noise `acos` produces when the rounded cosine lands just
/// below 1. The square root's argument is clamped into `[0, 1]` so
/// rounding near antipodal points can never produce NaN.
#[must_use]
pub fn great_circle_km(lat_a: f64, lng_a: f64, lat_b: f64, lng_b: f64) -> f64 {
    let phi_a = lat_a.to_radians();
    let phi_b = lat_b.to_radians();
    let half_delta_phi = (lat_b - lat_a).to_radians() / 2.0;
    let half_delta_lambda = (lng_b - lng_a).to_radians() / 2.0;

    let sin_phi = half_delta_phi.sin();
    let sin_lambda = half_delta_lambda.sin();
    let a = phi_a.cos().mul_add(phi_b.cos() * sin_lambda * sin_lambda, sin_phi * sin_phi);
    2.0 * EARTH_RADIUS_KM * a.clamp(0.0, 1.0).sqrt().asin()
}

/// Find correlation edges between related events in a batch.
///
/// Fewer than two eligible events yields an empty result. Zero-distance
/// pairs are valid edges: distinct events can share reported coordinates.
/// Output length never exceeds `config.max_edges`.
#[must_use]
pub fn correlate(events: &[EnrichedEvent], config: &CorrelationConfig) -> Vec<CorrelationEdge> {
    let mut eligible: Vec<&EnrichedEvent> = events
        .iter()
        .filter(|e| e.magnitude >= config.min_magnitude)
        .collect();

    if eligible.len() < 2 || config.max_edges == 0 {
        return Vec::new();
    }

    // The gap early-exit below is only correct over a time-sorted list.
    eligible.sort_by_key(|e| e.occurred_at_ms);

    let mut edges: Vec<CorrelationEdge> = Vec::new();

    'outer: for (i, earlier) in eligible.iter().enumerate() {
        for later in eligible.iter().skip(i.saturating_add(1)) {
            let gap_ms = later.occurred_at_ms.saturating_sub(earlier.occurred_at_ms);
            #[allow(clippy::cast_precision_loss)]
            let gap_hours = gap_ms as f64 / 3_600_000.0;

            // Later events only get further away in time; stop scanning.
            if gap_hours > config.max_gap_hours {
                break;
            }

            let distance_km = great_circle_km(
                earlier.latitude,
                earlier.longitude,
                later.latitude,
                later.longitude,
            );
            if !distance_km.is_finite() || distance_km > config.max_distance_km {
                continue;
            }

            edges.push(build_edge(earlier, later, distance_km, gap_hours, config));

            // Hard performance ceiling: stop evaluating pairs entirely.
            if edges.len() >= config.max_edges {
                break 'outer;
            }
        }
    }

    edges
}

/// Derive the visual-weight fields and label for an accepted pair.
fn build_edge(
    earlier: &EnrichedEvent,
    later: &EnrichedEvent,
    distance_km: f64,
    gap_hours: f64,
    config: &CorrelationConfig,
) -> CorrelationEdge {
    // 0 at the distance threshold, 1 for coincident endpoints.
    let proximity = if config.max_distance_km > 0.0 {
        (1.0 - distance_km / config.max_distance_km).clamp(0.0, 1.0)
    } else {
        1.0
    };
    let stronger = earlier.magnitude.max(later.magnitude);

    CorrelationEdge {
        start_lat: earlier.latitude,
        start_lng: earlier.longitude,
        end_lat: later.latitude,
        end_lng: later.longitude,
        distance_km,
        gap_hours,
        proximity,
        alpha: 0.6f64.mul_add(proximity, 0.2),
        stroke: 0.1f64.mul_add(stronger, 0.3),
        altitude: 0.25f64.mul_add(proximity, 0.05),
        label: format!(
            "M{:.1} and M{:.1}, {:.0} km apart, {:.1} h between",
            earlier.magnitude, later.magnitude, distance_km, gap_hours
        ),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn event(id: &str, lat: f64, lng: f64, magnitude: f64, occurred_at_ms: i64) -> EnrichedEvent {
        EnrichedEvent {
            id: id.to_owned(),
            latitude: lat,
            longitude: lng,
            magnitude,
            depth_km: 10.0,
            place: String::new(),
            occurred_at_ms,
            color: String::from("#ff4d4d"),
            size: 1.0,
            felt_count: None,
            community_intensity: None,
            alert_level: None,
            tsunami: false,
            significance: 0,
        }
    }

    const HOUR_MS: i64 = 3_600_000;

    #[test]
    fn great_circle_known_distances() {
        // One degree of latitude along a meridian is ~111.19 km.
        let d = great_circle_km(0.0, 0.0, 1.0, 0.0);
        assert!((d - 111.19).abs() < 0.5, "got {d}");
        // Coincident points are exactly zero, no NaN from rounding.
        let zero = great_circle_km(35.0, 139.0, 35.0, 139.0);
        assert!(zero.abs() < 1e-9);
        // Nearby points stay stable; no acos noise at small separations.
        let close = great_circle_km(35.0, 139.0, 35.000_01, 139.0);
        assert!(close > 0.0);
        assert!(close < 0.01, "got {close}");
        // Antipodal points are half the circumference.
        let half = great_circle_km(0.0, 0.0, 0.0, 180.0);
        assert!((half - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn links_the_worked_example_pair() {
        let events = vec![
            event("a", 35.0, 139.0, 5.0, 0),
            event("b", 35.01, 139.01, 4.0, HOUR_MS),
        ];
        let edges = correlate(&events, &CorrelationConfig::default());
        assert_eq!(edges.len(), 1);

        let edge = edges.first().unwrap();
        // The earlier event is the edge start.
        assert!((edge.start_lat - 35.0).abs() < 1e-12);
        assert!((edge.end_lat - 35.01).abs() < 1e-12);
        assert!((edge.gap_hours - 1.0).abs() < 1e-9);
        assert!(edge.distance_km < 2.0);
        assert!(edge.proximity > 0.99);
        assert!(edge.label.contains("M5.0"));
        assert!(edge.label.contains("M4.0"));
    }

    #[test]
    fn fewer_than_two_eligible_is_empty() {
        let config = CorrelationConfig::default();
        assert!(correlate(&[], &config).is_empty());
        assert!(correlate(&[event("a", 0.0, 0.0, 5.0, 0)], &config).is_empty());
        // Two events, but only one above the magnitude floor.
        let events = vec![
            event("a", 0.0, 0.0, 5.0, 0),
            event("b", 0.0, 0.1, 1.0, HOUR_MS),
        ];
        assert!(correlate(&events, &config).is_empty());
    }

    #[test]
    fn antimeridian_neighbors_use_true_distance() {
        // Numerically close longitudes across the date line: ~22 km apart,
        // must link. Same raw delta via the long way around must not.
        let events = vec![
            event("a", 0.0, 179.9, 5.0, 0),
            event("b", 0.0, -179.9, 5.0, HOUR_MS),
        ];
        let edges = correlate(&events, &CorrelationConfig::default());
        assert_eq!(edges.len(), 1);
        assert!(edges.first().unwrap().distance_km < 30.0);
    }

    #[test]
    fn polar_opposites_are_not_linked() {
        let events = vec![
            event("north", 90.0, 0.0, 6.0, 0),
            event("south", -90.0, 0.0, 6.0, HOUR_MS),
        ];
        assert!(correlate(&events, &CorrelationConfig::default()).is_empty());
    }

    #[test]
    fn wide_raw_longitudes_at_equator_are_not_linked() {
        // (0, 179.9) vs (0, -179.9) link; but (0, 0) vs (0, 90) is a
        // quarter circumference and must be excluded.
        let events = vec![
            event("a", 0.0, 0.0, 5.0, 0),
            event("b", 0.0, 90.0, 5.0, HOUR_MS),
        ];
        assert!(correlate(&events, &CorrelationConfig::default()).is_empty());
    }

    #[test]
    fn zero_distance_pairs_are_valid_edges() {
        let events = vec![
            event("a", 10.0, 10.0, 3.0, 0),
            event("b", 10.0, 10.0, 3.5, HOUR_MS),
        ];
        let edges = correlate(&events, &CorrelationConfig::default());
        assert_eq!(edges.len(), 1);
        let edge = edges.first().unwrap();
        assert!(edge.distance_km.abs() < 1e-9);
        assert!((edge.proximity - 1.0).abs() < 1e-12);
    }

    #[test]
    fn gap_beyond_maximum_is_not_linked() {
        let events = vec![
            event("a", 10.0, 10.0, 4.0, 0),
            event("b", 10.0, 10.0, 4.0, 49 * HOUR_MS),
        ];
        assert!(correlate(&events, &CorrelationConfig::default()).is_empty());
    }

    #[test]
    fn unsorted_input_is_resorted_before_pruning() {
        // Delivered newest-first; a naive scan over this order would
        // early-exit immediately and miss the pair.
        let events = vec![
            event("late", 10.0, 10.0, 4.0, 2 * HOUR_MS),
            event("early", 10.0, 10.1, 4.0, 0),
        ];
        let edges = correlate(&events, &CorrelationConfig::default());
        assert_eq!(edges.len(), 1);
        // Start endpoint is the chronologically earlier event.
        assert!((edges.first().unwrap().start_lng - 10.1).abs() < 1e-12);
    }

    #[test]
    fn edge_cap_is_a_hard_ceiling() {
        // A 30-event burst at one location has 435 valid pairs.
        let events: Vec<EnrichedEvent> = (0..30)
            .map(|i| event(&format!("e{i}"), 0.0, 0.0, 4.0, i64::from(i).saturating_mul(60_000)))
            .collect();

        let config = CorrelationConfig {
            max_edges: 17,
            ..CorrelationConfig::default()
        };
        assert_eq!(correlate(&events, &config).len(), 17);

        let zero_cap = CorrelationConfig {
            max_edges: 0,
            ..CorrelationConfig::default()
        };
        assert!(correlate(&events, &zero_cap).is_empty());
    }

    #[test]
    fn output_never_contains_non_finite_fields() {
        let events = vec![
            event("a", -90.0, -180.0, 9.5, 0),
            event("b", -90.0, 180.0, -1.0, HOUR_MS),
            event("c", -89.9, -180.0, 8.0, HOUR_MS),
        ];
        for edge in correlate(&events, &CorrelationConfig::default()) {
            assert!(edge.distance_km.is_finite());
            assert!(edge.gap_hours.is_finite());
            assert!(edge.proximity.is_finite());
            assert!(edge.alpha.is_finite());
            assert!(edge.stroke.is_finite());
            assert!(edge.altitude.is_finite());
        }
    }
}
