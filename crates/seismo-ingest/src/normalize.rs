//! Conversion of validated feed features into [`EnrichedEvent`] records.
//!
//! Normalization is total: given any validator-accepted feature it always
//! produces an event, coercing record-level defects to safe defaults
//! instead of failing. The magnitude coercion is deliberately falsy --
//! null, missing, and non-finite values all become 0. That matches the
//! upstream feed's own convention for unreviewed micro-events and must be
//! preserved as-is.

use serde_json::Value;

use seismo_types::{AlertLevel, EnrichedEvent};

use crate::validate::ValidFeed;

// ---------------------------------------------------------------------------
// Lookup ladders
// ---------------------------------------------------------------------------

/// Depth color bands, shallow to deep, as `(upper_bound_km, hex)` pairs.
/// Depths at or beyond the last bound fall into the final color.
const DEPTH_BANDS: [(f64, &str); 5] = [
    (35.0, "#ff4d4d"),
    (70.0, "#ff9f40"),
    (150.0, "#ffd740"),
    (300.0, "#7ddf64"),
    (500.0, "#4dabf7"),
];

/// Color for depths of 500 km and beyond.
const DEEPEST_COLOR: &str = "#9775fa";

/// Map a depth in kilometers onto its fixed display color band.
///
/// Total over the whole real line: NaN is treated as 0 (shallowest band)
/// and infinities clamp into the outermost bands.
#[must_use]
pub fn depth_color(depth_km: f64) -> &'static str {
    let depth = if depth_km.is_nan() { 0.0 } else { depth_km };
    for (bound, color) in DEPTH_BANDS {
        if depth < bound {
            return color;
        }
    }
    DEEPEST_COLOR
}

/// Map a magnitude onto a display size hint: `clamp(mag * 0.3, 0.1, 2.0)`.
///
/// Total over the whole real line: NaN is treated as 0 before scaling,
/// infinities clamp into range.
#[must_use]
pub fn magnitude_size(magnitude: f64) -> f64 {
    let mag = if magnitude.is_nan() { 0.0 } else { magnitude };
    (mag * 0.3).clamp(0.1, 2.0)
}

// ---------------------------------------------------------------------------
// Feature normalization
// ---------------------------------------------------------------------------

/// Normalize one validator-accepted feature into an [`EnrichedEvent`].
///
/// `index` is the feature's position in the batch; it only matters as the
/// identifier fallback for features the feed shipped without an id.
#[must_use]
pub fn normalize_feature(feature: &Value, index: usize) -> EnrichedEvent {
    let properties = feature.get("properties").and_then(Value::as_object);
    let prop = |key: &str| -> Option<&Value> { properties.and_then(|p| p.get(key)) };
    let coordinates = feature
        .get("geometry")
        .and_then(|g| g.get("coordinates"))
        .and_then(Value::as_array);

    let coordinate = |position: usize| -> f64 {
        coordinates
            .and_then(|c| c.get(position))
            .and_then(Value::as_f64)
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    };

    let magnitude = prop("mag")
        .and_then(Value::as_f64)
        .filter(|m| m.is_finite())
        .unwrap_or(0.0);
    let depth_km = coordinate(2).abs();

    let id = feature
        .get("id")
        .and_then(Value::as_str)
        .or_else(|| prop("code").and_then(Value::as_str))
        .map_or_else(|| format!("event-{index}"), str::to_owned);

    EnrichedEvent {
        id,
        latitude: coordinate(1).clamp(-90.0, 90.0),
        longitude: coordinate(0).clamp(-180.0, 180.0),
        magnitude,
        depth_km,
        place: prop("place")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_owned(),
        occurred_at_ms: prop("time").and_then(Value::as_i64).unwrap_or(0),
        color: depth_color(depth_km).to_owned(),
        size: magnitude_size(magnitude),
        felt_count: prop("felt")
            .and_then(Value::as_u64)
            .map(|v| u32::try_from(v).unwrap_or(u32::MAX)),
        community_intensity: prop("cdi")
            .and_then(Value::as_f64)
            .filter(|v| v.is_finite()),
        alert_level: prop("alert")
            .and_then(Value::as_str)
            .and_then(AlertLevel::parse),
        tsunami: prop("tsunami").and_then(Value::as_i64) == Some(1),
        significance: prop("sig")
            .and_then(Value::as_u64)
            .map_or(0, |v| u32::try_from(v).unwrap_or(u32::MAX)),
    }
}

/// Normalize every surviving feature of a validated feed, in feed order.
#[must_use]
pub fn normalize_feed(feed: &ValidFeed) -> Vec<EnrichedEvent> {
    feed.features()
        .iter()
        .enumerate()
        .map(|(index, feature)| normalize_feature(feature, index))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn depth_color_band_edges() {
        assert_eq!(depth_color(0.0), "#ff4d4d");
        assert_eq!(depth_color(34.9), "#ff4d4d");
        assert_eq!(depth_color(35.0), "#ff9f40");
        assert_eq!(depth_color(149.9), "#ffd740");
        assert_eq!(depth_color(499.9), "#4dabf7");
        assert_eq!(depth_color(500.0), "#9775fa");
        assert_eq!(depth_color(700.0), "#9775fa");
    }

    #[test]
    fn depth_color_total_over_non_finite_input() {
        assert_eq!(depth_color(f64::NAN), "#ff4d4d");
        assert_eq!(depth_color(f64::INFINITY), "#9775fa");
        assert_eq!(depth_color(f64::NEG_INFINITY), "#ff4d4d");
    }

    #[test]
    fn magnitude_size_clamps_and_stays_finite() {
        assert!((magnitude_size(5.0) - 1.5).abs() < 1e-12);
        assert!((magnitude_size(0.0) - 0.1).abs() < 1e-12);
        assert!((magnitude_size(-3.0) - 0.1).abs() < 1e-12);
        assert!((magnitude_size(10.0) - 2.0).abs() < 1e-12);
        assert!((magnitude_size(f64::NAN) - 0.1).abs() < 1e-12);
        assert!((magnitude_size(f64::INFINITY) - 2.0).abs() < 1e-12);
        assert!((magnitude_size(f64::NEG_INFINITY) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn normalizes_full_feature() {
        let feature = json!({
            "id": "us7000abcd",
            "properties": {
                "mag": 6.1,
                "place": "120 km SE of Hachijo-jima, Japan",
                "time": 1_700_000_000_000_i64,
                "felt": 240,
                "cdi": 5.8,
                "alert": "yellow",
                "tsunami": 1,
                "sig": 640
            },
            "geometry": {"coordinates": [140.1, 32.5, -42.0]}
        });

        let event = normalize_feature(&feature, 0);
        assert_eq!(event.id, "us7000abcd");
        assert!((event.magnitude - 6.1).abs() < 1e-12);
        // Depth sign is discarded.
        assert!((event.depth_km - 42.0).abs() < 1e-12);
        assert_eq!(event.color, "#ff9f40");
        assert_eq!(event.felt_count, Some(240));
        assert_eq!(event.alert_level, Some(AlertLevel::Yellow));
        assert!(event.tsunami);
        assert_eq!(event.significance, 640);
    }

    #[test]
    fn missing_magnitude_coerces_to_zero() {
        let feature = json!({
            "properties": {"place": "somewhere", "time": 0, "mag": null},
            "geometry": {"coordinates": [0.0, 0.0, 10.0]}
        });
        let event = normalize_feature(&feature, 3);
        assert!(event.magnitude.abs() < f64::EPSILON);
        assert_eq!(event.id, "event-3");
    }

    #[test]
    fn optional_impact_fields_stay_absent() {
        let feature = json!({
            "properties": {"mag": 2.2, "place": "", "time": 5},
            "geometry": {"coordinates": [10.0, 20.0, 5.0]}
        });
        let event = normalize_feature(&feature, 0);
        assert_eq!(event.felt_count, None);
        assert_eq!(event.community_intensity, None);
        assert_eq!(event.alert_level, None);
        assert!(!event.tsunami);
        // Significance is the one impact field that defaults to zero.
        assert_eq!(event.significance, 0);
    }

    #[test]
    fn out_of_range_coordinates_clamp_into_bounds() {
        let feature = json!({
            "properties": {"mag": 1.0, "place": "", "time": 0},
            "geometry": {"coordinates": [181.0, -90.5, 3.0]}
        });
        let event = normalize_feature(&feature, 0);
        assert!((event.longitude - 180.0).abs() < 1e-12);
        assert!((event.latitude + 90.0).abs() < 1e-12);
    }
}
