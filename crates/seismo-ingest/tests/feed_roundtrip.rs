//! End-to-end ingestion properties: raw snapshot payloads through the
//! validator and normalizer and on into the batch summary.

#![allow(clippy::unwrap_used)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::arithmetic_side_effects)]

use seismo_ingest::{normalize_feed, validate};
use seismo_metrics::summarize;
use serde_json::{Value, json};

fn synthetic_feature(index: usize, magnitude: f64, place: &str) -> Value {
    json!({
        "id": format!("syn{index}"),
        "properties": {
            "mag": magnitude,
            "place": place,
            "time": 1_700_000_000_000_u64 + (index as u64) * 60_000,
            "sig": 100
        },
        "geometry": {"coordinates": [139.0 + index as f64 * 0.1, 35.0, 10.0 + index as f64]}
    })
}

#[test]
fn valid_records_survive_the_whole_pipeline() {
    let n = 24;
    let features: Vec<Value> = (0..n)
        .map(|i| synthetic_feature(i, 2.0 + i as f64 * 0.2, "5 km W of Hualien, Taiwan"))
        .collect();
    let payload = json!({"type": "FeatureCollection", "features": features});

    let feed = validate(payload).unwrap();
    let events = normalize_feed(&feed);
    assert_eq!(events.len(), n);

    let summary = summarize(&events);
    assert_eq!(summary.count, u32::try_from(n).unwrap());
    assert_eq!(summary.most_active_region, "Hualien, Taiwan");
    assert_eq!(summary.total_significance, 100 * n as u64);
    assert!(summary.mean_depth_km.is_finite());
}

#[test]
fn malformed_features_are_dropped_but_the_rest_flow_through() {
    let payload = json!({
        "type": "FeatureCollection",
        "features": [
            synthetic_feature(0, 4.0, "10 km S of Kushiro, Japan"),
            null,
            {"properties": {"mag": 5.0}},
            {"properties": {}, "geometry": {"coordinates": [1.0]}},
            synthetic_feature(1, 5.5, "22 km E of Kushiro, Japan"),
        ]
    });

    let feed = validate(payload).unwrap();
    assert_eq!(feed.accepted(), 2);
    assert_eq!(feed.dropped(), 3);

    let events = normalize_feed(&feed);
    let summary = summarize(&events);
    assert_eq!(summary.count, 2);
    assert!((summary.strongest_magnitude - 5.5).abs() < 1e-12);
    assert_eq!(summary.most_active_region, "Kushiro, Japan");
}

#[test]
fn structurally_invalid_payloads_never_reach_the_engine() {
    assert!(validate(json!("not a collection")).is_err());
    assert!(validate(json!({"type": "Telemetry", "features": []})).is_err());
    assert!(validate(json!({"type": "FeatureCollection"})).is_err());
}

#[test]
fn normalized_events_never_carry_non_finite_numbers() {
    // Degenerate but structurally valid records: missing magnitudes,
    // negative depths, missing optional fields.
    let payload = json!({
        "type": "FeatureCollection",
        "features": [
            {"properties": {"place": "somewhere"}, "geometry": {"coordinates": [10.0, 20.0, -600.0]}},
            {"properties": {"mag": null, "time": 0}, "geometry": {"coordinates": [0.0, 0.0, 0.0]}},
            synthetic_feature(0, -1.3, ""),
        ]
    });

    let events = normalize_feed(&validate(payload).unwrap());
    assert_eq!(events.len(), 3);
    for event in &events {
        assert!(event.latitude.is_finite());
        assert!(event.longitude.is_finite());
        assert!(event.magnitude.is_finite());
        assert!(event.depth_km >= 0.0);
        assert!(event.size.is_finite());
    }
}
