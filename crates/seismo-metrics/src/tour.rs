//! Magnitude-ranked touring order.
//!
//! Orders a batch descending by magnitude for guided-tour / cinematic
//! consumption and returns the first N. Deliberately no magnitude or
//! recency filter: when a batch holds fewer than N events, even
//! micro-events appear in the tour.

use seismo_types::EnrichedEvent;

/// Return the `count` largest-magnitude events, strongest first.
///
/// The sort is stable, so equal magnitudes keep their input order.
#[must_use]
pub fn rank_tour(events: &[EnrichedEvent], count: usize) -> Vec<EnrichedEvent> {
    let mut ranked: Vec<EnrichedEvent> = events.to_vec();
    ranked.sort_by(|a, b| b.magnitude.total_cmp(&a.magnitude));
    ranked.truncate(count);
    ranked
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str, magnitude: f64) -> EnrichedEvent {
        EnrichedEvent {
            id: id.to_owned(),
            latitude: 0.0,
            longitude: 0.0,
            magnitude,
            depth_km: 10.0,
            place: String::new(),
            occurred_at_ms: 0,
            color: String::from("#ff4d4d"),
            size: 1.0,
            felt_count: None,
            community_intensity: None,
            alert_level: None,
            tsunami: false,
            significance: 0,
        }
    }

    #[test]
    fn ranks_strongest_first_and_truncates() {
        let events = vec![
            event("a", 2.0),
            event("b", 6.1),
            event("c", 4.4),
            event("d", 5.0),
        ];
        let tour = rank_tour(&events, 3);
        let ids: Vec<&str> = tour.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "c"]);
    }

    #[test]
    fn short_batches_include_micro_events() {
        let events = vec![event("micro", -0.8), event("tiny", 0.3)];
        let tour = rank_tour(&events, 8);
        assert_eq!(tour.len(), 2);
        assert!(tour.iter().any(|e| e.id == "micro"));
    }

    #[test]
    fn equal_magnitudes_keep_input_order() {
        let events = vec![event("first", 4.0), event("second", 4.0), event("third", 4.0)];
        let tour = rank_tour(&events, 8);
        let ids: Vec<&str> = tour.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn empty_batch_is_empty() {
        assert!(rank_tour(&[], 8).is_empty());
    }
}
