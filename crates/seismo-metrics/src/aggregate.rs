//! Batch summary statistics.
//!
//! One left-to-right reduction over the batch produces the whole
//! [`SummaryStatistics`] structure: count, the strongest event, the most
//! active region, mean depth, and the human-impact totals. An empty batch
//! yields the zero-valued structure with its fallback labels, never an
//! error.
//!
//! Tie-breaks are reduction-order dependent: the strongest event is the
//! first one encountered at the maximum magnitude, and the most active
//! region is the first one to reach the maximum count. Callers must not
//! read business meaning into which of several tied candidates wins.

use std::collections::BTreeMap;

use seismo_types::{EnrichedEvent, SummaryStatistics};

/// Extract the trailing region token from a place string.
///
/// USGS-style place strings read like `"63 km SW of Anchorage, Alaska"`;
/// the region is whatever follows the last `" of "`. Without one, the
/// text after the first comma is used, and failing that the whole
/// trimmed place. Empty results yield `None`.
fn region_token(place: &str) -> Option<String> {
    let token = place.rfind(" of ").map_or_else(
        || place.split_once(',').map_or(place, |(_, after)| after),
        |idx| place.get(idx.saturating_add(4)..).unwrap_or(""),
    );
    let trimmed = token.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Summarize a batch of enriched events.
#[must_use]
pub fn summarize(events: &[EnrichedEvent]) -> SummaryStatistics {
    if events.is_empty() {
        return SummaryStatistics::empty();
    }

    let mut strongest: Option<&EnrichedEvent> = None;
    let mut depth_sum = 0.0_f64;
    let mut total_felt = 0_u64;
    let mut tsunami_count = 0_u32;
    let mut total_significance = 0_u64;
    let mut region_counts: BTreeMap<String, u32> = BTreeMap::new();
    let mut most_active: Option<String> = None;
    let mut most_active_count = 0_u32;

    for event in events {
        // Strict comparison: the first event at the maximum wins.
        if strongest.is_none_or(|s| event.magnitude > s.magnitude) {
            strongest = Some(event);
        }

        depth_sum += event.depth_km;
        total_felt = total_felt.saturating_add(u64::from(event.felt_count.unwrap_or(0)));
        if event.tsunami {
            tsunami_count = tsunami_count.saturating_add(1);
        }
        total_significance = total_significance.saturating_add(u64::from(event.significance));

        if let Some(region) = region_token(&event.place) {
            let count = region_counts.entry(region.clone()).or_insert(0);
            *count = count.saturating_add(1);
            if *count > most_active_count {
                most_active_count = *count;
                most_active = Some(region);
            }
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let count_f = events.len() as f64;
    let mean_depth_km = (depth_sum / count_f * 10.0).round() / 10.0;

    SummaryStatistics {
        count: u32::try_from(events.len()).unwrap_or(u32::MAX),
        strongest_magnitude: strongest.map_or(0.0, |s| s.magnitude),
        strongest_place: strongest.map_or_else(|| String::from("None"), |s| s.place.clone()),
        most_active_region: most_active.unwrap_or_else(|| String::from("Global")),
        mean_depth_km,
        total_felt,
        tsunami_count,
        total_significance,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
