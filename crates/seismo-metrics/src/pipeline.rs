//! Full derived-layer pipeline over one enriched-event batch.
//!
//! Fans a batch out to every derived component and bundles the results.
//! Each component is a pure function of the immutable batch and the
//! configuration; none depends on another's output, so the evaluation
//! order here is arbitrary.

use tracing::info;

use seismo_types::{
    CorrelationEdge, DensityPoint, EnrichedEvent, MoodState, RippleAnnotation, SummaryStatistics,
};

use crate::aggregate::summarize;
use crate::config::MetricsConfig;
use crate::correlate::correlate;
use crate::density::density_map;
use crate::mood::score_mood;
use crate::ripple::select_ripples;
use crate::tour::rank_tour;

/// Every derived analytical layer for one batch.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DerivedLayers {
    /// Correlation edges between related events.
    pub edges: Vec<CorrelationEdge>,
    /// One heatmap point per event.
    pub density: Vec<DensityPoint>,
    /// Ripple annotations for the most significant events.
    pub ripples: Vec<RippleAnnotation>,
    /// Magnitude-ranked touring order.
    pub tour: Vec<EnrichedEvent>,
    /// Batch summary statistics.
    pub summary: SummaryStatistics,
    /// Batch mood classification.
    pub mood: MoodState,
}

/// Compute all derived layers for a batch.
///
/// Total for any input, including the empty batch. `now_ms` anchors
/// every age-dependent term so the whole computation stays a pure
/// function of its arguments.
#[must_use]
pub fn derive_layers(
    events: &[EnrichedEvent],
    config: &MetricsConfig,
    now_ms: i64,
) -> DerivedLayers {
    let edges = correlate(events, &config.correlation);
    let density = density_map(events);
    let ripples = select_ripples(events, &config.ripple, now_ms);
    let tour = rank_tour(events, config.tour.count);
    let summary = summarize(events);
    let mood = score_mood(events, now_ms);

    info!(
        events = events.len(),
        edges = edges.len(),
        ripples = ripples.len(),
        tour = tour.len(),
        mood = ?mood.level,
        "derived layers computed"
    );

    DerivedLayers {
        edges,
        density,
        ripples,
        tour,
        summary,
        mood,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
