//! Per-event derived annotation types.
//!
//! These are the plain output structures the engine hands to the
//! presentation layer: correlation edges between related events, density
//! points for heatmap rendering, and ripple-ring annotations for the most
//! significant events. All are ephemeral -- recomputed from scratch on
//! every batch and never persisted.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Correlation Edge
// ---------------------------------------------------------------------------

/// A derived link ("arc") between two spatially and temporally related
/// events.
///
/// Endpoints are referenced by coordinate value rather than by pointer or
/// ID: the consuming layer matches rendered fields by equality. The start
/// endpoint is always the earlier of the two events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationEdge {
    /// Latitude of the earlier event.
    pub start_lat: f64,
    /// Longitude of the earlier event.
    pub start_lng: f64,
    /// Latitude of the later event.
    pub end_lat: f64,
    /// Longitude of the later event.
    pub end_lng: f64,
    /// Great-circle separation between the endpoints in kilometers.
    pub distance_km: f64,
    /// Time gap between the endpoints in hours.
    pub gap_hours: f64,
    /// Proximity factor in `[0, 1]`: 0 at the distance threshold, 1 for
    /// coincident endpoints.
    pub proximity: f64,
    /// Stroke opacity blended from the proximity factor.
    pub alpha: f64,
    /// Stroke width scaled by the larger of the two magnitudes.
    pub stroke: f64,
    /// Altitude-like arc emphasis scaled by proximity.
    pub altitude: f64,
    /// Human-readable summary of magnitudes, distance, and gap.
    pub label: String,
}

// ---------------------------------------------------------------------------
// Density Point
// ---------------------------------------------------------------------------

/// One heatmap sample per input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityPoint {
    /// Event latitude in degrees.
    pub latitude: f64,
    /// Event longitude in degrees.
    pub longitude: f64,
    /// Log-energy-normalized weight in `[0.1, 1.0]`.
    pub weight: f64,
}

// ---------------------------------------------------------------------------
// Ripple Annotation
// ---------------------------------------------------------------------------

/// Magnitude band driving a ripple ring's base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RippleBand {
    /// Magnitude at or above 6.
    Hot,
    /// Magnitude at or above 4.5.
    Warm,
    /// Everything below.
    Cool,
}

impl RippleBand {
    /// Classify a magnitude into its band.
    #[must_use]
    pub fn for_magnitude(magnitude: f64) -> Self {
        if magnitude >= 6.0 {
            Self::Hot
        } else if magnitude >= 4.5 {
            Self::Warm
        } else {
            Self::Cool
        }
    }

    /// Base RGB triple for this band.
    #[must_use]
    pub const fn base_rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Hot => (255, 61, 61),
            Self::Warm => (255, 140, 66),
            Self::Cool => (77, 171, 247),
        }
    }
}

/// An RGBA color sample produced by a ripple color policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha in `[0, 1]`.
    pub a: f64,
}

/// A concentric ripple-ring annotation for one selected event.
///
/// The color policy is a function of ring progress: the consumer feeds a
/// uniform progress value in `[0, 1]` to [`RippleAnnotation::color_at`]
/// and receives the band's base color with a linearly fading alpha.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RippleAnnotation {
    /// Event latitude in degrees.
    pub latitude: f64,
    /// Event longitude in degrees.
    pub longitude: f64,
    /// Magnitude of the annotated event.
    pub magnitude: f64,
    /// Maximum ring radius, capped at 8.
    pub max_radius: f64,
    /// Ring propagation rate; fresher, stronger events expand slower.
    pub speed: f64,
    /// Ring repeat period in milliseconds; fresher events repeat faster.
    pub repeat_ms: f64,
    /// Magnitude band selecting the base color.
    pub band: RippleBand,
}

impl RippleAnnotation {
    /// Color of a ring at the given progress in `[0, 1]`.
    ///
    /// Alpha fades linearly from opaque at progress 0 to transparent at
    /// progress 1. Out-of-range progress values are clamped.
    #[must_use]
    pub fn color_at(&self, progress: f64) -> Rgba {
        let (r, g, b) = self.band.base_rgb();
        let clamped = if progress.is_finite() { progress.clamp(0.0, 1.0) } else { 1.0 };
        Rgba { r, g, b, a: 1.0 - clamped }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
