//! Derived analytical layers over enriched seismic event batches.
//!
//! This crate is the derived-metrics engine: six independent, pure
//! computations over one immutable batch of
//! [`seismo_types::EnrichedEvent`] records, plus the configuration they
//! share and a pipeline that fans a batch out to all of them.
//!
//! # Modules
//!
//! - [`config`] -- Tunable thresholds with production defaults and a
//!   YAML loader
//! - [`correlate`] -- Spatial-temporal correlation edges (time-sorted
//!   scan with gap pruning and a hard edge cap)
//! - [`density`] -- Log-energy-normalized heatmap weights
//! - [`ripple`] -- Top-N ripple-ring annotations
//! - [`tour`] -- Magnitude-ranked touring order
//! - [`aggregate`] -- Batch summary statistics
//! - [`mood`] -- Recency-weighted severity classification
//! - [`pipeline`] -- One-call fan-out producing [`DerivedLayers`]
//!
//! Every component is synchronous and total over any batch, including
//! the empty one, and never emits NaN or infinity. Age-dependent terms
//! take an explicit `now_ms` so results are pure functions of their
//! arguments.

pub mod aggregate;
pub mod config;
pub mod correlate;
pub mod density;
pub mod mood;
pub mod pipeline;
pub mod ripple;
pub mod tour;

pub use aggregate::summarize;
pub use config::{ConfigError, CorrelationConfig, MetricsConfig, RippleConfig, TourConfig};
pub use correlate::{EARTH_RADIUS_KM, correlate, great_circle_km};
pub use density::density_map;
pub use mood::score_mood;
pub use pipeline::{DerivedLayers, derive_layers};
pub use ripple::select_ripples;
pub use tour::rank_tour;
