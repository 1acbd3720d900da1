//! Shared type definitions for the Seismo derived-metrics engine.
//!
//! This crate is the single source of truth for the data model shared by
//! the ingestion layer and every derived computation. Values defined here
//! are plain serde-serializable structs consumed by presentation-layer
//! collaborators (scene renderers, summary panels, feedback drivers) that
//! live outside this workspace.
//!
//! # Modules
//!
//! - [`event`] -- The canonical [`EnrichedEvent`] record and its
//!   [`AlertLevel`] enum
//! - [`derived`] -- Per-event derived annotations (correlation edges,
//!   density points, ripple rings)
//! - [`summary`] -- Batch-level aggregates ([`SummaryStatistics`] and
//!   [`MoodState`])

pub mod derived;
pub mod event;
pub mod summary;

// Re-export all public types at crate root for convenience.
pub use derived::{CorrelationEdge, DensityPoint, Rgba, RippleAnnotation, RippleBand};
pub use event::{AlertLevel, EnrichedEvent};
pub use summary::{MoodLevel, MoodState, SummaryStatistics};
