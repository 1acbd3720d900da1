//! Feed payload validation and event normalization.
//!
//! This crate is the input boundary of the Seismo engine. A decoded feed
//! snapshot enters as an untrusted `serde_json::Value`, passes through
//! the [`validate`] filter, and leaves as a list of immutable
//! [`seismo_types::EnrichedEvent`] records that every derived computation
//! consumes.
//!
//! ```text
//! raw payload --> validate --> ValidFeed --> normalize_feed --> Vec<EnrichedEvent>
//! ```
//!
//! Error policy is two-tier: only a structurally wrong top-level payload
//! is an error ([`IngestError`]); malformed individual features are
//! dropped, and missing record-level values are coerced to safe defaults.
//! Everything past [`validate`] is total.

pub mod error;
pub mod normalize;
pub mod validate;

pub use error::IngestError;
pub use normalize::{depth_color, magnitude_size, normalize_feature, normalize_feed};
pub use validate::{ValidFeed, validate};
