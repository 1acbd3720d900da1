//! Error types for the `seismo-ingest` crate.
//!
//! Only structural defects in the raw payload are errors: a batch whose
//! top-level shape is wrong is rejected eagerly, before any normalization
//! begins. Record-level defects are never errors -- malformed individual
//! features are silently dropped by the validator instead.

/// Structural errors raised while validating a raw feed payload.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The decoded payload is not a JSON object.
    #[error("payload is not an object")]
    NotAnObject,

    /// The payload's `type` field is missing or not `"FeatureCollection"`.
    #[error("payload type is {found:?}, expected \"FeatureCollection\"")]
    WrongCollectionType {
        /// The `type` value found, if any.
        found: Option<String>,
    },

    /// The payload's `features` field is missing or not an array.
    #[error("payload has no features array")]
    MissingFeatures,
}
