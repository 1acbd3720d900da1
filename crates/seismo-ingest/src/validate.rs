//! Best-effort validation of raw feed payloads.
//!
//! Two-tier policy: the whole batch is rejected only when the top-level
//! shape is wrong (not an object, wrong collection type, no features
//! array). Individual malformed features -- null entries, missing
//! properties or geometry, short or non-finite coordinate arrays -- are
//! silently dropped so one corrupt record never poisons the batch. This
//! is a deliberate ingestion policy matching a feed that routinely
//! carries heterogeneous or partially-corrupt entries.
//!
//! Features are never mutated, only filtered.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::IngestError;

/// A validated feed: the surviving features of one snapshot.
///
/// Every feature in here is guaranteed to be an object with a
/// `properties` object, a `geometry` object, and a coordinate array whose
/// first three entries are finite numbers.
#[derive(Debug, Clone)]
pub struct ValidFeed {
    features: Vec<Value>,
    received: usize,
}

impl ValidFeed {
    /// The surviving, well-formed features.
    #[must_use]
    pub fn features(&self) -> &[Value] {
        &self.features
    }

    /// Number of features the raw payload carried before filtering.
    #[must_use]
    pub const fn received(&self) -> usize {
        self.received
    }

    /// Number of features that survived validation.
    #[must_use]
    pub const fn accepted(&self) -> usize {
        self.features.len()
    }

    /// Number of features dropped as malformed.
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.received.saturating_sub(self.features.len())
    }
}

/// Validate a decoded feed payload.
///
/// # Errors
///
/// Returns an [`IngestError`] when the top-level shape is wrong: the
/// payload is not an object, its `type` is not `"FeatureCollection"`, or
/// it has no `features` array. Malformed individual features are dropped,
/// not reported as errors.
pub fn validate(payload: Value) -> Result<ValidFeed, IngestError> {
    let Some(object) = payload.as_object() else {
        return Err(IngestError::NotAnObject);
    };

    let collection_type = object.get("type").and_then(Value::as_str);
    if collection_type != Some("FeatureCollection") {
        return Err(IngestError::WrongCollectionType {
            found: collection_type.map(str::to_owned),
        });
    }

    let Some(raw_features) = object.get("features").and_then(Value::as_array) else {
        return Err(IngestError::MissingFeatures);
    };

    let received = raw_features.len();
    let mut features: Vec<Value> = Vec::with_capacity(received);

    for (index, feature) in raw_features.iter().enumerate() {
        match feature_defect(feature) {
            None => features.push(feature.clone()),
            Some(reason) => {
                debug!(index, reason, "dropping malformed feature");
            }
        }
    }

    let feed = ValidFeed { features, received };
    if feed.dropped() > 0 {
        warn!(
            received = feed.received(),
            accepted = feed.accepted(),
            dropped = feed.dropped(),
            "feed batch contained malformed features"
        );
    }

    Ok(feed)
}

/// Returns the reason a feature must be dropped, or `None` if it is
/// well-formed.
fn feature_defect(feature: &Value) -> Option<&'static str> {
    let Some(object) = feature.as_object() else {
        return Some("feature is not an object");
    };

    if !object.get("properties").is_some_and(Value::is_object) {
        return Some("missing properties object");
    }

    let Some(geometry) = object.get("geometry").and_then(Value::as_object) else {
        return Some("missing geometry object");
    };

    let Some(coordinates) = geometry.get("coordinates").and_then(Value::as_array) else {
        return Some("missing coordinates array");
    };

    if coordinates.len() < 3 {
        return Some("coordinate array shorter than 3");
    }

    let all_finite = coordinates
        .iter()
        .take(3)
        .all(|c| c.as_f64().is_some_and(f64::is_finite));
    if !all_finite {
        return Some("non-finite coordinate");
    }

    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
