//! Typed configuration for the derived-metrics engine.
//!
//! Every tunable threshold consumed by a derived component lives here,
//! passed explicitly into each component so they stay pure, independently
//! testable functions. Defaults match the production feed tuning; a YAML
//! file can override any subset of fields.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MetricsConfig {
    /// Correlator thresholds.
    #[serde(default)]
    pub correlation: CorrelationConfig,

    /// Ripple selection thresholds.
    #[serde(default)]
    pub ripple: RippleConfig,

    /// Tour ranking settings.
    #[serde(default)]
    pub tour: TourConfig,
}

impl MetricsConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::parse(&contents)?)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`serde_yml::Error`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, serde_yml::Error> {
        serde_yml::from_str(yaml)
    }
}

/// Thresholds for the correlation-edge search.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CorrelationConfig {
    /// Maximum great-circle separation for a link, in kilometers.
    #[serde(default = "default_max_distance_km")]
    pub max_distance_km: f64,

    /// Maximum time gap for a link, in hours.
    #[serde(default = "default_max_gap_hours")]
    pub max_gap_hours: f64,

    /// Hard ceiling on emitted edges per batch. Once reached, no further
    /// pairs are evaluated at all.
    #[serde(default = "default_max_edges")]
    pub max_edges: usize,

    /// Minimum magnitude for an event to participate in correlation.
    #[serde(default = "default_min_correlation_magnitude")]
    pub min_magnitude: f64,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            max_distance_km: default_max_distance_km(),
            max_gap_hours: default_max_gap_hours(),
            max_edges: default_max_edges(),
            min_magnitude: default_min_correlation_magnitude(),
        }
    }
}

/// Thresholds for ripple annotation selection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RippleConfig {
    /// Minimum magnitude for an event to qualify for a ripple ring.
    #[serde(default = "default_min_ripple_magnitude")]
    pub min_magnitude: f64,

    /// Maximum number of ripple annotations per batch.
    #[serde(default = "default_max_ripples")]
    pub max_count: usize,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            min_magnitude: default_min_ripple_magnitude(),
            max_count: default_max_ripples(),
        }
    }
}

/// Settings for the magnitude-ranked tour.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TourConfig {
    /// Number of top-magnitude events in the tour.
    #[serde(default = "default_tour_count")]
    pub count: usize,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            count: default_tour_count(),
        }
    }
}

const fn default_max_distance_km() -> f64 {
    300.0
}

const fn default_max_gap_hours() -> f64 {
    48.0
}

const fn default_max_edges() -> usize {
    120
}

const fn default_min_correlation_magnitude() -> f64 {
    2.0
}

const fn default_min_ripple_magnitude() -> f64 {
    3.0
}

const fn default_max_ripples() -> usize {
    30
}

const fn default_tour_count() -> usize {
    8
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
