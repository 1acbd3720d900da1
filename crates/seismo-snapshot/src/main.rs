//! Snapshot runner for the Seismo derived-metrics engine.
//!
//! Reads one already-downloaded feed snapshot (a GeoJSON feature
//! collection) from the path given as the first argument, runs it
//! through validation, normalization, and every derived layer, and
//! prints the result as JSON on stdout.
//!
//! ```text
//! snapshot file --> validate --> normalize --> derive_layers --> stdout
//! ```
//!
//! An optional YAML config named by the `SEISMO_CONFIG` environment
//! variable overrides the engine's default thresholds. Fetching the feed
//! is out of scope; pair this binary with whatever download step suits
//! the deployment.

use std::path::PathBuf;

use chrono::Utc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use seismo_ingest::{normalize_feed, validate};
use seismo_metrics::{MetricsConfig, derive_layers};

/// Application entry point.
///
/// # Errors
///
/// Returns an error when no snapshot path is given, the file cannot be
/// read or decoded, the payload is structurally invalid, or the optional
/// config file fails to load.
fn main() -> anyhow::Result<()> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .ok_or_else(|| anyhow::anyhow!("usage: seismo-snapshot <snapshot.json>"))?;

    let config = match std::env::var_os("SEISMO_CONFIG") {
        Some(config_path) => {
            let config_path = PathBuf::from(config_path);
            info!(path = %config_path.display(), "loading engine config");
            MetricsConfig::from_file(&config_path)?
        }
        None => MetricsConfig::default(),
    };

    info!(path = %path.display(), "reading feed snapshot");
    let raw = std::fs::read_to_string(&path)?;
    let payload: serde_json::Value = serde_json::from_str(&raw)?;

    let feed = validate(payload)?;
    info!(
        received = feed.received(),
        accepted = feed.accepted(),
        dropped = feed.dropped(),
        "snapshot validated"
    );

    let events = normalize_feed(&feed);
    let now_ms = Utc::now().timestamp_millis();
    let layers = derive_layers(&events, &config, now_ms);

    println!("{}", serde_json::to_string_pretty(&layers)?);
    Ok(())
}
