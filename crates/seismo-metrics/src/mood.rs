//! Batch mood classification.
//!
//! A single pass over the batch accumulates a recency- and
//! magnitude-weighted energy score, tracks the largest magnitude among
//! events under 48 hours old, and classifies the result into one of six
//! ordered severity bands. Each band carries a bounded intensity formula
//! and a description rotated by wall-clock time bucket -- repeated calls
//! within the same second return the same string, while refreshes a few
//! seconds apart rotate through the band's phrasing. Event identity never
//! influences the choice.

use std::hash::{DefaultHasher, Hash, Hasher};

use seismo_types::{EnrichedEvent, MoodLevel, MoodState};

// ---------------------------------------------------------------------------
// Tuning
// ---------------------------------------------------------------------------

/// Recency weight floor: even week-old events keep a trace of influence.
const RECENCY_FLOOR: f64 = 0.1;

/// Hours over which the recency weight fades linearly to the floor.
const RECENCY_FADE_HOURS: f64 = 168.0;

/// Window defining "recent" for the biggest-recent-magnitude track.
const RECENT_WINDOW_HOURS: f64 = 48.0;

/// Description rotation for a severity band.
const fn description_bank(level: MoodLevel) -> &'static [&'static str] {
    match level {
        MoodLevel::Serene => &[
            "The planet breathes quietly.",
            "Barely a tremor worldwide.",
            "Tectonic silence, almost eerie.",
            "All faults are holding their peace.",
        ],
        MoodLevel::Calm => &[
            "Routine background rumbling.",
            "A few minor shivers, nothing more.",
            "The usual creaks of a living planet.",
            "Low hum of everyday seismicity.",
        ],
        MoodLevel::Uneasy => &[
            "Something is stirring beneath the surface.",
            "Noticeable activity in a few regions.",
            "The ground is murmuring louder than usual.",
            "A restless undertone to the day.",
        ],
        MoodLevel::Restless => &[
            "Multiple strong events are stacking up.",
            "The crust is working overtime today.",
            "Energy is building across several zones.",
            "Plenty of shaking to go around.",
        ],
        MoodLevel::Alarmed => &[
            "A major event has people's attention.",
            "Significant shaking within the last two days.",
            "The needle jumped hard recently.",
            "High energy release, stay informed.",
        ],
        MoodLevel::Cataclysmic => &[
            "A great earthquake has struck.",
            "Massive rupture in the last 48 hours.",
            "The planet just released enormous energy.",
            "Historic-scale shaking underway.",
        ],
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Recency weight for an event age: linear fade over one week, floored.
fn recency_weight(age_hours: f64) -> f64 {
    (1.0 - age_hours / RECENCY_FADE_HOURS).max(RECENCY_FLOOR)
}

/// Classify a batch into its mood state.
///
/// An empty batch is [`MoodLevel::Serene`] at intensity 0. A single
/// magnitude-8 event under 48 hours old is [`MoodLevel::Cataclysmic`].
#[must_use]
pub fn score_mood(events: &[EnrichedEvent], now_ms: i64) -> MoodState {
    let mut score = 0.0_f64;
    let mut total_felt = 0_u64;
    let mut recent_biggest = 0.0_f64;

    for event in events {
        let age_hours = event.age_hours(now_ms);
        // Cap the exponent so a corrupt extreme magnitude cannot push the
        // energy term to infinity.
        let energy = 10.0_f64.powf(0.5 * event.magnitude.min(600.0));
        score += energy * recency_weight(age_hours);

        total_felt = total_felt.saturating_add(u64::from(event.felt_count.unwrap_or(0)));
        if age_hours < RECENT_WINDOW_HOURS && event.magnitude > recent_biggest {
            recent_biggest = event.magnitude;
        }
    }

    // Felt reports contribute once, not per event pass.
    #[allow(clippy::cast_precision_loss)]
    let felt_term = 0.5 * total_felt as f64;
    score += felt_term;

    let (level, intensity) = classify(events.len(), score, recent_biggest);

    MoodState {
        level,
        intensity,
        description: description_for(level, now_ms),
        color: level.color().to_owned(),
        recent_biggest,
    }
}

/// Threshold ladder: the recent-biggest magnitude is checked first, with
/// the running score (and, for the calm band, raw count) as fallback.
fn classify(count: usize, score: f64, recent_biggest: f64) -> (MoodLevel, f64) {
    if count == 0 {
        return (MoodLevel::Serene, 0.0);
    }

    let (level, intensity) = if recent_biggest >= 7.0 {
        (MoodLevel::Cataclysmic, 0.85 + recent_biggest / 100.0)
    } else if recent_biggest >= 6.0 || score >= 20_000.0 {
        (MoodLevel::Alarmed, 0.7 + (score / 200_000.0).min(0.15))
    } else if recent_biggest >= 5.0 || score >= 5_000.0 {
        (MoodLevel::Restless, 0.5 + (score / 50_000.0).min(0.2))
    } else if recent_biggest >= 4.0 || score >= 1_000.0 {
        (MoodLevel::Uneasy, 0.35 + (score / 20_000.0).min(0.15))
    } else if recent_biggest >= 2.5 || score >= 100.0 || count >= 25 {
        (MoodLevel::Calm, 0.2 + (score / 1_000.0).min(0.15))
    } else {
        (MoodLevel::Serene, (score / 200.0).min(0.15))
    };

    (level, intensity.clamp(0.0, 1.0))
}

/// Pick the band's description for the current one-second time bucket.
fn description_for(level: MoodLevel, now_ms: i64) -> String {
    let bank = description_bank(level);

    let bucket = now_ms.div_euclid(1000);
    let mut hasher = DefaultHasher::new();
    bucket.hash(&mut hasher);
    let index = hasher
        .finish()
        .checked_rem(bank.len() as u64)
        .and_then(|i| usize::try_from(i).ok())
        .unwrap_or(0);
    bank.get(index).copied().unwrap_or("").to_owned()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
