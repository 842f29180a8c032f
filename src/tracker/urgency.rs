//! Elapsed-time classification and the `HH:MM:SS` label shown on order cards.
//!
//! Both are evaluated against the clock at call time. Nothing here is cached: with a
//! [`RefreshTicker`](crate::lifecycle::RefreshTicker) driving re-renders, a card moves from
//! green to yellow to red on its own.

use crate::settings::ThresholdSettings;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Green,
    Yellow,
    Red,
}

impl Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Urgency::Green => "green",
            Urgency::Yellow => "yellow",
            Urgency::Red => "red",
        })
    }
}

/// Urgency of an order created at `created_at`, as of now.
pub fn classify_urgency(created_at: DateTime<Utc>, thresholds: &ThresholdSettings) -> Urgency {
    classify_urgency_at(created_at, Utc::now(), thresholds)
}

/// Urgency as of `now`.
///
/// Green below the yellow limit, yellow from the yellow limit up to (not including) the red
/// limit, red from there on. Limits are in minutes and compared against fractional elapsed
/// minutes. When `yellow >= red` nothing is ever yellow.
pub fn classify_urgency_at(
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
    thresholds: &ThresholdSettings,
) -> Urgency {
    let elapsed_minutes = (now - created_at).num_milliseconds() as f64 / 60_000.0;

    if elapsed_minutes < thresholds.yellow_limit_minutes {
        Urgency::Green
    } else if elapsed_minutes < thresholds.red_limit_minutes {
        Urgency::Yellow
    } else {
        Urgency::Red
    }
}

pub fn format_elapsed(created_at: DateTime<Utc>) -> String {
    format_elapsed_at(created_at, Utc::now())
}

/// Time since `created_at` as `HH:MM:SS`. A creation time in the future reads `00:00:00`;
/// hours keep counting past 99.
pub fn format_elapsed_at(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - created_at).num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}
