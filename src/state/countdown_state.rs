//! Countdown snapshot published on every tick

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::countdown::{compute_remaining, CountdownPhase, TimeRemaining};

/// Countdown values as of one tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownSnapshot {
    pub remaining: TimeRemaining,
    pub highlight: String,
    pub computed_at: DateTime<Utc>,
    pub ticks: u64,
}

impl CountdownSnapshot {
    /// Derive a snapshot from the target and the current instant
    pub fn compute(target: DateTime<Utc>, now: DateTime<Utc>, highlight: &str, ticks: u64) -> Self {
        Self {
            remaining: compute_remaining(target, now),
            highlight: highlight.to_string(),
            computed_at: now,
            ticks,
        }
    }

    pub fn phase(&self) -> CountdownPhase {
        self.remaining.phase()
    }

    pub fn is_expired(&self) -> bool {
        self.remaining.is_expired()
    }
}
