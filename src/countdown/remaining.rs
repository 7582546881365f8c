//! Remaining-time calculation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_HOUR: u64 = 3_600_000;
const MS_PER_DAY: u64 = 86_400_000;

/// Fallback text shown once the target instant has been reached
pub const TIMES_UP: &str = "Time's up!";

/// Time left until the target instant, or the terminal expired record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum TimeRemaining {
    Counting {
        days: u64,
        hours: u64,
        minutes: u64,
        seconds: u64,
    },
    Expired,
}

/// The two states of a countdown against a fixed target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountdownPhase {
    Counting,
    Expired,
}

/// Compute the whole units left between `now` and `target`.
///
/// A target equal to `now` counts as reached. Every field is floored, never
/// rounded.
pub fn compute_remaining(target: DateTime<Utc>, now: DateTime<Utc>) -> TimeRemaining {
    let diff = target.signed_duration_since(now).num_milliseconds();
    if diff <= 0 {
        return TimeRemaining::Expired;
    }

    let diff = diff as u64;
    TimeRemaining::Counting {
        days: diff / MS_PER_DAY,
        hours: (diff / MS_PER_HOUR) % 24,
        minutes: (diff / MS_PER_MINUTE) % 60,
        seconds: (diff / MS_PER_SECOND) % 60,
    }
}

impl TimeRemaining {
    /// Get the phase this record belongs to
    pub fn phase(&self) -> CountdownPhase {
        match self {
            Self::Counting { .. } => CountdownPhase::Counting,
            Self::Expired => CountdownPhase::Expired,
        }
    }

    /// Check if the target has been reached
    pub fn is_expired(&self) -> bool {
        matches!(self, Self::Expired)
    }

    /// Labelled fields in display order, empty once expired
    pub fn units(&self) -> Vec<(&'static str, u64)> {
        match *self {
            Self::Counting { days, hours, minutes, seconds } => vec![
                ("days", days),
                ("hours", hours),
                ("minutes", minutes),
                ("seconds", seconds),
            ],
            Self::Expired => Vec::new(),
        }
    }

    /// Labelled fields zero-padded to two digits
    pub fn padded_units(&self) -> Vec<(&'static str, String)> {
        self.units()
            .into_iter()
            .map(|(label, value)| (label, format!("{:02}", value)))
            .collect()
    }

    /// Single-line rendering, e.g. `01d 02h 03m 04s`
    pub fn display(&self) -> String {
        match *self {
            Self::Counting { days, hours, minutes, seconds } => {
                format!("{:02}d {:02}h {:02}m {:02}s", days, hours, minutes, seconds)
            }
            Self::Expired => TIMES_UP.to_string(),
        }
    }
}
