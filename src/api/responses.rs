//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    content::EventContent,
    countdown::{CountdownPhase, TimeRemaining},
    state::{CardSnapshot, CountdownSnapshot, NavOutcome},
};

/// Response for every card navigation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub cards: CardSnapshot,
}

impl NavResponse {
    /// Create a new navigation response
    pub fn new(status: &str, message: String, cards: CardSnapshot) -> Self {
        Self {
            status: status.to_string(),
            message,
            timestamp: Utc::now(),
            cards,
        }
    }

    /// Create a response for an input that moved the deck
    pub fn moved(cards: CardSnapshot) -> Self {
        Self::new("moved", format!("Showing card {} of {}", cards.index + 1, cards.total), cards)
    }

    /// Create a response for an input that did not map to a move
    pub fn ignored(cards: CardSnapshot) -> Self {
        Self::new("ignored", "Input did not trigger navigation".to_string(), cards)
    }

    pub fn from_outcome(outcome: NavOutcome) -> Self {
        if outcome.accepted {
            Self::moved(outcome.cards)
        } else {
            Self::ignored(outcome.cards)
        }
    }
}

/// One labelled countdown field, zero-padded for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownUnit {
    pub label: String,
    pub value: u64,
    pub display: String,
}

/// Countdown as of the latest tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownResponse {
    pub phase: CountdownPhase,
    pub remaining: TimeRemaining,
    pub units: Vec<CountdownUnit>,
    pub display: String,
    pub highlight: String,
    pub target: DateTime<Utc>,
    pub computed_at: DateTime<Utc>,
}

impl CountdownResponse {
    pub fn new(target: DateTime<Utc>, snapshot: CountdownSnapshot) -> Self {
        let units = snapshot
            .remaining
            .units()
            .into_iter()
            .map(|(label, value)| CountdownUnit {
                label: label.to_string(),
                value,
                display: format!("{:02}", value),
            })
            .collect();

        Self {
            phase: snapshot.phase(),
            remaining: snapshot.remaining,
            units,
            display: snapshot.remaining.display(),
            highlight: snapshot.highlight,
            target,
            computed_at: snapshot.computed_at,
        }
    }
}

/// Static event description plus the theme picked for this run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventResponse {
    pub content: EventContent,
    pub hashtags: Vec<String>,
    pub theme: Option<String>,
    pub themes: Vec<String>,
    pub target: DateTime<Utc>,
}

/// Swipe gesture delta, end minus start, in pixels
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SwipeRequest {
    pub dx: f64,
    pub dy: f64,
}

/// Wheel event
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScrollRequest {
    pub delta_y: f64,
}

/// Tap position on a surface of the given width
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClickRequest {
    pub x: f64,
    pub width: f64,
}

/// Key press, named as the DOM names it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyRequest {
    pub key: String,
}

/// Status response with card and countdown summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub cards: CardSnapshot,
    pub countdown_phase: CountdownPhase,
    pub countdown: String,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
