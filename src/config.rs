//! Configuration and CLI argument handling

use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use chrono::{DateTime, NaiveDateTime, Utc};
use clap::Parser;

use crate::{
    content::{EventContent, ThemeSelection, DEFAULT_THEMES},
    navigation::{input::{DEFAULT_SCROLL_DEBOUNCE, DEFAULT_SWIPE_THRESHOLD}, NavPolicy},
};

/// CLI argument parsing structure
#[derive(Parser, Debug, Clone)]
#[command(name = "ijtema-countdown")]
#[command(about = "A state-managed HTTP server backing the Salana Ijtema countdown display")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Instant the countdown runs to (RFC 3339, or YYYY-MM-DDTHH:MM:SS as UTC)
    #[arg(long, default_value = "2025-10-24T00:00:00Z", value_parser = parse_target)]
    pub target: DateTime<Utc>,

    /// Behaviour of next/previous at the ends of the card deck
    #[arg(long, value_enum, default_value_t = NavPolicy::Cyclic)]
    pub policy: NavPolicy,

    /// Number of cards on the display
    #[arg(long, default_value = "4")]
    pub cards: usize,

    /// JSON file holding the last viewed card index
    #[arg(long, default_value = "ijtema-state.json")]
    pub state_file: PathBuf,

    /// Optional JSON file overriding the event copy
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Theme index to use instead of a random pick
    #[arg(long)]
    pub theme: Option<usize>,

    /// Distance in pixels a swipe must exceed
    #[arg(long, default_value_t = DEFAULT_SWIPE_THRESHOLD)]
    pub swipe_threshold: f64,

    /// Gap in milliseconds a wheel event must exceed after the last accepted one
    #[arg(long, default_value_t = DEFAULT_SCROLL_DEBOUNCE.as_millis() as u64)]
    pub scroll_debounce_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse a target instant.
///
/// Offsets are honoured when present; a bare date-time is read as UTC.
pub fn parse_target(value: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| format!("invalid target instant '{}': {}", value, e))
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn scroll_debounce(&self) -> Duration {
        Duration::from_millis(self.scroll_debounce_ms)
    }

    /// Load the event copy, falling back to the built-in content
    pub fn load_content(&self) -> Result<EventContent> {
        match &self.content {
            Some(path) => EventContent::load(path),
            None => Ok(EventContent::default()),
        }
    }

    /// Choose the theme for this run
    pub fn choose_theme(&self) -> ThemeSelection {
        let themes = DEFAULT_THEMES.iter().map(|t| t.to_string()).collect();
        ThemeSelection::choose(themes, self.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn defaults_match_the_event() {
        let config = Config::try_parse_from(["ijtema-countdown"]).unwrap();
        assert_eq!(config.target, Utc.with_ymd_and_hms(2025, 10, 24, 0, 0, 0).unwrap());
        assert_eq!(config.policy, NavPolicy::Cyclic);
        assert_eq!(config.cards, 4);
        assert_eq!(config.scroll_debounce(), DEFAULT_SCROLL_DEBOUNCE);
        assert_eq!(config.swipe_threshold, DEFAULT_SWIPE_THRESHOLD);
        assert_eq!(config.address(), "0.0.0.0:20554");
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn policy_and_target_can_be_overridden() {
        let config = Config::try_parse_from([
            "ijtema-countdown",
            "--policy",
            "bounded",
            "--target",
            "2026-01-01T05:30:00+05:30",
            "-v",
        ])
        .unwrap();
        assert_eq!(config.policy, NavPolicy::Bounded);
        assert_eq!(config.target, Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn naive_target_is_read_as_utc() {
        assert_eq!(
            parse_target("2025-10-24T00:00:00").unwrap(),
            Utc.with_ymd_and_hms(2025, 10, 24, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn garbage_target_is_rejected() {
        assert!(parse_target("next friday").is_err());
        assert!(Config::try_parse_from(["ijtema-countdown", "--target", "soon"]).is_err());
    }
}
