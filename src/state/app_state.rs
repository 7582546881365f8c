//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{broadcast, watch};
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    content::{EventContent, ThemeSelection},
    countdown::{Clock, HighlightCycle},
    navigation::{click_zone, key_direction, swipe_direction, Direction},
    storage::KeyValueStore,
};
use super::{CardSnapshot, CardState, CountdownSnapshot};

/// Result of feeding one input event to the card deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavOutcome {
    /// Whether the event mapped to a navigation at all
    pub accepted: bool,
    pub cards: CardSnapshot,
}

/// Main application state shared between the HTTP handlers and the ticker
#[derive(Debug)]
pub struct AppState {
    /// Fixed event configuration
    pub target: DateTime<Utc>,
    pub content: EventContent,
    pub theme: ThemeSelection,
    pub clock: Arc<dyn Clock>,
    /// Card deck position
    pub card_state: Arc<Mutex<CardState>>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Channel for card position changes
    pub card_change_tx: broadcast::Sender<CardSnapshot>,
    /// Channel for countdown ticks
    pub countdown_tx: watch::Sender<CountdownSnapshot>,
}

impl AppState {
    /// Create the state, restoring the card index from `store`
    pub fn new(
        config: &Config,
        store: Box<dyn KeyValueStore>,
        content: EventContent,
        theme: ThemeSelection,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let card_state = CardState::load(
            store,
            config.cards,
            config.policy,
            config.swipe_threshold,
            config.scroll_debounce(),
        );
        let (card_change_tx, _) = broadcast::channel(100);
        let initial = CountdownSnapshot::compute(
            config.target,
            clock.now(),
            HighlightCycle::new().color(),
            0,
        );
        let (countdown_tx, _) = watch::channel(initial);

        Self {
            target: config.target,
            content,
            theme,
            clock,
            card_state: Arc::new(Mutex::new(card_state)),
            start_time: Instant::now(),
            port: config.port,
            host: config.host.clone(),
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            card_change_tx,
            countdown_tx,
        }
    }

    /// Move the card deck and notify listeners
    pub fn navigate(&self, action: &str, direction: Direction) -> Result<CardSnapshot, String> {
        let mut cards = self.card_state.lock()
            .map_err(|e| format!("Failed to lock card state: {}", e))?;

        let persisted = cards.navigate(direction);
        let snapshot = cards.snapshot();
        drop(cards); // Release the lock early

        info!("{}: card index now {} of {}", action, snapshot.index, snapshot.total);
        self.record_action(action);

        if let Err(e) = self.card_change_tx.send(snapshot) {
            debug!("No listeners for card change: {}", e);
        }

        persisted.map_err(|e| format!("Failed to persist card index: {}", e))?;
        Ok(snapshot)
    }

    /// Navigate if the input produced a direction, otherwise report the
    /// unchanged position
    fn apply(&self, action: &str, direction: Option<Direction>) -> Result<NavOutcome, String> {
        match direction {
            Some(direction) => Ok(NavOutcome {
                accepted: true,
                cards: self.navigate(action, direction)?,
            }),
            None => {
                debug!("{} ignored", action);
                Ok(NavOutcome {
                    accepted: false,
                    cards: self.get_card_snapshot()?,
                })
            }
        }
    }

    /// Handle a touch gesture with the given end-minus-start delta
    pub fn handle_swipe(&self, dx: f64, dy: f64) -> Result<NavOutcome, String> {
        let threshold = self.card_state.lock()
            .map(|cards| cards.swipe_threshold())
            .map_err(|e| format!("Failed to lock card state: {}", e))?;
        self.apply("swipe", swipe_direction(dx, dy, threshold))
    }

    /// Handle a wheel event observed now
    pub fn handle_scroll(&self, delta_y: f64) -> Result<NavOutcome, String> {
        let direction = self.card_state.lock()
            .map(|mut cards| cards.debounce_scroll(delta_y, Instant::now()))
            .map_err(|e| format!("Failed to lock card state: {}", e))?;
        self.apply("scroll", direction)
    }

    /// Handle a tap at `x` on a surface `width` pixels wide
    pub fn handle_click(&self, x: f64, width: f64) -> Result<NavOutcome, String> {
        self.apply("click", click_zone(x, width))
    }

    /// Handle a key press
    pub fn handle_key(&self, key: &str) -> Result<NavOutcome, String> {
        self.apply("key", key_direction(key))
    }

    /// Get current card position
    pub fn get_card_snapshot(&self) -> Result<CardSnapshot, String> {
        self.card_state.lock()
            .map(|cards| cards.snapshot())
            .map_err(|e| format!("Failed to lock card state: {}", e))
    }

    /// Get the snapshot published by the last tick
    pub fn get_countdown(&self) -> CountdownSnapshot {
        self.countdown_tx.borrow().clone()
    }

    /// Publish a new countdown snapshot to watchers
    pub fn publish_countdown(&self, snapshot: CountdownSnapshot) {
        self.countdown_tx.send_replace(snapshot);
    }

    /// Subscribe to card position changes
    pub fn subscribe_cards(&self) -> broadcast::Receiver<CardSnapshot> {
        self.card_change_tx.subscribe()
    }

    /// Subscribe to countdown ticks
    pub fn subscribe_countdown(&self) -> watch::Receiver<CountdownSnapshot> {
        self.countdown_tx.subscribe()
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        } else {
            warn!("Failed to record last action");
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        countdown::{ManualClock, TimeRemaining},
        storage::{MemoryStore, CARD_INDEX_KEY},
    };
    use chrono::TimeZone;
    use clap::Parser;

    fn state_with(args: &[&str], store: MemoryStore) -> AppState {
        let mut argv = vec!["ijtema-countdown"];
        argv.extend_from_slice(args);
        let config = Config::try_parse_from(argv).unwrap();
        let clock = Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2025, 10, 23, 0, 0, 0).unwrap()));
        AppState::new(&config, Box::new(store), EventContent::default(), config.choose_theme(), clock)
    }

    #[test]
    fn initial_countdown_is_computed_at_construction() {
        let state = state_with(&[], MemoryStore::new());
        let countdown = state.get_countdown();
        assert_eq!(
            countdown.remaining,
            TimeRemaining::Counting { days: 1, hours: 0, minutes: 0, seconds: 0 }
        );
        assert_eq!(countdown.ticks, 0);
    }

    #[test]
    fn countdown_publishes_without_any_subscriber() {
        let state = state_with(&[], MemoryStore::new());
        let mut next = state.get_countdown();
        next.ticks = 7;
        state.publish_countdown(next);
        assert_eq!(state.get_countdown().ticks, 7);
    }

    #[test]
    fn navigation_records_last_action_and_broadcasts() {
        let state = state_with(&[], MemoryStore::new());
        let mut rx = state.subscribe_cards();

        let snapshot = state.navigate("next", Direction::Next).unwrap();
        assert_eq!(snapshot.index, 1);
        assert_eq!(rx.try_recv().unwrap().index, 1);
        assert_eq!(state.get_last_action().0.as_deref(), Some("next"));
    }

    #[test]
    fn unmapped_input_is_reported_as_ignored() {
        let state = state_with(&[], MemoryStore::with_entry(CARD_INDEX_KEY, "2"));
        let outcome = state.handle_swipe(5.0, 5.0).unwrap();
        assert!(!outcome.accepted);
        assert_eq!(outcome.cards.index, 2);
        assert_eq!(state.get_last_action().0, None);
    }

    #[test]
    fn second_scroll_inside_window_is_ignored() {
        let state = state_with(&["--scroll-debounce-ms", "60000"], MemoryStore::new());
        assert!(state.handle_scroll(10.0).unwrap().accepted);
        let outcome = state.handle_scroll(10.0).unwrap();
        assert!(!outcome.accepted);
        assert_eq!(outcome.cards.index, 1);
    }

    #[test]
    fn key_and_click_inputs_navigate() {
        let state = state_with(&["--policy", "bounded"], MemoryStore::new());
        assert_eq!(state.handle_key("4").unwrap().cards.index, 3);
        assert_eq!(state.handle_click(99.0, 100.0).unwrap().cards.index, 3);
        assert_eq!(state.handle_click(1.0, 100.0).unwrap().cards.index, 2);
    }
}
