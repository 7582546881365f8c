//! Card index state and its persistence

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    navigation::{advance, Direction, NavPolicy, ScrollDebouncer},
    storage::{load_card_index, save_card_index, KeyValueStore, StoreError},
};

/// Serializable view of the card deck position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSnapshot {
    pub index: usize,
    pub total: usize,
    pub policy: NavPolicy,
}

/// Owns the current card index and writes every change through to the store
#[derive(Debug)]
pub struct CardState {
    index: usize,
    total: usize,
    policy: NavPolicy,
    swipe_threshold: f64,
    scroll: ScrollDebouncer,
    store: Box<dyn KeyValueStore>,
}

impl CardState {
    /// Restore the last viewed card from `store`, defaulting to the first one
    pub fn load(
        store: Box<dyn KeyValueStore>,
        total: usize,
        policy: NavPolicy,
        swipe_threshold: f64,
        scroll_debounce: Duration,
    ) -> Self {
        let index = load_card_index(store.as_ref(), total);
        debug!("Restored card index {} of {}", index, total);
        Self {
            index,
            total,
            policy,
            swipe_threshold,
            scroll: ScrollDebouncer::new(scroll_debounce),
            store,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn swipe_threshold(&self) -> f64 {
        self.swipe_threshold
    }

    pub fn snapshot(&self) -> CardSnapshot {
        CardSnapshot {
            index: self.index,
            total: self.total,
            policy: self.policy,
        }
    }

    /// Apply a direction and persist the result.
    ///
    /// The in-memory index moves even when the write fails.
    pub fn navigate(&mut self, direction: Direction) -> Result<usize, StoreError> {
        self.index = advance(self.index, direction, self.total, self.policy);
        save_card_index(self.store.as_mut(), self.index)?;
        Ok(self.index)
    }

    /// Run a wheel event through the debouncer
    pub fn debounce_scroll(&mut self, delta_y: f64, now: Instant) -> Option<Direction> {
        self.scroll.accept(delta_y, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, CARD_INDEX_KEY};

    #[derive(Debug)]
    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: String) -> Result<(), StoreError> {
            Err(StoreError::Io {
                path: "nowhere".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            })
        }
    }

    fn cards(store: MemoryStore, policy: NavPolicy) -> CardState {
        CardState::load(Box::new(store), 4, policy, 50.0, Duration::from_millis(700))
    }

    #[test]
    fn starts_from_stored_index() {
        let state = cards(MemoryStore::with_entry(CARD_INDEX_KEY, "3"), NavPolicy::Cyclic);
        assert_eq!(state.index(), 3);
    }

    #[test]
    fn navigation_follows_policy() {
        let mut state = cards(MemoryStore::with_entry(CARD_INDEX_KEY, "3"), NavPolicy::Cyclic);
        assert_eq!(state.navigate(Direction::Next).unwrap(), 0);

        let mut state = cards(MemoryStore::with_entry(CARD_INDEX_KEY, "3"), NavPolicy::Bounded);
        assert_eq!(state.navigate(Direction::Next).unwrap(), 3);
    }

    #[test]
    fn failed_write_still_moves_index() {
        let mut state = CardState::load(
            Box::new(FailingStore),
            4,
            NavPolicy::Cyclic,
            50.0,
            Duration::from_millis(700),
        );
        assert!(state.navigate(Direction::Goto(2)).is_err());
        assert_eq!(state.index(), 2);
    }
}
