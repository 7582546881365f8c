//! Persistence of the last viewed card index

use tracing::warn;

use super::{KeyValueStore, StoreError};

/// Fixed key the card index is stored under
pub const CARD_INDEX_KEY: &str = "lastCardIndex";

/// Read the stored card index.
///
/// Missing, non-numeric and out-of-range values all yield 0.
pub fn load_card_index(store: &dyn KeyValueStore, total: usize) -> usize {
    let Some(raw) = store.get(CARD_INDEX_KEY) else {
        return 0;
    };

    match raw.trim().parse::<usize>() {
        Ok(index) if index < total => index,
        Ok(index) => {
            warn!("Stored card index {} is outside 0..{}, starting at 0", index, total);
            0
        }
        Err(_) => {
            warn!("Stored card index {:?} is not a number, starting at 0", raw);
            0
        }
    }
}

/// Write the card index under [`CARD_INDEX_KEY`]
pub fn save_card_index(store: &mut dyn KeyValueStore, index: usize) -> Result<(), StoreError> {
    store.set(CARD_INDEX_KEY, index.to_string())
}
