//! Durable key-value storage
//!
//! The display persists a single scalar, the last viewed card index, under a
//! fixed key. Stores hold string values so a hand-edited or stale file can be
//! read back without failing.

pub mod card_index;
pub mod file_store;
pub mod memory_store;

use thiserror::Error;

// Re-export main types
pub use card_index::{load_card_index, save_card_index, CARD_INDEX_KEY};
pub use file_store::FileStore;
pub use memory_store::MemoryStore;

/// Errors raised by a storage backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode store contents: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A string key-value store
pub trait KeyValueStore: Send + std::fmt::Debug {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}
