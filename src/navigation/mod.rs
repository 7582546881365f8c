//! Card navigation
//!
//! This module contains the card index state machine and the normalisation
//! of raw input events (swipes, wheel scrolls, clicks, keys) into directions.

pub mod input;
pub mod policy;

// Re-export main types
pub use input::{click_zone, key_direction, swipe_direction, ScrollDebouncer};
pub use policy::{advance, Direction, NavPolicy};
