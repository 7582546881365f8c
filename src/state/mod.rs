//! State management module
//!
//! This module contains all state-related structures and their management logic.

pub mod app_state;
pub mod card_state;
pub mod countdown_state;

// Re-export main types
pub use app_state::{AppState, NavOutcome};
pub use card_state::{CardSnapshot, CardState};
pub use countdown_state::CountdownSnapshot;
