//! Ijtema Countdown - A state-managed HTTP server for the Salana Ijtema display
//!
//! This library provides the countdown to the event start, the card deck
//! navigation with its persisted position, and the HTTP surface the page
//! front end talks to.

pub mod api;
pub mod config;
pub mod content;
pub mod countdown;
pub mod navigation;
pub mod state;
pub mod storage;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use countdown::{compute_remaining, TimeRemaining};
pub use navigation::{advance, Direction, NavPolicy};
pub use state::AppState;
pub use utils::signals::shutdown_signal;
