//! Static display configuration
//!
//! Event copy and theme choice are fixed at start-up and passed down as
//! plain values.

pub mod event;
pub mod theme;

// Re-export main types
pub use event::{EventContent, UsefulLink};
pub use theme::{ThemeSelection, DEFAULT_THEMES};
