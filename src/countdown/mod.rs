//! Countdown calculation
//!
//! This module turns a fixed target instant and the live clock into the
//! remaining days/hours/minutes/seconds shown on the display.

pub mod clock;
pub mod highlight;
pub mod remaining;

// Re-export main types
pub use clock::{Clock, ManualClock, SystemClock};
pub use highlight::HighlightCycle;
pub use remaining::{compute_remaining, CountdownPhase, TimeRemaining, TIMES_UP};
