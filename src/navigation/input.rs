//! Raw input normalisation
//!
//! Every input source maps onto the same [`Direction`] contract; sources that
//! should not move the deck return `None`.

use std::time::{Duration, Instant};

use super::Direction;

/// Distance in pixels a swipe must exceed
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;
/// Gap a wheel event must exceed after the last accepted one
pub const DEFAULT_SCROLL_DEBOUNCE: Duration = Duration::from_millis(700);

/// Map a touch gesture delta (end minus start) to a direction.
///
/// The dominant axis decides and must move strictly further than
/// `threshold`; swiping up or left reveals the next card.
pub fn swipe_direction(dx: f64, dy: f64, threshold: f64) -> Option<Direction> {
    let delta = if dx.abs() > dy.abs() { dx } else { dy };
    if delta.abs() <= threshold || delta == 0.0 {
        return None;
    }
    if delta < 0.0 {
        Some(Direction::Next)
    } else {
        Some(Direction::Previous)
    }
}

/// Map a tap position to a direction: left third goes back, right third forward
pub fn click_zone(x: f64, width: f64) -> Option<Direction> {
    if width <= 0.0 || !(0.0..=width).contains(&x) {
        return None;
    }
    let third = width / 3.0;
    if x < third {
        Some(Direction::Previous)
    } else if x > width - third {
        Some(Direction::Next)
    } else {
        None
    }
}

/// Map a DOM-style key name to a direction
pub fn key_direction(key: &str) -> Option<Direction> {
    match key {
        "ArrowDown" | "ArrowRight" | "PageDown" | " " | "Space" => Some(Direction::Next),
        "ArrowUp" | "ArrowLeft" | "PageUp" => Some(Direction::Previous),
        _ => {
            let digit = key.parse::<usize>().ok()?;
            (1..=9).contains(&digit).then(|| Direction::Goto(digit - 1))
        }
    }
}

/// Drops wheel events that arrive within the debounce window of the last
/// accepted one
#[derive(Debug, Clone)]
pub struct ScrollDebouncer {
    window: Duration,
    last_accepted: Option<Instant>,
}

impl ScrollDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_accepted: None,
        }
    }

    /// Feed a wheel event observed at `now`
    pub fn accept(&mut self, delta_y: f64, now: Instant) -> Option<Direction> {
        if delta_y == 0.0 {
            return None;
        }
        if let Some(last) = self.last_accepted {
            if now.saturating_duration_since(last) <= self.window {
                return None;
            }
        }
        self.last_accepted = Some(now);
        if delta_y > 0.0 {
            Some(Direction::Next)
        } else {
            Some(Direction::Previous)
        }
    }
}

impl Default for ScrollDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_swipes_are_ignored() {
        assert_eq!(swipe_direction(30.0, 10.0, DEFAULT_SWIPE_THRESHOLD), None);
        assert_eq!(swipe_direction(0.0, -49.9, DEFAULT_SWIPE_THRESHOLD), None);
    }

    #[test]
    fn swipe_must_exceed_threshold() {
        assert_eq!(swipe_direction(0.0, -50.0, DEFAULT_SWIPE_THRESHOLD), None);
        assert_eq!(swipe_direction(50.0, 0.0, DEFAULT_SWIPE_THRESHOLD), None);
        assert_eq!(swipe_direction(0.0, -50.5, DEFAULT_SWIPE_THRESHOLD), Some(Direction::Next));
    }

    #[test]
    fn dominant_axis_decides() {
        assert_eq!(swipe_direction(-80.0, 20.0, 50.0), Some(Direction::Next));
        assert_eq!(swipe_direction(80.0, -20.0, 50.0), Some(Direction::Previous));
        assert_eq!(swipe_direction(10.0, -120.0, 50.0), Some(Direction::Next));
        assert_eq!(swipe_direction(-10.0, 120.0, 50.0), Some(Direction::Previous));
    }

    #[test]
    fn scroll_within_window_is_dropped() {
        let mut debouncer = ScrollDebouncer::default();
        let start = Instant::now();
        assert_eq!(debouncer.accept(5.0, start), Some(Direction::Next));
        assert_eq!(debouncer.accept(5.0, start + Duration::from_millis(300)), None);
        assert_eq!(debouncer.accept(5.0, start + Duration::from_millis(700)), None);
        assert_eq!(
            debouncer.accept(-5.0, start + Duration::from_millis(701)),
            Some(Direction::Previous)
        );
    }

    #[test]
    fn zero_scroll_does_not_arm_window() {
        let mut debouncer = ScrollDebouncer::new(Duration::from_millis(700));
        let start = Instant::now();
        assert_eq!(debouncer.accept(0.0, start), None);
        assert_eq!(debouncer.accept(1.0, start), Some(Direction::Next));
    }

    #[test]
    fn click_zones_split_in_thirds() {
        assert_eq!(click_zone(10.0, 300.0), Some(Direction::Previous));
        assert_eq!(click_zone(150.0, 300.0), None);
        assert_eq!(click_zone(290.0, 300.0), Some(Direction::Next));
        assert_eq!(click_zone(400.0, 300.0), None);
        assert_eq!(click_zone(10.0, 0.0), None);
    }

    #[test]
    fn keys_map_to_directions() {
        assert_eq!(key_direction("ArrowDown"), Some(Direction::Next));
        assert_eq!(key_direction("PageUp"), Some(Direction::Previous));
        assert_eq!(key_direction("3"), Some(Direction::Goto(2)));
        assert_eq!(key_direction("0"), None);
        assert_eq!(key_direction("q"), None);
    }
}
