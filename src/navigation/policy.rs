//! Navigation policies and the index transition function

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How next/previous behave at either end of the card sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum NavPolicy {
    /// Saturate at the first and last card
    Bounded,
    /// Wrap around modulo the card count
    #[default]
    Cyclic,
}

/// A normalised navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Next,
    Previous,
    Goto(usize),
}

/// Compute the card index that follows `current` for the given request.
///
/// `Goto` clamps to the last card under both policies. An empty deck always
/// yields 0.
pub fn advance(current: usize, direction: Direction, total: usize, policy: NavPolicy) -> usize {
    if total == 0 {
        return 0;
    }
    let last = total - 1;
    let current = current.min(last);

    match (direction, policy) {
        (Direction::Goto(n), _) => n.min(last),
        (Direction::Next, NavPolicy::Bounded) => (current + 1).min(last),
        (Direction::Previous, NavPolicy::Bounded) => current.saturating_sub(1),
        (Direction::Next, NavPolicy::Cyclic) => (current + 1) % total,
        (Direction::Previous, NavPolicy::Cyclic) => (current + total - 1) % total,
    }
}

impl std::fmt::Display for NavPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bounded => write!(f, "bounded"),
            Self::Cyclic => write!(f, "cyclic"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOTAL: usize = 4;

    #[test]
    fn cyclic_wraps_at_both_ends() {
        assert_eq!(advance(TOTAL - 1, Direction::Next, TOTAL, NavPolicy::Cyclic), 0);
        assert_eq!(advance(0, Direction::Previous, TOTAL, NavPolicy::Cyclic), TOTAL - 1);
    }

    #[test]
    fn bounded_saturates_at_both_ends() {
        assert_eq!(advance(TOTAL - 1, Direction::Next, TOTAL, NavPolicy::Bounded), TOTAL - 1);
        assert_eq!(advance(0, Direction::Previous, TOTAL, NavPolicy::Bounded), 0);
    }

    #[test]
    fn steps_inside_the_deck() {
        for policy in [NavPolicy::Bounded, NavPolicy::Cyclic] {
            assert_eq!(advance(1, Direction::Next, TOTAL, policy), 2);
            assert_eq!(advance(2, Direction::Previous, TOTAL, policy), 1);
        }
    }

    #[test]
    fn goto_clamps_to_last_card() {
        assert_eq!(advance(0, Direction::Goto(2), TOTAL, NavPolicy::Cyclic), 2);
        assert_eq!(advance(0, Direction::Goto(9), TOTAL, NavPolicy::Cyclic), TOTAL - 1);
        assert_eq!(advance(3, Direction::Goto(9), TOTAL, NavPolicy::Bounded), TOTAL - 1);
    }

    #[test]
    fn empty_deck_stays_at_zero() {
        assert_eq!(advance(0, Direction::Next, 0, NavPolicy::Cyclic), 0);
        assert_eq!(advance(5, Direction::Previous, 0, NavPolicy::Bounded), 0);
    }

    #[test]
    fn single_card_never_moves() {
        for policy in [NavPolicy::Bounded, NavPolicy::Cyclic] {
            assert_eq!(advance(0, Direction::Next, 1, policy), 0);
            assert_eq!(advance(0, Direction::Previous, 1, policy), 0);
        }
    }

    #[test]
    fn result_always_in_range() {
        for policy in [NavPolicy::Bounded, NavPolicy::Cyclic] {
            for current in 0..10 {
                for direction in [Direction::Next, Direction::Previous, Direction::Goto(current * 2)] {
                    assert!(advance(current, direction, TOTAL, policy) < TOTAL);
                }
            }
        }
    }
}
