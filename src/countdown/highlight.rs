//! Cosmetic highlight colour rotation for the countdown digits

/// Highlight colours cycled once per tick
pub const HIGHLIGHT_COLORS: [&str; 4] = ["yellow", "teal", "pink", "orange"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighlightCycle {
    index: usize,
}

impl HighlightCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn color(&self) -> &'static str {
        HIGHLIGHT_COLORS[self.index]
    }

    /// Move to the next colour, wrapping after the last one
    pub fn advance(&mut self) -> &'static str {
        self.index = (self.index + 1) % HIGHLIGHT_COLORS.len();
        self.color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_through_all_colors() {
        let mut cycle = HighlightCycle::new();
        assert_eq!(cycle.color(), "yellow");
        assert_eq!(cycle.advance(), "teal");
        assert_eq!(cycle.advance(), "pink");
        assert_eq!(cycle.advance(), "orange");
        assert_eq!(cycle.advance(), "yellow");
        assert_eq!(cycle.index(), 0);
    }
}
