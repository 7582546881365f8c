//! One-time theme selection

use rand::Rng;
use serde::Serialize;

/// Theme names known to the front end; opaque to this service
pub const DEFAULT_THEMES: [&str; 5] = ["indigo", "gray", "teal", "amber", "zinc"];

/// The available themes and the one picked for this run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeSelection {
    pub themes: Vec<String>,
    pub index: usize,
}

impl ThemeSelection {
    /// Pick a theme once.
    ///
    /// A requested index inside the list wins; otherwise a random entry is
    /// chosen.
    pub fn choose(themes: Vec<String>, requested: Option<usize>) -> Self {
        let index = match requested {
            Some(index) if index < themes.len() => index,
            _ if themes.is_empty() => 0,
            _ => rand::thread_rng().gen_range(0..themes.len()),
        };
        Self { themes, index }
    }

    pub fn current(&self) -> Option<&str> {
        self.themes.get(self.index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn themes() -> Vec<String> {
        DEFAULT_THEMES.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn requested_index_is_honoured() {
        let selection = ThemeSelection::choose(themes(), Some(2));
        assert_eq!(selection.current(), Some("teal"));
    }

    #[test]
    fn out_of_range_request_falls_back_to_random_pick() {
        for _ in 0..20 {
            let selection = ThemeSelection::choose(themes(), Some(42));
            assert!(selection.index < DEFAULT_THEMES.len());
        }
    }

    #[test]
    fn empty_list_has_no_current_theme() {
        let selection = ThemeSelection::choose(Vec::new(), None);
        assert_eq!(selection.current(), None);
    }
}
