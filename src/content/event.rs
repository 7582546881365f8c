//! Event copy shown on the cards

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsefulLink {
    pub label: String,
    pub href: String,
}

/// Textual content of the display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventContent {
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub location: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub links: Vec<UsefulLink>,
    #[serde(default)]
    pub tagline: Option<String>,
}

impl EventContent {
    /// Load content from a JSON document
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read event content from {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("failed to parse event content from {}", path.display()))
    }

    /// Hashtags rendered with their leading `#`
    pub fn hashtag_labels(&self) -> Vec<String> {
        self.hashtags.iter().map(|tag| format!("#{}", tag)).collect()
    }
}

impl Default for EventContent {
    fn default() -> Self {
        let link = |label: &str, href: &str| UsefulLink {
            label: label.to_string(),
            href: href.to_string(),
        };

        Self {
            title: "Salana Ijtema".to_string(),
            subtitle: "Majlis Ansarullah Bharat".to_string(),
            date: "24 | 25 | 26 Oct 2025".to_string(),
            location: "Qadian, Punjab, India".to_string(),
            hashtags: vec![
                "SalanaIjtema".to_string(),
                "Ansarullah".to_string(),
                "Qadian".to_string(),
            ],
            links: vec![
                link("ansarullahbharat.in", "https://ansarullahbharat.in"),
                link("ahmadiyyamuslimjamaat.in", "https://ahmadiyyamuslimjamaat.in/"),
                link("www.alislam.org", "https://www.alislam.org/"),
                link("lightofislam.in", "https://lightofislam.in/"),
                link("akhbarbadr.in", "https://akhbarbadr.in/"),
            ],
            tagline: Some(
                "Mark your calendars for a weekend of spiritual enlightenment and brotherhood."
                    .to_string(),
            ),
        }
    }
}
