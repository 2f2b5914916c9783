//! Data models produced by the extraction layer
//!
//! These are the uniform records every source adapter normalizes into,
//! serialized in camelCase for the consuming clients.

use serde::{Deserialize, Serialize};

/// A single anime entry from a listing or search results page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnimeSummary {
    /// Display title, non-empty whenever extraction succeeds
    pub title: String,
    /// Poster image URL, absolutized against the source origin when the
    /// markup carries a root-relative path
    pub image_url: String,
    /// Latest-episode badge from the listing markup (e.g. "Ep 12"), where
    /// the source exposes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_label: Option<String>,
    /// Canonicalized detail-page path
    pub href: String,
}

/// A single episode entry from an anime detail page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeRef {
    /// Episode number as scraped; not guaranteed to parse as an integer
    pub number: String,
    /// Playback page path for this episode
    pub href: String,
    /// Direct download URL, for the sources that expose one per episode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

impl EpisodeRef {
    pub fn new(number: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            href: href.into(),
            download_url: None,
        }
    }

    /// Derived integer episode number: every non-digit character is removed
    /// and the remainder parsed, defaulting to 0.
    ///
    /// This parse is intentionally lossy ("Ep 12" -> 12, "12.5" -> 125,
    /// "Special" -> 0); downstream sort and display logic depends on it.
    pub fn episode_number(&self) -> i32 {
        let digits: String = self.number.chars().filter(|c| c.is_ascii_digit()).collect();
        digits.parse().unwrap_or(0)
    }
}

/// Normalized anime detail page data
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnimeDetail {
    /// Alternative titles line, empty when the page has none
    pub aliases: String,
    /// Synopsis text with known markup leftovers stripped
    pub synopsis: String,
    /// Air date string as displayed by the source
    pub airdate: String,
    /// Rating/score string as displayed by the source
    pub rating: String,
    pub episodes: Vec<EpisodeRef>,
}

/// One bar of a score-distribution histogram from a tracker page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreBucket {
    pub score: u32,
    /// Number of votes for this score
    pub amount: u32,
}
