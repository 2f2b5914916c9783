//! GoGoAnime adapter
//!
//! Listing items missing their primary link are dropped outright, since the
//! category href drives every downstream call. Episode lists are compressed
//! into range anchors ("1-12") and must be expanded into discrete refs.

use scraper::Html;

use super::{assemble, ItemPolicy};
use crate::models::{AnimeDetail, AnimeSummary, EpisodeRef};
use crate::normalize::{gogo_category_href, strip_synopsis_markup};
use crate::select::{first_attr, first_text, own_text, sel};

const POLICY: ItemPolicy = ItemPolicy::REQUIRE_LINK;

pub(crate) fn featured(doc: &Html) -> Vec<AnimeSummary> {
    doc.select(&sel("div.last_episodes ul.items li"))
        .filter_map(|item| {
            let title = first_text(item, "p.name a");
            let image = first_attr(item, "div.img a img", &["src", "data-src"]);
            let href =
                first_attr(item, "div.img a", &["href"]).map(|h| gogo_category_href(&h));
            let label = first_text(item, "p.episode");
            assemble(POLICY, title, image, href, label)
        })
        .collect()
}

pub(crate) fn search_results(doc: &Html) -> Vec<AnimeSummary> {
    // Search results reuse the items grid; hrefs already point at the
    // category page and the rewrite passes them through untouched.
    featured(doc)
}

/// Expand the range anchors of a detail page into discrete episode refs.
///
/// Each anchor in `#episode_page` carries a `"{start}-{end}"` text; every
/// range is expanded to `max(1, start)..=end`, synthesizing hrefs as
/// `"{base_href}-episode-{n}"`. Non-numeric anchors contribute nothing.
pub(crate) fn episodes(doc: &Html, base_href: &str) -> Vec<EpisodeRef> {
    let mut refs = Vec::new();
    for anchor in doc.select(&sel("#episode_page li a")) {
        let Some(text) = own_text(anchor) else {
            continue;
        };
        let Some((start, end)) = parse_range(&text) else {
            continue;
        };
        for n in start.max(1)..=end {
            refs.push(EpisodeRef::new(
                n.to_string(),
                format!("{}-episode-{}", base_href, n),
            ));
        }
    }
    refs.sort_by_key(|e| e.episode_number());
    refs
}

// Real pagination anchors span at most a few hundred episodes; anything
// wider is corrupt markup and must not be expanded.
const MAX_RANGE_SPAN: u32 = 10_000;

fn parse_range(text: &str) -> Option<(u32, u32)> {
    let (start, end) = text.split_once('-')?;
    let start: u32 = start.trim().parse().ok()?;
    let end: u32 = end.trim().parse().ok()?;
    if end.saturating_sub(start) > MAX_RANGE_SPAN {
        return None;
    }
    Some((start, end))
}

pub(crate) fn detail(doc: &Html) -> AnimeDetail {
    let root = doc.root_element();
    let mut aliases = String::new();
    let mut airdate = String::new();
    for line in doc.select(&sel("div.anime_info_body p.type")) {
        let text = line.text().collect::<String>();
        if let Some(value) = text.trim().strip_prefix("Other name:") {
            aliases = value.trim().to_string();
        } else if let Some(value) = text.trim().strip_prefix("Released:") {
            airdate = value.trim().to_string();
        }
    }
    let synopsis = first_text(root, "div.anime_info_body div.description")
        .map(|s| strip_synopsis_markup(&s))
        .unwrap_or_default();
    AnimeDetail {
        aliases,
        synopsis,
        airdate,
        rating: String::new(),
        // Episode refs need the category href to synthesize, which the
        // detail document alone does not carry
        episodes: Vec::new(),
    }
}
