//! AniVibe adapter (anivibe.net)
//!
//! The site runs a stock WordPress anime theme: `article.bs` cards inside a
//! `div.listupd` grid and an `eplister` episode list on detail pages.

use scraper::Html;

use super::{assemble, ItemPolicy};
use crate::models::{AnimeDetail, AnimeSummary, EpisodeRef};
use crate::normalize::strip_synopsis_markup;
use crate::select::{first_attr, first_text, sel};

const POLICY: ItemPolicy = ItemPolicy::LENIENT;

fn parse_cards(doc: &Html) -> Vec<AnimeSummary> {
    doc.select(&sel("div.listupd article.bs"))
        .filter_map(|card| {
            let title = first_text(card, "div.tt");
            let image = first_attr(card, "img", &["src", "data-src"]);
            let href = first_attr(card, "a", &["href"]);
            let label = first_text(card, "span.epx");
            assemble(POLICY, title, image, href, label)
        })
        .collect()
}

pub(crate) fn featured(doc: &Html) -> Vec<AnimeSummary> {
    parse_cards(doc)
}

pub(crate) fn search_results(doc: &Html) -> Vec<AnimeSummary> {
    parse_cards(doc)
}

pub(crate) fn episodes(doc: &Html, _base_href: &str) -> Vec<EpisodeRef> {
    doc.select(&sel("div.eplister ul li"))
        .filter_map(|item| {
            let number = first_text(item, "div.epl-num")?;
            let href = first_attr(item, "a", &["href"])?;
            Some(EpisodeRef::new(number, href))
        })
        .collect()
}

pub(crate) fn detail(doc: &Html) -> AnimeDetail {
    let root = doc.root_element();
    let aliases = first_text(root, "span.alter").unwrap_or_default();
    let synopsis = first_text(root, "div.synp div.entry-content")
        .map(|s| strip_synopsis_markup(&s))
        .unwrap_or_default();
    let mut airdate = String::new();
    for span in doc.select(&sel("div.spe span")) {
        let text = span.text().collect::<String>();
        if let Some(value) = text.trim().strip_prefix("Released:") {
            airdate = value.trim().to_string();
        }
    }
    AnimeDetail {
        aliases,
        synopsis,
        airdate,
        rating: String::new(),
        episodes: episodes(doc, ""),
    }
}
