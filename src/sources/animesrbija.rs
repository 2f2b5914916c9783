//! AnimeSRBIJA adapter (animesrbija.com, Serbian)
//!
//! Poster paths are root-relative and absolutized against the site origin.

use scraper::Html;

use super::{assemble, ItemPolicy};
use crate::models::{AnimeDetail, AnimeSummary, EpisodeRef};
use crate::normalize::{absolutize, strip_synopsis_markup};
use crate::select::{first_attr, first_text, sel};

const POLICY: ItemPolicy = ItemPolicy::LENIENT;

pub(crate) const IMAGE_BASE: &str = "https://www.animesrbija.com";

fn parse_items(doc: &Html) -> Vec<AnimeSummary> {
    doc.select(&sel("div.ani-wrap div.ani-item"))
        .filter_map(|item| {
            let title = first_text(item, "h3.ani-title");
            let image = first_attr(item, "img", &["src", "data-src"])
                .map(|p| absolutize(IMAGE_BASE, &p));
            let href = first_attr(item, "a", &["href"]);
            assemble(POLICY, title, image, href, None)
        })
        .collect()
}

pub(crate) fn featured(doc: &Html) -> Vec<AnimeSummary> {
    parse_items(doc)
}

pub(crate) fn search_results(doc: &Html) -> Vec<AnimeSummary> {
    parse_items(doc)
}

pub(crate) fn episodes(doc: &Html, _base_href: &str) -> Vec<EpisodeRef> {
    doc.select(&sel("div.anime-episodes-holder div.anime-episode-item"))
        .filter_map(|item| {
            let number = first_text(item, "span.anime-episode-num")?;
            let href = first_attr(item, "a", &["href"])?;
            Some(EpisodeRef::new(number, href))
        })
        .collect()
}

pub(crate) fn detail(doc: &Html) -> AnimeDetail {
    let root = doc.root_element();
    let aliases = first_text(root, "h3.anime-eng-name").unwrap_or_default();
    let synopsis = first_text(root, "div.anime-description")
        .map(|s| strip_synopsis_markup(&s))
        .unwrap_or_default();
    AnimeDetail {
        aliases,
        synopsis,
        airdate: String::new(),
        rating: String::new(),
        episodes: episodes(doc, ""),
    }
}
