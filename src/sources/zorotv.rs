//! ZoroTv adapter
//!
//! Zoro-style film grid markup: `.flw-item` cards with lazy-loaded posters.

use scraper::Html;

use super::{assemble, ItemPolicy};
use crate::models::{AnimeDetail, AnimeSummary, EpisodeRef};
use crate::normalize::strip_synopsis_markup;
use crate::select::{first_attr, first_text, own_attr, sel};

const POLICY: ItemPolicy = ItemPolicy::LENIENT;

fn parse_grid(doc: &Html) -> Vec<AnimeSummary> {
    doc.select(&sel("div.film_list-wrap div.flw-item"))
        .filter_map(|item| {
            let title = first_text(item, "h3.film-name a");
            let image = first_attr(item, "img.film-poster-img", &["data-src", "src"]);
            let href = first_attr(item, "h3.film-name a", &["href"]);
            let label = first_text(item, "div.tick-eps");
            assemble(POLICY, title, image, href, label)
        })
        .collect()
}

pub(crate) fn featured(doc: &Html) -> Vec<AnimeSummary> {
    parse_grid(doc)
}

pub(crate) fn search_results(doc: &Html) -> Vec<AnimeSummary> {
    parse_grid(doc)
}

pub(crate) fn episodes(doc: &Html, _base_href: &str) -> Vec<EpisodeRef> {
    doc.select(&sel("div.ss-list a.ssl-item"))
        .filter_map(|anchor| {
            let number = own_attr(anchor, "data-number")?;
            let href = own_attr(anchor, "href")?;
            Some(EpisodeRef::new(number, href))
        })
        .collect()
}

pub(crate) fn detail(doc: &Html) -> AnimeDetail {
    let root = doc.root_element();
    let aliases = first_attr(root, "h2.film-name", &["data-jname"])
        .or_else(|| first_text(root, "h2.film-name"))
        .unwrap_or_default();
    let synopsis = first_text(root, "div.film-description div.text")
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
