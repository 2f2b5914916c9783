//! JKanime adapter (jkanime.net, Spanish)

use scraper::Html;

use super::{assemble, ItemPolicy};
use crate::models::{AnimeDetail, AnimeSummary, EpisodeRef};
use crate::normalize::strip_synopsis_markup;
use crate::select::{first_attr, first_text, own_attr, own_text, sel};

const POLICY: ItemPolicy = ItemPolicy::LENIENT;

fn parse_items(doc: &Html) -> Vec<AnimeSummary> {
    doc.select(&sel("div.anime__item"))
        .filter_map(|item| {
            let title = first_text(item, "div.anime__item__text h5 a");
            let image = first_attr(item, "div.anime__item__pic", &["data-setbg"]);
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
    doc.select(&sel("div.anime__pagination a.numbers"))
        .filter_map(|anchor| {
            let number = own_text(anchor)?;
            let href = own_attr(anchor, "href")?;
            Some(EpisodeRef::new(number, href))
        })
        .collect()
}

pub(crate) fn detail(doc: &Html) -> AnimeDetail {
    let root = doc.root_element();
    let aliases = first_text(root, "div.anime__details__title span").unwrap_or_default();
    let synopsis = first_text(root, "p.tab.sinopsis")
        .map(|s| strip_synopsis_markup(&s))
        .unwrap_or_default();
    let mut airdate = String::new();
    for item in doc.select(&sel("ul.anime__details__list li")) {
        let text = item.text().collect::<String>();
        if let Some(value) = text.trim().strip_prefix("Emitido:") {
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
