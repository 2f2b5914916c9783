//! AnimeHeaven adapter (animeheaven.me)
//!
//! Poster paths are root-relative and must be absolutized against the site
//! origin.

use scraper::Html;

use super::{assemble, ItemPolicy};
use crate::models::{AnimeDetail, AnimeSummary, EpisodeRef};
use crate::normalize::{absolutize, strip_synopsis_markup};
use crate::select::{first_attr, first_text, own_attr, sel};

const POLICY: ItemPolicy = ItemPolicy::LENIENT;

pub(crate) const IMAGE_BASE: &str = "https://animeheaven.me";

pub(crate) fn featured(doc: &Html) -> Vec<AnimeSummary> {
    doc.select(&sel("div.boldtext div.chart.bc1"))
        .filter_map(|item| {
            let title = first_text(item, "div.chartinfo a.c");
            let image = first_attr(item, "img.coverimg", &["src", "data-src"])
                .map(|p| absolutize(IMAGE_BASE, &p));
            let href = first_attr(item, "div.chartinfo a.c", &["href"]);
            let label = first_text(item, "div.chartep");
            assemble(POLICY, title, image, href, label)
        })
        .collect()
}

pub(crate) fn search_results(doc: &Html) -> Vec<AnimeSummary> {
    doc.select(&sel("div.info3.bc1"))
        .filter_map(|item| {
            let title = first_text(item, "div.similarname a.c");
            let image = first_attr(item, "div.similarimg img.coverimg", &["src", "data-src"])
                .map(|p| absolutize(IMAGE_BASE, &p));
            let href = first_attr(item, "div.similarname a.c", &["href"]);
            assemble(POLICY, title, image, href, None)
        })
        .collect()
}

pub(crate) fn episodes(doc: &Html, _base_href: &str) -> Vec<EpisodeRef> {
    doc.select(&sel("a.ac3"))
        .filter_map(|anchor| {
            let number = first_text(anchor, "div.watch2.bc")?;
            let href = own_attr(anchor, "href")?;
            Some(EpisodeRef::new(number, href))
        })
        .collect()
}

pub(crate) fn detail(doc: &Html) -> AnimeDetail {
    let root = doc.root_element();
    let aliases = first_text(root, "div.infotitlejp.c").unwrap_or_default();
    let synopsis = first_text(root, "div.infodes.c")
        .map(|s| strip_synopsis_markup(&s))
        .unwrap_or_default();
    let airdate = first_text(root, "div.infoyear.c div.c2").unwrap_or_default();
    AnimeDetail {
        aliases,
        synopsis,
        airdate,
        rating: String::new(),
        episodes: episodes(doc, ""),
    }
}
