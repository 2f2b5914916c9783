//! TokyoInsider adapter (tokyoinsider.com)
//!
//! An old table-layout site: listing rows are bare anchors with no poster
//! markup, so summaries carry an empty image URL. There is no structured
//! detail page worth extracting.

use scraper::Html;

use super::{assemble, ItemPolicy};
use crate::models::{AnimeDetail, AnimeSummary, EpisodeRef};
use crate::select::{first_attr, first_text, own_attr, own_text, sel};

const POLICY: ItemPolicy = ItemPolicy::REQUIRE_LINK;

fn parse_rows(doc: &Html) -> Vec<AnimeSummary> {
    doc.select(&sel("div#inner_page div.c_h2, div#inner_page div.c_h2b"))
        .filter_map(|row| {
            let title = first_text(row, "a");
            let href = first_attr(row, "a", &["href"]);
            assemble(POLICY, title, None, href, None)
        })
        .collect()
}

pub(crate) fn featured(doc: &Html) -> Vec<AnimeSummary> {
    parse_rows(doc)
}

pub(crate) fn search_results(doc: &Html) -> Vec<AnimeSummary> {
    parse_rows(doc)
}

pub(crate) fn episodes(doc: &Html, _base_href: &str) -> Vec<EpisodeRef> {
    doc.select(&sel("div.episode a.download-link"))
        .filter_map(|anchor| {
            let number = own_text(anchor)?;
            let href = own_attr(anchor, "href")?;
            Some(EpisodeRef::new(number, href))
        })
        .collect()
}

pub(crate) fn detail(_doc: &Html) -> AnimeDetail {
    AnimeDetail::default()
}
