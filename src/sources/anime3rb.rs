//! Anime3rb adapter (anime3rb.com, Arabic)

use scraper::Html;

use super::{assemble, ItemPolicy};
use crate::models::{AnimeDetail, AnimeSummary, EpisodeRef};
use crate::normalize::strip_synopsis_markup;
use crate::select::{first_attr, first_text, own_attr, sel};

const POLICY: ItemPolicy = ItemPolicy::LENIENT;

fn parse_cards(doc: &Html) -> Vec<AnimeSummary> {
    doc.select(&sel("div.anime-card"))
        .filter_map(|card| {
            let title = first_text(card, "h2.anime-title");
            let image = first_attr(card, "img", &["src", "data-src"]);
            let href = first_attr(card, "a", &["href"]);
            assemble(POLICY, title, image, href, None)
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
    doc.select(&sel("div.episodes-list a.episode-link"))
        .filter_map(|anchor| {
            let number = first_text(anchor, "span.episode-number")?;
            let href = own_attr(anchor, "href")?;
            Some(EpisodeRef::new(number, href))
        })
        .collect()
}

pub(crate) fn detail(doc: &Html) -> AnimeDetail {
    let root = doc.root_element();
    let aliases = first_text(root, "h2.alt-title").unwrap_or_default();
    let synopsis = first_text(root, "p.anime-story")
        .map(|s| strip_synopsis_markup(&s))
        .unwrap_or_default();
    let rating = first_text(root, "span.rating-text").unwrap_or_default();
    AnimeDetail {
        aliases,
        synopsis,
        airdate: String::new(),
        rating,
        episodes: episodes(doc, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured() {
        let html = r#"
        <div class="anime-card">
          <a href="https://anime3rb.com/titles/attack-on-titan">
            <img src="https://anime3rb.com/storage/posters/aot.webp">
            <h2 class="anime-title">هجوم العمالقة</h2>
          </a>
        </div>"#;
        let doc = Html::parse_document(html);
        let items = featured(&doc);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "هجوم العمالقة");
        assert_eq!(items[0].href, "https://anime3rb.com/titles/attack-on-titan");
    }

    #[test]
    fn test_featured_empty_document() {
        let doc = Html::parse_document("<html><body></body></html>");
        assert!(featured(&doc).is_empty());
    }

    #[test]
    fn test_episodes() {
        let html = r#"<div class="episodes-list">
          <a class="episode-link" href="/episode/attack-on-titan/1"><span class="episode-number">الحلقة 1</span></a>
          <a class="episode-link" href="/episode/attack-on-titan/2"><span class="episode-number">الحلقة 2</span></a>
        </div>"#;
        let doc = Html::parse_document(html);
        let refs = episodes(&doc, "");
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].episode_number(), 1);
        assert_eq!(refs[1].href, "/episode/attack-on-titan/2");
    }

    #[test]
    fn test_detail() {
        let html = r#"
        <h2 class="alt-title">Shingeki no Kyojin</h2>
        <p class="anime-story">آخر معاقل البشرية.</p>
        <span class="rating-text">9.2</span>"#;
        let doc = Html::parse_document(html);
        let detail = detail(&doc);
        assert_eq!(detail.aliases, "Shingeki no Kyojin");
        assert_eq!(detail.rating, "9.2");
    }
}
