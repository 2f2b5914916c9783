//! Kuramanime adapter (kuramanime.boo, Indonesian)

use scraper::Html;

use super::{assemble, ItemPolicy};
use crate::models::{AnimeDetail, AnimeSummary, EpisodeRef};
use crate::normalize::strip_synopsis_markup;
use crate::select::{first_attr, first_text, own_attr, own_text, sel};

const POLICY: ItemPolicy = ItemPolicy::LENIENT;

fn parse_products(doc: &Html) -> Vec<AnimeSummary> {
    doc.select(&sel("div#animeList div.product__item"))
        .filter_map(|item| {
            let title = first_text(item, "div.product__item__text h5 a");
            // Posters are set as a CSS background via data-setbg
            let image = first_attr(item, "div.product__item__pic", &["data-setbg"]);
            let href = first_attr(item, "a", &["href"]);
            let label = first_text(item, "div.ep span");
            assemble(POLICY, title, image, href, label)
        })
        .collect()
}

pub(crate) fn featured(doc: &Html) -> Vec<AnimeSummary> {
    parse_products(doc)
}

pub(crate) fn search_results(doc: &Html) -> Vec<AnimeSummary> {
    parse_products(doc)
}

pub(crate) fn episodes(doc: &Html, _base_href: &str) -> Vec<EpisodeRef> {
    doc.select(&sel("div#episodeListsSection a.btn"))
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
    let synopsis = first_text(root, "div.anime__details__text p")
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_reads_background_posters() {
        let html = r#"<div id="animeList">
          <div class="product__item">
            <a href="/anime/1551/tate-no-yuusha">
              <div class="product__item__pic" data-setbg="https://kuramanime.boo/img/tate.jpg"></div>
            </a>
            <div class="product__item__text">
              <div class="ep"><span>Ep 25 / 25</span></div>
              <h5><a href="/anime/1551/tate-no-yuusha">Tate no Yuusha no Nariagari</a></h5>
            </div>
          </div>
        </div>"#;
        let doc = Html::parse_document(html);
        let items = featured(&doc);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Tate no Yuusha no Nariagari");
        assert_eq!(items[0].image_url, "https://kuramanime.boo/img/tate.jpg");
        assert_eq!(items[0].href, "/anime/1551/tate-no-yuusha");
        assert_eq!(items[0].episode_label.as_deref(), Some("Ep 25 / 25"));
    }

    #[test]
    fn test_featured_ignores_items_outside_anime_list() {
        let html = r#"<div class="trending"><div class="product__item">
            <div class="product__item__text"><h5><a>Sidebar Item</a></h5></div>
        </div></div>"#;
        let doc = Html::parse_document(html);
        assert!(featured(&doc).is_empty());
    }

    #[test]
    fn test_episodes() {
        let html = r#"<div id="episodeListsSection">
          <a class="btn" href="/anime/1551/tate-no-yuusha/episode/1">Ep 1</a>
          <a class="btn" href="/anime/1551/tate-no-yuusha/episode/2">Ep 2</a>
        </div>"#;
        let doc = Html::parse_document(html);
        let refs = episodes(&doc, "");
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[1].number, "Ep 2");
        assert_eq!(refs[1].episode_number(), 2);
    }
}
