//! AnimeFire adapter (animefire.plus, Portuguese)
//!
//! Listing hrefs end in an episode segment (`/1`) that is rewritten into the
//! site's all-episodes series path. Episode anchors double as download
//! entry points.

use scraper::Html;

use super::{assemble, ItemPolicy};
use crate::models::{AnimeDetail, AnimeSummary, EpisodeRef};
use crate::normalize::{animefire_series_href, strip_synopsis_markup};
use crate::select::{first_attr, first_text, own_attr, own_text, sel};

const POLICY: ItemPolicy = ItemPolicy::LENIENT;

pub(crate) fn featured(doc: &Html) -> Vec<AnimeSummary> {
    doc.select(&sel("div.divCardUltimosEps"))
        .filter_map(|card| {
            let title = first_text(card, "h3.animeTitle");
            let image = first_attr(card, "img.imgAnimes", &["src", "data-src"]);
            let href = first_attr(card, "a", &["href"]).map(|h| animefire_series_href(&h));
            let label = first_text(card, "span.numEp");
            assemble(POLICY, title, image, href, label)
        })
        .collect()
}

pub(crate) fn search_results(doc: &Html) -> Vec<AnimeSummary> {
    // Search results render the same episode cards as the landing page
    featured(doc)
}

pub(crate) fn episodes(doc: &Html, _base_href: &str) -> Vec<EpisodeRef> {
    doc.select(&sel("div.div_video_list a.lEp"))
        .filter_map(|anchor| {
            let number = own_text(anchor)?;
            let href = own_attr(anchor, "href")?;
            // The download page mirrors the watch path
            let download_url = href
                .contains("/animes/")
                .then(|| href.replacen("/animes/", "/download/", 1));
            Some(EpisodeRef {
                number,
                href,
                download_url,
            })
        })
        .collect()
}

pub(crate) fn detail(doc: &Html) -> AnimeDetail {
    let root = doc.root_element();
    let aliases = first_text(root, "div.div_anime_names h6.text-gray").unwrap_or_default();
    let synopsis = first_text(root, "div.divSinopse span.spanAnimeInfo")
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
    fn test_featured_rewrites_episode_hrefs() {
        let html = r#"
        <div class="divCardUltimosEps">
          <a href="/animes/one-piece/1">
            <img class="imgAnimes" data-src="https://animefire.plus/img/one-piece.webp">
            <h3 class="animeTitle">One Piece</h3>
            <span class="numEp">Episódio 1</span>
          </a>
        </div>"#;
        let doc = Html::parse_document(html);
        let items = featured(&doc);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "One Piece");
        assert_eq!(items[0].href, "/animes/one-piece-todos-os-episodios");
        assert_eq!(items[0].episode_label.as_deref(), Some("Episódio 1"));
    }

    #[test]
    fn test_featured_empty_document() {
        let doc = Html::parse_document("<html><body></body></html>");
        assert!(featured(&doc).is_empty());
    }

    #[test]
    fn test_episodes_carry_download_urls() {
        let html = r#"<div class="div_video_list">
          <a class="lEp" href="/animes/one-piece/2">Episódio 2</a>
          <a class="lEp" href="/animes/one-piece/1">Episódio 1</a>
        </div>"#;
        let doc = Html::parse_document(html);
        let refs = episodes(&doc, "");
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].number, "Episódio 2");
        assert_eq!(refs[0].episode_number(), 2);
        assert_eq!(
            refs[0].download_url.as_deref(),
            Some("/download/one-piece/2")
        );
    }

    #[test]
    fn test_detail() {
        let html = r#"
        <div class="div_anime_names">
          <h1>One Piece</h1>
          <h6 class="text-gray">ワンピース</h6>
        </div>
        <div class="divSinopse"><span class="spanAnimeInfo">Piratas em alto mar.</span></div>"#;
        let doc = Html::parse_document(html);
        let detail = detail(&doc);
        assert_eq!(detail.aliases, "ワンピース");
        assert_eq!(detail.synopsis, "Piratas em alto mar.");
    }
}
