//! AnimeFLV adapter (animeflv.net, Spanish)
//!
//! The home page lists episodes (`/ver/...` hrefs) that are rewritten into
//! anime detail paths; search results already carry `/anime/...` hrefs.

use scraper::Html;

use super::{assemble, ItemPolicy};
use crate::models::{AnimeDetail, AnimeSummary, EpisodeRef};
use crate::normalize::{animeflv_anime_href, strip_synopsis_markup};
use crate::select::{first_attr, first_text, own_attr, sel};

const POLICY: ItemPolicy = ItemPolicy::REQUIRE_LINK;

pub(crate) fn featured(doc: &Html) -> Vec<AnimeSummary> {
    doc.select(&sel("ul.ListEpisodios li"))
        .filter_map(|item| {
            let title = first_text(item, "strong.Title");
            let image = first_attr(item, "span.Image img", &["src", "data-src"]);
            let href = first_attr(item, "a", &["href"]).map(|h| animeflv_anime_href(&h));
            let label = first_text(item, "span.Capi");
            assemble(POLICY, title, image, href, label)
        })
        .collect()
}

pub(crate) fn search_results(doc: &Html) -> Vec<AnimeSummary> {
    doc.select(&sel("ul.ListAnimes li article"))
        .filter_map(|item| {
            let title = first_text(item, "h3.Title");
            let image = first_attr(item, "div.Image figure img", &["src", "data-src"]);
            // Non-episode hrefs pass through the rewrite unchanged
            let href = first_attr(item, "a", &["href"]).map(|h| animeflv_anime_href(&h));
            assemble(POLICY, title, image, href, None)
        })
        .collect()
}

pub(crate) fn episodes(doc: &Html, _base_href: &str) -> Vec<EpisodeRef> {
    doc.select(&sel("ul.ListCaps li a"))
        .filter_map(|anchor| {
            let number = first_text(anchor, "p")?;
            let href = own_attr(anchor, "href")?;
            Some(EpisodeRef::new(number, href))
        })
        .collect()
}

pub(crate) fn detail(doc: &Html) -> AnimeDetail {
    let root = doc.root_element();
    let aliases = first_text(root, "span.TxtAlt").unwrap_or_default();
    let synopsis = first_text(root, "div.Description p")
        .map(|s| strip_synopsis_markup(&s))
        .unwrap_or_default();
    let rating = first_text(root, "span#votes_prmd").unwrap_or_default();
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
    fn test_featured_rewrites_ver_hrefs() {
        let html = r#"<ul class="ListEpisodios">
          <li><a href="/ver/one-piece-1090">
            <span class="Image"><img src="https://animeflv.net/uploads/thumbs/1.jpg"></span>
            <span class="Capi">Episodio 1090</span>
            <strong class="Title">One Piece</strong>
          </a></li>
        </ul>"#;
        let doc = Html::parse_document(html);
        let items = featured(&doc);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].href, "/anime/one-piece");
        assert_eq!(items[0].episode_label.as_deref(), Some("Episodio 1090"));
    }

    #[test]
    fn test_search_results_pass_anime_hrefs_through() {
        let html = r#"<ul class="ListAnimes">
          <li><article>
            <a href="/anime/one-piece">
              <div class="Image"><figure><img src="/uploads/covers/one-piece.jpg"></figure></div>
              <h3 class="Title">One Piece</h3>
            </a>
          </article></li>
          <li><article><h3 class="Title">Linkless</h3></article></li>
        </ul>"#;
        let doc = Html::parse_document(html);
        let items = search_results(&doc);
        // Entries without a link are dropped
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].href, "/anime/one-piece");
    }

    #[test]
    fn test_episodes() {
        let html = r#"<ul class="ListCaps">
          <li><a href="/ver/one-piece-2"><p>Episodio 2</p></a></li>
          <li><a href="/ver/one-piece-1"><p>Episodio 1</p></a></li>
        </ul>"#;
        let doc = Html::parse_document(html);
        let refs = episodes(&doc, "");
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].number, "Episodio 2");
        assert_eq!(refs[0].href, "/ver/one-piece-2");
    }

    #[test]
    fn test_detail() {
        let html = r#"
        <span class="TxtAlt">Wan Pīsu</span>
        <div class="Description"><p>Piratas y tesoros.</p></div>
        <span id="votes_prmd">4.7</span>"#;
        let doc = Html::parse_document(html);
        let detail = detail(&doc);
        assert_eq!(detail.aliases, "Wan Pīsu");
        assert_eq!(detail.synopsis, "Piratas y tesoros.");
        assert_eq!(detail.rating, "4.7");
    }
}
