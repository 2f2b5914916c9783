//! AnimeWorld adapter (animeworld.so, Italian)

use scraper::Html;

use super::{assemble, ItemPolicy};
use crate::models::{AnimeDetail, AnimeSummary, EpisodeRef};
use crate::normalize::strip_synopsis_markup;
use crate::select::{first_attr, first_text, own_attr, own_text, sel};

const POLICY: ItemPolicy = ItemPolicy::LENIENT;

pub(crate) fn featured(doc: &Html) -> Vec<AnimeSummary> {
    doc.select(&sel("div.film-list div.item"))
        .filter_map(|item| {
            let title = first_text(item, "a.name");
            let image = first_attr(item, "a.poster img", &["src", "data-src"]);
            let href = first_attr(item, "a.poster", &["href"]);
            let label = first_text(item, "div.ep");
            assemble(POLICY, title, image, href, label)
        })
        .collect()
}

pub(crate) fn search_results(doc: &Html) -> Vec<AnimeSummary> {
    // The search page renders the same film-list grid as the listings
    featured(doc)
}

pub(crate) fn episodes(doc: &Html, _base_href: &str) -> Vec<EpisodeRef> {
    doc.select(&sel("div.server ul.episodes li.episode a"))
        .filter_map(|anchor| {
            let number = own_text(anchor)?;
            let href = own_attr(anchor, "href")?;
            Some(EpisodeRef::new(number, href))
        })
        .collect()
}

pub(crate) fn detail(doc: &Html) -> AnimeDetail {
    let root = doc.root_element();
    let aliases = first_attr(root, "h1.title", &["data-jtitle"]).unwrap_or_default();
    let synopsis = first_text(root, "div.desc div.long")
        .or_else(|| first_text(root, "div.desc"))
        .map(|s| strip_synopsis_markup(&s))
        .unwrap_or_default();

    // The info box is a dt/dd definition list
    let mut airdate = String::new();
    let mut rating = String::new();
    let labels: Vec<String> = doc
        .select(&sel("div.info div.row dt"))
        .map(|dt| dt.text().collect::<String>().trim().to_string())
        .collect();
    let values: Vec<String> = doc
        .select(&sel("div.info div.row dd"))
        .map(|dd| dd.text().collect::<String>().trim().to_string())
        .collect();
    for (label, value) in labels.iter().zip(values.iter()) {
        if label.starts_with("Data di Uscita") {
            airdate = value.clone();
        } else if label.starts_with("Voto") {
            rating = value.clone();
        }
    }

    AnimeDetail {
        aliases,
        synopsis,
        airdate,
        rating,
        episodes: episodes(doc, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
    <div class="film-list">
      <div class="item">
        <a class="poster" href="/play/one-piece.qzG-LE">
          <img src="https://img.animeworld.so/one-piece.jpg">
        </a>
        <a class="name" href="/play/one-piece.qzG-LE">One Piece</a>
        <div class="ep">Ep 1090</div>
      </div>
      <div class="item">
        <a class="poster" href="/play/naruto.4avc"><img data-src="https://img.animeworld.so/naruto.jpg"></a>
        <a class="name" href="/play/naruto.4avc">Naruto</a>
      </div>
    </div>"#;

    #[test]
    fn test_featured() {
        let doc = Html::parse_document(LISTING);
        let items = featured(&doc);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "One Piece");
        assert_eq!(items[0].image_url, "https://img.animeworld.so/one-piece.jpg");
        assert_eq!(items[0].href, "/play/one-piece.qzG-LE");
        assert_eq!(items[0].episode_label.as_deref(), Some("Ep 1090"));
        // Lazy-loaded poster comes from data-src
        assert_eq!(items[1].image_url, "https://img.animeworld.so/naruto.jpg");
        assert_eq!(items[1].episode_label, None);
    }

    #[test]
    fn test_featured_irrelevant_document() {
        let doc = Html::parse_document("<div class='unrelated'><p>nothing</p></div>");
        assert!(featured(&doc).is_empty());
    }

    #[test]
    fn test_episodes_one_anchor_per_episode() {
        let html = r#"<div class="server"><ul class="episodes">
            <li class="episode"><a href="/play/one-piece.qzG-LE/ep-1">1</a></li>
            <li class="episode"><a href="/play/one-piece.qzG-LE/ep-2">2</a></li>
            <li class="episode"><a>3</a></li>
        </ul></div>"#;
        let doc = Html::parse_document(html);
        let refs = episodes(&doc, "");
        // The anchor without an href is dropped
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].number, "1");
        assert_eq!(refs[1].href, "/play/one-piece.qzG-LE/ep-2");
    }

    #[test]
    fn test_detail() {
        let html = r#"
        <h1 class="title" data-jtitle="ワンピース">One Piece</h1>
        <div class="info">
          <div class="row">
            <dt>Data di Uscita:</dt><dd>20 Ottobre 1999</dd>
            <dt>Voto:</dt><dd>9.12 / 10</dd>
          </div>
        </div>
        <div class="desc"><div class="long">Monkey D. Luffy sets sail.</div></div>"#;
        let doc = Html::parse_document(html);
        let detail = detail(&doc);
        assert_eq!(detail.aliases, "ワンピース");
        assert_eq!(detail.airdate, "20 Ottobre 1999");
        assert_eq!(detail.rating, "9.12 / 10");
        assert_eq!(detail.synopsis, "Monkey D. Luffy sets sail.");
    }
}
