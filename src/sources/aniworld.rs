//! AniWorld adapter (aniworld.to, German)

use scraper::Html;

use super::{assemble, ItemPolicy};
use crate::models::{AnimeDetail, AnimeSummary, EpisodeRef};
use crate::normalize::strip_synopsis_markup;
use crate::select::{first_attr, first_text, own_attr, sel};

const POLICY: ItemPolicy = ItemPolicy::LENIENT;

fn parse_covers(doc: &Html) -> Vec<AnimeSummary> {
    doc.select(&sel("div.coverListItem"))
        .filter_map(|item| {
            let title = first_text(item, "h3");
            let image = first_attr(item, "img", &["data-src", "src"]);
            let href = first_attr(item, "a", &["href"]);
            assemble(POLICY, title, image, href, None)
        })
        .collect()
}

pub(crate) fn featured(doc: &Html) -> Vec<AnimeSummary> {
    parse_covers(doc)
}

pub(crate) fn search_results(doc: &Html) -> Vec<AnimeSummary> {
    parse_covers(doc)
}

pub(crate) fn episodes(doc: &Html, _base_href: &str) -> Vec<EpisodeRef> {
    doc.select(&sel("table.seasonEpisodesList tbody tr"))
        .filter_map(|row| {
            let number = own_attr(row, "data-episode-number")
                .or_else(|| first_text(row, "a span"))?;
            let href = first_attr(row, "td.seasonEpisodeTitle a", &["href"])?;
            Some(EpisodeRef::new(number, href))
        })
        .collect()
}

pub(crate) fn detail(doc: &Html) -> AnimeDetail {
    let root = doc.root_element();
    // The full text is stuffed into an attribute, the element body holds a
    // truncated teaser
    let synopsis = first_attr(root, "p.seri_des", &["data-full-description"])
        .or_else(|| first_text(root, "p.seri_des"))
        .map(|s| strip_synopsis_markup(&s))
        .unwrap_or_default();
    AnimeDetail {
        aliases: String::new(),
        synopsis,
        airdate: first_text(root, "div.series-title small span").unwrap_or_default(),
        rating: String::new(),
        episodes: episodes(doc, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured() {
        let html = r#"
        <div class="coverListItem">
          <a href="/anime/stream/kaguya-sama-love-is-war">
            <img data-src="https://aniworld.to/public/img/cover/kaguya.jpg">
            <h3>Kaguya-sama: Love is War</h3>
          </a>
        </div>"#;
        let doc = Html::parse_document(html);
        let items = featured(&doc);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Kaguya-sama: Love is War");
        assert_eq!(items[0].href, "/anime/stream/kaguya-sama-love-is-war");
    }

    #[test]
    fn test_featured_empty_document() {
        let doc = Html::parse_document("<html><body></body></html>");
        assert!(featured(&doc).is_empty());
    }

    #[test]
    fn test_episodes_prefer_row_episode_number() {
        let html = r#"<table class="seasonEpisodesList"><tbody>
          <tr data-episode-number="1">
            <td class="seasonEpisodeTitle"><a href="/anime/stream/kaguya-sama/staffel-1/episode-1"><span>Episode 1</span></a></td>
          </tr>
          <tr>
            <td class="seasonEpisodeTitle"><a href="/anime/stream/kaguya-sama/staffel-1/episode-2"><span>Episode 2</span></a></td>
          </tr>
        </tbody></table>"#;
        let doc = Html::parse_document(html);
        let refs = episodes(&doc, "");
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].number, "1");
        // Fallback path reads the anchor label
        assert_eq!(refs[1].number, "Episode 2");
        assert_eq!(refs[1].episode_number(), 2);
    }

    #[test]
    fn test_detail_reads_full_description_attribute() {
        let html = r#"<p class="seri_des" data-full-description="Two geniuses scheme for a confession.">Two geniuses…</p>"#;
        let doc = Html::parse_document(html);
        assert_eq!(detail(&doc).synopsis, "Two geniuses scheme for a confession.");
    }
}
