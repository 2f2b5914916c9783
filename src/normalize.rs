//! Href, image and text normalization shared by the source adapters
//!
//! Each href rewrite turns a raw scraped link into the canonical path the
//! rest of the system expects. Rewrites pass unmatched input through
//! unchanged and never double-apply.

use regex::Regex;

use crate::models::ScoreBucket;

/// Absolutize an image path against a source origin.
///
/// Absolute URLs are returned as-is, protocol-relative paths get `https:`,
/// everything else is joined onto `base`.
pub fn absolutize(base: &str, path: &str) -> String {
    if path.is_empty() || path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    if let Some(rest) = path.strip_prefix("//") {
        return format!("https://{}", rest);
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// GoGoAnime: episode href -> category href.
///
/// Strips a trailing `-episode-{n}` suffix and prepends `/category`; hrefs
/// that already point at a category page come back unchanged.
pub fn gogo_category_href(href: &str) -> String {
    let stripped = Regex::new(r"-episode-\d+/?$")
        .unwrap()
        .replace(href, "")
        .into_owned();
    if stripped.starts_with("/category/") {
        stripped
    } else {
        format!("/category{}", stripped)
    }
}

/// AnimeFire: episode href -> all-episodes series href.
///
/// Replaces a trailing `/{n}` episode segment with `-todos-os-episodios`.
/// Already-rewritten hrefs are returned unchanged, so the rewrite is
/// idempotent.
pub fn animefire_series_href(href: &str) -> String {
    if href.ends_with("-todos-os-episodios") {
        return href.to_string();
    }
    let re = Regex::new(r"/\d+/?$").unwrap();
    if re.is_match(href) {
        re.replace(href, "-todos-os-episodios").into_owned()
    } else {
        href.to_string()
    }
}

/// HiAnime: strip the `/watch/` prefix and any `?query` suffix
pub fn hianime_detail_href(href: &str) -> String {
    let href = href
        .strip_prefix("/watch/")
        .or_else(|| href.strip_prefix("watch/"))
        .unwrap_or(href);
    href.split('?').next().unwrap_or(href).to_string()
}

/// AnimeFLV: episode href -> anime href.
///
/// Swaps `/ver/` for `/anime/` and strips the trailing hyphenated episode
/// number. Hrefs not pointing at an episode page pass through unchanged.
pub fn animeflv_anime_href(href: &str) -> String {
    if !href.contains("/ver/") {
        return href.to_string();
    }
    let swapped = href.replacen("/ver/", "/anime/", 1);
    Regex::new(r"-\d+/?$")
        .unwrap()
        .replace(&swapped, "")
        .into_owned()
}

/// Strip the synopsis markup leftovers the source sites are known to leak.
///
/// Deliberately narrow: literal substring removal of `<br>`, `<i>` and
/// `</i>`, not tag-aware HTML-to-text conversion.
pub fn strip_synopsis_markup(text: &str) -> String {
    text.replace("<br>", "")
        .replace("<i>", "")
        .replace("</i>", "")
}

/// Weighted average of a score-distribution histogram, formatted to one
/// decimal place. Returns `"N/A"` when the histogram carries no votes.
pub fn average_score(distribution: &[ScoreBucket]) -> String {
    let total_votes: u64 = distribution.iter().map(|b| u64::from(b.amount)).sum();
    if total_votes == 0 {
        return "N/A".to_string();
    }
    let weighted: u64 = distribution
        .iter()
        .map(|b| u64::from(b.score) * u64::from(b.amount))
        .sum();
    format!("{:.1}", weighted as f64 / total_votes as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_absolutize() {
        assert_eq!(
            absolutize("https://animeheaven.me", "/poster.jpg"),
            "https://animeheaven.me/poster.jpg"
        );
        assert_eq!(
            absolutize("https://animeheaven.me/", "cover/naruto.webp"),
            "https://animeheaven.me/cover/naruto.webp"
        );
        assert_eq!(
            absolutize("https://animeheaven.me", "//cdn.example.com/a.jpg"),
            "https://cdn.example.com/a.jpg"
        );
        assert_eq!(
            absolutize("https://animeheaven.me", "https://other.site/a.jpg"),
            "https://other.site/a.jpg"
        );
        assert_eq!(absolutize("https://animeheaven.me", ""), "");
    }

    #[test]
    fn test_gogo_category_href() {
        assert_eq!(gogo_category_href("/naruto-episode-220"), "/category/naruto");
        assert_eq!(gogo_category_href("/naruto"), "/category/naruto");
        // Already canonical hrefs come back unchanged
        assert_eq!(gogo_category_href("/category/naruto"), "/category/naruto");
    }

    #[test]
    fn test_animefire_series_href() {
        assert_eq!(
            animefire_series_href("/animes/one-piece/1"),
            "/animes/one-piece-todos-os-episodios"
        );
        // No episode segment: pass through unchanged
        assert_eq!(animefire_series_href("/animes/one-piece"), "/animes/one-piece");
    }

    #[test]
    fn test_animefire_series_href_idempotent() {
        let once = animefire_series_href("/animes/one-piece/1");
        let twice = animefire_series_href(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_hianime_detail_href() {
        assert_eq!(
            hianime_detail_href("/watch/one-piece-100?ep=2142"),
            "one-piece-100"
        );
        assert_eq!(hianime_detail_href("one-piece-100"), "one-piece-100");
    }

    #[test]
    fn test_animeflv_anime_href() {
        assert_eq!(
            animeflv_anime_href("/ver/one-piece-1090"),
            "/anime/one-piece"
        );
        assert_eq!(animeflv_anime_href("/anime/one-piece"), "/anime/one-piece");
    }

    #[test]
    fn test_strip_synopsis_markup() {
        assert_eq!(strip_synopsis_markup("Hello<br><i>world</i>"), "Helloworld");
        // Only the known leftovers are removed
        assert_eq!(strip_synopsis_markup("a <b>bold</b> claim"), "a <b>bold</b> claim");
    }

    #[test]
    fn test_average_score() {
        let dist = [
            ScoreBucket { score: 70, amount: 10 },
            ScoreBucket { score: 90, amount: 10 },
        ];
        assert_eq!(average_score(&dist), "80.0");
    }

    #[test]
    fn test_average_score_no_votes_is_sentinel() {
        let dist = [
            ScoreBucket { score: 70, amount: 0 },
            ScoreBucket { score: 90, amount: 0 },
        ];
        assert_eq!(average_score(&dist), "N/A");
        assert_eq!(average_score(&[]), "N/A");
    }

    proptest! {
        #[test]
        fn prop_gogo_category_href_idempotent(slug in "[a-z]{1,12}(-[a-z]{1,12}){0,3}", ep in 1u32..2000) {
            let href = format!("/{}-episode-{}", slug, ep);
            let once = gogo_category_href(&href);
            prop_assert_eq!(gogo_category_href(&once), once);
        }

        #[test]
        fn prop_animefire_series_href_idempotent(slug in "[a-z]{1,12}(-[a-z]{1,12}){0,3}", ep in 1u32..2000) {
            let href = format!("/animes/{}/{}", slug, ep);
            let once = animefire_series_href(&href);
            prop_assert_eq!(animefire_series_href(&once), once);
        }

        #[test]
        fn prop_average_score_never_nan(buckets in prop::collection::vec((0u32..=100, 0u32..10_000), 0..20)) {
            let dist: Vec<ScoreBucket> = buckets
                .into_iter()
                .map(|(score, amount)| ScoreBucket { score, amount })
                .collect();
            let out = average_score(&dist);
            prop_assert!(out == "N/A" || out.parse::<f64>().unwrap().is_finite());
        }
    }
}
