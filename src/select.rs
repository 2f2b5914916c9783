//! Shared HTML selection helpers
//!
//! Thin wrappers over the `scraper` crate capturing the one extraction style
//! every adapter uses: best-effort, per-field, trimmed text and attribute
//! lookup that yields `None` instead of panicking on missing markup.

use scraper::{ElementRef, Html, Selector};

use crate::error::{ExtractError, ExtractResult};

/// Build a queryable tree from a raw response body.
///
/// HTML tokenization is lenient and degrades to a partial tree, so the only
/// rejected input is a blank document.
pub fn parse_document(raw: &str) -> ExtractResult<Html> {
    if raw.trim().is_empty() {
        return Err(ExtractError::MalformedMarkup);
    }
    Ok(Html::parse_document(raw))
}

/// Parse a literal CSS selector. Selectors in this crate are compile-time
/// string literals, so a parse failure is a programmer error.
pub(crate) fn sel(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

/// First matching element's text, trimmed; `None` when absent or blank
pub(crate) fn first_text(scope: ElementRef<'_>, css: &str) -> Option<String> {
    scope
        .select(&sel(css))
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// First matching element's first present attribute out of `attrs`, trimmed
///
/// The fallback chain covers lazy-loading markup (`src` then `data-src`).
pub(crate) fn first_attr(scope: ElementRef<'_>, css: &str, attrs: &[&str]) -> Option<String> {
    scope
        .select(&sel(css))
        .next()
        .and_then(|el| attrs.iter().find_map(|name| el.value().attr(name)))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Element's own trimmed text; `None` when blank
pub(crate) fn own_text(el: ElementRef<'_>) -> Option<String> {
    let text = el.text().collect::<String>().trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Element's own attribute, trimmed; `None` when absent or blank
pub(crate) fn own_attr(el: ElementRef<'_>, name: &str) -> Option<String> {
    el.value()
        .attr(name)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
