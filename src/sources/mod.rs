//! Per-source extraction adapters
//!
//! One module per supported site. Each adapter is a set of pure functions
//! from a parsed document (or raw JSON payload) to the uniform records in
//! [`crate::models`], bound to the registry in [`crate::source`].

pub mod anilibria;
pub mod anime3rb;
pub mod animefire;
pub mod animeflv;
pub mod animeheaven;
pub mod animesrbija;
pub mod animeunity;
pub mod animeworld;
pub mod aniworld;
pub mod anivibe;
pub mod gogoanime;
pub mod hianime;
pub mod jkanime;
pub mod kuramanime;
pub mod tokyoinsider;
pub mod zorotv;

use crate::models::AnimeSummary;

/// Which fields an adapter treats as grounds for dropping an item.
///
/// Sites differ on drop-vs-default handling; the policy makes each
/// adapter's contract explicit instead of burying it in control flow. A
/// title is always required so that no half-empty record is ever emitted.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ItemPolicy {
    pub require_href: bool,
    pub require_image: bool,
}

impl ItemPolicy {
    /// Missing secondary fields default to empty strings
    pub(crate) const LENIENT: ItemPolicy = ItemPolicy {
        require_href: false,
        require_image: false,
    };

    /// An item without its primary link is dropped outright
    pub(crate) const REQUIRE_LINK: ItemPolicy = ItemPolicy {
        require_href: true,
        require_image: false,
    };
}

/// Assemble one summary record under an adapter's drop policy.
///
/// Returns `None` when a required field is missing, so adapters can filter
/// those items out without aborting the rest of the batch.
pub(crate) fn assemble(
    policy: ItemPolicy,
    title: Option<String>,
    image: Option<String>,
    href: Option<String>,
    episode_label: Option<String>,
) -> Option<AnimeSummary> {
    let title = title?;
    if policy.require_href && href.is_none() {
        return None;
    }
    if policy.require_image && image.is_none() {
        return None;
    }
    Some(AnimeSummary {
        title,
        image_url: image.unwrap_or_default(),
        episode_label,
        href: href.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_always_requires_title() {
        let item = assemble(
            ItemPolicy::LENIENT,
            None,
            Some("img.jpg".to_string()),
            Some("/a".to_string()),
            None,
        );
        assert!(item.is_none());
    }

    #[test]
    fn test_assemble_lenient_defaults_missing_fields() {
        let item = assemble(ItemPolicy::LENIENT, Some("Bleach".to_string()), None, None, None)
            .unwrap();
        assert_eq!(item.title, "Bleach");
        assert_eq!(item.image_url, "");
        assert_eq!(item.href, "");
        assert_eq!(item.episode_label, None);
    }

    #[test]
    fn test_assemble_require_link_drops_item() {
        let item = assemble(
            ItemPolicy::REQUIRE_LINK,
            Some("Bleach".to_string()),
            Some("img.jpg".to_string()),
            None,
            None,
        );
        assert!(item.is_none());
    }
}
