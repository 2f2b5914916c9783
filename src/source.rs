//! Source registry: the closed set of supported sites and their dispatch
//!
//! Each variant binds a site's static configuration (listing URL, search URL
//! template, image origin, payload kind) to its extraction functions. The
//! set is closed on purpose: resolving an unknown identifier is an error,
//! never a silent fallback to a default site.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ExtractError, ExtractResult, ParseOutcome};
use crate::models::{AnimeDetail, AnimeSummary, EpisodeRef};
use crate::select::parse_document;
use crate::sources::{
    anilibria, anime3rb, animefire, animeflv, animeheaven, animesrbija, animeunity, animeworld,
    aniworld, anivibe, gogoanime, hianime, jkanime, kuramanime, tokyoinsider, zorotv,
};

/// Default origin of the HiAnime aggregator API. The aggregator is
/// self-hosted, so no fixed public instance exists; deployments replace this
/// origin with their own.
pub const HIANIME_API_BASE: &str = "https://aniwatch-api.example.com";

/// What a source serves its data as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Html,
    Json,
}

/// A supported streaming site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    AnimeWorld,
    GoGoAnime,
    AnimeHeaven,
    AnimeFire,
    Kuramanime,
    JKanime,
    Anime3rb,
    HiAnime,
    ZoroTv,
    AniLibria,
    #[serde(rename = "AnimeSRBIJA")]
    AnimeSrbija,
    AniWorld,
    TokyoInsider,
    AniVibe,
    AnimeUnity,
    #[serde(rename = "AnimeFLV")]
    AnimeFlv,
}

impl Source {
    /// Every supported source, for settings enumeration
    pub const ALL: [Source; 16] = [
        Source::AnimeWorld,
        Source::GoGoAnime,
        Source::AnimeHeaven,
        Source::AnimeFire,
        Source::Kuramanime,
        Source::JKanime,
        Source::Anime3rb,
        Source::HiAnime,
        Source::ZoroTv,
        Source::AniLibria,
        Source::AnimeSrbija,
        Source::AniWorld,
        Source::TokyoInsider,
        Source::AniVibe,
        Source::AnimeUnity,
        Source::AnimeFlv,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::AnimeWorld => "AnimeWorld",
            Source::GoGoAnime => "GoGoAnime",
            Source::AnimeHeaven => "AnimeHeaven",
            Source::AnimeFire => "AnimeFire",
            Source::Kuramanime => "Kuramanime",
            Source::JKanime => "JKanime",
            Source::Anime3rb => "Anime3rb",
            Source::HiAnime => "HiAnime",
            Source::ZoroTv => "ZoroTv",
            Source::AniLibria => "AniLibria",
            Source::AnimeSrbija => "AnimeSRBIJA",
            Source::AniWorld => "AniWorld",
            Source::TokyoInsider => "TokyoInsider",
            Source::AniVibe => "AniVibe",
            Source::AnimeUnity => "AnimeUnity",
            Source::AnimeFlv => "AnimeFLV",
        }
    }

    /// Listing/home page URL
    pub fn base_url(&self) -> &'static str {
        match self {
            Source::AnimeWorld => "https://animeworld.so",
            Source::GoGoAnime => "https://anitaku.to",
            Source::AnimeHeaven => "https://animeheaven.me",
            Source::AnimeFire => "https://animefire.plus",
            Source::Kuramanime => "https://kuramanime.boo",
            Source::JKanime => "https://jkanime.net",
            Source::Anime3rb => "https://anime3rb.com",
            Source::HiAnime => "https://hianime.to",
            Source::ZoroTv => "https://zorotv.com.in",
            Source::AniLibria => "https://api.anilibria.tv",
            Source::AnimeSrbija => "https://www.animesrbija.com",
            Source::AniWorld => "https://aniworld.to",
            Source::TokyoInsider => "https://www.tokyoinsider.com",
            Source::AniVibe => "https://anivibe.net",
            Source::AnimeUnity => "https://www.animeunity.to",
            Source::AnimeFlv => "https://www3.animeflv.net",
        }
    }

    /// Search URL for a user query, with the query percent-encoded
    pub fn search_url(&self, query: &str) -> String {
        let q = urlencoding::encode(query);
        match self {
            Source::AnimeWorld => format!("{}/search?keyword={}", self.base_url(), q),
            Source::GoGoAnime => format!("{}/search.html?keyword={}", self.base_url(), q),
            Source::AnimeHeaven => format!("{}/search.php?s={}", self.base_url(), q),
            Source::AnimeFire => format!("{}/pesquisar/{}", self.base_url(), q),
            Source::Kuramanime => format!("{}/anime?search={}", self.base_url(), q),
            Source::JKanime => format!("{}/buscar/{}", self.base_url(), q),
            Source::Anime3rb => format!("{}/search?q={}", self.base_url(), q),
            // HiAnime goes through a self-hosted aggregator API, so the host
            // is deployment-specific; callers swap HIANIME_API_BASE's origin
            // for their own instance.
            Source::HiAnime => format!("{}/api/v2/hianime/search?q={}", HIANIME_API_BASE, q),
            Source::ZoroTv => format!("{}/?s={}", self.base_url(), q),
            Source::AniLibria => format!("{}/v3/title/search?search={}", self.base_url(), q),
            Source::AnimeSrbija => format!("{}/filter?search={}", self.base_url(), q),
            Source::AniWorld => format!("{}/search?q={}", self.base_url(), q),
            Source::TokyoInsider => {
                format!("{}/anime/search?k={}", self.base_url(), q)
            }
            Source::AniVibe => format!("{}/?s={}", self.base_url(), q),
            Source::AnimeUnity => format!("{}/archivio?title={}", self.base_url(), q),
            Source::AnimeFlv => format!("{}/browse?q={}", self.base_url(), q),
        }
    }

    /// Origin used to absolutize root-relative poster paths, for the sources
    /// known to emit them. These are the same origins the adapters prefix
    /// with, surfaced so callers can resolve paths of their own.
    pub fn image_base(&self) -> Option<&'static str> {
        match self {
            Source::AnimeHeaven => Some(animeheaven::IMAGE_BASE),
            Source::AnimeSrbija => Some(animesrbija::IMAGE_BASE),
            Source::AniLibria => Some(anilibria::POSTER_BASE),
            _ => None,
        }
    }

    /// Payload kind the adapter expects
    pub fn document_kind(&self) -> DocumentKind {
        match self {
            Source::HiAnime | Source::AniLibria => DocumentKind::Json,
            _ => DocumentKind::Html,
        }
    }

    /// Extract the featured/listing section of a home page payload
    pub fn parse_featured(&self, raw: &str) -> ExtractResult<ParseOutcome<AnimeSummary>> {
        let items = match self {
            Source::AnimeWorld => animeworld::featured(&parse_document(raw)?),
            Source::GoGoAnime => gogoanime::featured(&parse_document(raw)?),
            Source::AnimeHeaven => animeheaven::featured(&parse_document(raw)?),
            Source::AnimeFire => animefire::featured(&parse_document(raw)?),
            Source::Kuramanime => kuramanime::featured(&parse_document(raw)?),
            Source::JKanime => jkanime::featured(&parse_document(raw)?),
            Source::Anime3rb => anime3rb::featured(&parse_document(raw)?),
            Source::HiAnime => hianime::featured(raw)?,
            Source::ZoroTv => zorotv::featured(&parse_document(raw)?),
            Source::AniLibria => anilibria::featured(raw)?,
            Source::AnimeSrbija => animesrbija::featured(&parse_document(raw)?),
            Source::AniWorld => aniworld::featured(&parse_document(raw)?),
            Source::TokyoInsider => tokyoinsider::featured(&parse_document(raw)?),
            Source::AniVibe => anivibe::featured(&parse_document(raw)?),
            Source::AnimeUnity => animeunity::featured(&parse_document(raw)?)?,
            Source::AnimeFlv => animeflv::featured(&parse_document(raw)?),
        };
        debug!(source = self.as_str(), items = items.len(), "parsed featured listing");
        Ok(ParseOutcome::from_items(items))
    }

    /// Extract a search results payload
    pub fn parse_search_results(&self, raw: &str) -> ExtractResult<ParseOutcome<AnimeSummary>> {
        let items = match self {
            Source::AnimeWorld => animeworld::search_results(&parse_document(raw)?),
            Source::GoGoAnime => gogoanime::search_results(&parse_document(raw)?),
            Source::AnimeHeaven => animeheaven::search_results(&parse_document(raw)?),
            Source::AnimeFire => animefire::search_results(&parse_document(raw)?),
            Source::Kuramanime => kuramanime::search_results(&parse_document(raw)?),
            Source::JKanime => jkanime::search_results(&parse_document(raw)?),
            Source::Anime3rb => anime3rb::search_results(&parse_document(raw)?),
            Source::HiAnime => hianime::search_results(raw)?,
            Source::ZoroTv => zorotv::search_results(&parse_document(raw)?),
            Source::AniLibria => anilibria::search_results(raw)?,
            Source::AnimeSrbija => animesrbija::search_results(&parse_document(raw)?),
            Source::AniWorld => aniworld::search_results(&parse_document(raw)?),
            Source::TokyoInsider => tokyoinsider::search_results(&parse_document(raw)?),
            Source::AniVibe => anivibe::search_results(&parse_document(raw)?),
            Source::AnimeUnity => animeunity::search_results(&parse_document(raw)?)?,
            Source::AnimeFlv => animeflv::search_results(&parse_document(raw)?),
        };
        debug!(source = self.as_str(), items = items.len(), "parsed search results");
        Ok(ParseOutcome::from_items(items))
    }

    /// Extract the episode list of a detail payload.
    ///
    /// `base_href` is the anime's canonical href, needed by the sources that
    /// synthesize episode hrefs (GoGoAnime's range expansion, AnimeUnity's
    /// embedded player data); the others ignore it.
    pub fn parse_episodes(
        &self,
        raw: &str,
        base_href: &str,
    ) -> ExtractResult<ParseOutcome<EpisodeRef>> {
        let refs = match self {
            Source::AnimeWorld => animeworld::episodes(&parse_document(raw)?, base_href),
            Source::GoGoAnime => gogoanime::episodes(&parse_document(raw)?, base_href),
            Source::AnimeHeaven => animeheaven::episodes(&parse_document(raw)?, base_href),
            Source::AnimeFire => animefire::episodes(&parse_document(raw)?, base_href),
            Source::Kuramanime => kuramanime::episodes(&parse_document(raw)?, base_href),
            Source::JKanime => jkanime::episodes(&parse_document(raw)?, base_href),
            Source::Anime3rb => anime3rb::episodes(&parse_document(raw)?, base_href),
            Source::HiAnime => hianime::episodes(raw, base_href)?,
            Source::ZoroTv => zorotv::episodes(&parse_document(raw)?, base_href),
            Source::AniLibria => anilibria::episodes(raw, base_href)?,
            Source::AnimeSrbija => animesrbija::episodes(&parse_document(raw)?, base_href),
            Source::AniWorld => aniworld::episodes(&parse_document(raw)?, base_href),
            Source::TokyoInsider => tokyoinsider::episodes(&parse_document(raw)?, base_href),
            Source::AniVibe => anivibe::episodes(&parse_document(raw)?, base_href),
            Source::AnimeUnity => animeunity::episodes(&parse_document(raw)?, base_href)?,
            Source::AnimeFlv => animeflv::episodes(&parse_document(raw)?, base_href),
        };
        debug!(source = self.as_str(), episodes = refs.len(), "parsed episode list");
        Ok(ParseOutcome::from_items(refs))
    }

    /// Extract detail-page metadata. Sources without a usable detail page
    /// return empty detail data rather than failing.
    pub fn parse_detail(&self, raw: &str) -> ExtractResult<AnimeDetail> {
        let detail = match self {
            Source::AnimeWorld => animeworld::detail(&parse_document(raw)?),
            Source::GoGoAnime => gogoanime::detail(&parse_document(raw)?),
            Source::AnimeHeaven => animeheaven::detail(&parse_document(raw)?),
            Source::AnimeFire => animefire::detail(&parse_document(raw)?),
            Source::Kuramanime => kuramanime::detail(&parse_document(raw)?),
            Source::JKanime => jkanime::detail(&parse_document(raw)?),
            Source::Anime3rb => anime3rb::detail(&parse_document(raw)?),
            Source::HiAnime => hianime::detail(raw)?,
            Source::ZoroTv => zorotv::detail(&parse_document(raw)?),
            Source::AniLibria => anilibria::detail(raw)?,
            Source::AnimeSrbija => animesrbija::detail(&parse_document(raw)?),
            Source::AniWorld => aniworld::detail(&parse_document(raw)?),
            Source::TokyoInsider => tokyoinsider::detail(&parse_document(raw)?),
            Source::AniVibe => anivibe::detail(&parse_document(raw)?),
            Source::AnimeUnity => animeunity::detail(&parse_document(raw)?)?,
            Source::AnimeFlv => animeflv::detail(&parse_document(raw)?),
        };
        Ok(detail)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Source::ALL
            .iter()
            .copied()
            .find(|source| source.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ExtractError::UnknownSource(s.to_string()))
    }
}
