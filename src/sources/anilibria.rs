//! AniLibria adapter (api.anilibria.tv v3, JSON)
//!
//! Poster paths are root-relative against the site origin; episode playback
//! entries are keyed by number in an unordered map and re-ordered ascending.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{ExtractError, ExtractResult};
use crate::models::{AnimeDetail, AnimeSummary, EpisodeRef};
use crate::normalize::{absolutize, strip_synopsis_markup};

pub(crate) const POSTER_BASE: &str = "https://anilibria.tv";
const STREAM_BASE: &str = "https://cache.libria.fun";

#[derive(Debug, Deserialize)]
struct ListPayload {
    #[serde(default)]
    list: Vec<Release>,
}

#[derive(Debug, Deserialize)]
struct Release {
    #[serde(default)]
    code: String,
    #[serde(default)]
    names: Names,
    #[serde(default)]
    posters: Posters,
}

#[derive(Debug, Default, Deserialize)]
struct Names {
    #[serde(default)]
    ru: String,
    #[serde(default)]
    en: String,
}

#[derive(Debug, Default, Deserialize)]
struct Posters {
    #[serde(default)]
    original: Poster,
}

#[derive(Debug, Default, Deserialize)]
struct Poster {
    #[serde(default)]
    url: String,
}

#[derive(Debug, Deserialize)]
struct PlayerPayload {
    #[serde(default)]
    player: Player,
}

#[derive(Debug, Default, Deserialize)]
struct Player {
    #[serde(default)]
    list: BTreeMap<String, PlayerEpisode>,
}

#[derive(Debug, Deserialize)]
struct PlayerEpisode {
    #[serde(default)]
    episode: u32,
    #[serde(default)]
    hls: Hls,
}

#[derive(Debug, Default, Deserialize)]
struct Hls {
    #[serde(default)]
    fhd: Option<String>,
    #[serde(default)]
    hd: Option<String>,
    #[serde(default)]
    sd: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailPayload {
    #[serde(default)]
    names: Names,
    #[serde(default)]
    description: String,
    #[serde(default)]
    season: Season,
}

#[derive(Debug, Default, Deserialize)]
struct Season {
    #[serde(default)]
    string: String,
    #[serde(default)]
    year: u32,
}

fn json_err(err: serde_json::Error) -> ExtractError {
    ExtractError::MalformedJson(err.to_string())
}

fn summarize(release: Release) -> Option<AnimeSummary> {
    let title = if release.names.en.is_empty() {
        release.names.ru
    } else {
        release.names.en
    };
    if title.is_empty() {
        return None;
    }
    Some(AnimeSummary {
        title,
        image_url: absolutize(POSTER_BASE, &release.posters.original.url),
        episode_label: None,
        href: release.code,
    })
}

fn parse_list(raw: &str) -> ExtractResult<Vec<AnimeSummary>> {
    let payload: ListPayload = serde_json::from_str(raw).map_err(json_err)?;
    Ok(payload.list.into_iter().filter_map(summarize).collect())
}

pub(crate) fn featured(raw: &str) -> ExtractResult<Vec<AnimeSummary>> {
    parse_list(raw)
}

pub(crate) fn search_results(raw: &str) -> ExtractResult<Vec<AnimeSummary>> {
    parse_list(raw)
}

pub(crate) fn episodes(raw: &str, _base_href: &str) -> ExtractResult<Vec<EpisodeRef>> {
    let payload: PlayerPayload = serde_json::from_str(raw).map_err(json_err)?;
    let mut refs: Vec<EpisodeRef> = payload
        .player
        .list
        .into_values()
        .filter_map(|ep| {
            let stream = ep.hls.fhd.or(ep.hls.hd).or(ep.hls.sd)?;
            Some(EpisodeRef::new(
                ep.episode.to_string(),
                absolutize(STREAM_BASE, &stream),
            ))
        })
        .collect();
    // Map keys are strings, so ordering is re-derived from the numbers
    refs.sort_by_key(|e| e.episode_number());
    Ok(refs)
}

pub(crate) fn detail(raw: &str) -> ExtractResult<AnimeDetail> {
    let payload: DetailPayload = serde_json::from_str(raw).map_err(json_err)?;
    let airdate = if payload.season.string.is_empty() {
        if payload.season.year == 0 {
            String::new()
        } else {
            payload.season.year.to_string()
        }
    } else {
        format!("{} {}", payload.season.string, payload.season.year)
    };
    Ok(AnimeDetail {
        aliases: payload.names.ru,
        synopsis: strip_synopsis_markup(&payload.description),
        airdate,
        rating: String::new(),
        episodes: Vec::new(),
    })
}
