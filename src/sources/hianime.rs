//! HiAnime adapter (JSON API)
//!
//! HiAnime is served through its aggregator API rather than scraped markup,
//! so the adapter deserializes strict JSON payloads and fails with
//! `MalformedJson` on invalid input.

use serde::Deserialize;

use crate::error::{ExtractError, ExtractResult};
use crate::models::{AnimeDetail, AnimeSummary, EpisodeRef};
use crate::normalize::{hianime_detail_href, strip_synopsis_markup};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HomePayload {
    #[serde(default)]
    spotlight_animes: Vec<AnimeItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchPayload {
    #[serde(default)]
    animes: Vec<AnimeItem>,
}

#[derive(Debug, Deserialize)]
struct AnimeItem {
    id: String,
    name: String,
    #[serde(default)]
    poster: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EpisodesPayload {
    #[serde(default)]
    episodes: Vec<EpisodeItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EpisodeItem {
    #[serde(default)]
    number: u32,
    episode_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetailPayload {
    anime: DetailAnime,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetailAnime {
    #[serde(default)]
    info: DetailInfo,
    #[serde(default)]
    more_info: MoreInfo,
}

#[derive(Debug, Default, Deserialize)]
struct DetailInfo {
    #[serde(default)]
    description: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MoreInfo {
    #[serde(default)]
    japanese: String,
    #[serde(default)]
    aired: String,
    #[serde(default)]
    malscore: String,
}

fn json_err(err: serde_json::Error) -> ExtractError {
    ExtractError::MalformedJson(err.to_string())
}

fn summarize(item: AnimeItem) -> AnimeSummary {
    AnimeSummary {
        title: item.name,
        image_url: item.poster,
        episode_label: None,
        href: hianime_detail_href(&item.id),
    }
}

pub(crate) fn featured(raw: &str) -> ExtractResult<Vec<AnimeSummary>> {
    let payload: HomePayload = serde_json::from_str(raw).map_err(json_err)?;
    Ok(payload
        .spotlight_animes
        .into_iter()
        .filter(|item| !item.name.is_empty())
        .map(summarize)
        .collect())
}

pub(crate) fn search_results(raw: &str) -> ExtractResult<Vec<AnimeSummary>> {
    let payload: SearchPayload = serde_json::from_str(raw).map_err(json_err)?;
    Ok(payload
        .animes
        .into_iter()
        .filter(|item| !item.name.is_empty())
        .map(summarize)
        .collect())
}

pub(crate) fn episodes(raw: &str, _base_href: &str) -> ExtractResult<Vec<EpisodeRef>> {
    let payload: EpisodesPayload = serde_json::from_str(raw).map_err(json_err)?;
    Ok(payload
        .episodes
        .into_iter()
        .map(|ep| EpisodeRef::new(ep.number.to_string(), ep.episode_id))
        .collect())
}

pub(crate) fn detail(raw: &str) -> ExtractResult<AnimeDetail> {
    let payload: DetailPayload = serde_json::from_str(raw).map_err(json_err)?;
    Ok(AnimeDetail {
        aliases: payload.anime.more_info.japanese,
        synopsis: strip_synopsis_markup(&payload.anime.info.description),
        airdate: payload.anime.more_info.aired,
        rating: payload.anime.more_info.malscore,
        episodes: Vec::new(),
    })
}
