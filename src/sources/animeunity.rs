//! AnimeUnity adapter (animeunity.to, Italian)
//!
//! The site is a Vue app: listing and episode data ship as JSON serialized
//! into element attributes (`<archivio records="...">`), so extraction is a
//! selector lookup followed by strict JSON parsing.

use scraper::Html;
use serde::Deserialize;

use crate::error::{ExtractError, ExtractResult};
use crate::models::{AnimeDetail, AnimeSummary, EpisodeRef};
use crate::normalize::strip_synopsis_markup;
use crate::select::first_attr;

#[derive(Debug, Deserialize)]
struct Record {
    id: u64,
    #[serde(default)]
    slug: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    title_eng: Option<String>,
    #[serde(default)]
    imageurl: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EpisodeEntry {
    id: u64,
    #[serde(default)]
    number: String,
}

#[derive(Debug, Deserialize)]
struct AnimeAttr {
    #[serde(default)]
    plot: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    score: Option<String>,
    #[serde(default)]
    date: Option<String>,
}

fn json_err(err: serde_json::Error) -> ExtractError {
    ExtractError::MalformedJson(err.to_string())
}

fn parse_records(doc: &Html) -> ExtractResult<Vec<AnimeSummary>> {
    let Some(raw) = first_attr(doc.root_element(), "archivio", &["records"]) else {
        return Ok(Vec::new());
    };
    let records: Vec<Record> = serde_json::from_str(&raw).map_err(json_err)?;
    Ok(records
        .into_iter()
        .filter_map(|record| {
            let title = record
                .title_eng
                .filter(|t| !t.is_empty())
                .or(record.title)
                .filter(|t| !t.is_empty())?;
            Some(AnimeSummary {
                title,
                image_url: record.imageurl.unwrap_or_default(),
                episode_label: None,
                href: format!("/anime/{}-{}", record.id, record.slug),
            })
        })
        .collect())
}

pub(crate) fn featured(doc: &Html) -> ExtractResult<Vec<AnimeSummary>> {
    parse_records(doc)
}

pub(crate) fn search_results(doc: &Html) -> ExtractResult<Vec<AnimeSummary>> {
    parse_records(doc)
}

pub(crate) fn episodes(doc: &Html, base_href: &str) -> ExtractResult<Vec<EpisodeRef>> {
    let Some(raw) = first_attr(doc.root_element(), "video-player", &["episodes"]) else {
        return Ok(Vec::new());
    };
    let entries: Vec<EpisodeEntry> = serde_json::from_str(&raw).map_err(json_err)?;
    Ok(entries
        .into_iter()
        .filter(|entry| !entry.number.is_empty())
        .map(|entry| {
            EpisodeRef::new(
                entry.number,
                format!("{}/{}", base_href.trim_end_matches('/'), entry.id),
            )
        })
        .collect())
}

pub(crate) fn detail(doc: &Html) -> ExtractResult<AnimeDetail> {
    let Some(raw) = first_attr(doc.root_element(), "video-player", &["anime"]) else {
        return Ok(AnimeDetail::default());
    };
    let anime: AnimeAttr = serde_json::from_str(&raw).map_err(json_err)?;
    Ok(AnimeDetail {
        aliases: anime.title.unwrap_or_default(),
        synopsis: strip_synopsis_markup(&anime.plot.unwrap_or_default()),
        airdate: anime.date.unwrap_or_default(),
        rating: anime.score.unwrap_or_default(),
        episodes: Vec::new(),
    })
}
