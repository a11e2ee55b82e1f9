//! Building the episode index from the source's season tables and applying
//! the static anomaly repairs.

use super::{EpisodeRecord, RawEpisodeRow, SeasonTable, UNKNOWN_NUMBER};
use crate::error::{AppError, Result};
use crate::text::title_case;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

const BUILTIN_REPAIRS: &str = include_str!("../../data/episode_repairs.yaml");

/// Season tables sit at these positions of the source listing; position 0 is
/// the series overview.
const FIRST_SEASON_TABLE: usize = 1;
pub const SEASON_TABLES: usize = 11;

/// Static corrections to the source's episode list.
#[derive(Debug, Clone, Deserialize)]
pub struct EpisodeRepairs {
    pub version: u32,
    /// Replaces the title of the first row.
    pub pilot_title: String,
    /// Rows appended so each half of a two-part episode is addressable.
    pub synthetic_rows: Vec<EpisodeRecord>,
    /// Positions in the unrepaired index to remove.
    pub drop_rows: Vec<usize>,
}

impl EpisodeRepairs {
    /// The repair set shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_REPAIRS)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AppError::Configuration(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }
}

/// Concatenate season tables 1..=11 of the listing into the unrepaired index.
///
/// Missing or non-numeric episode numbers become [`UNKNOWN_NUMBER`],
/// bracketed annotations are stripped from every cell, quotes are removed
/// from titles, the first title is replaced with the repair set's pilot title
/// and titles are title-cased.
pub fn build_episode_index(tables: &[SeasonTable], repairs: &EpisodeRepairs) -> Result<Vec<EpisodeRecord>> {
    let needed = FIRST_SEASON_TABLE + SEASON_TABLES;
    if tables.len() < needed {
        return Err(AppError::ExternalFetch(format!(
            "Episode list has {} tables, expected at least {}",
            tables.len(),
            needed
        )));
    }

    let annotations = Regex::new(r"\[.*?\]")?;
    let strip = |cell: &Option<String>| -> Option<String> {
        cell.as_deref()
            .map(|v| annotations.replace_all(v, "").into_owned())
    };

    let mut index = Vec::new();
    for (offset, table) in tables[FIRST_SEASON_TABLE..needed].iter().enumerate() {
        let season = (offset + 1) as u32;
        for row in table {
            index.push(EpisodeRecord {
                overall: parse_number(strip(&row.overall).as_deref()),
                in_season: parse_number(strip(&row.in_season).as_deref()),
                title: strip(&row.title).unwrap_or_default().replace('"', ""),
                directed_by: strip(&row.directed_by),
                written_by: strip(&row.written_by),
                air_date: strip(&row.air_date),
                prod_code: strip(&row.prod_code),
                us_viewers: strip(&row.us_viewers),
                season,
                rating_18_49: strip(&row.rating_18_49),
                rating_share: strip(&row.rating_share),
                special_no: strip(&row.special_no),
                us_viewers_2: strip(&row.us_viewers_2),
            });
        }
    }

    if let Some(first) = index.first_mut() {
        first.title = repairs.pilot_title.clone();
    }
    for e in index.iter_mut() {
        e.title = title_case(&e.title);
    }

    log::info!("Built episode index with {} rows from {} season tables", index.len(), SEASON_TABLES);
    Ok(index)
}

/// Append the synthetic two-part rows and drop the stale rows they replace.
pub fn apply_repairs(index: &[EpisodeRecord], repairs: &EpisodeRepairs) -> Vec<EpisodeRecord> {
    let drop: HashSet<usize> = repairs.drop_rows.iter().copied().collect();
    for pos in &drop {
        if *pos >= index.len() {
            log::warn!("Repair drops row {} but the index only has {} rows", pos, index.len());
        }
    }

    let repaired: Vec<EpisodeRecord> = index
        .iter()
        .enumerate()
        .filter(|(i, _)| !drop.contains(i))
        .map(|(_, e)| e.clone())
        .chain(repairs.synthetic_rows.iter().cloned())
        .collect();

    log::info!(
        "Applied episode repairs v{}: +{} synthetic rows, -{} stale rows",
        repairs.version,
        repairs.synthetic_rows.len(),
        index.len() + repairs.synthetic_rows.len() - repaired.len()
    );
    repaired
}

fn parse_number(cell: Option<&str>) -> i64 {
    let Some(raw) = cell.map(str::trim).filter(|s| !s.is_empty()) else {
        return UNKNOWN_NUMBER;
    };
    match raw.parse::<i64>() {
        Ok(n) => n,
        Err(_) => {
            log::warn!("Unparseable episode number {:?}, using {}", raw, UNKNOWN_NUMBER);
            UNKNOWN_NUMBER
        }
    }
}
