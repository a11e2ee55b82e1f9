//! Stage entry points: download, process, upload.
//!
//! `process_transcript` is the pure core; the async stages only add file,
//! network and store I/O around it.

pub mod download;
pub mod report;

pub use download::download_transcript;
pub use report::PipelineReport;

use crate::config::{DatasetCredentials, PipelineConfig};
use crate::database::{Database, Relation, ScriptRow, SeasonRow, Tables};
use crate::episodes::{apply_repairs, build_episode_index, reconcile_scenes, AliasTable, EpisodeRepairs, SeasonTable};
use crate::error::{AppError, Result};
use crate::export::{export_tables, read_tables};
use crate::script::{extract_scenes, link_scenes, process_script, NameNormalizer};
use crate::sentiment::SentimentAnnotator;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Download,
    Process,
    Upload,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Download => write!(f, "download"),
            Self::Process => write!(f, "process"),
            Self::Upload => write!(f, "upload"),
        }
    }
}

/// Static reference data the reconciler needs.
pub struct ReferenceData {
    pub aliases: AliasTable,
    pub repairs: EpisodeRepairs,
}

impl ReferenceData {
    /// Built-in tables unless the config points at replacements.
    pub fn load(config: &PipelineConfig) -> Result<Self> {
        let aliases = match &config.aliases_file {
            Some(path) => AliasTable::from_file(path)?,
            None => AliasTable::builtin()?,
        };
        let repairs = match &config.repairs_file {
            Some(path) => EpisodeRepairs::from_file(path)?,
            None => EpisodeRepairs::builtin()?,
        };
        log::info!(
            "Using alias table v{} ({} titles) and repairs v{}",
            aliases.version(),
            aliases.len(),
            repairs.version
        );
        Ok(Self { aliases, repairs })
    }
}

/// Transcript text plus season tables in, the three output tables out.
pub fn process_transcript(
    text: &str,
    season_tables: &[SeasonTable],
    reference: &ReferenceData,
) -> Result<(Tables, PipelineReport)> {
    let dialogue = process_script(text);
    let scenes = extract_scenes(&dialogue);

    let index = build_episode_index(season_tables, &reference.repairs)?;
    let repaired = apply_repairs(&index, &reference.repairs);
    let (scenes, summary) = reconcile_scenes(scenes, &index, &repaired, &reference.aliases);

    let mut script = link_scenes(dialogue, &scenes);

    let normalizer = NameNormalizer::new()?;
    let names_normalized = normalizer.normalize_all(script.iter_mut().map(|l| &mut l.character));
    log::info!("Normalized {} character names", names_normalized);

    SentimentAnnotator::new().annotate(&mut script);

    let tables = Tables {
        script: script.iter().map(ScriptRow::from).collect(),
        scenes,
        seasons: repaired.iter().map(SeasonRow::from).collect(),
    };
    let report = PipelineReport::new(
        &tables,
        summary,
        names_normalized,
        reference.aliases.version(),
        reference.repairs.version,
    );
    Ok((tables, report))
}

pub async fn run_download(config: &PipelineConfig) -> Result<PathBuf> {
    log::info!("Stage {} starting", Stage::Download);
    let credentials = DatasetCredentials::from_env()?;
    download_transcript(config, &credentials).await
}

/// Read the transcript and episode list, build the tables, export them and
/// write the run report next to them.
pub async fn run_process(config: &PipelineConfig) -> Result<PipelineReport> {
    log::info!("Stage {} starting", Stage::Process);
    let reference = ReferenceData::load(config)?;

    let transcript_path = config.transcript_path();
    let text = tokio::fs::read_to_string(&transcript_path)
        .await
        .map_err(|e| AppError::Io(format!("Failed to read transcript {}: {}", transcript_path.display(), e)))?;

    let season_tables = config.season_source().load_tables().await?;

    let (tables, report) = process_transcript(&text, &season_tables, &reference)?;
    export_tables(&config.data_dir, &tables)?;

    let report_path = config.report_path();
    tokio::fs::write(&report_path, serde_json::to_string_pretty(&report)?).await?;
    report.log();
    log::info!("Wrote run report to {}", report_path.display());
    Ok(report)
}

/// Replace the three relations in the store from the exported files.
pub async fn run_upload(config: &PipelineConfig) -> Result<()> {
    log::info!("Stage {} starting", Stage::Upload);
    let db_path = config.database_path()?;
    let tables = read_tables(&config.data_dir)?;

    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let db = Database::new(&db_path)?;
    db.replace_all(&tables)?;

    for relation in Relation::ALL {
        log::info!("{}: {} rows stored", relation, db.count_rows(relation)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::episodes::RawEpisodeRow;

    const TRANSCRIPT: &str = "\
THE ONE WHERE MONICA GETS A NEW ROOMATE (THE PILOT-THE UNCUT VERSION)
[Scene: Central Perk, Chandler, Joey, Phoebe, and Monica are there.]
Monica: There's nothing to tell! He's just some guy I work with!
Joey: C'mon, you're going out with the guy!
MNCA: I love this place, it's wonderful.
[Scene: Monica's Apartment, everyone is there.]
Ross (to Rachel): Hi.
THE ONE WITH TWO PARTS, PART 1
[Scene: Central Perk, the gang is there.]
Phoebe: Smelly cat, smelly cat.
THE ONE NOBODY EVER FILMED
[Scene: Nowhere.]
Gunther: Rachel.
";

    fn row(overall: &str, in_season: &str, title: &str) -> RawEpisodeRow {
        RawEpisodeRow {
            overall: Some(overall.to_string()),
            in_season: Some(in_season.to_string()),
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    fn season_tables() -> Vec<SeasonTable> {
        let mut season_one: Vec<RawEpisodeRow> = (1..=24)
            .map(|n| row(&n.to_string(), &n.to_string(), &format!("The One Numbered {}", n)))
            .collect();
        season_one[0] = row("1", "1", "The Pilot");
        season_one[15] = row("16–17", "16–17", "The One with Two Parts");
        let mut tables = vec![Vec::new(), season_one];
        for _ in 2..=11 {
            tables.push(Vec::new());
        }
        tables
    }

    fn reference() -> ReferenceData {
        ReferenceData {
            aliases: AliasTable::builtin().unwrap(),
            repairs: EpisodeRepairs::builtin().unwrap(),
        }
    }

    #[test]
    fn test_process_transcript_end_to_end() {
        let (tables, report) = process_transcript(TRANSCRIPT, &season_tables(), &reference()).unwrap();

        assert_eq!(tables.scenes.len(), 4);
        let pilot = &tables.scenes[0];
        assert_eq!(pilot.episode, "The One Where Monica Gets A New Roomate");
        assert_eq!(pilot.scene, "Central Perk, Chandler, Joey, Phoebe, and Monica are there");
        assert_eq!(pilot.episode_id, Some(1));
        assert_eq!(pilot.season, Some(1));

        let two_parts = &tables.scenes[2];
        assert_eq!(two_parts.episode_id, Some(16));
        assert_eq!(two_parts.season, Some(1));

        let unknown = &tables.scenes[3];
        assert_eq!(unknown.episode_id, None);
        assert_eq!(unknown.season, None);

        let speakers: Vec<&str> = tables.script.iter().map(|r| r.f_char.as_str()).collect();
        assert_eq!(speakers, vec!["Monica", "Joey", "Monica", "Ross", "Phoebe", "Gunther"]);
        assert!(tables.script.iter().all(|r| r.scene_number.is_some()));
        assert!(tables.script.iter().all(|r| r.sia_compound.is_some() && r.tb_polarity.is_some()));

        assert_eq!(report.script_rows, 6);
        assert_eq!(report.unresolved_scenes, 1);
        assert_eq!(report.names_normalized, 2);
    }

    #[test]
    fn test_seasons_table_is_repaired_index() {
        let (tables, report) = process_transcript(TRANSCRIPT, &season_tables(), &reference()).unwrap();
        // 24 source rows, the combined two-part row dropped, six halves added
        assert_eq!(tables.seasons.len(), 24 - 1 + 6);
        assert_eq!(report.episodes, tables.seasons.len());
        assert_eq!(tables.seasons[0].ep_title, "The One Where Monica Gets A New Roommate");
        assert!(!tables.seasons.iter().any(|s| s.ep_number_overall == -1));
    }

    #[test]
    fn test_short_episode_list_is_fatal() {
        let short = season_tables()[..5].to_vec();
        assert!(matches!(
            process_transcript(TRANSCRIPT, &short, &reference()),
            Err(AppError::ExternalFetch(_))
        ));
    }
}
