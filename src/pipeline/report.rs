use crate::database::Tables;
use crate::episodes::ReconcileSummary;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Row and null counts for one processing run. Data-quality problems only
/// ever surface here.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub generated_at: DateTime<Utc>,
    pub script_rows: usize,
    pub lines_without_scene_number: usize,
    pub scenes: usize,
    pub unresolved_scenes: usize,
    pub scenes_without_season: usize,
    pub episodes: usize,
    pub names_normalized: usize,
    pub alias_table_version: u32,
    pub repairs_version: u32,
    pub reconcile: ReconcileSummary,
}

impl PipelineReport {
    pub fn new(
        tables: &Tables,
        reconcile: ReconcileSummary,
        names_normalized: usize,
        alias_table_version: u32,
        repairs_version: u32,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            script_rows: tables.script.len(),
            lines_without_scene_number: tables.script.iter().filter(|r| r.scene_number.is_none()).count(),
            scenes: tables.scenes.len(),
            unresolved_scenes: tables.scenes.iter().filter(|s| s.episode_id.is_none()).count(),
            scenes_without_season: tables.scenes.iter().filter(|s| s.season.is_none()).count(),
            episodes: tables.seasons.len(),
            names_normalized,
            alias_table_version,
            repairs_version,
            reconcile,
        }
    }

    pub fn log(&self) {
        log::info!(
            "Run report: {} script rows ({} without scene), {} scenes ({} unresolved, {} without season), {} episodes",
            self.script_rows,
            self.lines_without_scene_number,
            self.scenes,
            self.unresolved_scenes,
            self.scenes_without_season,
            self.episodes
        );
        if self.unresolved_scenes > 0 {
            log::warn!("{} scenes did not resolve to an episode", self.unresolved_scenes);
        }
    }
}
