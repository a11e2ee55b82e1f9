use crate::episodes::EpisodeRecord;
use crate::script::{SceneRecord, ScriptLine};
use serde::{Deserialize, Serialize};

/// The three relations written to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Script,
    Scenes,
    Seasons,
}

impl Relation {
    pub const ALL: [Relation; 3] = [Relation::Script, Relation::Scenes, Relation::Seasons];

    pub fn table_name(self) -> &'static str {
        match self {
            Self::Script => "script",
            Self::Scenes => "scenes",
            Self::Seasons => "seasons",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Self::Script => "script.csv",
            Self::Scenes => "scenes.csv",
            Self::Seasons => "seasons.csv",
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table_name())
    }
}

/// A `script` row under its storage column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptRow {
    pub scene_number: Option<i64>,
    pub f_char: String,
    pub f_line: String,
    pub sia_neg: Option<f64>,
    pub sia_neu: Option<f64>,
    pub sia_pos: Option<f64>,
    pub sia_compound: Option<f64>,
    pub tb_polarity: Option<f64>,
    pub tb_subjectivity: Option<f64>,
}

impl From<&ScriptLine> for ScriptRow {
    fn from(l: &ScriptLine) -> Self {
        let s = l.sentiment;
        Self {
            scene_number: l.scene_number,
            f_char: l.character.clone(),
            f_line: l.line.clone(),
            sia_neg: s.map(|s| s.sia_neg),
            sia_neu: s.map(|s| s.sia_neu),
            sia_pos: s.map(|s| s.sia_pos),
            sia_compound: s.map(|s| s.sia_compound),
            tb_polarity: s.map(|s| s.tb_polarity),
            tb_subjectivity: s.map(|s| s.tb_subjectivity),
        }
    }
}

/// A `scenes` row; the catalog record already uses storage names.
pub type SceneRow = SceneRecord;

/// A `seasons` row under its storage column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonRow {
    pub ep_number_overall: i64,
    pub ep_number_season: i64,
    pub ep_title: String,
    pub directed_by: Option<String>,
    pub written_by: Option<String>,
    pub org_air_date: Option<String>,
    pub prod_code: Option<String>,
    pub us_viewers_mm: Option<String>,
    pub season: u32,
    pub rating_1: Option<String>,
    pub rating_2: Option<String>,
    pub special_num: Option<String>,
    pub us_viewers_mm_2: Option<String>,
}

impl From<&EpisodeRecord> for SeasonRow {
    fn from(e: &EpisodeRecord) -> Self {
        Self {
            ep_number_overall: e.overall,
            ep_number_season: e.in_season,
            ep_title: e.title.clone(),
            directed_by: e.directed_by.clone(),
            written_by: e.written_by.clone(),
            org_air_date: e.air_date.clone(),
            prod_code: e.prod_code.clone(),
            us_viewers_mm: e.us_viewers.clone(),
            season: e.season,
            rating_1: e.rating_18_49.clone(),
            rating_2: e.rating_share.clone(),
            special_num: e.special_no.clone(),
            us_viewers_mm_2: e.us_viewers_2.clone(),
        }
    }
}

/// The three tables as exported and uploaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tables {
    pub script: Vec<ScriptRow>,
    pub scenes: Vec<SceneRow>,
    pub seasons: Vec<SeasonRow>,
}

impl Tables {
    pub fn row_count(&self, relation: Relation) -> usize {
        match relation {
            Relation::Script => self.script.len(),
            Relation::Scenes => self.scenes.len(),
            Relation::Seasons => self.seasons.len(),
        }
    }
}

/// A stored dialogue line joined to its scene and episode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodeLine {
    pub scene_number: i64,
    pub scene: String,
    pub f_char: String,
    pub f_line: String,
    pub sia_compound: Option<f64>,
}
