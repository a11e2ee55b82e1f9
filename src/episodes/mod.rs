//! Episode side of the pipeline: the authoritative episode index and the
//! matching of transcript titles against it.

pub mod aliases;
pub mod index;
pub mod reconcile;
pub mod wiki;

pub use aliases::AliasTable;
pub use index::{apply_repairs, build_episode_index, EpisodeRepairs};
pub use reconcile::{reconcile_scenes, ReconcileSummary};
pub use wiki::{parse_season_tables, SeasonSource};

use serde::{Deserialize, Serialize};

/// Marks an episode number the source did not provide.
pub const UNKNOWN_NUMBER: i64 = -1;

/// One row of a season table exactly as the source lists it. Every column
/// is optional; absent columns stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEpisodeRow {
    pub overall: Option<String>,
    pub in_season: Option<String>,
    pub title: Option<String>,
    pub directed_by: Option<String>,
    pub written_by: Option<String>,
    pub air_date: Option<String>,
    pub prod_code: Option<String>,
    pub us_viewers: Option<String>,
    pub rating_18_49: Option<String>,
    pub rating_share: Option<String>,
    pub special_no: Option<String>,
    pub us_viewers_2: Option<String>,
}

/// One table of the source listing, in listing order.
pub type SeasonTable = Vec<RawEpisodeRow>;

/// One row of the episode index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    /// Overall episode number, [`UNKNOWN_NUMBER`] when absent.
    pub overall: i64,
    /// Number within the season, [`UNKNOWN_NUMBER`] when absent.
    pub in_season: i64,
    pub title: String,
    #[serde(default)]
    pub directed_by: Option<String>,
    #[serde(default)]
    pub written_by: Option<String>,
    #[serde(default)]
    pub air_date: Option<String>,
    #[serde(default)]
    pub prod_code: Option<String>,
    #[serde(default)]
    pub us_viewers: Option<String>,
    pub season: u32,
    #[serde(default)]
    pub rating_18_49: Option<String>,
    #[serde(default)]
    pub rating_share: Option<String>,
    #[serde(default)]
    pub special_no: Option<String>,
    #[serde(default)]
    pub us_viewers_2: Option<String>,
}
