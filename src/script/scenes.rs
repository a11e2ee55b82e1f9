//! Scene catalog extraction.

use super::parse::DialogueLine;
use crate::text::title_case;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One row of the scene catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneRecord {
    pub scene_number: i64,
    /// Title-cased episode title as it appears in the transcript.
    pub episode: String,
    pub scene: String,
    /// Overall episode number, once reconciled.
    pub episode_id: Option<i64>,
    pub season: Option<u32>,
}

/// Build the deduplicated scene catalog in first-seen order.
///
/// Rows missing either field are skipped. Duplicates are detected on the
/// title-cased episode, so headers that differ only in case share one row.
pub fn extract_scenes(lines: &[DialogueLine]) -> Vec<SceneRecord> {
    let mut seen: HashSet<(String, &str)> = HashSet::new();
    let mut scenes = Vec::new();

    for line in lines {
        let (Some(episode), Some(scene)) = (line.episode.as_deref(), line.scene.as_deref()) else {
            continue;
        };
        let episode = title_case(episode);
        if !seen.insert((episode.clone(), scene)) {
            continue;
        }
        scenes.push(SceneRecord {
            scene_number: scenes.len() as i64,
            episode,
            scene: scene.to_string(),
            episode_id: None,
            season: None,
        });
    }

    log::info!("Extracted {} scenes", scenes.len());
    scenes
}
