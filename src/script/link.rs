//! Attaching scene numbers to dialogue lines.

use super::parse::DialogueLine;
use super::scenes::SceneRecord;
use crate::sentiment::Sentiment;
use crate::text::title_case;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A dialogue line linked to the scene catalog. The scene number stands in
/// for the textual episode and scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptLine {
    pub scene_number: Option<i64>,
    pub character: String,
    pub line: String,
    pub sentiment: Option<Sentiment>,
}

/// Link every dialogue line that has a scene to its `scene_number`.
///
/// Lines without a scene are dropped. The lookup key is the title-cased
/// episode plus the scene text, the same pair the catalog was built from, so
/// a scene description shared by several episodes links to the right one.
pub fn link_scenes(lines: Vec<DialogueLine>, scenes: &[SceneRecord]) -> Vec<ScriptLine> {
    let mut index: HashMap<(&str, &str), i64> = HashMap::with_capacity(scenes.len());
    for s in scenes {
        index
            .entry((s.episode.as_str(), s.scene.as_str()))
            .or_insert(s.scene_number);
    }

    let before = lines.len();
    let linked: Vec<ScriptLine> = lines
        .into_iter()
        .filter_map(|l| {
            let scene = l.scene?;
            let episode = l.episode.as_deref().map(title_case);
            let scene_number = episode
                .as_deref()
                .and_then(|ep| index.get(&(ep, scene.as_str())).copied());
            Some(ScriptLine {
                scene_number,
                character: l.character,
                line: l.line,
                sentiment: None,
            })
        })
        .collect();

    let unlinked = linked.iter().filter(|l| l.scene_number.is_none()).count();
    log::info!(
        "Linked {} of {} dialogue lines to scenes ({} without a scene dropped, {} unmatched)",
        linked.len() - unlinked,
        before,
        before - linked.len(),
        unlinked
    );
    linked
}
