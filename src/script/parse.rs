//! Whole-transcript parsing: classification, forward-fill and dialogue filtering.

use super::classify::{classify_line, is_truncated_scene_marker, ClassifiedRecord, NO_CHARACTER};
use crate::text::non_empty;
use serde::{Deserialize, Serialize};

/// A classified record with empty fields turned into missing values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRow {
    pub episode: Option<String>,
    pub scene: Option<String>,
    pub character: Option<String>,
    pub line: Option<String>,
}

impl From<ClassifiedRecord> for ScriptRow {
    fn from(r: ClassifiedRecord) -> Self {
        Self {
            episode: non_empty(&r.episode),
            scene: non_empty(&r.scene),
            character: non_empty(&r.character),
            line: non_empty(&r.line),
        }
    }
}

/// One spoken line with its episode and scene carried forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueLine {
    pub episode: Option<String>,
    pub scene: Option<String>,
    pub character: String,
    pub line: String,
}

/// Classify every line in source order.
pub fn parse_lines<I, S>(lines: I) -> Vec<ClassifiedRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(idx, raw)| {
            let raw = raw.as_ref();
            if is_truncated_scene_marker(raw) {
                log::warn!("Line {}: scene marker too short for a description: {:?}", idx + 1, raw.trim());
            }
            classify_line(raw)
        })
        .collect()
}

/// Replace every missing value with the nearest preceding present one.
///
/// Leading missing values stay missing.
pub fn forward_fill<T, I>(values: I) -> Vec<Option<T>>
where
    T: Clone,
    I: IntoIterator<Item = Option<T>>,
{
    let mut last: Option<T> = None;
    values
        .into_iter()
        .map(|v| {
            if v.is_some() {
                last = v;
            }
            last.clone()
        })
        .collect()
}

/// Forward-fill episode and scene, then keep only attributed dialogue.
pub fn clean_script(records: Vec<ClassifiedRecord>) -> Vec<DialogueLine> {
    let mut rows: Vec<ScriptRow> = records.into_iter().map(ScriptRow::from).collect();

    let episodes = forward_fill(rows.iter().map(|r| r.episode.clone()));
    let scenes = forward_fill(rows.iter().map(|r| r.scene.clone()));
    for ((row, episode), scene) in rows.iter_mut().zip(episodes).zip(scenes) {
        row.episode = episode;
        row.scene = scene;
    }

    rows.into_iter()
        .filter_map(|row| {
            let character = row.character?;
            if character == NO_CHARACTER {
                return None;
            }
            Some(DialogueLine {
                episode: row.episode,
                scene: row.scene,
                character,
                line: row.line?,
            })
        })
        .collect()
}

/// Parse a full transcript text into the dialogue table.
pub fn process_script(text: &str) -> Vec<DialogueLine> {
    let records = parse_lines(text.lines());
    let total = records.len();
    let dialogue = clean_script(records);
    log::info!("Parsed {} transcript lines into {} dialogue lines", total, dialogue.len());
    dialogue
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
THE ONE WHERE MONICA GETS A NEW ROOMATE (THE PILOT-THE UNCUT VERSION)
Written by: Marta Kauffman & David Crane
[Scene: Central Perk, Chandler, Joey, Phoebe, and Monica are there.]
Monica: There's nothing to tell! He's just some guy I work with!
Joey: C'mon, you're going out with the guy!

(They all stare, bemused.)
Chandler: All right Joey, be
nice.
[Scene: Monica's Apartment, everyone is there.]
MONICA: Are you okay, sweetie?
Ross:
THE ONE WITH THE SONOGRAM AT THE END
Ross: Hi.
";

    #[test]
    fn test_parse_lines_one_record_per_line() {
        let records = parse_lines(SAMPLE.lines());
        assert_eq!(records.len(), SAMPLE.lines().count());
    }

    #[test]
    fn test_forward_fill_basic() {
        let filled = forward_fill(vec![None, Some(1), None, None, Some(2), None]);
        assert_eq!(filled, vec![None, Some(1), Some(1), Some(1), Some(2), Some(2)]);
    }

    #[test]
    fn test_forward_fill_is_idempotent() {
        let input = vec![None, Some("a"), None, Some("b"), None, None];
        let once = forward_fill(input);
        let twice = forward_fill(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_forward_fill_empty() {
        let filled: Vec<Option<i32>> = forward_fill(Vec::new());
        assert!(filled.is_empty());
    }

    #[test]
    fn test_clean_script_drops_non_dialogue() {
        let lines = process_script(SAMPLE);
        assert!(lines.iter().all(|l| l.character != NO_CHARACTER));
        // "Ross:" with no text is dropped, the credits line is kept as dialogue
        assert!(lines.iter().all(|l| !l.line.is_empty()));
        let chars: Vec<&str> = lines.iter().map(|l| l.character.as_str()).collect();
        assert_eq!(chars, vec!["Written by", "Monica", "Joey", "Chandler", "MONICA", "Ross"]);
    }

    #[test]
    fn test_clean_script_forward_fills_episode_and_scene() {
        let lines = process_script(SAMPLE);

        // Credits come before the first scene marker
        assert_eq!(lines[0].scene, None);
        assert_eq!(
            lines[0].episode.as_deref(),
            Some("THE ONE WHERE MONICA GETS A NEW ROOMATE")
        );

        assert_eq!(
            lines[1].scene.as_deref(),
            Some("Central Perk, Chandler, Joey, Phoebe, and Monica are there")
        );
        assert_eq!(lines[3].line, "All right Joey, be");
        assert_eq!(
            lines[4].scene.as_deref(),
            Some("Monica's Apartment, everyone is there")
        );

        // A new title does not reset the scene
        let last = lines.last().unwrap();
        assert_eq!(last.episode.as_deref(), Some("THE ONE WITH THE SONOGRAM AT THE END"));
        assert_eq!(last.scene.as_deref(), Some("Monica's Apartment, everyone is there"));
    }

    #[test]
    fn test_leading_rows_stay_missing() {
        let lines = process_script("Monica: Hello?\n[Scene: A room with a view.]\nJoey: Hey.\n");
        assert_eq!(lines[0].episode, None);
        assert_eq!(lines[0].scene, None);
        assert_eq!(lines[1].scene.as_deref(), Some("A room with a view"));
    }
}
