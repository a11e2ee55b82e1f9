//! Single-line classification of the raw transcript.

use serde::{Deserialize, Serialize};

/// Character value for every record that is not attributed dialogue.
pub const NO_CHARACTER: &str = "none";

const SCENE_MARKER: &str = "[Scene:";
const TITLE_MARKER: &str = "THE ONE";

/// `"[Scene: "` is stripped from the front, `".]"` (or `"]"` plus whatever
/// precedes it) from the back.
const SCENE_PREFIX_CHARS: usize = 8;
const SCENE_SUFFIX_CHARS: usize = 2;

/// Scene markers shorter than this yield an empty description.
pub const MIN_SCENE_MARKER_CHARS: usize = SCENE_PREFIX_CHARS + SCENE_SUFFIX_CHARS + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Scene,
    Title,
    Dialogue,
    Fallback,
}

/// One classified transcript line.
///
/// Empty strings stand for "not set"; the parser turns them into missing
/// values before forward-filling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedRecord {
    pub kind: RecordKind,
    pub episode: String,
    pub scene: String,
    pub character: String,
    pub line: String,
}

impl ClassifiedRecord {
    fn scene(description: String) -> Self {
        Self {
            kind: RecordKind::Scene,
            episode: String::new(),
            scene: description,
            character: NO_CHARACTER.to_string(),
            line: String::new(),
        }
    }

    fn title(title: String) -> Self {
        Self {
            kind: RecordKind::Title,
            episode: title,
            scene: String::new(),
            character: NO_CHARACTER.to_string(),
            line: String::new(),
        }
    }

    fn dialogue(character: String, line: String) -> Self {
        Self {
            kind: RecordKind::Dialogue,
            episode: String::new(),
            scene: String::new(),
            character,
            line,
        }
    }

    fn fallback(line: String) -> Self {
        Self {
            kind: RecordKind::Fallback,
            episode: String::new(),
            scene: String::new(),
            character: NO_CHARACTER.to_string(),
            line,
        }
    }
}

/// Classify one raw line. Total: every input produces exactly one record.
pub fn classify_line(raw: &str) -> ClassifiedRecord {
    let line = raw.trim();

    if line.starts_with(SCENE_MARKER) {
        return ClassifiedRecord::scene(scene_description(line));
    }

    if line.starts_with(TITLE_MARKER) {
        let title = line.split('(').next().unwrap_or_default().trim();
        return ClassifiedRecord::title(title.to_string());
    }

    let starts_upper = line.chars().next().is_some_and(char::is_uppercase);
    if starts_upper {
        if let Some((character, dialogue)) = line.split_once(':') {
            return ClassifiedRecord::dialogue(character.to_string(), dialogue.trim().to_string());
        }
    }

    ClassifiedRecord::fallback(line.to_string())
}

/// True for `[Scene:` lines too short to carry a description.
pub fn is_truncated_scene_marker(raw: &str) -> bool {
    let line = raw.trim();
    line.starts_with(SCENE_MARKER) && line.chars().count() < MIN_SCENE_MARKER_CHARS
}

fn scene_description(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let end = chars.len().saturating_sub(SCENE_SUFFIX_CHARS);
    if end <= SCENE_PREFIX_CHARS {
        return String::new();
    }
    chars[SCENE_PREFIX_CHARS..end].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated(r: &ClassifiedRecord) -> usize {
        [&r.episode, &r.scene, &r.line]
            .iter()
            .filter(|s| !s.is_empty())
            .count()
            + usize::from(r.character != NO_CHARACTER)
    }

    #[test]
    fn test_scene_marker_slicing() {
        let r = classify_line("[Scene: Central Perk, everyone is there.]");
        assert_eq!(r.kind, RecordKind::Scene);
        // The last two characters (".]") are cut along with the prefix
        assert_eq!(r.scene, "Central Perk, everyone is there");
        assert_eq!(r.character, NO_CHARACTER);
        assert!(r.line.is_empty());
    }

    #[test]
    fn test_scene_marker_with_newline_and_padding() {
        let r = classify_line("  [Scene: Monica's Apartment]  \n");
        assert_eq!(r.kind, RecordKind::Scene);
        assert_eq!(r.scene, "Monica's Apartmen");
    }

    #[test]
    fn test_scene_marker_never_dialogue() {
        let lines = [
            "[Scene: Joey: alone]",
            "[Scene:]",
            "[Scene: X]",
            "[Scene: CHANDLER: hi there]",
            "[Scene:\u{a0}Central Perk.]",
        ];
        for l in lines {
            let r = classify_line(l);
            assert_eq!(r.kind, RecordKind::Scene, "line: {}", l);
            assert_eq!(r.character, NO_CHARACTER);
            assert!(r.line.is_empty());
        }
    }

    #[test]
    fn test_short_scene_markers_are_empty_and_flagged() {
        assert_eq!(classify_line("[Scene:]").scene, "");
        assert_eq!(classify_line("[Scene: X]").scene, "");
        assert_eq!(classify_line("[Scene: XY]").scene, "X");
        assert!(is_truncated_scene_marker("[Scene:]"));
        assert!(is_truncated_scene_marker("[Scene: X]"));
        assert!(!is_truncated_scene_marker("[Scene: XY]"));
        assert!(!is_truncated_scene_marker("MONICA: hi"));
    }

    #[test]
    fn test_title_line() {
        let r = classify_line("THE ONE WHERE MONICA GETS A NEW ROOMATE (THE PILOT-THE UNCUT VERSION)");
        assert_eq!(r.kind, RecordKind::Title);
        assert_eq!(r.episode, "THE ONE WHERE MONICA GETS A NEW ROOMATE");
        assert_eq!(r.character, NO_CHARACTER);
    }

    #[test]
    fn test_title_without_parenthesis() {
        let r = classify_line("THE ONE WITH THE SONOGRAM AT THE END");
        assert_eq!(r.episode, "THE ONE WITH THE SONOGRAM AT THE END");
    }

    #[test]
    fn test_dialogue_line() {
        let r = classify_line("MONICA: There's nothing to tell!");
        assert_eq!(r.kind, RecordKind::Dialogue);
        assert_eq!(r.character, "MONICA");
        assert_eq!(r.line, "There's nothing to tell!");
    }

    #[test]
    fn test_dialogue_splits_on_first_colon_only() {
        let r = classify_line("Ross (to Rachel): Wait: what?");
        assert_eq!(r.character, "Ross (to Rachel)");
        assert_eq!(r.line, "Wait: what?");
    }

    #[test]
    fn test_dialogue_with_curly_quotes() {
        let r = classify_line("Joey: How you doin\u{2019}?");
        assert_eq!(r.kind, RecordKind::Dialogue);
        assert_eq!(r.line, "How you doin\u{2019}?");
    }

    #[test]
    fn test_fallback_cases() {
        for l in ["", "   ", "(They all stare at him.)", "lowercase: not dialogue", "Written by Marta Kauffman"] {
            let r = classify_line(l);
            assert_eq!(r.kind, RecordKind::Fallback, "line: {:?}", l);
            assert_eq!(r.character, NO_CHARACTER);
            assert_eq!(r.line, l.trim());
        }
    }

    #[test]
    fn test_at_most_one_field_populated() {
        let lines = [
            "[Scene: Central Perk, everyone is there.]",
            "THE ONE WITH THE BLACKOUT",
            "RACH: Hi!",
            "(pause)",
            "",
            "Chandler: Could I BE any more...",
        ];
        for l in lines {
            let r = classify_line(l);
            match r.kind {
                RecordKind::Dialogue => {
                    assert!(r.episode.is_empty() && r.scene.is_empty());
                }
                _ => assert!(populated(&r) <= 1, "line: {}", l),
            }
            assert!(r.episode.is_empty() || r.scene.is_empty());
        }
    }
}
