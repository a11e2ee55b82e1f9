//! Transcript side of the pipeline: raw lines to linked dialogue.

pub mod classify;
pub mod link;
pub mod names;
pub mod parse;
pub mod scenes;

pub use classify::{classify_line, ClassifiedRecord, RecordKind, NO_CHARACTER};
pub use link::{link_scenes, ScriptLine};
pub use names::NameNormalizer;
pub use parse::{clean_script, forward_fill, parse_lines, process_script, DialogueLine};
pub use scenes::{extract_scenes, SceneRecord};
