//! Static table of transcript titles that need a manual episode number.

use crate::error::{AppError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const BUILTIN_ALIASES: &str = include_str!("../../data/episode_aliases.yaml");

#[derive(Debug, Deserialize)]
struct AliasFile {
    version: u32,
    aliases: Vec<AliasEntry>,
}

#[derive(Debug, Deserialize)]
struct AliasEntry {
    title: String,
    episode: i64,
}

/// Title → overall episode number. Exhaustive over the titles seen in the
/// transcript corpus; anything else stays unresolved.
#[derive(Debug, Clone)]
pub struct AliasTable {
    version: u32,
    entries: HashMap<String, i64>,
}

impl AliasTable {
    /// The table shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_ALIASES)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AppError::Configuration(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        let file: AliasFile = serde_yaml::from_str(contents)?;
        let mut entries = HashMap::with_capacity(file.aliases.len());
        for a in file.aliases {
            if let Some(prev) = entries.insert(a.title.clone(), a.episode) {
                if prev != a.episode {
                    return Err(AppError::Parse(format!(
                        "Alias {:?} maps to both {} and {}",
                        a.title, prev, a.episode
                    )));
                }
            }
        }
        Ok(Self {
            version: file.version,
            entries,
        })
    }

    pub fn get(&self, title: &str) -> Option<i64> {
        self.entries.get(title).copied()
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
