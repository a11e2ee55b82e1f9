//! Pipeline settings from an optional YAML file, plus credentials from the
//! environment.

use crate::episodes::SeasonSource;
use crate::error::{AppError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "friends-script.yaml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Downloads, exported tables and the run report land here.
    pub data_dir: PathBuf,
    pub transcript_file: String,
    /// Dataset on the dataset host, as `owner/slug`.
    pub dataset: String,
    pub dataset_api_url: String,
    pub wiki_api_url: String,
    pub wiki_page: String,
    /// Saved wikitext to read instead of the live page.
    pub season_source_file: Option<PathBuf>,
    /// SQLite file the upload stage writes to. `FRIENDS_DATABASE` overrides.
    pub database_path: Option<PathBuf>,
    pub aliases_file: Option<PathBuf>,
    pub repairs_file: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            transcript_file: "Friends_Transcript.txt".to_string(),
            dataset: "divyansh22/friends-tv-show-script".to_string(),
            dataset_api_url: "https://www.kaggle.com/api/v1".to_string(),
            wiki_api_url: "https://en.wikipedia.org/w/api.php".to_string(),
            wiki_page: "List_of_Friends_episodes".to_string(),
            season_source_file: None,
            database_path: None,
            aliases_file: None,
            repairs_file: None,
        }
    }
}

impl PipelineConfig {
    /// Load from `path`, else `friends-script.yaml` in the working directory,
    /// else the user config directory, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        let candidates = [
            Some(PathBuf::from(CONFIG_FILE_NAME)),
            dirs::config_dir().map(|d| d.join("friends-script").join("config.yaml")),
        ];
        for candidate in candidates.into_iter().flatten() {
            if candidate.is_file() {
                return Self::from_file(&candidate);
            }
        }
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AppError::Configuration(format!("Failed to read {}: {}", path.display(), e)))?;
        let config = Self::from_yaml(&contents)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        serde_yaml::from_str(contents).map_err(|e| AppError::Configuration(format!("Invalid config: {}", e)))
    }

    pub fn transcript_path(&self) -> PathBuf {
        self.data_dir.join(&self.transcript_file)
    }

    pub fn report_path(&self) -> PathBuf {
        self.data_dir.join("report.json")
    }

    pub fn season_source(&self) -> SeasonSource {
        match &self.season_source_file {
            Some(path) => SeasonSource::File(path.clone()),
            None => SeasonSource::Wiki {
                api_url: self.wiki_api_url.clone(),
                page: self.wiki_page.clone(),
            },
        }
    }

    /// The store location; only the upload stage asks for it.
    pub fn database_path(&self) -> Result<PathBuf> {
        std::env::var_os("FRIENDS_DATABASE")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| self.database_path.clone())
            .ok_or_else(|| {
                AppError::Configuration(
                    "No database configured; set database_path or FRIENDS_DATABASE".to_string(),
                )
            })
    }

    /// Split `owner/slug`.
    pub fn dataset_parts(&self) -> Result<(&str, &str)> {
        match self.dataset.split_once('/') {
            Some((owner, slug)) if !owner.is_empty() && !slug.is_empty() && !slug.contains('/') => {
                Ok((owner, slug))
            }
            _ => Err(AppError::Configuration(format!(
                "Dataset {:?} is not of the form owner/slug",
                self.dataset
            ))),
        }
    }
}

/// Account for the dataset host, read from the environment.
#[derive(Clone)]
pub struct DatasetCredentials {
    pub username: String,
    pub key: String,
}

impl std::fmt::Debug for DatasetCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatasetCredentials")
            .field("username", &self.username)
            .field("key", &"<redacted>")
            .finish()
    }
}

impl DatasetCredentials {
    pub fn from_env() -> Result<Self> {
        let var = |name: &str| {
            std::env::var(name)
                .ok()
                .filter(|v| !v.is_empty())
                .ok_or_else(|| AppError::Configuration(format!("{} is not set", name)))
        };
        Ok(Self {
            username: var("KAGGLE_USERNAME")?,
            key: var("KAGGLE_KEY")?,
        })
    }
}
