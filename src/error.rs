use thiserror::Error;

/// Typed error hierarchy for every pipeline stage.
///
/// Data-quality problems (unresolved titles, missing fields) never show up
/// here; they are carried as nulls in the tables. Everything in this enum
/// aborts the stage that raised it.
#[derive(Debug, Error)]
pub enum AppError {
    /// Network or host failure while fetching the transcript or episode list.
    #[error("Fetch failed: {0}")]
    ExternalFetch(String),

    /// A setting or credential the current stage needs is missing or invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Replacing a relation in the store failed.
    #[error("Store write failed: {0}")]
    StoreWrite(String),

    #[error("{0}")]
    Io(String),

    /// Malformed exported table, config file or data file.
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

// ── From impls ─────────────────────────────────────────────────────────────

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        AppError::StoreWrite(format!("{:#}", e))
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::StoreWrite(e.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::ExternalFetch(e.to_string())
    }
}

impl From<zip::result::ZipError> for AppError {
    fn from(e: zip::result::ZipError) -> Self {
        AppError::ExternalFetch(format!("Bad dataset archive: {}", e))
    }
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Parse(e.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Parse(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Parse(e.to_string())
    }
}

impl From<regex::Error> for AppError {
    fn from(e: regex::Error) -> Self {
        AppError::Other(format!("Invalid rule pattern: {}", e))
    }
}

/// Allows `.map_err(|e| format!("…", e))?` and `ok_or_else(|| format!(…))?`
/// to coerce into AppError without changing the call sites.
impl From<String> for AppError {
    fn from(s: String) -> Self {
        AppError::Other(s)
    }
}

/// Allows `.ok_or("literal string")?` to coerce into AppError.
impl From<&str> for AppError {
    fn from(s: &str) -> Self {
        AppError::Other(s.to_string())
    }
}
