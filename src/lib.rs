//! Friends transcript pipeline: parse the raw script into dialogue and scene
//! tables, reconcile episode titles against the wiki's episode list, score
//! every line for sentiment, export the tables and load them into SQLite.

pub mod config;
pub mod database;
pub mod episodes;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod script;
pub mod sentiment;
pub mod text;

pub use config::PipelineConfig;
pub use error::{AppError, Result};
pub use pipeline::{process_transcript, PipelineReport, ReferenceData, Stage};
