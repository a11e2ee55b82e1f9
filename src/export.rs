//! `~`-delimited table files: written by the process stage, read back by the
//! upload stage.

use crate::database::{Relation, Tables};
use crate::error::{AppError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const DELIMITER: u8 = b'~';

pub fn write_table<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .from_path(path)
        .map_err(|e| AppError::Io(format!("Failed to create {}: {}", path.display(), e)))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .from_path(path)
        .map_err(|e| AppError::Io(format!("Failed to open {}: {}", path.display(), e)))?;
    reader
        .deserialize()
        .enumerate()
        .map(|(i, row)| row.map_err(|e| AppError::Parse(format!("{} row {}: {}", path.display(), i + 1, e))))
        .collect()
}

/// Write `script.csv`, `scenes.csv` and `seasons.csv` into `dir`.
pub fn export_tables(dir: &Path, tables: &Tables) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let path = |r: Relation| dir.join(r.file_name());

    write_table(&path(Relation::Script), &tables.script)?;
    write_table(&path(Relation::Scenes), &tables.scenes)?;
    write_table(&path(Relation::Seasons), &tables.seasons)?;

    let written: Vec<PathBuf> = Relation::ALL.iter().map(|r| path(*r)).collect();
    for r in Relation::ALL {
        log::info!("Exported {} rows to {}", tables.row_count(r), path(r).display());
    }
    Ok(written)
}

pub fn read_tables(dir: &Path) -> Result<Tables> {
    let tables = Tables {
        script: read_table(&dir.join(Relation::Script.file_name()))?,
        scenes: read_table(&dir.join(Relation::Scenes.file_name()))?,
        seasons: read_table(&dir.join(Relation::Seasons.file_name()))?,
    };
    log::info!(
        "Read {} script, {} scene and {} season rows from {}",
        tables.script.len(),
        tables.scenes.len(),
        tables.seasons.len(),
        dir.display()
    );
    Ok(tables)
}
