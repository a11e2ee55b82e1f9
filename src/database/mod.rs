pub mod models;


use anyhow::{Context, Result};
use rusqlite::{params, Connection, Statement};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

pub use models::*;

pub struct Database {
    conn: Mutex<Connection>,
}

const SCRIPT_DDL: &str = r#"
    CREATE TABLE script (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        scene_number INTEGER,
        f_char TEXT NOT NULL,
        f_line TEXT NOT NULL,
        sia_neg REAL,
        sia_neu REAL,
        sia_pos REAL,
        sia_compound REAL,
        tb_polarity REAL,
        tb_subjectivity REAL
    );
    CREATE INDEX idx_script_scene ON script(scene_number);
"#;

const SCENES_DDL: &str = r#"
    CREATE TABLE scenes (
        scene_number INTEGER PRIMARY KEY,
        episode TEXT NOT NULL,
        scene TEXT NOT NULL,
        episode_id INTEGER,
        season INTEGER
    );
    CREATE INDEX idx_scenes_episode ON scenes(episode_id);
"#;

const SEASONS_DDL: &str = r#"
    CREATE TABLE seasons (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        ep_number_overall INTEGER NOT NULL,
        ep_number_season INTEGER NOT NULL,
        ep_title TEXT NOT NULL,
        directed_by TEXT,
        written_by TEXT,
        org_air_date TEXT,
        prod_code TEXT,
        us_viewers_mm TEXT,
        season INTEGER NOT NULL,
        rating_1 TEXT,
        rating_2 TEXT,
        special_num TEXT,
        us_viewers_mm_2 TEXT
    );
    CREATE INDEX idx_seasons_overall ON seasons(ep_number_overall);
"#;

impl Database {
    pub fn new(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)
            .with_context(|| format!("Failed to open database {}", db_path.display()))?;

        conn.execute_batch(
            "
            PRAGMA journal_mode=WAL;
            PRAGMA synchronous=NORMAL;
            PRAGMA cache_size=10000;
            PRAGMA temp_store=MEMORY;
        ",
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow::anyhow!("Database connection lock poisoned"))
    }

    /// Drop, recreate and fill one relation inside a single transaction.
    /// On any error the transaction rolls back and the previous table stays.
    fn replace_table<T>(
        &self,
        relation: Relation,
        ddl: &str,
        insert_sql: &str,
        rows: &[T],
        bind: impl Fn(&mut Statement<'_>, &T) -> rusqlite::Result<usize>,
    ) -> Result<usize> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        tx.execute_batch(&format!("DROP TABLE IF EXISTS {};", relation.table_name()))?;
        tx.execute_batch(ddl)
            .with_context(|| format!("Failed to create {}", relation))?;
        {
            let mut stmt = tx.prepare(insert_sql)?;
            for (i, row) in rows.iter().enumerate() {
                bind(&mut stmt, row).with_context(|| format!("Failed to insert row {} into {}", i, relation))?;
            }
        }
        tx.commit()
            .with_context(|| format!("Failed to commit {}", relation))?;

        log::info!("Replaced {} with {} rows", relation, rows.len());
        Ok(rows.len())
    }

    pub fn replace_script(&self, rows: &[ScriptRow]) -> Result<usize> {
        self.replace_table(
            Relation::Script,
            SCRIPT_DDL,
            "INSERT INTO script (scene_number, f_char, f_line, sia_neg, sia_neu, sia_pos,
                                 sia_compound, tb_polarity, tb_subjectivity)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            rows,
            |stmt, r| {
                stmt.execute(params![
                    r.scene_number,
                    r.f_char,
                    r.f_line,
                    r.sia_neg,
                    r.sia_neu,
                    r.sia_pos,
                    r.sia_compound,
                    r.tb_polarity,
                    r.tb_subjectivity
                ])
            },
        )
    }

    pub fn replace_scenes(&self, rows: &[SceneRow]) -> Result<usize> {
        self.replace_table(
            Relation::Scenes,
            SCENES_DDL,
            "INSERT INTO scenes (scene_number, episode, scene, episode_id, season)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rows,
            |stmt, r| stmt.execute(params![r.scene_number, r.episode, r.scene, r.episode_id, r.season]),
        )
    }

    pub fn replace_seasons(&self, rows: &[SeasonRow]) -> Result<usize> {
        self.replace_table(
            Relation::Seasons,
            SEASONS_DDL,
            "INSERT INTO seasons (ep_number_overall, ep_number_season, ep_title, directed_by,
                                  written_by, org_air_date, prod_code, us_viewers_mm, season,
                                  rating_1, rating_2, special_num, us_viewers_mm_2)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
            rows,
            |stmt, r| {
                stmt.execute(params![
                    r.ep_number_overall,
                    r.ep_number_season,
                    r.ep_title,
                    r.directed_by,
                    r.written_by,
                    r.org_air_date,
                    r.prod_code,
                    r.us_viewers_mm,
                    r.season,
                    r.rating_1,
                    r.rating_2,
                    r.special_num,
                    r.us_viewers_mm_2
                ])
            },
        )
    }

    /// Replace all three relations, script first. Each relation commits on
    /// its own, so a failure leaves earlier relations replaced.
    pub fn replace_all(&self, tables: &Tables) -> Result<()> {
        self.replace_script(&tables.script)?;
        self.replace_scenes(&tables.scenes)?;
        self.replace_seasons(&tables.seasons)?;
        Ok(())
    }

    pub fn count_rows(&self, relation: Relation) -> Result<i64> {
        let conn = self.conn()?;
        let count: i64 = conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", relation.table_name()), [], |row| row.get(0))
            .with_context(|| format!("Failed to count {}", relation))?;
        Ok(count)
    }

    /// Dialogue of one episode in scene order.
    pub fn lines_for_episode(&self, episode_id: i64) -> Result<Vec<EpisodeLine>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT s.scene_number, s.scene, sc.f_char, sc.f_line, sc.sia_compound
             FROM script sc
             JOIN scenes s ON s.scene_number = sc.scene_number
             WHERE s.episode_id = ?1
             ORDER BY s.scene_number, sc.id",
        )?;

        let lines = stmt
            .query_map(params![episode_id], |row| {
                Ok(EpisodeLine {
                    scene_number: row.get(0)?,
                    scene: row.get(1)?,
                    f_char: row.get(2)?,
                    f_line: row.get(3)?,
                    sia_compound: row.get(4)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(lines)
    }
}
