//! SQLite-backed storage shared by every request worker.
//!
//! Table-specific operations live in `tables/` as `impl Database` blocks.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;
use std::time::Duration;

use crate::error::Result;

pub type DbConn = PooledConnection<SqliteConnectionManager>;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Open (or create) the database file and make sure the schema exists
    pub fn new(database_url: &str, pool_size: u32) -> Result<Self> {
        if let Some(parent) = Path::new(database_url).parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    log::warn!("Failed to create database directory {:?}: {}", parent, e);
                }
            }
        }

        let manager = SqliteConnectionManager::file(database_url).with_init(|conn| {
            conn.busy_timeout(BUSY_TIMEOUT)?;
            conn.execute_batch("PRAGMA journal_mode=WAL;")
        });
        let pool = Pool::builder().max_size(pool_size.max(1)).build(manager)?;

        let db = Self { pool };
        db.init_tables()?;
        Ok(db)
    }

    /// Check out a pooled connection
    pub fn conn(&self) -> Result<DbConn> {
        Ok(self.pool.get()?)
    }

    fn init_tables(&self) -> Result<()> {
        let conn = self.conn()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS notes (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL CHECK (length(trim(title)) > 0),
                content TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
            [],
        )?;

        // No foreign key on note_id: deleting a note leaves its grants dangling
        conn.execute(
            "CREATE TABLE IF NOT EXISTS share_grants (
                id TEXT PRIMARY KEY,
                note_id TEXT NOT NULL,
                share_token TEXT NOT NULL UNIQUE,
                expires_at TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
            [],
        )?;
        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_share_grants_note_id ON share_grants(note_id)",
            [],
        )?;

        Ok(())
    }
}

/// Fixed-width RFC 3339 so stored timestamps compare correctly as text
pub(crate) fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// The value a timestamp will have after a round trip through the database
pub(crate) fn stored_precision(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.trunc_subsecs(6)
}

/// Parse a stored timestamp from column `idx`
pub(crate) fn parse_timestamp(idx: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}
