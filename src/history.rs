//! Match history persistence.
//!
//! Each analyzed player timeline is recorded as one row per category
//! bucket (plus an overall row), so later sessions can show how the
//! current match moved against the historical mean.

use rusqlite::{params, Connection, Result};
use std::path::PathBuf;

use chrono::Local;

use crate::app_dirs::AppDirs;
use crate::session::PlayerReport;

/// Category key under which whole-timeline tallies are stored.
pub const OVERALL_CATEGORY: &str = "全体";

/// Database manager for recorded match statistics
#[derive(Debug)]
pub struct HistoryDb {
    conn: Connection,
}

impl HistoryDb {
    /// Open (and if needed create) the on-disk history database.
    pub fn new() -> Result<Self> {
        let db_path = AppDirs::db_path().unwrap_or_else(|| PathBuf::from("rallyview_history.db"));

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                rusqlite::Error::SqliteFailure(
                    rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_CANTOPEN),
                    Some(format!("failed to create state directory: {}", e)),
                )
            })?;
        }

        Self::init(Connection::open(&db_path)?)
    }

    /// In-memory database, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS category_stats (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                source TEXT NOT NULL,
                player INTEGER NOT NULL,
                category TEXT NOT NULL,
                total INTEGER NOT NULL,
                win_count INTEGER NOT NULL,
                timestamp TEXT NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            "#,
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_category_stats_category ON category_stats(player, category)",
            [],
        )?;

        Ok(HistoryDb { conn })
    }

    /// Record every category bucket of a report in one transaction.
    pub fn record_report(&mut self, source: &str, report: &PlayerReport) -> Result<()> {
        let tx = self.conn.transaction()?;
        let now = Local::now().to_rfc3339();

        for (category, rate) in &report.rates {
            tx.execute(
                r#"
                INSERT INTO category_stats (source, player, category, total, win_count, timestamp)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
                params![
                    source,
                    report.player as i64,
                    category.name(),
                    rate.total as i64,
                    rate.win_count as i64,
                    now,
                ],
            )?;
        }

        // Overall row so whole-match movement is trackable too.
        tx.execute(
            r#"
            INSERT INTO category_stats (source, player, category, total, win_count, timestamp)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                source,
                report.player as i64,
                OVERALL_CATEGORY,
                report.tally.total as i64,
                report.tally.win as i64,
                now,
            ],
        )?;

        tx.commit()
    }

    /// Historical mean win rate for one player's category across all
    /// recorded matches; None before any history exists.
    pub fn mean_rate(&self, player: usize, category: &str) -> Result<Option<f64>> {
        let mut stmt = self.conn.prepare(
            "SELECT AVG(win_count * 100.0 / total) FROM category_stats
             WHERE player = ?1 AND category = ?2 AND total > 0",
        )?;

        stmt.query_row(params![player as i64, category], |row| row.get(0))
    }

    /// Delta of a current rate against the recorded mean, if any.
    pub fn rate_delta(&self, player: usize, category: &str, current_rate: f64) -> Result<Option<f64>> {
        Ok(self
            .mean_rate(player, category)?
            .map(|mean| current_rate - mean))
    }

    /// Number of distinct annotation files recorded so far.
    pub fn recorded_matches(&self) -> Result<i64> {
        let mut stmt = self
            .conn
            .prepare("SELECT COUNT(DISTINCT source) FROM category_stats")?;
        stmt.query_row([], |row| row.get(0))
    }

    /// Clear all recorded statistics (for testing or reset purposes)
    pub fn clear(&self) -> Result<()> {
        self.conn.execute("DELETE FROM category_stats", [])?;
        Ok(())
    }
}
