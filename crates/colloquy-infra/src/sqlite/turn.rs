//! SQLite message store implementation.
//!
//! Implements `MessageStore` from `colloquy-core` using sqlx with split
//! read/write pools: raw queries, a private Row struct, appends and
//! clears on the single-connection writer.

use chrono::{DateTime, Utc};
use colloquy_core::chat::store::MessageStore;
use colloquy_types::error::StoreError;
use colloquy_types::turn::{Role, Turn};
use sqlx::Row;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `MessageStore`.
///
/// Ids come from the table's AUTOINCREMENT rowid, so they are unique,
/// strictly increasing, and never reused even after a clear.
pub struct SqliteMessageStore {
    pool: DatabasePool,
}

impl SqliteMessageStore {
    /// Create a new store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Private Row type for SQLite-to-domain mapping
// ---------------------------------------------------------------------------

/// Internal row type for mapping SQLite rows to domain Turn.
struct TurnRow {
    id: i64,
    role: String,
    content: String,
    timestamp: String,
}

impl TurnRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            role: row.try_get("role")?,
            content: row.try_get("content")?,
            timestamp: row.try_get("timestamp")?,
        })
    }

    fn into_turn(self) -> Result<Turn, StoreError> {
        let role: Role = self
            .role
            .parse()
            .map_err(|e: String| StoreError::Query(e))?;
        let timestamp = parse_datetime(&self.timestamp)?;

        Ok(Turn {
            id: self.id,
            role,
            content: self.content,
            timestamp,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::Query(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

// ---------------------------------------------------------------------------
// MessageStore implementation
// ---------------------------------------------------------------------------

impl MessageStore for SqliteMessageStore {
    async fn append(&self, role: Role, content: &str) -> Result<Turn, StoreError> {
        if content.trim().is_empty() {
            return Err(StoreError::EmptyContent);
        }

        let timestamp = Utc::now();
        let result = sqlx::query("INSERT INTO turns (role, content, timestamp) VALUES (?, ?, ?)")
            .bind(role.to_string())
            .bind(content)
            .bind(format_datetime(&timestamp))
            .execute(&self.pool.writer)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(Turn {
            id: result.last_insert_rowid(),
            role,
            content: content.to_string(),
            timestamp,
        })
    }

    async fn read_all(&self) -> Result<Vec<Turn>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, role, content, timestamp FROM turns ORDER BY timestamp ASC, id ASC",
        )
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;

        let mut turns = Vec::with_capacity(rows.len());
        for row in &rows {
            let turn_row = TurnRow::from_row(row).map_err(|e| StoreError::Query(e.to_string()))?;
            turns.push(turn_row.into_turn()?);
        }

        Ok(turns)
    }

    async fn clear(&self) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM turns")
            .execute(&self.pool.writer)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(())
    }
}
