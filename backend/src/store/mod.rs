//! # Document Store
//!
//! SQLite-backed persistence for every campus-owned collection. The schema is
//! created on open, one table per entity plus the `campuses` directory used to
//! resolve campus names for list responses.
//!
//! A single connection is shared behind a mutex. Every operation goes through
//! [`Database::run`], which executes it on Actix's blocking pool while holding
//! the lock, so each operation observes and mutates the store atomically.

pub mod validation;

use crate::access::campus_filter::CampusFilter;
use actix_web::web;
use chrono::{DateTime, Utc};
use common::model::populated::Populated;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use validation::ValidationError;

/// Failures surfaced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record failed schema validation. The message is shown to clients as-is.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A uniqueness rule was violated.
    #[error("{0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("store worker failed: {0}")]
    Blocking(String),
    #[error("store connection lock poisoned")]
    Poisoned,
}

/// Shared handle on the SQLite database.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Opens (or creates) the database file at `path` and ensures the schema.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        Self::from_connection(Connection::open(path)?)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        migrate(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Runs `op` against the connection on the blocking thread pool.
    pub async fn run<F, T>(&self, op: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Connection) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        web::block(move || {
            let guard = conn.lock().map_err(|_| StoreError::Poisoned)?;
            op(&guard)
        })
        .await
        .map_err(|e| StoreError::Blocking(e.to_string()))?
    }
}

pub(crate) fn migrate(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS campuses(
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            created_at INTEGER NOT NULL
        );
        CREATE TABLE IF NOT EXISTS deductions(
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            amount REAL NOT NULL,
            description TEXT,
            campus_id TEXT NOT NULL,
            created_at INTEGER NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_deductions_campus ON deductions(campus_id);
        CREATE TABLE IF NOT EXISTS payrow_positions(
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            code TEXT NOT NULL UNIQUE,
            amount REAL NOT NULL,
            description TEXT,
            campus_id TEXT NOT NULL,
            created_at INTEGER NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_payrow_positions_campus ON payrow_positions(campus_id);
        CREATE TABLE IF NOT EXISTS scholarships(
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            amount REAL NOT NULL,
            description TEXT,
            campus_id TEXT NOT NULL,
            created_at INTEGER NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_scholarships_campus ON scholarships(campus_id);
        CREATE INDEX IF NOT EXISTS idx_scholarships_name ON scholarships(name);",
    )
}

/// Creation timestamps are stored as microseconds since the Unix epoch so
/// that `ORDER BY created_at` is a plain integer sort.
pub(crate) fn now_micros() -> (DateTime<Utc>, i64) {
    let now = Utc::now();
    let micros = now.timestamp_micros();
    // Round-trip so the returned value equals what a later read produces.
    (DateTime::from_timestamp_micros(micros).unwrap_or(now), micros)
}

pub(crate) fn timestamp_from_micros(idx: usize, micros: i64) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::from_timestamp_micros(micros)
        .ok_or(rusqlite::Error::IntegralValueOutOfRange(idx, micros))
}

fn column_list(columns: &[&str]) -> String {
    columns
        .iter()
        .map(|c| format!("r.{c}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Lists the rows of `table` visible through `filter`, newest first, each
/// joined with the owning campus name.
///
/// `map` reads the record from columns `0..columns.len()`; the campus name
/// follows at index `columns.len()`.
pub(crate) fn list_populated<T>(
    conn: &Connection,
    table: &str,
    columns: &[&str],
    filter: &CampusFilter,
    map: impl Fn(&Row<'_>) -> rusqlite::Result<T>,
) -> Result<Vec<Populated<T>>, StoreError> {
    let sql = format!(
        "SELECT {}, c.name FROM {table} AS r
         LEFT JOIN campuses AS c ON c.id = r.campus_id
         WHERE ?1 IS NULL OR r.campus_id = ?1
         ORDER BY r.created_at DESC, r.rowid DESC",
        column_list(columns)
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![filter.campus_id()], |row| {
        Ok(Populated {
            record: map(row)?,
            campus_name: row.get(columns.len())?,
        })
    })?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

/// Fetches the earliest-inserted row of `table` whose `key_column` equals `key`.
pub(crate) fn find_one<T>(
    conn: &Connection,
    table: &str,
    columns: &[&str],
    key_column: &str,
    key: &str,
    map: impl FnOnce(&Row<'_>) -> rusqlite::Result<T>,
) -> Result<Option<T>, StoreError> {
    let sql = format!(
        "SELECT {} FROM {table} AS r WHERE r.{key_column} = ?1 ORDER BY r.rowid ASC LIMIT 1",
        column_list(columns)
    );
    Ok(conn.query_row(&sql, params![key], map).optional()?)
}

pub(crate) fn delete_by_id(conn: &Connection, table: &str, id: &str) -> Result<(), StoreError> {
    conn.execute(&format!("DELETE FROM {table} WHERE id = ?1"), params![id])?;
    Ok(())
}

/// Maps a unique-constraint violation to [`StoreError::Conflict`].
pub(crate) fn conflict_on_unique(
    err: rusqlite::Error,
    message: impl FnOnce() -> String,
) -> StoreError {
    match err {
        rusqlite::Error::SqliteFailure(ref inner, _)
            if inner.code == ErrorCode::ConstraintViolation =>
        {
            StoreError::Conflict(message())
        }
        other => StoreError::Sqlite(other),
    }
}
