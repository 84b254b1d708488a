//! Key-value blob storage: one JSON document per key.

use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use serde_json::Value;
use std::collections::HashMap;

/// Minimal storage contract: whole JSON values read and written by key.
pub trait BlobStore {
    /// `None` when nothing has been stored under `key`.
    fn get(&self, key: &str) -> AppResult<Option<Value>>;

    /// Overwrite the value stored under `key`.
    fn set(&mut self, key: &str, value: &Value) -> AppResult<()>;

    /// Record an operational event next to the data. Never fails.
    fn audit(&self, _operation: &str, _target: &str, _message: &str) {}
}

/// Blob store backed by the `kv` table of the SQLite database.
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open (and migrate if needed) the database at `path`.
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self::new(DbPool::open_ready(path)?))
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }
}

impl BlobStore for SqliteStore {
    fn get(&self, key: &str) -> AppResult<Option<Value>> {
        let raw: Option<String> = self
            .pool
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;

        match raw {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &Value) -> AppResult<()> {
        let text = serde_json::to_string(value)?;
        let now = Local::now().to_rfc3339();

        self.pool.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, text, now],
        )?;
        Ok(())
    }

    fn audit(&self, operation: &str, target: &str, message: &str) {
        ttlog_soft(&self.pool.conn, operation, target, message);
    }
}

/// Volatile store, used for tests and throw-away sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw serialized text, as a browser storage inspector would show it.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<Value>> {
        match self.values.get(key) {
            Some(text) => Ok(Some(serde_json::from_str(text)?)),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &Value) -> AppResult<()> {
        self.values
            .insert(key.to_string(), serde_json::to_string(value)?);
        Ok(())
    }
}
