//! SQLite-backed storage medium.

use std::{path::Path, time::Duration};

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension};

use super::{check_quota, Storage};
use crate::error::{DatabaseResultExt, DispatchError, Result};

/// Wait this long for another process's write lock before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database connection holding the key/value table.
pub struct SqliteStorage {
    connection: Connection,
    quota_bytes: Option<usize>,
}

impl SqliteStorage {
    /// Opens (or creates) the database file and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        Self::from_connection(connection)
    }

    /// A private, non-durable database.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;
        Self::from_connection(connection)
    }

    fn from_connection(connection: Connection) -> Result<Self> {
        connection
            .busy_timeout(BUSY_TIMEOUT)
            .db_context("Failed to set busy timeout")?;

        let storage = Self {
            connection,
            quota_bytes: None,
        };
        storage.initialize_schema()?;
        Ok(storage)
    }

    /// Limit the size of any single stored entry (key plus value).
    pub fn with_quota(mut self, quota_bytes: Option<usize>) -> Self {
        self.quota_bytes = quota_bytes;
        self
    }

    /// Initializes the database schema using the embedded SQL file.
    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")
    }
}

impl Storage for SqliteStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .db_context("Failed to read from storage")
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        check_quota(key, value, self.quota_bytes)?;

        let now = Timestamp::now().to_string();
        self.connection
            .execute(
                "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3) \
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, &now],
            )
            .map_err(|e| DispatchError::storage_write(key).with_reason(e.to_string()))?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.connection
            .execute("DELETE FROM kv WHERE key = ?1", params![key])
            .map_err(|e| DispatchError::storage_write(key).with_reason(e.to_string()))?;
        Ok(())
    }
}
