//! Key/value storage media for the job collection.
//!
//! The job store keeps its whole collection under a single key as one JSON
//! text blob. A medium only has to read, replace and remove that blob; each
//! call is atomic on its own and there is no higher-level locking, so
//! concurrent writers from different processes are last-write-wins.
//!
//! - [`SqliteStorage`]: durable, shared by every process that opens the same
//!   database file.
//! - [`MemoryStorage`]: process-local, for tests and dry runs.
//!
//! Both accept an optional byte quota; a write larger than the quota is
//! rejected with `DispatchError::StorageWrite`.

use crate::error::{DispatchError, Result};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// A synchronous string key/value medium.
pub trait Storage {
    /// Read the value under `key`, if any.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Reject writes that would exceed a byte quota.
pub(crate) fn check_quota(key: &str, value: &str, quota_bytes: Option<usize>) -> Result<()> {
    match quota_bytes {
        Some(limit) if key.len() + value.len() > limit => Err(DispatchError::storage_write(key)
            .with_reason(format!(
                "quota exceeded ({} bytes > {limit} byte limit)",
                key.len() + value.len()
            ))),
        _ => Ok(()),
    }
}
