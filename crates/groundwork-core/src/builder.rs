//! Builder for creating and configuring JobStore instances.

use std::path::{Path, PathBuf};

use log::debug;

use crate::{
    error::{DispatchError, Result},
    storage::{MemoryStorage, SqliteStorage},
    store::{JobStore, DEFAULT_STORAGE_KEY},
};

/// Builder for creating and configuring JobStore instances.
#[derive(Debug, Clone, Default)]
pub struct JobStoreBuilder {
    database_path: Option<PathBuf>,
    storage_key: Option<String>,
    quota_bytes: Option<usize>,
    in_memory: bool,
}

impl JobStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/groundwork/groundwork.db` or
    /// `~/.local/share/groundwork/groundwork.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the key the job collection is stored under.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = Some(key.into());
        self
    }

    /// Caps the size of the stored collection in bytes.
    pub fn with_quota_bytes(mut self, quota_bytes: Option<usize>) -> Self {
        self.quota_bytes = quota_bytes;
        self
    }

    /// Keep jobs in process memory instead of a database file.
    pub fn in_memory(mut self) -> Self {
        self.in_memory = true;
        self
    }

    /// Builds the configured store.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::FileSystem` if the database directory cannot
    /// be created, `DispatchError::XdgDirectory` if no default location can
    /// be determined, and `DispatchError::Database` if the database cannot
    /// be opened.
    pub fn build(self) -> Result<JobStore> {
        let key = self
            .storage_key
            .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());

        if self.in_memory {
            debug!("Using in-memory job storage under '{key}'");
            let storage = MemoryStorage::new().with_quota(self.quota_bytes);
            return Ok(JobStore::new(storage, key));
        }

        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| DispatchError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        debug!("Using job storage at {} under '{key}'", db_path.display());
        let storage = SqliteStorage::new(&db_path)?.with_quota(self.quota_bytes);
        Ok(JobStore::new(storage, key))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("groundwork")
            .place_data_file("groundwork.db")
            .map_err(|e| DispatchError::XdgDirectory(e.to_string()))
    }
}
