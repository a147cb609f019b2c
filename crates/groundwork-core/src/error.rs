//! Error types for the quoting and dispatch library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::JobStatus;

/// Comprehensive error type for all dispatch operations.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A price was requested for a service outside the rate table
    #[error("Unknown service type '{name}' (expected one of: snow, lawn, leaves, salt)")]
    UnknownService { name: String },
    /// A lifecycle transition outside the allowed edge set
    #[error("Cannot move job from '{from}' to '{to}'")]
    InvalidTransition { from: JobStatus, to: JobStatus },
    /// The storage medium rejected a write
    #[error("Failed to write '{key}' to storage: {reason}")]
    StorageWrite { key: String, reason: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Geometry that cannot be measured
    #[error("Invalid geometry: {reason}")]
    InvalidGeometry { reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> DispatchError {
        DispatchError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for storage write failures.
pub struct StorageWriteBuilder {
    key: String,
}

impl StorageWriteBuilder {
    /// Create a new storage write error builder for a key.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> DispatchError {
        DispatchError::StorageWrite {
            key: self.key,
            reason: reason.into(),
        }
    }
}

impl DispatchError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for storage write errors.
    pub fn storage_write(key: impl Into<String>) -> StorageWriteBuilder {
        StorageWriteBuilder::new(key)
    }

    /// Creates an invalid geometry error.
    pub fn invalid_geometry(reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            reason: reason.into(),
        }
    }

    /// Whether this error came from the environment (storage, filesystem)
    /// rather than from a caller asking for something the rules forbid.
    pub fn is_environmental(&self) -> bool {
        matches!(
            self,
            Self::StorageWrite { .. }
                | Self::Database { .. }
                | Self::FileSystem { .. }
                | Self::XdgDirectory(_)
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| DispatchError::database(message).with_source(e))
    }
}

/// Result type alias for dispatch operations
pub type Result<T> = std::result::Result<T, DispatchError>;
