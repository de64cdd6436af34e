//! Error types for the checklist store.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Comprehensive error type for all store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No document in any partition carries the given checklist id
    #[error("Checklist with ID {id} not found")]
    ChecklistNotFound { id: String },
    /// No registry entry carries the given category name
    #[error("Category '{name}' not found")]
    CategoryNotFound { name: String },
    /// A document exists but its metadata block cannot be located or parsed
    #[error("Malformed document at '{path}': {reason}")]
    MalformedDocument { path: PathBuf, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Item index outside the checklist's item sequence
    #[error("Item index {index} is out of range (checklist has {len} items)")]
    InvalidIndex { index: usize, len: usize },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Category side-file serialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> StoreError {
        StoreError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

/// Builder for malformed document errors, keyed by the offending path.
pub struct MalformedBuilder {
    path: PathBuf,
}

impl MalformedBuilder {
    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> StoreError {
        StoreError::MalformedDocument {
            path: self.path,
            reason: reason.into(),
        }
    }
}

impl StoreError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a builder for malformed document errors.
    pub fn malformed(path: impl Into<PathBuf>) -> MalformedBuilder {
        MalformedBuilder { path: path.into() }
    }

    pub fn checklist_not_found(id: impl Into<String>) -> Self {
        Self::ChecklistNotFound { id: id.into() }
    }

    pub fn category_not_found(name: impl Into<String>) -> Self {
        Self::CategoryNotFound { name: name.into() }
    }

    /// True for the two not-found kinds.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ChecklistNotFound { .. } | Self::CategoryNotFound { .. }
        )
    }
}

/// Extension trait attaching the offending path to I/O failures.
pub trait FsResultExt<T> {
    /// Map an `io::Error` into [`StoreError::FileSystem`] for `path`.
    fn fs_context(self, path: &Path) -> Result<T>;
}

impl<T> FsResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &Path) -> Result<T> {
        self.map_err(|source| StoreError::FileSystem {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Extension trait for wrapping arbitrary errors as configuration failures.
pub trait ResultExt<T> {
    /// Add context to any error type, converting to StoreError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| StoreError::Configuration {
            message: format!("{context}: {e}"),
        })
    }
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
