//! Error types for `userbook`.
//!
//! Every storage failure carries the engine's own diagnostic text so the
//! message printed by the CLI is the one SQLite produced.

use std::path::PathBuf;
use thiserror::Error;

/// Diagnostic used when an operation runs against a handle that was closed.
pub const CLOSED_HANDLE: &str = "database handle is closed";

/// Primary error type for userbook operations.
#[derive(Error, Debug)]
pub enum UserbookError {
    // === Storage Errors ===
    /// The database file could not be opened or created.
    #[error("Failed to open database {}: {reason}", .path.display())]
    OpenFailed { path: PathBuf, reason: String },

    /// The `Users` table could not be created.
    #[error("Failed to create table: {0}")]
    SchemaFailed(String),

    /// A statement could not be prepared or its arguments bound.
    #[error("Failed to prepare statement: {0}")]
    PrepareFailed(String),

    /// A prepared statement did not run to completion.
    #[error("Failed to execute statement: {0}")]
    ExecFailed(String),

    /// A read query could not run.
    #[error("Failed to read data: {0}")]
    QueryFailed(String),

    // === Validation Errors ===
    /// Field validation failed before touching the database.
    #[error("Invalid argument: {field}: {reason}")]
    InvalidArgument { field: String, reason: String },

    // === Configuration Errors ===
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML configuration could not be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // === I/O Errors ===
    /// File system or output stream error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl UserbookError {
    #[must_use]
    pub fn invalid_argument(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// True for the variants that abort before any SQL reaches the engine.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Extract the engine diagnostic from a `rusqlite` error.
///
/// SQLite failures carry the text of `sqlite3_errmsg`; anything else falls
/// back to the error's own display.
#[must_use]
pub fn engine_message(err: &rusqlite::Error) -> String {
    match err {
        rusqlite::Error::SqliteFailure(_, Some(message)) => message.clone(),
        other => other.to_string(),
    }
}

/// Result type using `UserbookError`.
pub type Result<T> = std::result::Result<T, UserbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_message_prefers_sqlite_text() {
        let err = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_CONSTRAINT),
            Some("NOT NULL constraint failed: Users.Name".to_string()),
        );
        assert_eq!(engine_message(&err), "NOT NULL constraint failed: Users.Name");
    }

    #[test]
    fn engine_message_falls_back_to_display() {
        let err = rusqlite::Error::QueryReturnedNoRows;
        assert_eq!(engine_message(&err), err.to_string());
    }

    #[test]
    fn invalid_argument_display_names_field() {
        let err = UserbookError::invalid_argument("age", "age out of range");
        assert_eq!(err.to_string(), "Invalid argument: age: age out of range");
        assert!(err.is_validation());
    }
}
