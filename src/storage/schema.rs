//! Schema initialization.

use super::Database;
use crate::error::{CLOSED_HANDLE, Result, UserbookError, engine_message};
use tracing::info;

/// Table holding user records.
pub const USERS_TABLE: &str = "Users";

/// Idempotent DDL for the `Users` table.
pub const USERS_TABLE_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS Users (\
    ID INTEGER PRIMARY KEY AUTOINCREMENT, \
    Name TEXT NOT NULL, \
    Age INTEGER NOT NULL);";

impl Database {
    /// Create the `Users` table if it is absent. Safe to call on every start.
    ///
    /// # Errors
    ///
    /// Returns `UserbookError::SchemaFailed` if the handle is closed or the
    /// engine rejects the command.
    pub fn ensure_schema(&self) -> Result<()> {
        let conn = self
            .connection()
            .ok_or_else(|| UserbookError::SchemaFailed(CLOSED_HANDLE.to_string()))?;
        conn.execute_batch(USERS_TABLE_SCHEMA)
            .map_err(|e| UserbookError::SchemaFailed(engine_message(&e)))?;
        info!(table = USERS_TABLE, "Schema ready");
        Ok(())
    }
}
