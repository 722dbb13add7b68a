//! Parameterized statement execution.
//!
//! Arguments are always bound positionally through the engine, never
//! spliced into SQL text. The prepared statement lives only inside
//! [`Database::execute`] and is finalized when it goes out of scope, on the
//! success path and on both failure paths.

use super::Database;
use crate::error::{CLOSED_HANDLE, Result, UserbookError, engine_message};
use crate::model::Value;
use rusqlite::ToSql;
use rusqlite::types::ToSqlOutput;
use tracing::debug;

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Self::Null => ToSqlOutput::Owned(rusqlite::types::Value::Null),
            Self::Integer(v) => ToSqlOutput::from(*v),
            Self::Real(v) => ToSqlOutput::from(*v),
            Self::Text(v) => ToSqlOutput::from(v.as_str()),
        })
    }
}

impl Database {
    /// Prepare `sql`, bind `args` to its placeholders left to right, and step
    /// it to completion.
    ///
    /// # Errors
    ///
    /// - `UserbookError::PrepareFailed` if the handle is closed, the SQL is
    ///   malformed, or `args` does not match the placeholder count.
    /// - `UserbookError::ExecFailed` if the statement does not finish (for
    ///   example a constraint violation, or a query that returns rows).
    pub fn execute(&self, sql: &str, args: &[Value]) -> Result<()> {
        let conn = self
            .connection()
            .ok_or_else(|| UserbookError::PrepareFailed(CLOSED_HANDLE.to_string()))?;

        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| UserbookError::PrepareFailed(engine_message(&e)))?;

        let expected = stmt.parameter_count();
        if expected != args.len() {
            return Err(UserbookError::PrepareFailed(format!(
                "statement expects {expected} argument(s), got {}",
                args.len()
            )));
        }

        for (i, arg) in args.iter().enumerate() {
            stmt.raw_bind_parameter(i + 1, arg)
                .map_err(|e| UserbookError::PrepareFailed(engine_message(&e)))?;
        }
        debug!(sql, args = args.len(), "Bound statement");

        let changed = stmt
            .raw_execute()
            .map_err(|e| UserbookError::ExecFailed(engine_message(&e)))?;
        debug!(sql, changed, "Statement done");

        Ok(())
    }
}
