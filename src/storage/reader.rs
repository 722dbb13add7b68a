//! Reading rows back out of the `Users` table.
//!
//! [`Database::read_all`] is the generic, column-agnostic traversal used
//! for printing. [`Database::list_users`] is the typed view.

use super::Database;
use crate::error::{CLOSED_HANDLE, Result, UserbookError, engine_message};
use crate::model::{Column, Row, User, Value};
use rusqlite::types::ValueRef;
use tracing::debug;

/// Query issued by [`Database::read_all`].
pub const READ_ALL_SQL: &str = "SELECT * FROM Users;";

const LIST_USERS_SQL: &str = "SELECT ID, Name, Age FROM Users ORDER BY ID;";

fn to_value(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(v) => Value::Integer(v),
        ValueRef::Real(v) => Value::Real(v),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Value::Text(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

fn query_failed(err: &rusqlite::Error) -> UserbookError {
    UserbookError::QueryFailed(engine_message(err))
}

impl Database {
    /// Run the read-all query and hand each row to `sink`, in storage order.
    ///
    /// Every call re-issues the query. Returns the number of rows visited.
    ///
    /// # Errors
    ///
    /// Returns `UserbookError::QueryFailed` if the handle is closed or the
    /// query cannot run (e.g. the table is missing). An error returned by
    /// `sink` stops the traversal and is propagated unchanged.
    pub fn read_all<F>(&self, mut sink: F) -> Result<usize>
    where
        F: FnMut(&Row) -> Result<()>,
    {
        let conn = self
            .connection()
            .ok_or_else(|| UserbookError::QueryFailed(CLOSED_HANDLE.to_string()))?;

        let mut stmt = conn.prepare(READ_ALL_SQL).map_err(|e| query_failed(&e))?;
        let names: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut rows = stmt.query([]).map_err(|e| query_failed(&e))?;
        let mut visited = 0;
        while let Some(raw) = rows.next().map_err(|e| query_failed(&e))? {
            let mut row = Row::default();
            for (idx, name) in names.iter().enumerate() {
                let value = raw.get_ref(idx).map_err(|e| query_failed(&e))?;
                row.columns.push(Column {
                    name: name.clone(),
                    value: to_value(value),
                });
            }
            sink(&row)?;
            visited += 1;
        }
        debug!(rows = visited, "Read all rows");
        Ok(visited)
    }

    /// Load every user record, ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns `UserbookError::QueryFailed` if the handle is closed or the
    /// query cannot run.
    pub fn list_users(&self) -> Result<Vec<User>> {
        let conn = self
            .connection()
            .ok_or_else(|| UserbookError::QueryFailed(CLOSED_HANDLE.to_string()))?;

        let mut stmt = conn.prepare(LIST_USERS_SQL).map_err(|e| query_failed(&e))?;
        let rows = stmt
            .query_map([], |row| {
                Ok(User {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    age: row.get(2)?,
                })
            })
            .map_err(|e| query_failed(&e))?;

        let mut users = Vec::new();
        for user in rows {
            users.push(user.map_err(|e| query_failed(&e))?);
        }
        Ok(users)
    }
}
