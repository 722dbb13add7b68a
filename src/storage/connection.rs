//! Database connection handle.
//!
//! A [`Database`] owns exactly one `SQLite` session. The session is released
//! by [`Database::close`] or, failing that, when the handle is dropped, so
//! every exit path from the owning scope closes it exactly once.

use crate::error::{CLOSED_HANDLE, Result, UserbookError, engine_message};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// An open (or closed) `SQLite` session tied to a file path.
pub struct Database {
    pub(super) path: PathBuf,
    pub(super) conn: Option<Connection>,
}

impl Database {
    /// Open the database at `path`, creating the file if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `UserbookError::OpenFailed` with the engine diagnostic if the
    /// file cannot be opened or created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|e| UserbookError::OpenFailed {
            path: path.to_path_buf(),
            reason: engine_message(&e),
        })?;
        info!(path = %path.display(), "Opened database");
        Ok(Self {
            path: path.to_path_buf(),
            conn: Some(conn),
        })
    }

    /// Path this handle was opened with.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Release the session. Returns `true` if this call closed it, `false`
    /// if it was already closed.
    ///
    /// A close rejected by the engine is logged; the connection is dropped
    /// either way and the handle is left closed.
    pub fn close(&mut self) -> bool {
        let Some(conn) = self.conn.take() else {
            return false;
        };
        match conn.close() {
            Ok(()) => info!(path = %self.path.display(), "Closed database"),
            Err((conn, e)) => {
                warn!(
                    path = %self.path.display(),
                    "Engine rejected close: {}",
                    engine_message(&e)
                );
                drop(conn);
            }
        }
        true
    }

    /// Borrow the live connection, or `None` once closed.
    pub(crate) const fn connection(&self) -> Option<&Connection> {
        self.conn.as_ref()
    }

    /// Identifier assigned by the most recent successful INSERT.
    ///
    /// # Errors
    ///
    /// Returns `UserbookError::ExecFailed` if the handle is closed.
    pub fn last_insert_id(&self) -> Result<i64> {
        self.connection()
            .map(Connection::last_insert_rowid)
            .ok_or_else(|| UserbookError::ExecFailed(CLOSED_HANDLE.to_string()))
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        if self.close() {
            debug!(path = %self.path.display(), "Database released on drop");
        }
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("path", &self.path)
            .field("open", &self.is_open())
            .finish()
    }
}
