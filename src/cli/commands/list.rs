//! List command implementation.
//!
//! Text mode dumps every column of every row; JSON mode emits typed
//! records as a [`UserList`].

use super::open_ready;
use crate::error::{Result, UserbookError};
use crate::format::{UserList, write_row};
use crate::storage::Database;
use std::io::Write;
use std::path::Path;

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or the query fails.
pub fn execute<W: Write>(db_path: &Path, json: bool, out: &mut W) -> Result<()> {
    let db = open_ready(db_path)?;

    if json {
        let list = UserList::from(db.list_users()?);
        serde_json::to_writer_pretty(&mut *out, &list)?;
        writeln!(out)?;
        return Ok(());
    }

    if print_rows(&db, out)? == 0 {
        writeln!(out, "No records.")?;
    }
    Ok(())
}

/// Write every row of the `Users` table to `out`. Returns the row count.
///
/// # Errors
///
/// Returns `UserbookError::QueryFailed` if the read fails, or
/// `UserbookError::Io` if writing fails.
pub fn print_rows<W: Write + ?Sized>(db: &Database, out: &mut W) -> Result<usize> {
    db.read_all(|row| write_row(&mut *out, row).map_err(UserbookError::from))
}
