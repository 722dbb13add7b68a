//! Init command implementation.

use super::open_ready;
use crate::error::Result;
use std::io::Write;
use std::path::Path;

/// Execute the init command.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or the table created.
pub fn execute<W: Write>(db_path: &Path, out: &mut W) -> Result<()> {
    let _db = open_ready(db_path)?;
    writeln!(out, "Initialized {}", db_path.display())?;
    Ok(())
}
