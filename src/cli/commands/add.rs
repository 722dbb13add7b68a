//! Add command implementation.

use super::open_ready;
use crate::cli::AddArgs;
use crate::error::Result;
use crate::validation::UserValidator;
use std::io::Write;
use std::path::Path;

/// Execute the add command.
///
/// # Errors
///
/// Returns an error if validation fails, the database cannot be opened, or
/// the insert does not complete.
pub fn execute<W: Write>(args: &AddArgs, db_path: &Path, out: &mut W) -> Result<()> {
    // Reject bad input before creating or touching the file.
    UserValidator::validate(&args.name, args.age)?;

    let db = open_ready(db_path)?;
    let id = db.insert_user(&args.name, args.age)?;
    writeln!(out, "Created user {id}: {} ({})", args.name, args.age)?;
    Ok(())
}
