//! Update command implementation.

use super::open_ready;
use crate::cli::UpdateArgs;
use crate::error::Result;
use crate::validation::UserValidator;
use std::io::Write;
use std::path::Path;

/// Execute the update command.
///
/// # Errors
///
/// Returns an error if validation fails, the database cannot be opened, or
/// the update does not complete.
pub fn execute<W: Write>(args: &UpdateArgs, db_path: &Path, out: &mut W) -> Result<()> {
    UserValidator::validate(&args.name, args.age)?;

    let db = open_ready(db_path)?;
    db.update_user(args.id, &args.name, args.age)?;
    writeln!(out, "Record updated successfully!")?;
    Ok(())
}
