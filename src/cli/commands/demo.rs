//! Demo command implementation.
//!
//! Runs the fixed create/read/update walk-through against one database
//! file: open, ensure the table, insert two users, print everything,
//! update one user, print again, close. The first failure stops the walk;
//! the handle is closed on every path once it was opened.

use super::list::print_rows;
use crate::error::Result;
use crate::storage::Database;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Execute the demo command.
///
/// # Errors
///
/// Returns the first error hit by any step.
pub fn execute<W: Write>(db_path: &Path, out: &mut W) -> Result<()> {
    let mut db = Database::open(db_path)?;
    writeln!(out, "Database opened successfully!")?;

    let outcome = run_steps(&db, out);

    if db.close() {
        writeln!(out, "Database closed successfully!")?;
    }
    outcome
}

fn run_steps<W: Write>(db: &Database, out: &mut W) -> Result<()> {
    db.ensure_schema()?;
    writeln!(out, "Table created successfully!")?;

    db.insert_user("Alice", 25)?;
    writeln!(out, "Operation completed successfully!")?;
    let bob = db.insert_user("Bob", 30)?;
    writeln!(out, "Operation completed successfully!")?;

    writeln!(out, "Current Records:")?;
    print_rows(db, out)?;

    writeln!(out, "Updating Bob's age to 35:")?;
    info!(id = bob, "Updating inserted record");
    db.update_user(bob, "Bob", 35)?;
    writeln!(out, "Record updated successfully!")?;

    writeln!(out, "Records After Update:")?;
    print_rows(db, out)?;
    Ok(())
}
