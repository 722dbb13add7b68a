//! Command implementations.
//!
//! Each command opens its own [`Database`](crate::storage::Database),
//! ensures the schema, and writes human-readable output to the supplied
//! writer.

pub mod add;
pub mod demo;
pub mod init;
pub mod list;
pub mod update;

use crate::error::Result;
use crate::storage::Database;
use std::path::Path;

/// Open the database and make sure the `Users` table exists.
pub(crate) fn open_ready(path: &Path) -> Result<Database> {
    let db = Database::open(path)?;
    db.ensure_schema()?;
    Ok(db)
}
