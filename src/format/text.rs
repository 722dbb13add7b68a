//! Plain text row rendering.

use crate::model::Row;
use std::io::{self, Write};

/// Line printed after every row.
pub const ROW_SEPARATOR: &str = "-----------------------";

/// Render a row as `name: value` lines followed by [`ROW_SEPARATOR`].
///
/// NULL columns render as `NULL`.
#[must_use]
pub fn format_row(row: &Row) -> String {
    let mut out = String::new();
    for column in &row.columns {
        out.push_str(&format!("{}: {}\n", column.name, column.value));
    }
    out.push_str(ROW_SEPARATOR);
    out.push('\n');
    out
}

/// Write [`format_row`] output to `out`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_row<W: Write + ?Sized>(out: &mut W, row: &Row) -> io::Result<()> {
    out.write_all(format_row(row).as_bytes())
}
