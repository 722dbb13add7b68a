//! Output formatting for `userbook`.
//!
//! Text output mirrors the classic row dump: one `column: value` line per
//! column, then a separator. JSON output is for scripting.

mod output;
mod text;

pub use output::UserList;
pub use text::{ROW_SEPARATOR, format_row, write_row};
