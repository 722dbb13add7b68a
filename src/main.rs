//! `userbook` - user records over SQLite
//!
//! Opens a database file, runs the requested command, and reports any
//! failure on stderr.

use std::process::ExitCode;
use userbook::run;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
