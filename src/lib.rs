//! `userbook` - user records over SQLite
//!
//! This crate provides the functionality behind the `userbook` CLI: a
//! small, safe create/read/update layer over one `SQLite` table, with every
//! write validated first and every argument bound through a prepared
//! statement.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`cli`] - Command-line interface using clap
//! - [`model`] - Data types (User, Value, Row)
//! - [`storage`] - `SQLite` database layer
//! - [`validation`] - Input checks run before any write
//! - [`config`] - Configuration management
//! - [`error`] - Error types and handling
//! - [`format`] - Output formatting (text, JSON)
//! - [`logging`] - `tracing` subscriber setup

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;
pub mod storage;
pub mod validation;

pub use error::{Result, UserbookError};
pub use model::{User, UserId, Value};
pub use storage::Database;

use std::process::ExitCode;

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if configuration or logging cannot be initialized.
pub fn run() -> anyhow::Result<ExitCode> {
    cli::run()
}
