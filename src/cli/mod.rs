//! Command-line interface for `userbook`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::config::{CliOverrides, Config};
use crate::logging;

/// `userbook` - user records over SQLite.
#[derive(Parser, Debug)]
#[command(name = "userbook")]
#[command(
    author,
    version,
    about = "Create, read and update user records in a SQLite file",
    long_about = None,
    after_help = "With no command, runs the demo walk-through against the configured database."
)]
pub struct Cli {
    /// Database file (overrides config and USERBOOK_DB)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Config file (default: ./userbook.yaml if present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Exit with status 1 when a command reports an error
    #[arg(long, global = true)]
    pub strict_exit: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the create/read/update walk-through (default)
    Demo,

    /// Create the database file and table
    Init,

    /// Insert a user
    Add(AddArgs),

    /// Update a user's name and age by identifier
    Update(UpdateArgs),

    /// Print all users
    List,
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// User name (1-100 characters)
    pub name: String,

    /// Age (0-150)
    #[arg(allow_negative_numbers = true)]
    pub age: i64,
}

#[derive(Args, Debug, Clone)]
pub struct UpdateArgs {
    /// Identifier of the user to update
    pub id: i64,

    /// New name (1-100 characters)
    pub name: String,

    /// New age (0-150)
    #[arg(allow_negative_numbers = true)]
    pub age: i64,
}

/// Run the CLI.
///
/// Command failures are reported on stderr; the returned exit code is
/// success unless `strict_exit` is configured.
///
/// # Errors
///
/// Returns an error if configuration or logging cannot be set up.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let overrides = CliOverrides {
        config: cli.config.clone(),
        database: cli.db.clone(),
        strict_exit: cli.strict_exit,
    };
    let config = Config::load(&overrides).context("Failed to load configuration")?;
    logging::init_logging(cli.verbose, cli.quiet, config.log_level.as_deref())
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;

    let command = cli.command.unwrap_or(Commands::Demo);
    debug!(command = command.name(), db = %config.database.display(), "Dispatching");

    let result = {
        let mut stdout = io::stdout().lock();
        let result = dispatch(&command, &config, cli.json, &mut stdout);
        stdout.flush()?;
        result
    };

    Ok(finish(result, config.strict_exit))
}

fn dispatch<W: Write>(
    command: &Commands,
    config: &Config,
    json: bool,
    out: &mut W,
) -> crate::Result<()> {
    let db = config.database.as_path();
    match command {
        Commands::Demo => commands::demo::execute(db, out),
        Commands::Init => commands::init::execute(db, out),
        Commands::Add(args) => commands::add::execute(args, db, out),
        Commands::Update(args) => commands::update::execute(args, db, out),
        Commands::List => commands::list::execute(db, json, out),
    }
}

/// Report a command failure and pick the exit code.
fn finish(result: crate::Result<()>, strict_exit: bool) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(validation = err.is_validation(), strict_exit, "Command failed");
            eprintln!("Error: {err}");
            if strict_exit {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}

impl Commands {
    const fn name(&self) -> &'static str {
        match self {
            Self::Demo => "demo",
            Self::Init => "init",
            Self::Add(_) => "add",
            Self::Update(_) => "update",
            Self::List => "list",
        }
    }
}
