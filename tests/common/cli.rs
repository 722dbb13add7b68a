//! Helpers for running the `userbook` binary in an isolated directory.

use assert_cmd::Command;
use std::ffi::OsStr;
use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch working directory; `userbook.yaml` and `test.db` land here.
pub struct Workspace {
    _temp: TempDir,
    pub root: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("create temp dir");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    pub fn db_path(&self) -> PathBuf {
        self.root.join("test.db")
    }
}

pub struct RunOutput {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Run `userbook` with `args` inside `workspace`, with a clean environment
/// for the variables it reads.
pub fn run_userbook<I, S>(workspace: &Workspace, args: I, label: &str) -> RunOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::cargo_bin("userbook")
        .expect("userbook binary")
        .current_dir(&workspace.root)
        .env_remove("USERBOOK_DB")
        .env_remove("USERBOOK_STRICT_EXIT")
        .env_remove("USERBOOK_LOG")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("{label}: failed to run userbook: {e}"));

    RunOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
