// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! `go test` invocation
//!
//! Runs `go test -list ^Fuzz -run ^$ -json ./...` and hands back its stdout
//! as lines. `-run ^$` matches nothing, so no test is executed; `-list`
//! only prints the names of matching functions.
//!
//! The arguments are passed to the process directly, never through a shell.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;
use tracing::{debug, info, warn};

/// Go executable used when none is configured
pub const DEFAULT_GO: &str = "go";

/// Arguments passed to the Go executable
pub const LIST_ARGS: [&str; 7] = ["test", "-list", "^Fuzz", "-run", "^$", "-json", "./..."];

/// Errors from running the test listing command
#[derive(Debug, Error)]
pub enum ListError {
    /// The command could not be started
    #[error("Failed to run {program}")]
    Spawn {
        /// Program that failed to start
        program: String,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The command ran but exited unsuccessfully
    #[error("`{program} test` failed ({status}): {stderr}")]
    CommandFailed {
        /// Program that was run
        program: String,
        /// Exit status of the process
        status: ExitStatus,
        /// Captured stderr, trimmed
        stderr: String,
    },
}

/// A `go test` listing invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCommand {
    program: String,
    dir: Option<PathBuf>,
}

impl Default for ListCommand {
    fn default() -> Self {
        Self::new(DEFAULT_GO)
    }
}

impl ListCommand {
    /// Create a listing command for the given Go executable
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            dir: None,
        }
    }

    /// Run in `dir` instead of the current directory
    #[must_use]
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    /// The Go executable
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Working directory, if one was set
    #[must_use]
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// The fixed argument list
    #[must_use]
    pub fn args(&self) -> &'static [&'static str] {
        &LIST_ARGS
    }

    /// Run the command and return its stdout as lines
    ///
    /// Blocks until the process exits. There is no timeout.
    ///
    /// # Errors
    ///
    /// Returns `ListError::Spawn` if the process cannot be started and
    /// `ListError::CommandFailed` if it exits with a non-zero status, which
    /// is what `go test` does when a package fails to build.
    pub fn run(&self) -> Result<Vec<String>, ListError> {
        let mut command = Command::new(&self.program);
        command
            .args(self.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.dir {
            command.current_dir(dir);
        }

        info!(
            program = %self.program,
            args = ?self.args(),
            dir = ?self.dir,
            "Listing fuzz tests"
        );

        let output = command.output().map_err(|source| ListError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();
            warn!(status = %output.status, stderr = %stderr, "Test listing failed");
            return Err(ListError::CommandFailed {
                program: self.program.clone(),
                status: output.status,
                stderr,
            });
        }

        let lines = split_output(&String::from_utf8_lossy(&output.stdout));
        debug!(lines = lines.len(), "Captured go test output");
        Ok(lines)
    }
}

/// Run `go test -list ^Fuzz -run ^$ -json ./...` in the current directory
///
/// # Errors
///
/// See [`ListCommand::run`].
pub fn list_tests() -> Result<Vec<String>, ListError> {
    ListCommand::default().run()
}

/// Split captured stdout into lines
///
/// Surrounding whitespace of the whole output is dropped, so there are no
/// empty trailing entries, and each line loses its trailing whitespace.
#[must_use]
pub fn split_output(stdout: &str) -> Vec<String> {
    stdout
        .trim()
        .lines()
        .map(|line| line.trim_end().to_owned())
        .collect()
}
