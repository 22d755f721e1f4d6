//! Configuration for fuzzmatrix
//!
//! Running with no arguments lists fuzz tests in the current directory using
//! `go` from `PATH`. Every option here only changes where and how `go test`
//! is invoked, or how much is logged to stderr.

use std::path::PathBuf;

use clap::Parser;

use crate::lister::{DEFAULT_GO, ListCommand};

/// Fuzzmatrix - emit the Go fuzz tests of a module as a CI job matrix
///
/// Prints a JSON array of {"name", "pkg"} objects to stdout, ready for
/// GitHub Actions `fromJSON`. Prints `[]` when there are no fuzz tests.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "fuzzmatrix")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Go module root to list fuzz tests from
    ///
    /// Defaults to the current working directory.
    #[arg(short, long, env = "FUZZMATRIX_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Go executable used to run `go test`
    ///
    /// Defaults to `go`, resolved through PATH.
    #[arg(long, env = "FUZZMATRIX_GO")]
    pub go: Option<String>,

    /// Enable verbose logging (debug level)
    ///
    /// Logs go to stderr so stdout only ever carries the matrix.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Get the Go executable, using `go` as default
    #[must_use]
    pub fn go_program(&self) -> &str {
        self.go.as_deref().unwrap_or(DEFAULT_GO)
    }

    /// Build the `go test` invocation described by this configuration
    #[must_use]
    pub fn list_command(&self) -> ListCommand {
        let command = ListCommand::new(self.go_program());
        match &self.workspace {
            Some(workspace) => command.current_dir(workspace),
            None => command,
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the workspace path is specified but doesn't exist
    /// or is not a directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref workspace) = self.workspace {
            if !workspace.exists() {
                return Err(ConfigError::WorkspaceNotFound(workspace.clone()));
            }
            if !workspace.is_dir() {
                return Err(ConfigError::WorkspaceNotDirectory(workspace.clone()));
            }
        }

        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Workspace path not found
    #[error("Workspace path not found: {0}")]
    WorkspaceNotFound(PathBuf),

    /// Workspace path is not a directory
    #[error("Workspace path is not a directory: {0}")]
    WorkspaceNotDirectory(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.workspace.is_none());
        assert!(config.go.is_none());
        assert!(!config.verbose);
        assert!(!config.quiet);
    }

    #[test]
    fn test_go_program_default() {
        let config = Config::default();
        assert_eq!(config.go_program(), "go");
    }

    #[test]
    fn test_go_program_custom() {
        let config = Config {
            go: Some("/usr/local/go/bin/go".to_string()),
            ..Default::default()
        };
        assert_eq!(config.go_program(), "/usr/local/go/bin/go");
    }

    #[test]
    fn test_list_command_default() {
        let command = Config::default().list_command();
        assert_eq!(command, ListCommand::default());
        assert!(command.dir().is_none());
    }

    #[test]
    fn test_list_command_with_workspace() {
        let custom = PathBuf::from("/tmp");
        let config = Config {
            workspace: Some(custom.clone()),
            go: Some("go1.22".to_string()),
            ..Default::default()
        };
        let command = config.list_command();
        assert_eq!(command.program(), "go1.22");
        assert_eq!(command.dir(), Some(custom.as_path()));
    }

    #[test]
    fn test_log_level_default() {
        let config = Config::default();
        assert_eq!(config.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_log_level_verbose() {
        let config = Config {
            verbose: true,
            ..Default::default()
        };
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_log_level_quiet() {
        let config = Config {
            quiet: true,
            ..Default::default()
        };
        assert_eq!(config.log_level(), tracing::Level::WARN);
    }

    #[test]
    fn test_validate_nonexistent_workspace() {
        let config = Config {
            workspace: Some(PathBuf::from("/nonexistent/path/12345")),
            ..Default::default()
        };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::WorkspaceNotFound(_))));
    }

    #[test]
    fn test_validate_workspace_is_file() {
        let config = Config {
            workspace: Some(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml")),
            ..Default::default()
        };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::WorkspaceNotDirectory(_))));
    }

    #[test]
    fn test_validate_valid_workspace() {
        let config = Config {
            workspace: Some(std::env::temp_dir()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_no_workspace() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
