//! Shared CLI plumbing: error kinds, exit codes, and board path resolution.

use crate::config::Config;
use std::fmt;
use std::path::{Path, PathBuf};

/// Result alias for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Error raised by a CLI command, mapped to a process exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// Input rejected (bad arguments, failed validation, strict mode).
    Validation(String),
    /// File or serialization failure.
    Io(String),
    /// A named board, category, or item does not exist.
    NotFound(String),
}

impl CliError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Creates a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Process exit code for this error kind.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 1,
            Self::Io(_) => 2,
            Self::NotFound(_) => 3,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) | Self::Io(msg) | Self::NotFound(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for CliError {}

/// Resolves the board file a command should act on: the explicit `--board`
/// argument when given, otherwise the configured default board.
///
/// # Errors
///
/// Fails with a validation error when neither is available.
pub fn resolve_board_path(explicit: Option<&Path>) -> CliResult<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let config = Config::load().map_err(|e| CliError::io(format!("Failed to load config: {e}")))?;
    config.paths.default_board.ok_or_else(|| {
        CliError::validation(
            "No board file given. Pass --board <FILE> or set a default with 'config set-board'.",
        )
    })
}
