//! Validation command for board files.

use crate::cli::common::{resolve_board_path, CliError, CliResult};
use crate::services::BoardService;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Validate a board file, reporting any records the loader would drop
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to board file (defaults to the configured board)
    #[arg(short, long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat dropped records as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct WarningEntry {
    line: usize,
    message: String,
}

#[derive(Debug, Serialize)]
struct ValidationResponse {
    valid: bool,
    categories: usize,
    warnings: Vec<WarningEntry>,
}

impl ValidateArgs {
    /// Execute the validate command
    ///
    /// # Errors
    ///
    /// Fails when the board cannot be loaded, or in `--strict` mode when
    /// any record was dropped.
    pub fn execute(&self) -> CliResult<()> {
        let path = resolve_board_path(self.board.as_deref())?;

        let outcome = BoardService::load_with_warnings(&path)
            .map_err(|e| CliError::io(format!("Failed to load board: {e}")))?;

        let response = ValidationResponse {
            valid: outcome.is_clean(),
            categories: outcome.board.len(),
            warnings: outcome
                .warnings
                .iter()
                .map(|w| WarningEntry {
                    line: w.line,
                    message: w.message.clone(),
                })
                .collect(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.valid {
            println!(
                "Board is valid: {} categories, no dropped records.",
                response.categories
            );
        } else {
            println!(
                "Board loads with {} categories, but {} record(s) would be dropped:",
                response.categories,
                response.warnings.len()
            );
            for warning in &response.warnings {
                println!("  line {}: {}", warning.line, warning.message);
            }
        }

        if self.strict && !response.valid {
            return Err(CliError::validation(format!(
                "{} record(s) dropped",
                response.warnings.len()
            )));
        }

        Ok(())
    }
}
