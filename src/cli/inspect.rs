//! Board summary command.

use crate::cli::common::{resolve_board_path, CliError, CliResult};
use crate::services::BoardService;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Show a summary of a board file: its categories and their item counts
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to board file (defaults to the configured board)
    #[arg(short, long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct CategorySummary {
    image: String,
    name: String,
    items: usize,
}

#[derive(Debug, Serialize)]
struct InspectResponse {
    board: String,
    categories: Vec<CategorySummary>,
    count: usize,
}

impl InspectArgs {
    /// Execute the inspect command
    ///
    /// # Errors
    ///
    /// Fails when the board cannot be loaded.
    pub fn execute(&self) -> CliResult<()> {
        let path = resolve_board_path(self.board.as_deref())?;

        let board = BoardService::load(&path)
            .map_err(|e| CliError::io(format!("Failed to load board: {e}")))?;

        let categories: Vec<CategorySummary> = board
            .categories()
            .map(|(image, category)| CategorySummary {
                image: image.to_string(),
                name: category.name().to_string(),
                items: category.len(),
            })
            .collect();

        let response = InspectResponse {
            board: path.display().to_string(),
            count: categories.len(),
            categories,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.count == 0 {
            println!("Board {} has no categories.", response.board);
        } else {
            println!("Board {} ({} categories):", response.board, response.count);
            println!();
            for category in &response.categories {
                println!(
                    "  {:<32} {:<20} {} item(s)",
                    category.image, category.name, category.items
                );
            }
        }

        Ok(())
    }
}
