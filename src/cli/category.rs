//! Category management commands for boards.
//!
//! Provides commands to list and add top-level categories in a board file.

use crate::cli::common::{resolve_board_path, CliError, CliResult};
use crate::models::Category;
use crate::services::BoardService;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Manage categories in a board
#[derive(Debug, Clone, Args)]
pub struct CategoryArgs {
    /// Category subcommand
    #[command(subcommand)]
    pub command: CategoryCommand,
}

/// Category management subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum CategoryCommand {
    /// List all categories in a board
    List(ListCategoriesArgs),
    /// Add a new category to a board
    Add(AddCategoryArgs),
}

/// List all categories in a board
#[derive(Debug, Clone, Args)]
pub struct ListCategoriesArgs {
    /// Path to board file (defaults to the configured board)
    #[arg(short, long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Add a new category to a board
#[derive(Debug, Clone, Args)]
pub struct AddCategoryArgs {
    /// Path to board file (defaults to the configured board)
    #[arg(short, long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Image identifier that launches the category
    #[arg(long, value_name = "ID")]
    pub image: String,

    /// Category display name
    #[arg(long, value_name = "NAME")]
    pub name: String,
}

// JSON response types
#[derive(Debug, Serialize)]
struct CategoryItem {
    image: String,
    name: String,
    items: usize,
}

#[derive(Debug, Serialize)]
struct ListCategoriesResponse {
    categories: Vec<CategoryItem>,
    count: usize,
}

impl CategoryArgs {
    /// Execute the category command
    ///
    /// # Errors
    ///
    /// Propagates the subcommand's failure.
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            CategoryCommand::List(args) => args.execute(),
            CategoryCommand::Add(args) => args.execute(),
        }
    }
}

impl ListCategoriesArgs {
    /// Execute the list command
    ///
    /// # Errors
    ///
    /// Fails when the board cannot be loaded.
    pub fn execute(&self) -> CliResult<()> {
        let path = resolve_board_path(self.board.as_deref())?;

        let board = BoardService::load(&path)
            .map_err(|e| CliError::io(format!("Failed to load board: {e}")))?;

        let categories: Vec<CategoryItem> = board
            .categories()
            .map(|(image, category)| CategoryItem {
                image: image.to_string(),
                name: category.name().to_string(),
                items: category.len(),
            })
            .collect();

        let response = ListCategoriesResponse {
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
            println!("No categories defined.");
        } else {
            println!("Categories ({}):", response.count);
            println!();
            for category in response.categories {
                println!(
                    "  {:<32} {:<20} {} item(s)",
                    category.image, category.name, category.items
                );
            }
        }

        Ok(())
    }
}

impl AddCategoryArgs {
    /// Execute the add command
    ///
    /// Adding at an existing image key replaces that category with a fresh,
    /// empty one, the same policy the board applies at its root level.
    ///
    /// # Errors
    ///
    /// Fails when the board cannot be loaded or saved, or when the image
    /// identifier or name is empty.
    pub fn execute(&self) -> CliResult<()> {
        let path = resolve_board_path(self.board.as_deref())?;

        let mut board = BoardService::load(&path)
            .map_err(|e| CliError::io(format!("Failed to load board: {e}")))?;

        board
            .insert_category(&self.image, Category::new(&self.name))
            .map_err(|e| CliError::validation(format!("Invalid category: {e}")))?;

        BoardService::save(&board, &path)
            .map_err(|e| CliError::io(format!("Failed to save board: {e}")))?;

        println!("Added category '{}' at {}", self.name, self.image);
        Ok(())
    }
}
