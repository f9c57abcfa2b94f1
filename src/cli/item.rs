//! Item management commands for board categories.
//!
//! Provides commands to list a category's items and to add new
//! image to spoken-text pairings.

use crate::cli::common::{resolve_board_path, CliError, CliResult};
use crate::services::BoardService;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Manage items inside a board category
#[derive(Debug, Clone, Args)]
pub struct ItemArgs {
    /// Item subcommand
    #[command(subcommand)]
    pub command: ItemCommand,
}

/// Item management subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ItemCommand {
    /// List the items of one category
    List(ListItemsArgs),
    /// Add an item to a category
    Add(AddItemArgs),
}

/// List the items of one category
#[derive(Debug, Clone, Args)]
pub struct ListItemsArgs {
    /// Path to board file (defaults to the configured board)
    #[arg(short, long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Image identifier of the category to list
    #[arg(long, value_name = "ID")]
    pub category: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Add an item to a category
#[derive(Debug, Clone, Args)]
pub struct AddItemArgs {
    /// Path to board file (defaults to the configured board)
    #[arg(short, long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Image identifier of the category to add to
    #[arg(long, value_name = "ID")]
    pub category: String,

    /// Image identifier of the new item
    #[arg(long, value_name = "ID")]
    pub image: String,

    /// Text spoken when the item is selected
    #[arg(long, value_name = "TEXT")]
    pub text: String,
}

// JSON response types
#[derive(Debug, Serialize)]
struct ItemEntry {
    image: String,
    text: String,
}

#[derive(Debug, Serialize)]
struct ListItemsResponse {
    category: String,
    items: Vec<ItemEntry>,
    count: usize,
}

impl ItemArgs {
    /// Execute the item command
    ///
    /// # Errors
    ///
    /// Propagates the subcommand's failure.
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ItemCommand::List(args) => args.execute(),
            ItemCommand::Add(args) => args.execute(),
        }
    }
}

impl ListItemsArgs {
    /// Execute the list command
    ///
    /// # Errors
    ///
    /// Fails when the board cannot be loaded or the category does not
    /// exist.
    pub fn execute(&self) -> CliResult<()> {
        let path = resolve_board_path(self.board.as_deref())?;

        let board = BoardService::load(&path)
            .map_err(|e| CliError::io(format!("Failed to load board: {e}")))?;

        let category = board.category(&self.category).ok_or_else(|| {
            CliError::not_found(format!("No category at image '{}'", self.category))
        })?;

        let items: Vec<ItemEntry> = category
            .items()
            .map(|(image, text)| ItemEntry {
                image: image.to_string(),
                text: text.to_string(),
            })
            .collect();

        let response = ListItemsResponse {
            category: category.name().to_string(),
            count: items.len(),
            items,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.count == 0 {
            println!("Category '{}' has no items.", response.category);
        } else {
            println!("Category '{}' ({} items):", response.category, response.count);
            println!();
            for item in response.items {
                println!("  {:<32} {}", item.image, item.text);
            }
        }

        Ok(())
    }
}

impl AddItemArgs {
    /// Execute the add command
    ///
    /// Navigates the board exactly like a front-end would: open the
    /// category, then add the pairing, then save.
    ///
    /// # Errors
    ///
    /// Fails when the board cannot be loaded or saved, the category does
    /// not exist, or the item's image identifier is empty.
    pub fn execute(&self) -> CliResult<()> {
        let path = resolve_board_path(self.board.as_deref())?;

        let mut board = BoardService::load(&path)
            .map_err(|e| CliError::io(format!("Failed to load board: {e}")))?;

        board.select(&self.category).map_err(|_| {
            CliError::not_found(format!("No category at image '{}'", self.category))
        })?;

        board
            .add_item(&self.image, &self.text)
            .map_err(|e| CliError::validation(format!("Invalid item: {e}")))?;

        BoardService::save(&board, &path)
            .map_err(|e| CliError::io(format!("Failed to save board: {e}")))?;

        println!(
            "Added '{}' speaking \"{}\" to category '{}'",
            self.image,
            self.text,
            board.category_name()
        );
        Ok(())
    }
}
