//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Inspect or update the application configuration
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Configuration subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommand {
    /// Show the current configuration
    Show(ShowConfigArgs),
    /// Set the default board file
    SetBoard(SetBoardArgs),
}

/// Show the current configuration
#[derive(Debug, Clone, Args)]
pub struct ShowConfigArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Set the default board file
#[derive(Debug, Clone, Args)]
pub struct SetBoardArgs {
    /// Path to the board file
    #[arg(value_name = "FILE")]
    pub path: PathBuf,
}

// JSON response types
#[derive(Debug, Serialize)]
struct ConfigResponse {
    config_file: String,
    default_board: Option<String>,
}

impl ConfigArgs {
    /// Execute the config command
    ///
    /// # Errors
    ///
    /// Propagates the subcommand's failure.
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::SetBoard(args) => args.execute(),
        }
    }
}

impl ShowConfigArgs {
    /// Execute the show command
    ///
    /// # Errors
    ///
    /// Fails when the config file cannot be loaded.
    pub fn execute(&self) -> CliResult<()> {
        let config =
            Config::load().map_err(|e| CliError::io(format!("Failed to load config: {e}")))?;
        let config_file = Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;

        let response = ConfigResponse {
            config_file: config_file.display().to_string(),
            default_board: config
                .paths
                .default_board
                .as_ref()
                .map(|p| p.display().to_string()),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Config file: {}", response.config_file);
            match &response.default_board {
                Some(board) => println!("Default board: {board}"),
                None => println!("Default board: (not set)"),
            }
        }

        Ok(())
    }
}

impl SetBoardArgs {
    /// Execute the set-board command
    ///
    /// # Errors
    ///
    /// Fails when the path does not point at a readable board file or the
    /// config cannot be saved.
    pub fn execute(&self) -> CliResult<()> {
        let mut config =
            Config::load().map_err(|e| CliError::io(format!("Failed to load config: {e}")))?;

        config.paths.default_board = Some(self.path.clone());

        // save() re-validates, rejecting missing or non-file paths
        config
            .save()
            .map_err(|e| CliError::validation(format!("Failed to save config: {e}")))?;

        println!("Default board set to {}", self.path.display());
        Ok(())
    }
}
