//! AAC Board - command line tools for AAC communication boards
//!
//! This binary provides headless access to the board core: validating and
//! inspecting board files, editing categories and items, and managing the
//! application configuration. Rendering and speech playback belong to
//! external front-ends built on the library.

use aacboard::cli::{
    CategoryArgs, CliError, CliResult, ConfigArgs, InspectArgs, ItemArgs, ValidateArgs,
};
use aacboard::config::Config;
use aacboard::constants::{APP_BINARY_NAME, APP_NAME};
use aacboard::services::BoardService;
use clap::{Parser, Subcommand};

/// AAC Board - command line tools for AAC communication boards
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Subcommand to run; without one, a summary of the configured default
    /// board is shown
    #[command(subcommand)]
    command: Option<Command>,
}

/// Top-level subcommands
#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a board file, reporting any records the loader would drop
    Validate(ValidateArgs),
    /// Show a summary of a board file
    Inspect(InspectArgs),
    /// Manage categories in a board
    Category(CategoryArgs),
    /// Manage items inside a board category
    Item(ItemArgs),
    /// Inspect or update the application configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Validate(args)) => args.execute(),
        Some(Command::Inspect(args)) => args.execute(),
        Some(Command::Category(args)) => args.execute(),
        Some(Command::Item(args)) => args.execute(),
        Some(Command::Config(args)) => args.execute(),
        None => show_default_board(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}

/// Default action with no subcommand: summarize the configured board, or
/// explain how to get started.
fn show_default_board() -> CliResult<()> {
    println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
    println!();

    let config = Config::load().map_err(|e| CliError::io(format!("Failed to load config: {e}")))?;

    let Some(path) = config.paths.default_board else {
        println!("No default board configured.");
        println!();
        println!("To get started:");
        println!("  {APP_BINARY_NAME} config set-board <FILE>");
        println!("  {APP_BINARY_NAME} inspect --board <FILE>");
        println!();
        println!("For more options, run:");
        println!("  {APP_BINARY_NAME} --help");
        return Ok(());
    };

    let board = BoardService::load(&path)
        .map_err(|e| CliError::io(format!("Failed to load board: {e}")))?;

    println!("Default board: {}", path.display());
    println!("Categories: {}", board.len());
    for (image, category) in board.categories() {
        println!("  {:<32} {:<20} {} item(s)", image, category.name(), category.len());
    }

    Ok(())
}
