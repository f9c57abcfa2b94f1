//! Board file I/O service.
//!
//! This module centralizes board file operations, providing a consistent
//! interface for loading and saving boards with path context in error
//! messages.

use anyhow::{Context, Result};
use std::path::Path;

use crate::{models::Board, parser, parser::ParseOutcome};

/// Service for board file I/O.
///
/// Wraps the parser and writer with contextual errors naming the file
/// involved, which is what the CLI and front-ends report to the user.
pub struct BoardService;

impl BoardService {
    /// Loads a board from a board file, discarding parse warnings.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use aacboard::services::BoardService;
    ///
    /// let board = BoardService::load(Path::new("board.txt"))?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read; malformed records are dropped
    /// silently here (use [`BoardService::load_with_warnings`] to see them).
    pub fn load(path: &Path) -> Result<Board> {
        Self::load_with_warnings(path).map(|outcome| outcome.board)
    }

    /// Loads a board along with the warnings for any dropped records.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read.
    pub fn load_with_warnings(path: &Path) -> Result<ParseOutcome> {
        parser::parse_board_file(path)
            .with_context(|| format!("Failed to load board from {}", path.display()))
    }

    /// Saves a board to a board file using an atomic write.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors; the target file keeps its previous content.
    pub fn save(board: &Board, path: &Path) -> Result<()> {
        parser::save_board_file(board, path)
            .with_context(|| format!("Failed to save board to {}", path.display()))
    }
}
