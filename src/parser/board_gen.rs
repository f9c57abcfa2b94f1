//! Board file generation (serialization).
//!
//! Reproduces the line-oriented format read by
//! [`board_file`](crate::parser::board_file), walking categories and their
//! items in insertion order so that a parse of the output reconstructs an
//! equal board. Writes are atomic (temp file + rename) so the target file
//! is never left in a corrupted state.

use crate::error::BoardError;
use crate::models::Board;
use std::path::Path;

/// Serializes a board to board-file text.
///
/// One record per line, each terminated by a single newline: a category
/// line per top-level entry, followed by one `>`-prefixed line per item.
#[must_use]
pub fn generate_board_text(board: &Board) -> String {
    let mut output = String::new();

    for (image, category) in board.categories() {
        output.push_str(image);
        output.push(' ');
        output.push_str(category.name());
        output.push('\n');

        for (item_image, text) in category.items() {
            output.push('>');
            output.push_str(item_image);
            output.push(' ');
            output.push_str(text);
            output.push('\n');
        }
    }

    output
}

/// Writes a board to `path` in the board file format.
///
/// The write is atomic: content goes to a sibling temp file which is then
/// renamed over the target. On failure the in-memory board is untouched and
/// the target keeps its previous content.
///
/// # Errors
///
/// Returns [`BoardError::FileAccess`] if the temp write or the rename
/// fails.
pub fn save_board_file(board: &Board, path: &Path) -> Result<(), BoardError> {
    let content = generate_board_text(board);
    atomic_write(path, &content)
}

/// Temp file + rename write, keeping the target intact on any failure.
fn atomic_write(path: &Path, content: &str) -> Result<(), BoardError> {
    let temp_path = path.with_extension("tmp");

    std::fs::write(&temp_path, content)
        .map_err(|e| BoardError::file_access(&temp_path, e))?;

    std::fs::rename(&temp_path, path).map_err(|e| BoardError::file_access(path, e))
}
