//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// The classic two-category sample board.
pub const SAMPLE_BOARD: &str = "\
img/food/plate.png food
>img/food/fries.png french fries
>img/food/watermelon.png watermelon
img/clothing/hanger.png clothing
>img/clothing/shirt.png collared shirt
";

/// A board whose first record is an orphan item line (dropped on load).
pub const BOARD_WITH_ORPHAN_ITEM: &str = "\
>img/lost.png orphan before any category
img/food/plate.png food
>img/food/fries.png french fries
";

/// Writes `content` to `board.txt` inside a fresh temp dir.
///
/// Returns the file path and the `TempDir` guard; keep the guard alive for
/// the duration of the test.
pub fn create_temp_board_file(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("board.txt");
    fs::write(&path, content).expect("Failed to write board file");
    (path, temp_dir)
}
