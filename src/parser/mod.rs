//! Parsing and serialization of the board file format.
//!
//! This module handles reading boards from the line-oriented text format
//! and generating that format back for saving.

pub mod board_file;
pub mod board_gen;

// Re-export commonly used functions
pub use board_file::{parse_board_file, parse_board_str, ParseOutcome, ParseWarning};
pub use board_gen::{generate_board_text, save_board_file};
