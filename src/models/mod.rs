//! Data models for the board, its categories, and the ordered table backing
//! them.
//!
//! Models are independent of file I/O and the CLI; the parser seeds them and
//! the service layer persists them.

pub mod board;
pub mod category;
pub mod ordered_map;

// Re-export all model types
pub use board::Board;
pub use category::Category;
pub use ordered_map::{MapError, MapKey, OrderedMap};
