//! CLI command handlers for the AAC board tool.
//!
//! This module provides headless, scriptable access to the board core for
//! automation, testing, and assistive front-end integration. Commands are
//! one-shot; the interactive selection loop belongs to external front-ends.

pub mod category;
pub mod common;
pub mod config;
pub mod inspect;
pub mod item;
pub mod validate;

// Re-export types used by main.rs and tests
pub use category::CategoryArgs;
pub use common::{CliError, CliResult};
pub use config::ConfigArgs;
pub use inspect::InspectArgs;
pub use item::ItemArgs;
pub use validate::ValidateArgs;
