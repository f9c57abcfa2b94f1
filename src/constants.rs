//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and binary name.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "AAC Board";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "aacboard";
