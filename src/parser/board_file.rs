//! Board file parsing.
//!
//! The board file is line-oriented UTF-8 text, one record per line. A line
//! starting with `>` is an item belonging to the most recently declared
//! category; any other non-blank line declares a new category:
//!
//! ```text
//! img/food/plate.png food
//! >img/food/fries.png french fries
//! >img/food/watermelon.png watermelon
//! img/clothing/hanger.png clothing
//! >img/clothing/shirt.png collared shirt
//! ```
//!
//! Both record kinds split on the FIRST space only, so category names and
//! spoken text keep their internal spaces. Malformed records are dropped
//! with a warning rather than failing the whole load.

use crate::error::BoardError;
use crate::models::{Board, Category, OrderedMap};
use std::fmt;
use std::path::Path;

/// A malformed record dropped during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// 1-based line number of the dropped record.
    pub line: usize,
    /// What was wrong with it.
    pub message: String,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Result of parsing a board file: the board plus any dropped records.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// The parsed board, at the root level.
    pub board: Board,
    /// One warning per dropped record, in file order.
    pub warnings: Vec<ParseWarning>,
}

impl ParseOutcome {
    /// Returns true if every record in the file was accepted.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Parses a board file from disk.
///
/// # Errors
///
/// Returns [`BoardError::FileAccess`] if the file cannot be read; no
/// partially initialized board escapes. Malformed records inside a readable
/// file are reported as warnings, not errors.
pub fn parse_board_file(path: &Path) -> Result<ParseOutcome, BoardError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| BoardError::file_access(path, e))?;
    Ok(parse_board_str(&content))
}

/// Parses a board from in-memory text.
///
/// Never fails: malformed records are dropped and reported in
/// [`ParseOutcome::warnings`] with their 1-based line numbers. A lone
/// trailing `\r` is stripped from each line so CRLF files load cleanly.
#[must_use]
pub fn parse_board_str(content: &str) -> ParseOutcome {
    let mut categories: OrderedMap<String, Category> = OrderedMap::new();
    let mut warnings = Vec::new();
    // Key of the category items are currently appended to. None until the
    // first valid category line, or after a dropped one.
    let mut current: Option<String> = None;

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix('>') {
            parse_item_line(rest, line_no, current.as_deref(), &mut categories, &mut warnings);
        } else {
            current = parse_category_line(line, line_no, &mut categories, &mut warnings);
        }
    }

    ParseOutcome {
        board: Board::from_categories(categories),
        warnings,
    }
}

/// Handles a `>imageId text` record. Returns nothing; the item lands in the
/// current category or a warning is recorded.
fn parse_item_line(
    rest: &str,
    line_no: usize,
    current: Option<&str>,
    categories: &mut OrderedMap<String, Category>,
    warnings: &mut Vec<ParseWarning>,
) {
    let Some(key) = current else {
        warnings.push(ParseWarning {
            line: line_no,
            message: "item appears before any category; dropped".to_string(),
        });
        return;
    };

    let Some((image, text)) = rest.split_once(' ') else {
        warnings.push(ParseWarning {
            line: line_no,
            message: "item is missing the space between image and text; dropped".to_string(),
        });
        return;
    };

    if image.is_empty() {
        warnings.push(ParseWarning {
            line: line_no,
            message: "item has an empty image identifier; dropped".to_string(),
        });
        return;
    }

    // The current key always refers to a surviving category.
    if let Ok(category) = categories.get_mut(key) {
        // add_item cannot fail here: the image id was checked above
        let _ = category.add_item(image, text);
    }
}

/// Handles an `imageId name` record. Returns the new current category key,
/// or `None` when the record was dropped (subsequent items are orphans).
fn parse_category_line(
    line: &str,
    line_no: usize,
    categories: &mut OrderedMap<String, Category>,
    warnings: &mut Vec<ParseWarning>,
) -> Option<String> {
    let Some((image, name)) = line.split_once(' ') else {
        warnings.push(ParseWarning {
            line: line_no,
            message: "category is missing the space between image and name; dropped".to_string(),
        });
        return None;
    };

    if image.is_empty() {
        warnings.push(ParseWarning {
            line: line_no,
            message: "category has an empty image identifier; dropped".to_string(),
        });
        return None;
    }

    if name.is_empty() {
        warnings.push(ParseWarning {
            line: line_no,
            message: "category has an empty name; dropped".to_string(),
        });
        return None;
    }

    // Re-declaring an existing key replaces the category, keeping its
    // position, matching the board's own overwrite policy.
    let _ = categories.set(image.to_string(), Category::new(name));
    Some(image.to_string())
}
