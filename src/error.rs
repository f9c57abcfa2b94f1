//! User-facing error type for board operations and board file I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by [`Board`](crate::models::Board),
/// [`Category`](crate::models::Category) and the board file parser/writer.
///
/// Map-internal errors ([`MapError`](crate::models::MapError)) are always
/// translated into one of these kinds before reaching a caller: a lookup
/// miss becomes [`BoardError::ElementNotFound`], a rejected empty key
/// becomes [`BoardError::EmptyImageId`].
#[derive(Debug, Error)]
pub enum BoardError {
    /// The selected image is not present at the current navigation level.
    #[error("image '{image}' is not present at the current navigation level")]
    ElementNotFound {
        /// The image identifier that was looked up.
        image: String,
    },

    /// An empty image identifier was used as a key.
    #[error("image identifier cannot be empty")]
    EmptyImageId,

    /// An empty display name was given for a top-level category. The empty
    /// name marks the implicit root category and cannot name a real one.
    #[error("category name cannot be empty")]
    ReservedCategoryName,

    /// A board file could not be read or written.
    #[error("failed to access board file: {path}")]
    FileAccess {
        /// The file that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

impl BoardError {
    /// Shorthand for an [`BoardError::ElementNotFound`] for `image`.
    #[must_use]
    pub fn element_not_found(image: impl Into<String>) -> Self {
        Self::ElementNotFound {
            image: image.into(),
        }
    }

    /// Wraps an I/O failure on `path` as [`BoardError::FileAccess`].
    #[must_use]
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}
