//! A named category of images and the text each image speaks.

use crate::error::BoardError;
use crate::models::ordered_map::{MapError, OrderedMap};

/// One category of an AAC board: a display name plus a flat table mapping
/// each image identifier to the text spoken when that image is selected.
///
/// Items keep the order they were added in; that order is the display and
/// serialization order. The empty display name is reserved for the implicit
/// root category: [`Board`](crate::models::Board) and the parser reject it
/// for real categories, while a detached `Category` value itself places no
/// restriction on its name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Category {
    /// Display name (e.g., "food", "clothing").
    name: String,
    /// imageId to spoken text, in insertion order.
    items: OrderedMap<String, String>,
}

impl Category {
    /// Creates a new empty category with the given display name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: OrderedMap::new(),
        }
    }

    /// Returns the category's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds or overwrites the image to spoken-text pairing.
    ///
    /// Overwriting keeps the image's original position in the category.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyImageId`] if `image_id` is empty.
    pub fn add_item(&mut self, image_id: &str, text: &str) -> Result<(), BoardError> {
        self.items
            .set(image_id.to_string(), text.to_string())
            .map_err(|_| BoardError::EmptyImageId)
    }

    /// Returns all image identifiers in the category, in insertion order.
    /// Empty vector if the category has no items.
    #[must_use]
    pub fn image_locs(&self) -> Vec<&str> {
        self.items.keys().map(String::as_str).collect()
    }

    /// Returns the text associated with the given image.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ElementNotFound`] if the image is not in this
    /// category.
    pub fn select(&self, image_id: &str) -> Result<&str, BoardError> {
        self.items
            .get(image_id)
            .map(String::as_str)
            .map_err(|_: MapError| BoardError::element_not_found(image_id))
    }

    /// Returns true if the image is stored in this category. Never fails.
    #[must_use]
    pub fn has_image(&self, image_id: &str) -> bool {
        self.items.has_key(image_id)
    }

    /// Number of items in the category.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the category has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over `(image_id, spoken_text)` pairs in insertion order.
    pub fn items(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
