//! The board session model: top-level category table plus navigation state.

use crate::error::BoardError;
use crate::models::category::Category;
use crate::models::ordered_map::{MapError, OrderedMap};

/// Navigation state of a board session.
///
/// `InCategory` stores the top-level map key of the open category rather
/// than a reference to it, so the state can never dangle: no operation
/// removes a category, entering one requires its key to be present, and
/// `add_item` while inside a category only mutates that category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Selection {
    /// At the top level, where images launch categories.
    #[default]
    Root,
    /// Inside the category launched by this top-level image key.
    InCategory(String),
}

/// A two-level AAC board: a table of category-launching images, each leading
/// to a flat category of images mapped to spoken text.
///
/// Navigation is exactly two levels deep. [`Board::select`] at the root
/// opens a category; inside a category it returns the spoken text for an
/// item and never descends further. [`Board::reset`] returns to the root
/// from any state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// imageId to category, in the order categories were declared.
    categories: OrderedMap<String, Category>,
    /// Current navigation state. The only mutable session state.
    selection: Selection,
}

impl Board {
    /// Creates an empty board at the root level.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board seeded with the given category table, at the root
    /// level. Used by the board file loader.
    #[must_use]
    pub fn from_categories(categories: OrderedMap<String, Category>) -> Self {
        Self {
            categories,
            selection: Selection::Root,
        }
    }

    /// Handles selection of an image at the current navigation level.
    ///
    /// At the root, selecting a category-launching image opens that category
    /// and returns the empty string (nothing is spoken). Inside a category,
    /// selecting an item returns its spoken text and leaves the state
    /// unchanged; a category-launching image is not special there.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ElementNotFound`] if the image is not present
    /// at the current level.
    pub fn select(&mut self, image_id: &str) -> Result<String, BoardError> {
        if let Some(category) = self.current() {
            return category.select(image_id).map(str::to_owned);
        }

        if self.categories.has_key(image_id) {
            self.selection = Selection::InCategory(image_id.to_string());
            Ok(String::new())
        } else {
            Err(BoardError::element_not_found(image_id))
        }
    }

    /// Returns the images shown at the current level, in insertion order:
    /// the category-launching images at the root, or the open category's
    /// items.
    #[must_use]
    pub fn image_locs(&self) -> Vec<&str> {
        match self.current() {
            Some(category) => category.image_locs(),
            None => self.categories.keys().map(String::as_str).collect(),
        }
    }

    /// Adds a mapping at the current level.
    ///
    /// At the root this creates a brand-new empty category named `text`,
    /// keyed by `image_id`, replacing any category previously at that key,
    /// items and all. Inside a category it adds an item speaking `text`
    /// when `image_id` is selected.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyImageId`] for an empty identifier, or
    /// [`BoardError::ReservedCategoryName`] when creating a top-level
    /// category with an empty name.
    pub fn add_item(&mut self, image_id: &str, text: &str) -> Result<(), BoardError> {
        match &self.selection {
            Selection::Root => {
                let category = Category::new(text);
                insert_top_level(&mut self.categories, image_id, category)
            }
            Selection::InCategory(key) => match self.categories.get_mut(key.as_str()) {
                Ok(category) => category.add_item(image_id, text),
                Err(_) => Err(BoardError::element_not_found(image_id)),
            },
        }
    }

    /// Inserts `category` at the top level under `image_id`, replacing any
    /// category previously stored at that key. The navigation state is
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyImageId`] for an empty key and
    /// [`BoardError::ReservedCategoryName`] for an empty display name.
    pub fn insert_category(
        &mut self,
        image_id: &str,
        category: Category,
    ) -> Result<(), BoardError> {
        insert_top_level(&mut self.categories, image_id, category)
    }

    /// Returns the name of the open category, or the empty string at the
    /// root.
    #[must_use]
    pub fn category_name(&self) -> &str {
        self.current().map_or("", Category::name)
    }

    /// Returns true if the image is present at the current navigation
    /// level. Total; never fails.
    #[must_use]
    pub fn has_image(&self, image_id: &str) -> bool {
        match self.current() {
            Some(category) => category.has_image(image_id),
            None => self.categories.has_key(image_id),
        }
    }

    /// Returns the board to the root level, from any state.
    pub fn reset(&mut self) {
        self.selection = Selection::Root;
    }

    /// Iterates over `(image_id, category)` pairs in declaration order,
    /// regardless of the current navigation state.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &Category)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Looks up a top-level category by its launching image, regardless of
    /// the current navigation state.
    #[must_use]
    pub fn category(&self, image_id: &str) -> Option<&Category> {
        self.categories.get(image_id).ok()
    }

    /// Number of top-level categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns true if the board has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// The open category, or `None` at the root.
    fn current(&self) -> Option<&Category> {
        match &self.selection {
            Selection::Root => None,
            Selection::InCategory(key) => self.categories.get(key.as_str()).ok(),
        }
    }
}

/// Shared top-level insertion: empty keys and the reserved empty display
/// name are rejected before touching the map.
fn insert_top_level(
    categories: &mut OrderedMap<String, Category>,
    image_id: &str,
    category: Category,
) -> Result<(), BoardError> {
    if category.name().is_empty() {
        return Err(BoardError::ReservedCategoryName);
    }
    categories
        .set(image_id.to_string(), category)
        .map_err(|_: MapError| BoardError::EmptyImageId)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds the two-category board from the classic food/clothing file.
    fn sample_board() -> Board {
        let mut board = Board::new();
        let mut food = Category::new("food");
        food.add_item("img/food/fries.png", "french fries").unwrap();
        food.add_item("img/food/watermelon.png", "watermelon")
            .unwrap();
        let mut clothing = Category::new("clothing");
        clothing
            .add_item("img/clothing/shirt.png", "collared shirt")
            .unwrap();
        board.insert_category("img/food/plate.png", food).unwrap();
        board
            .insert_category("img/clothing/hanger.png", clothing)
            .unwrap();
        board
    }

    #[test]
    fn test_root_image_locs() {
        let board = sample_board();
        assert_eq!(
            board.image_locs(),
            vec!["img/food/plate.png", "img/clothing/hanger.png"]
        );
    }

    #[test]
    fn test_select_category_then_item() {
        let mut board = sample_board();

        assert_eq!(board.select("img/food/plate.png").unwrap(), "");
        assert_eq!(board.category_name(), "food");
        assert_eq!(
            board.image_locs(),
            vec!["img/food/fries.png", "img/food/watermelon.png"]
        );
        assert_eq!(
            board.select("img/food/fries.png").unwrap(),
            "french fries"
        );
        // selecting an item does not change the open category
        assert_eq!(board.category_name(), "food");
    }

    #[test]
    fn test_select_unknown_at_root() {
        let mut board = sample_board();
        let err = board.select("img/unknown.png").unwrap_err();
        assert!(matches!(err, BoardError::ElementNotFound { .. }));
        assert_eq!(board.category_name(), "");
    }

    #[test]
    fn test_select_unknown_inside_category() {
        let mut board = sample_board();
        board.select("img/food/plate.png").unwrap();
        let err = board.select("img/food/pizza.png").unwrap_err();
        assert!(matches!(err, BoardError::ElementNotFound { .. }));
        assert_eq!(board.category_name(), "food");
    }

    #[test]
    fn test_no_descent_past_two_levels() {
        let mut board = sample_board();
        board.select("img/food/plate.png").unwrap();
        // a category-launching image is not special inside a category
        let err = board.select("img/clothing/hanger.png").unwrap_err();
        assert!(matches!(err, BoardError::ElementNotFound { .. }));
        assert_eq!(board.category_name(), "food");
    }

    #[test]
    fn test_reset_returns_to_root() {
        let mut board = sample_board();
        board.select("img/food/plate.png").unwrap();
        board.reset();
        assert_eq!(board.category_name(), "");
        assert_eq!(board.image_locs().len(), 2);
    }

    #[test]
    fn test_add_item_at_root_creates_category() {
        let mut board = Board::new();
        board.add_item("img/animals/cat.png", "animals").unwrap();
        assert_eq!(board.image_locs(), vec!["img/animals/cat.png"]);
        assert_eq!(board.category("img/animals/cat.png").unwrap().name(), "animals");
    }

    #[test]
    fn test_add_item_at_root_overwrites_with_fresh_category() {
        let mut board = sample_board();
        // re-adding at an existing key discards the prior items entirely
        board.add_item("img/food/plate.png", "meals").unwrap();

        let category = board.category("img/food/plate.png").unwrap();
        assert_eq!(category.name(), "meals");
        assert!(category.is_empty());
        // position of the key is preserved
        assert_eq!(
            board.image_locs(),
            vec!["img/food/plate.png", "img/clothing/hanger.png"]
        );
    }

    #[test]
    fn test_add_item_inside_category() {
        let mut board = sample_board();
        board.select("img/food/plate.png").unwrap();
        board.add_item("img/food/pizza.png", "pizza").unwrap();
        assert_eq!(board.select("img/food/pizza.png").unwrap(), "pizza");
        // the top level is untouched
        board.reset();
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_add_item_rejects_empty_image() {
        let mut board = Board::new();
        assert!(matches!(
            board.add_item("", "animals"),
            Err(BoardError::EmptyImageId)
        ));
    }

    #[test]
    fn test_add_item_rejects_reserved_name_at_root() {
        let mut board = Board::new();
        assert!(matches!(
            board.add_item("img/animals/cat.png", ""),
            Err(BoardError::ReservedCategoryName)
        ));
        assert!(board.is_empty());
    }

    #[test]
    fn test_has_image_never_fails() {
        let mut board = sample_board();
        assert!(board.has_image("img/food/plate.png"));
        assert!(!board.has_image("img/food/fries.png"));
        assert!(!board.has_image(""));

        board.select("img/food/plate.png").unwrap();
        assert!(board.has_image("img/food/fries.png"));
        assert!(!board.has_image("img/food/plate.png"));
        assert!(!board.has_image("anything at all"));
    }
}
