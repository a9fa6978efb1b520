//! A single named category of leaf symbols.

use crate::board::identity::{CategoryName, SymbolKey};
use crate::board::table::SymbolTable;
use crate::board::Page;
use crate::error::Result;

/// One named group of leaf symbols, each pairing an image key with the
/// utterance it speaks.
#[derive(Clone, Debug, PartialEq)]
pub struct Category {
    name: CategoryName,
    symbols: SymbolTable,
}

impl Category {
    /// Create an empty category with the given display name.
    pub fn new(name: CategoryName) -> Self {
        Self {
            name,
            symbols: SymbolTable::new(),
        }
    }

    /// The display text, which is also the key this category is registered
    /// under in the board's category map.
    pub fn name(&self) -> &CategoryName {
        &self.name
    }

    /// Add or overwrite a leaf symbol. The `InvalidKey` failure is ignorable;
    /// the category is unchanged when it is returned.
    pub fn add_item(&mut self, key: &str, text: &str) -> Result<()> {
        self.symbols.set(key, text)
    }

    /// The utterance for a leaf symbol in this category.
    pub fn select(&self, key: &str) -> Result<&str> {
        self.symbols.get(key)
    }

    /// Image keys in insertion order.
    pub fn image_keys(&self) -> &[SymbolKey] {
        self.symbols.keys()
    }

    pub fn has_image(&self, key: &str) -> bool {
        self.symbols.has(key)
    }

    /// Pairings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&SymbolKey, &str)> {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Page for Category {
    fn select(&mut self, key: &str) -> Result<String> {
        Category::select(self, key).map(str::to_string)
    }

    fn image_keys(&self) -> &[SymbolKey] {
        Category::image_keys(self)
    }

    fn has_image(&self, key: &str) -> bool {
        Category::has_image(self, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;

    #[test]
    fn select_returns_the_paired_utterance() -> Result<()> {
        let mut category = Category::new(CategoryName::new("food"));
        category.add_item("img/food/fries.png", "french fries")?;
        assert_eq!(category.select("img/food/fries.png")?, "french fries");
        Ok(())
    }

    #[test]
    fn select_of_foreign_key_is_not_found() {
        let category = Category::new(CategoryName::new("food"));
        assert!(matches!(
            category.select("img/clothing/hanger.png"),
            Err(BoardError::NotFound { .. })
        ));
    }

    #[test]
    fn invalid_insert_leaves_the_category_intact() -> Result<()> {
        let mut category = Category::new(CategoryName::new("food"));
        category.add_item("img/food/fries.png", "french fries")?;
        assert!(category.add_item("", "dropped").is_err());
        assert_eq!(category.image_keys(), ["img/food/fries.png"]);
        Ok(())
    }

    #[test]
    fn a_category_is_a_page() -> Result<()> {
        let mut category = Category::new(CategoryName::new("food"));
        category.add_item("img/food/fries.png", "french fries")?;
        let page: &mut dyn Page = &mut category;
        assert!(page.has_image("img/food/fries.png"));
        assert_eq!(page.image_keys(), ["img/food/fries.png"]);
        assert_eq!(page.select("img/food/fries.png")?, "french fries");
        Ok(())
    }
}
