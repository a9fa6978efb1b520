//! Two-level navigation over the category map.
//!
//! The board holds three tables: `root` maps each top-level key to the name
//! of the category it launches, each [`Category`] maps its leaf keys to
//! utterances, and `master` mirrors every pairing for whole-board lookups and
//! header serialization. The navigation algorithm depends on root and the
//! category map staying in step, so the mirroring is kept explicit and tested
//! rather than collapsed into one table.

use crate::board::category::Category;
use crate::board::identity::{CategoryName, SymbolKey};
use crate::board::table::SymbolTable;
use crate::board::Page;
use crate::error::Result;
use std::collections::BTreeMap;

/// Where selection is currently dispatched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
enum Focus {
    #[default]
    TopLevel,
    Category(CategoryName),
}

/// The two-level symbol board and its navigation state.
///
/// Selection at the top level enters a category; selection inside a category
/// speaks. There is no deeper nesting, and leaf selection never moves the
/// focus.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Board {
    root: SymbolTable,
    categories: BTreeMap<CategoryName, Category>,
    master: SymbolTable,
    focus: Focus,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a selection.
    ///
    /// At top level a known key enters its category and returns the empty
    /// utterance; inside a category a known key returns its utterance and
    /// leaves the focus unchanged. Unknown keys fail with `NotFound` and
    /// never move the focus.
    pub fn select(&mut self, key: &str) -> Result<String> {
        match &self.focus {
            Focus::TopLevel => {
                let name = CategoryName::new(self.root.get(key)?);
                // A root entry without a registered category is a programming
                // error, not a recoverable condition.
                assert!(
                    self.categories.contains_key(&name),
                    "root key '{key}' names category '{name}' missing from the category map"
                );
                self.focus = Focus::Category(name);
                Ok(String::new())
            }
            Focus::Category(name) => {
                let category = self
                    .categories
                    .get(name)
                    .expect("focus names a category absent from the map");
                Ok(category.select(key)?.to_string())
            }
        }
    }

    /// Return to the top level. Idempotent; never fails.
    pub fn reset(&mut self) {
        self.focus = Focus::TopLevel;
    }

    /// Keys for the focused page: the active category's symbols, or the
    /// top-level launchers.
    pub fn image_keys(&self) -> &[SymbolKey] {
        match &self.focus {
            Focus::TopLevel => self.root.keys(),
            Focus::Category(name) => self
                .categories
                .get(name)
                .map(Category::image_keys)
                .unwrap_or(&[]),
        }
    }

    /// Add a pairing under the current focus.
    ///
    /// At top level this declares a category: `key` becomes the launcher and
    /// `text` the category's name. Redeclaring an existing name replaces it
    /// with an empty category (last write wins). Inside a category it adds a
    /// leaf symbol. Every pairing also lands in the master table. The
    /// `InvalidKey` failure is ignorable; the board is unchanged when it is
    /// returned.
    pub fn add_item(&mut self, key: &str, text: &str) -> Result<()> {
        self.master.set(key, text)?;
        match &self.focus {
            Focus::TopLevel => {
                self.root.set(key, text)?;
                let name = CategoryName::new(text);
                self.categories
                    .insert(name.clone(), Category::new(name));
                Ok(())
            }
            Focus::Category(name) => {
                let category = self
                    .categories
                    .get_mut(name)
                    .expect("focus names a category absent from the map");
                category.add_item(key, text)
            }
        }
    }

    /// Whether `key` exists anywhere on the board, regardless of focus.
    pub fn has_image(&self, key: &str) -> bool {
        self.master.has(key)
    }

    /// The focused category's name, or `None` at top level.
    pub fn current_category(&self) -> Option<&CategoryName> {
        match &self.focus {
            Focus::TopLevel => None,
            Focus::Category(name) => Some(name),
        }
    }

    /// Top-level pairings (launcher key, category name) in declaration order.
    pub fn top_level(&self) -> impl Iterator<Item = (&SymbolKey, &str)> {
        self.root.iter()
    }

    /// Top-level launcher keys in declaration order, independent of focus.
    pub fn top_level_keys(&self) -> &[SymbolKey] {
        self.root.keys()
    }

    /// Read-only access to a category by name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }
}

impl Page for Board {
    fn select(&mut self, key: &str) -> Result<String> {
        Board::select(self, key)
    }

    fn image_keys(&self) -> &[SymbolKey] {
        Board::image_keys(self)
    }

    fn has_image(&self, key: &str) -> bool {
        Board::has_image(self, key)
    }
}
