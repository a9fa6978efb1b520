//! Board engine: identity newtypes, ordered tables, categories, and the
//! two-level navigation state machine.
//!
//! [`SymbolTable`] is the storage primitive; [`Category`] wraps one table
//! with a display name; [`Board`] owns the root, category, and master tables
//! and dispatches selection. [`Page`] is the surface a presentation
//! collaborator drives without caring which level it is rendering.

pub mod category;
pub mod identity;
pub mod navigator;
pub mod table;

pub use category::Category;
pub use identity::{CategoryName, SymbolKey};
pub use navigator::Board;
pub use table::SymbolTable;

use crate::error::Result;

/// A page of selectable symbols.
///
/// Selecting a key yields an utterance; the empty utterance means the
/// selection only navigated. Both [`Category`] and the whole [`Board`]
/// present this surface, so a renderer can drive either level uniformly.
pub trait Page {
    /// Resolve a selection on this page.
    fn select(&mut self, key: &str) -> Result<String>;
    /// Keys to render, in insertion order.
    fn image_keys(&self) -> &[SymbolKey];
    /// Whether the key is selectable on this page.
    fn has_image(&self, key: &str) -> bool;
}
