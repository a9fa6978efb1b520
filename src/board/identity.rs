//! Identity newtypes for board lookups.
//!
//! `SymbolKey` is a validated image reference; `CategoryName` is a category's
//! display text, which doubles as the key the category is registered under.
//! The dual use of the name is deliberate and kept in one type rather than
//! re-derived at call sites.

use crate::error::{BoardError, Result};
use std::borrow::Borrow;
use std::fmt;

/// A non-empty image reference identifying one selectable symbol.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolKey(String);

impl SymbolKey {
    /// Validate and wrap a raw key. Empty keys are rejected so no table ever
    /// holds an unselectable entry.
    pub fn new(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(BoardError::InvalidKey);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SymbolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Lets `HashMap<SymbolKey, _>` answer `&str` lookups without allocating.
impl Borrow<str> for SymbolKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for SymbolKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == **other
    }
}

/// A category's display text, used verbatim as its lookup key.
///
/// Unlike [`SymbolKey`] the empty name is representable; the parser accepts
/// whatever TEXT a category line declares.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CategoryName {
    fn borrow(&self) -> &str {
        &self.0
    }
}
