//! Insertion-ordered symbol table.
//!
//! The order list is append-only: overwriting a value never moves its key, so
//! enumeration stays stable across re-declarations. This is the storage
//! primitive under the root table, the master table, and every category.

use crate::board::identity::SymbolKey;
use crate::error::{BoardError, Result};
use std::collections::HashMap;

/// Ordered mapping from symbol key to associated text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SymbolTable {
    entries: HashMap<SymbolKey, String>,
    order: Vec<SymbolKey>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a pairing. New keys append to the enumeration
    /// order; existing keys keep their slot.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let key = SymbolKey::new(key)?;
        if self.entries.insert(key.clone(), value.to_string()).is_none() {
            self.order.push(key);
        }
        Ok(())
    }

    /// Resolve a key to its text.
    pub fn get(&self, key: &str) -> Result<&str> {
        self.value_of(key).ok_or_else(|| BoardError::not_found(key))
    }

    /// Non-failing lookup.
    pub fn value_of(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in insertion order; empty when the table is empty.
    pub fn keys(&self) -> &[SymbolKey] {
        &self.order
    }

    /// Pairings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&SymbolKey, &str)> {
        self.order
            .iter()
            .filter_map(|key| self.entries.get(key.as_str()).map(|v| (key, v.as_str())))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
