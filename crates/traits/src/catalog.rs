//! SymbolCatalog trait for abstracting symbol manifest access.
//!
//! Symbol fragments resolve their selectors against a manifest of available
//! symbols. The catalog only stores and serves the manifest rows; matching
//! logic lives with the fragments.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// One manifest row describing an available symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolEntry {
    pub id: String,
    pub name: String,
    pub category: String,
    pub standard: String,
    pub filename: String,
}

/// A source of symbol manifest entries.
pub trait SymbolCatalog: Send + Sync + Debug {
    fn entries(&self) -> &[SymbolEntry];
}

/// Catalog backed by a pre-populated list of entries.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    entries: Vec<SymbolEntry>,
}

impl InMemoryCatalog {
    pub fn new(entries: Vec<SymbolEntry>) -> Self {
        Self { entries }
    }

    /// An empty catalog: every symbol lookup fails with "no matches".
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: SymbolEntry) {
        self.entries.push(entry);
    }
}

impl SymbolCatalog for InMemoryCatalog {
    fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }
}
