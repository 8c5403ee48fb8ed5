//! Thread-safe in-memory grammar cache.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::resolve::ImportedGrammar;

use super::GrammarCache;

/// [`GrammarCache`] backed by a process-local hash map.
///
/// Values are cloned out on `get`, so readers never hold the lock while
/// working with an entry.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<FxHashMap<String, ImportedGrammar>>,
}

impl MemoryCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a fresh cache in an [`Arc`] for sharing across resolvers.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Number of cached grammars.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl GrammarCache for MemoryCache {
    fn get(&self, key: &str) -> Option<ImportedGrammar> {
        self.entries.read().get(key).cloned()
    }

    fn put(&self, key: String, grammar: ImportedGrammar) {
        self.entries.write().insert(key, grammar);
    }
}
