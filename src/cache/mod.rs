//! Grammar caching.
//!
//! The cache is the only resource shared between concurrent resolution
//! runs, so implementations must be safe for concurrent `get`/`put`.
//! The resolver depends on that contract, never on a concrete engine;
//! eviction and persistence strategies live behind the trait.

pub mod key;
mod memory;

use crate::resolve::ImportedGrammar;

pub use memory::MemoryCache;

/// Key/value cache for resolved grammars.
///
/// Keys are deterministic digests produced by the [`key`] helpers, so
/// identical inputs hit identical entries across runs.
pub trait GrammarCache: Send + Sync {
    /// Look up a previously resolved grammar.
    fn get(&self, key: &str) -> Option<ImportedGrammar>;

    /// Store a resolved grammar. Existing entries are overwritten.
    fn put(&self, key: String, grammar: ImportedGrammar);
}
