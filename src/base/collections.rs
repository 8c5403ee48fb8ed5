//! Order-preserving collections with the fast FxHasher.

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxBuildHasher;

/// [`IndexMap`] keyed with [`FxBuildHasher`] (preserves insertion order).
pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// [`IndexSet`] keyed with [`FxBuildHasher`] (preserves insertion order).
pub type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;
