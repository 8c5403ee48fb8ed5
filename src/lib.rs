//! # antler-base
//!
//! Core library for ANTLR grammar import resolution.
//!
//! Given a `.g4` grammar document containing `import` declarations, the
//! resolver discovers every transitively imported grammar, loads their
//! contents cache-first, and returns a flattened, validated set while
//! guaranteeing termination for cyclic or unbounded import chains.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! resolve   → DependencyGraph, ImportResolver, import scanning
//!   ↓
//! store     → FileStore trait, local filesystem store, path boundary guard
//!   ↓
//! cache     → GrammarCache trait, in-memory cache, content-hash keys
//!   ↓
//! base      → ResolverConfig, domain constants, collection aliases
//! ```

// ============================================================================
// MODULES (dependency order: base → cache → store → resolve)
// ============================================================================

/// Foundation types: configuration, constants, collection aliases
pub mod base;

/// Caching: GrammarCache trait, in-memory cache, deterministic keys
pub mod cache;

/// Import resolution: dependency graph, scanner, resolver
pub mod resolve;

/// File access: FileStore trait, local store, path boundary guard
pub mod store;

// Re-export the types callers touch on every resolution
pub use base::ResolverConfig;
pub use cache::{GrammarCache, MemoryCache};
pub use resolve::{DependencyGraph, ImportResolver, ImportedGrammar, ResolveError, ResolvedImports};
pub use store::{FileStore, LocalFileStore, PathGuard};
