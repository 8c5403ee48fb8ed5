//! Transitive import resolution for grammar documents.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;

use crate::base::ResolverConfig;
use crate::base::constants::GRAMMAR_EXTENSION;
use crate::cache::{GrammarCache, MemoryCache, key};
use crate::store::{FileStore, LocalFileStore, PathGuard};

use super::error::ResolveError;
use super::grammar::{ImportedGrammar, file_locator};
use super::graph::DependencyGraph;
use super::scan;

/// Resolved transitive closure: grammar name → resolved import, in
/// discovery order. The root grammar is never a member of its own
/// result.
pub type ResolvedImports = IndexMap<String, ImportedGrammar>;

/// Resolves the transitive import closure of a grammar document.
///
/// Each [`resolve_imports`](Self::resolve_imports) call is independent
/// and single-threaded: the dependency graph it builds is local to the
/// call. The injected cache is the only shared state and carries its own
/// concurrency guarantee ([`GrammarCache`] is `Send + Sync`).
pub struct ImportResolver<S = LocalFileStore, C = MemoryCache> {
    config: ResolverConfig,
    store: S,
    guard: PathGuard,
    cache: Arc<C>,
}

impl ImportResolver {
    /// Resolver over the local filesystem with a fresh in-memory cache.
    pub fn with_defaults(config: ResolverConfig) -> Self {
        Self::new(config, LocalFileStore, MemoryCache::shared())
    }
}

impl<S: FileStore, C: GrammarCache> ImportResolver<S, C> {
    /// Build a resolver around the injected collaborators. The path
    /// boundary comes from `config.allowed_base_paths`.
    pub fn new(config: ResolverConfig, store: S, cache: Arc<C>) -> Self {
        let guard = PathGuard::new(config.allowed_base_paths.iter().cloned());
        Self {
            config,
            store,
            guard,
            cache,
        }
    }

    /// The configuration this resolver was built with.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve a single import expected at `base_dir/<name>.g4`,
    /// cache-first.
    ///
    /// On a cache miss the candidate path is boundary-checked before the
    /// store is consulted; a missing file is a not-found error, a failed
    /// read an IO error. Successfully resolved grammars are cached
    /// before returning.
    pub fn resolve_import(
        &self,
        name: &str,
        base_dir: &Path,
    ) -> Result<ImportedGrammar, ResolveError> {
        let candidate = base_dir.join(format!("{name}.{GRAMMAR_EXTENSION}"));
        let cache_key = key::locator_key(&file_locator(&candidate));

        if let Some(hit) = self.cache.get(&cache_key) {
            tracing::debug!("cache hit for import '{name}' under {}", base_dir.display());
            return Ok(hit);
        }

        let path = self.guard.validate(&candidate)?;
        if !self.store.exists(&path) {
            return Err(ResolveError::not_found(name, base_dir));
        }
        let content = self.store.read(&path)?;

        // The declared header name wins over the referenced name; files
        // without a header fall back to the name they were imported as.
        let declared = scan::grammar_name(&content).unwrap_or_else(|| name.to_string());
        let resolved = ImportedGrammar::new(declared, content, path);
        self.cache.put(cache_key, resolved.clone());
        tracing::debug!(
            "resolved import '{name}' from {}",
            resolved.source_path().display()
        );
        Ok(resolved)
    }

    /// Resolve the full transitive import closure of a root grammar.
    ///
    /// Traversal is depth-first from the root's declared name. Every
    /// dependency edge is cycle- and depth-checked before it is
    /// committed and before recursing, so a violation is reported
    /// without partially resolving deeper branches. Any failure aborts
    /// the whole call; callers receive either a complete, consistent
    /// import set or a specific error.
    pub fn resolve_imports(
        &self,
        root_content: &str,
        root_path: &Path,
    ) -> Result<ResolvedImports, ResolveError> {
        if !self.config.import_resolution_enabled {
            tracing::debug!("import resolution disabled; returning empty set");
            return Ok(ResolvedImports::new());
        }

        let root_name = scan::grammar_name(root_content)
            .or_else(|| {
                root_path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| "grammar".to_string());
        let base_dir = root_path
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .to_path_buf();

        let mut graph = DependencyGraph::new(self.config.max_import_depth);
        let mut resolved = ResolvedImports::new();
        self.resolve_level(
            &root_name,
            &root_name,
            root_content,
            &base_dir,
            &mut graph,
            &mut resolved,
        )?;

        tracing::debug!(
            "resolved {} import(s) for grammar '{root_name}'",
            resolved.len()
        );
        Ok(resolved)
    }

    /// Process the import list of one grammar, recursing into each newly
    /// resolved import with its containing directory as the new base.
    fn resolve_level(
        &self,
        root: &str,
        current: &str,
        content: &str,
        base_dir: &Path,
        graph: &mut DependencyGraph,
        resolved: &mut ResolvedImports,
    ) -> Result<(), ResolveError> {
        for referenced in scan::extract_imports(content) {
            if graph.would_create_cycle(current, &referenced) {
                return Err(ResolveError::circular_import(current, &referenced));
            }
            graph.add_dependency(current, &referenced);
            // The root reaches every recorded node, so its depth bounds
            // the longest chain in the whole graph, not just the branch
            // currently being walked.
            graph.validate_depth(root)?;

            if resolved.contains_key(&referenced) {
                tracing::trace!("import '{referenced}' already resolved");
                continue;
            }

            let grammar = self.resolve_import(&referenced, base_dir)?;
            let next_base: PathBuf = grammar.base_dir().to_path_buf();
            let next_content = grammar.content().to_string();
            resolved.insert(referenced.clone(), grammar);
            self.resolve_level(root, &referenced, &next_content, &next_base, graph, resolved)?;
        }
        Ok(())
    }
}
