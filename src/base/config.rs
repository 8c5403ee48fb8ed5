//! Process-level resolver configuration.

use std::path::PathBuf;

use super::constants::DEFAULT_MAX_IMPORT_DEPTH;

/// Static configuration consumed by the import resolver.
///
/// One value is built at process startup and shared by every resolution
/// request; the resolver never mutates it.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Feature toggle for the whole resolution subsystem. When off,
    /// `resolve_imports` returns an empty result without touching the
    /// file store or the cache.
    pub import_resolution_enabled: bool,

    /// Ceiling on the longest dependency chain of a resolution run.
    pub max_import_depth: usize,

    /// Directories grammar files may be loaded from. An empty list
    /// disables the boundary check; candidate paths are still
    /// normalized.
    pub allowed_base_paths: Vec<PathBuf>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            import_resolution_enabled: true,
            max_import_depth: DEFAULT_MAX_IMPORT_DEPTH,
            allowed_base_paths: Vec::new(),
        }
    }
}

impl ResolverConfig {
    /// Configuration restricted to the given grammar roots.
    pub fn with_allowed_paths(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            allowed_base_paths: paths.into_iter().collect(),
            ..Self::default()
        }
    }
}
