#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::cell::Cell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;

use crate::base::ResolverConfig;
use crate::cache::MemoryCache;
use crate::resolve::{ImportResolver, ResolveError};
use crate::store::FileStore;

/// In-memory file store that counts store traffic, so tests can observe
/// whether the cache or a config toggle short-circuited file access.
struct RecordingStore {
    files: HashMap<PathBuf, String>,
    probes: Rc<Cell<usize>>,
    reads: Rc<Cell<usize>>,
}

impl RecordingStore {
    fn with(files: &[(&str, &str)]) -> Self {
        Self {
            files: files
                .iter()
                .map(|(path, content)| (PathBuf::from(path), content.to_string()))
                .collect(),
            probes: Rc::new(Cell::new(0)),
            reads: Rc::new(Cell::new(0)),
        }
    }
}

impl FileStore for RecordingStore {
    fn exists(&self, path: &Path) -> bool {
        self.probes.set(self.probes.get() + 1);
        self.files.contains_key(path)
    }

    fn read(&self, path: &Path) -> Result<String, ResolveError> {
        self.reads.set(self.reads.get() + 1);
        self.files.get(path).cloned().ok_or_else(|| {
            ResolveError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "missing fixture"),
            )
        })
    }
}

fn resolver_over(files: &[(&str, &str)]) -> (ImportResolver<RecordingStore>, Rc<Cell<usize>>) {
    let store = RecordingStore::with(files);
    let reads = Rc::clone(&store.reads);
    let resolver = ImportResolver::new(ResolverConfig::default(), store, MemoryCache::shared());
    (resolver, reads)
}

#[test]
fn test_two_imports_resolve_with_contents() {
    let (resolver, _) = resolver_over(&[
        ("/ws/Common.g4", "grammar Common;\ncommon: 'c';"),
        ("/ws/Lexer.g4", "lexer grammar Lexer;\nID: [a-z]+;"),
    ]);

    let resolved = resolver
        .resolve_imports("grammar Root;\nimport Common, Lexer;", Path::new("/ws/Root.g4"))
        .unwrap();

    assert_eq!(resolved.len(), 2);
    assert_eq!(
        resolved.get("Common").unwrap().content(),
        "grammar Common;\ncommon: 'c';"
    );
    assert_eq!(
        resolved.get("Lexer").unwrap().content(),
        "lexer grammar Lexer;\nID: [a-z]+;"
    );
    // Root itself is never a member of its own result.
    assert!(resolved.get("Root").is_none());
}

#[test]
fn test_transitive_imports_resolved_from_each_grammars_directory() {
    let (resolver, _) = resolver_over(&[
        ("/ws/Mid.g4", "grammar Mid;\nimport Leaf;"),
        ("/ws/Leaf.g4", "grammar Leaf;\nleaf: 'l';"),
    ]);

    let resolved = resolver
        .resolve_imports("grammar Root;\nimport Mid;", Path::new("/ws/Root.g4"))
        .unwrap();

    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved.get("Leaf").unwrap().source_path(), Path::new("/ws/Leaf.g4"));
    // Discovery order: Mid first, then its own import.
    let names: Vec<_> = resolved.keys().cloned().collect();
    assert_eq!(names, vec!["Mid", "Leaf"]);
}

#[test]
fn test_transitive_cycle_back_to_root_fails() {
    let (resolver, _) = resolver_over(&[("/ws/B.g4", "grammar B;\nimport A;")]);

    let err = resolver
        .resolve_imports("grammar A;\nimport B;", Path::new("/ws/A.g4"))
        .unwrap_err();

    match err {
        ResolveError::CircularImport { from, to } => {
            assert_eq!(from, "B");
            assert_eq!(to, "A");
        }
        other => panic!("expected CircularImport, got {other:?}"),
    }
}

#[test]
fn test_self_import_rejected() {
    let (resolver, reads) = resolver_over(&[("/ws/A.g4", "grammar A;")]);

    let err = resolver
        .resolve_imports("grammar A;\nimport A;", Path::new("/ws/A.g4"))
        .unwrap_err();

    assert!(matches!(err, ResolveError::CircularImport { .. }));
    // Rejected before any file access.
    assert_eq!(reads.get(), 0);
}

#[test]
fn test_depth_limit_stops_before_resolving_deeper() {
    let files = [
        ("/ws/A.g4", "grammar A;\nimport B;"),
        ("/ws/B.g4", "grammar B;\nimport C;"),
        ("/ws/C.g4", "grammar C;"),
    ];
    let store = RecordingStore::with(&files);
    let reads = Rc::clone(&store.reads);
    let config = ResolverConfig {
        max_import_depth: 1,
        ..ResolverConfig::default()
    };
    let resolver = ImportResolver::new(config, store, MemoryCache::shared());

    let err = resolver
        .resolve_imports("grammar Root;\nimport A;", Path::new("/ws/Root.g4"))
        .unwrap_err();

    assert!(matches!(
        err,
        ResolveError::DepthExceeded {
            depth: 2,
            limit: 1,
            ..
        }
    ));
    // Only A was ever loaded; the B edge failed validation before a read.
    assert_eq!(reads.get(), 1);
}

#[test]
fn test_chain_at_depth_limit_passes() {
    let files = [
        ("/ws/A.g4", "grammar A;\nimport B;"),
        ("/ws/B.g4", "grammar B;"),
    ];
    let store = RecordingStore::with(&files);
    let config = ResolverConfig {
        max_import_depth: 2,
        ..ResolverConfig::default()
    };
    let resolver = ImportResolver::new(config, store, MemoryCache::shared());

    let resolved = resolver
        .resolve_imports("grammar Root;\nimport A;", Path::new("/ws/Root.g4"))
        .unwrap();
    assert_eq!(resolved.len(), 2);
}

#[test]
fn test_disabled_resolution_returns_empty_without_store_or_cache_traffic() {
    let store = RecordingStore::with(&[("/ws/Common.g4", "grammar Common;")]);
    let probes = Rc::clone(&store.probes);
    let reads = Rc::clone(&store.reads);
    let cache = MemoryCache::shared();
    let config = ResolverConfig {
        import_resolution_enabled: false,
        ..ResolverConfig::default()
    };
    let resolver = ImportResolver::new(config, store, Arc::clone(&cache));

    let resolved = resolver
        .resolve_imports("grammar Root;\nimport Common;", Path::new("/ws/Root.g4"))
        .unwrap();

    assert!(resolved.is_empty());
    assert_eq!(probes.get(), 0);
    assert_eq!(reads.get(), 0);
    assert!(cache.is_empty());
}

#[test]
fn test_second_run_served_from_cache() {
    let (resolver, reads) = resolver_over(&[
        ("/ws/Common.g4", "grammar Common;"),
        ("/ws/Lexer.g4", "lexer grammar Lexer;"),
    ]);
    let root = "grammar Root;\nimport Common, Lexer;";

    let first = resolver
        .resolve_imports(root, Path::new("/ws/Root.g4"))
        .unwrap();
    let reads_after_first = reads.get();
    assert_eq!(reads_after_first, 2);

    let second = resolver
        .resolve_imports(root, Path::new("/ws/Root.g4"))
        .unwrap();

    assert_eq!(first, second);
    // The cache short-circuited every file read.
    assert_eq!(reads.get(), reads_after_first);
}

#[test]
fn test_missing_import_is_not_found() {
    let (resolver, _) = resolver_over(&[]);

    let err = resolver
        .resolve_imports("grammar Root;\nimport Ghost;", Path::new("/ws/Root.g4"))
        .unwrap_err();

    match err {
        ResolveError::NotFound { name, base_dir } => {
            assert_eq!(name, "Ghost");
            assert_eq!(base_dir, PathBuf::from("/ws"));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_escaping_base_dir_is_a_security_error_before_any_read() {
    let store = RecordingStore::with(&[("/outside/Common.g4", "grammar Common;")]);
    let probes = Rc::clone(&store.probes);
    let reads = Rc::clone(&store.reads);
    let config = ResolverConfig::with_allowed_paths([PathBuf::from("/ws")]);
    let resolver = ImportResolver::new(config, store, MemoryCache::shared());

    let err = resolver
        .resolve_imports(
            "grammar Root;\nimport Common;",
            Path::new("/outside/Root.g4"),
        )
        .unwrap_err();

    assert!(matches!(err, ResolveError::Security { .. }));
    assert_eq!(probes.get(), 0);
    assert_eq!(reads.get(), 0);
}

#[test]
fn test_repeated_reference_is_idempotent() {
    let (resolver, reads) = resolver_over(&[("/ws/Common.g4", "grammar Common;")]);

    let resolved = resolver
        .resolve_imports(
            "grammar Root;\nimport Common;\nimport Common;",
            Path::new("/ws/Root.g4"),
        )
        .unwrap();

    assert_eq!(resolved.len(), 1);
    assert_eq!(reads.get(), 1);
}

#[test]
fn test_diamond_dependency_loads_shared_import_once() {
    let (resolver, reads) = resolver_over(&[
        ("/ws/A.g4", "grammar A;\nimport Common;"),
        ("/ws/B.g4", "grammar B;\nimport Common;"),
        ("/ws/Common.g4", "grammar Common;"),
    ]);

    let resolved = resolver
        .resolve_imports("grammar Root;\nimport A, B;", Path::new("/ws/Root.g4"))
        .unwrap();

    assert_eq!(resolved.len(), 3);
    assert_eq!(reads.get(), 3);
}

#[test]
fn test_declared_name_wins_over_file_stem() {
    let (resolver, _) = resolver_over(&[("/ws/Common.g4", "grammar CommonRules;\nc: 'x';")]);

    let resolved = resolver
        .resolve_imports("grammar Root;\nimport Common;", Path::new("/ws/Root.g4"))
        .unwrap();

    // Keyed by the referenced name, carrying the declared one.
    let grammar = resolved.get("Common").unwrap();
    assert_eq!(grammar.name(), "CommonRules");
}

#[test]
fn test_headerless_import_falls_back_to_referenced_name() {
    let (resolver, _) = resolver_over(&[("/ws/Frag.g4", "frag: 'f';")]);

    let resolved = resolver
        .resolve_imports("grammar Root;\nimport Frag;", Path::new("/ws/Root.g4"))
        .unwrap();

    assert_eq!(resolved.get("Frag").unwrap().name(), "Frag");
}

#[test]
fn test_resolve_import_directly() {
    let (resolver, _) = resolver_over(&[("/ws/Common.g4", "grammar Common;")]);

    let grammar = resolver.resolve_import("Common", Path::new("/ws")).unwrap();
    assert_eq!(grammar.name(), "Common");
    assert_eq!(grammar.locator(), "file:///ws/Common.g4");
}
