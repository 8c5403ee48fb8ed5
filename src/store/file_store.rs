//! File store capability and its local-filesystem implementation.

use std::path::Path;

use crate::resolve::ResolveError;

/// Read access to grammar files.
///
/// Paths handed to a store have already passed the
/// [`PathGuard`](super::PathGuard) boundary check.
pub trait FileStore {
    /// Whether a grammar file exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Load the file contents.
    ///
    /// Callers check [`exists`](Self::exists) first, so a failure here is
    /// a transport-level IO error, not a not-found condition.
    fn read(&self, path: &Path) -> Result<String, ResolveError>;
}

/// [`FileStore`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileStore;

impl FileStore for LocalFileStore {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read(&self, path: &Path) -> Result<String, ResolveError> {
        std::fs::read_to_string(path).map_err(|source| ResolveError::io(path, source))
    }
}
