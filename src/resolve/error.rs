//! Error types for import resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while resolving grammar imports.
///
/// Every variant is a deterministic structural property of the input
/// grammar set, so none of them is worth retrying. Any of these aborts
/// the whole resolution run; there is no partial result.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Referenced import has no corresponding file under the base directory.
    #[error("grammar '{name}' not found under {}", .base_dir.display())]
    NotFound { name: String, base_dir: PathBuf },

    /// Candidate path escapes every allowed grammar root.
    #[error("path {} escapes the allowed grammar roots", .path.display())]
    Security { path: PathBuf },

    /// Adding the next dependency edge would close a cycle.
    #[error("circular import between '{from}' and '{to}'")]
    CircularImport { from: String, to: String },

    /// A dependency chain exceeds the configured maximum depth.
    #[error("import chain from '{name}' is {depth} levels deep (limit {limit})")]
    DepthExceeded {
        name: String,
        depth: usize,
        limit: usize,
    },

    /// Transport-level failure reading the file store.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ResolveError {
    /// Create a not-found error for an import name and its base directory.
    pub fn not_found(name: impl Into<String>, base_dir: impl Into<PathBuf>) -> Self {
        Self::NotFound {
            name: name.into(),
            base_dir: base_dir.into(),
        }
    }

    /// Create a security error for a path outside the allowed roots.
    pub fn security(path: impl Into<PathBuf>) -> Self {
        Self::Security { path: path.into() }
    }

    /// Create a circular-import error carrying both grammar names.
    pub fn circular_import(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::CircularImport {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create a depth-exceeded error for a dependency chain.
    pub fn depth_exceeded(name: impl Into<String>, depth: usize, limit: usize) -> Self {
        Self::DepthExceeded {
            name: name.into(),
            depth,
            limit,
        }
    }

    /// Create an IO error for a file-store read failure.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
