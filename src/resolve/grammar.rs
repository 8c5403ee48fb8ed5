//! Resolved grammar value type.

use std::path::{Path, PathBuf};

/// The resolved result of one import.
///
/// Constructed once per distinct import per resolution run (or fetched
/// whole from the cache) and never mutated afterwards. The value is
/// `Clone` so the cache can hand out copies across resolution runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedGrammar {
    name: String,
    content: String,
    source_path: PathBuf,
    locator: String,
}

impl ImportedGrammar {
    /// Build a resolved grammar from its declared name, raw source text,
    /// and the filesystem location it was loaded from.
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
        source_path: impl Into<PathBuf>,
    ) -> Self {
        let source_path = source_path.into();
        let locator = file_locator(&source_path);
        Self {
            name: name.into(),
            content: content.into(),
            source_path,
            locator,
        }
    }

    /// Declared `grammar`/`lexer grammar` name (not necessarily the file stem).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw grammar source text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Filesystem location the grammar was loaded from.
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Canonical URI-like string derived from the source path; stable
    /// cache key component.
    pub fn locator(&self) -> &str {
        &self.locator
    }

    /// Directory containing the grammar; base path for resolving its own
    /// imports.
    pub fn base_dir(&self) -> &Path {
        self.source_path.parent().unwrap_or_else(|| Path::new(""))
    }
}

/// Canonical `file://` locator for a grammar file path.
pub fn file_locator(path: &Path) -> String {
    format!("file://{}", path.display())
}
