//! Deterministic cache keys.

use sha2::{Digest, Sha256};

/// Cache key for a grammar's expected location.
///
/// Hashing the locator keeps keys fixed-length and free of filesystem
/// separators regardless of how deep the grammar tree nests.
pub fn locator_key(locator: &str) -> String {
    digest(locator.as_bytes())
}

/// Cache key for raw grammar content, for callers that key derived
/// artifacts (such as compiled parsers) content-addressably.
pub fn content_key(content: &str) -> String {
    digest(content.as_bytes())
}

fn digest(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}
