//! Domain constants for grammar file handling.

/// File extension of ANTLR grammar files, without the leading dot.
pub const GRAMMAR_EXTENSION: &str = "g4";

/// Default ceiling on the longest import dependency chain.
pub const DEFAULT_MAX_IMPORT_DEPTH: usize = 10;
