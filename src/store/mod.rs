//! File access behind validated capabilities.
//!
//! The resolver never touches the filesystem directly: reads go through a
//! [`FileStore`] implementation, and every candidate path is checked by
//! the [`PathGuard`] before the store is consulted.

mod file_store;
mod path_guard;

pub use file_store::{FileStore, LocalFileStore};
pub use path_guard::{PathGuard, normalize_path};
