//! File System Module
//!
//! Provides the virtual file system backing the terminal simulation.
//! A single nested directory tree is the only source of truth; absolute
//! paths are resolved by traversal from the root.

pub mod mem_fs;
pub mod types;

pub use mem_fs::{resolve_path, MemFs};
pub use types::{DirEntry, FsError, Node};
