//! File System Types
//!
//! Core types for the virtual file system.

use indexmap::IndexMap;
use thiserror::Error;

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("no such file or directory: '{0}'")]
    NoSuchFileOrDirectory(String),

    #[error("not a directory: '{0}'")]
    NotADirectory(String),

    #[error("file exists: '{0}'")]
    AlreadyExists(String),

    #[error("directory not empty: '{0}'")]
    NotEmpty(String),

    #[error("unsupported operation on a directory: '{0}'")]
    UnsupportedOperation(String),

    #[error("filesystem invariant violated at '{0}'")]
    InvariantViolation(String),
}

/// A node in the virtual filesystem tree.
///
/// Directory entries are keyed by name; insertion order defines listing
/// order, so the map must be an `IndexMap`.
#[derive(Debug, Clone)]
pub enum Node {
    File(String),
    Directory(IndexMap<String, Node>),
}

impl Node {
    /// Create an empty directory node.
    pub fn empty_dir() -> Self {
        Node::Directory(IndexMap::new())
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    pub fn as_directory(&self) -> Option<&IndexMap<String, Node>> {
        match self {
            Node::Directory(entries) => Some(entries),
            Node::File(_) => None,
        }
    }

    pub fn as_directory_mut(&mut self) -> Option<&mut IndexMap<String, Node>> {
        match self {
            Node::Directory(entries) => Some(entries),
            Node::File(_) => None,
        }
    }
}

/// Directory entry with type information, as returned by a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_directory: bool,
}
