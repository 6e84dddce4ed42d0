//! In-Memory File System Implementation
//!
//! A pure in-memory virtual file system for the terminal simulation.
//! The store owns one root directory node; every lookup walks the tree
//! from the root, so there is no secondary path index to keep in sync.

use indexmap::IndexMap;
use tokio::sync::RwLock;

use super::types::{DirEntry, FsError, Node};

/// Resolve a possibly-relative path against a cursor into a canonical
/// absolute path.
///
/// A target starting with `/` is absolute, anything else is relative to
/// `cursor`. `..` pops one segment (a no-op at the root), `.` and empty
/// segments (repeated separators) are dropped. An empty target resolves
/// to the cursor itself.
pub fn resolve_path(cursor: &str, target: &str) -> String {
    let mut parts: Vec<&str> = if target.starts_with('/') {
        Vec::new()
    } else {
        cursor.split('/').filter(|p| !p.is_empty()).collect()
    };

    for segment in target.split('/').filter(|p| !p.is_empty()) {
        match segment {
            "." => {}
            ".." => {
                parts.pop();
            }
            other => parts.push(other),
        }
    }

    format!("/{}", parts.join("/"))
}

/// In-memory virtual file system.
pub struct MemFs {
    root: RwLock<Node>,
}

impl MemFs {
    /// Create a new filesystem containing only an empty root directory.
    pub fn new() -> Self {
        Self {
            root: RwLock::new(Node::empty_dir()),
        }
    }

    /// Create the fixed tree every session starts from.
    pub fn seeded() -> Self {
        let mut eski_proje = IndexMap::new();
        eski_proje.insert(
            "heart.txt".to_string(),
            Node::File("Dude are you still thinking about her?".to_string()),
        );
        eski_proje.insert(
            "carljung.txt".to_string(),
            Node::File(
                "No tree, it is said, can grow to heaven unless its roots reach down to hell."
                    .to_string(),
            ),
        );

        let mut projeler = IndexMap::new();
        projeler.insert(
            "web_terminali.js".to_string(),
            Node::File("// This is just simulated file.".to_string()),
        );
        projeler.insert("eski_proje".to_string(), Node::Directory(eski_proje));

        let mut belgeler = IndexMap::new();
        belgeler.insert(
            "notlar.txt".to_string(),
            Node::File("Important! Drink water".to_string()),
        );
        belgeler.insert(
            "needs.txt".to_string(),
            Node::File("Her? Or something diffrent we don't know".to_string()),
        );

        let mut user = IndexMap::new();
        user.insert(
            "README.txt".to_string(),
            Node::File("Hello! This is simulated wsl terminal.".to_string()),
        );
        user.insert("projeler".to_string(), Node::Directory(projeler));
        user.insert("belgeler".to_string(), Node::Directory(belgeler));
        user.insert(
            "eski_isim.txt".to_string(),
            Node::File("This file move with mv.".to_string()),
        );

        let mut home = IndexMap::new();
        home.insert("user".to_string(), Node::Directory(user));

        let mut root = IndexMap::new();
        root.insert("home".to_string(), Node::Directory(home));

        Self {
            root: RwLock::new(Node::Directory(root)),
        }
    }

    /// Resolve a path relative to a cursor (pure, no tree access).
    pub fn resolve_path(&self, cursor: &str, target: &str) -> String {
        resolve_path(cursor, target)
    }

    /// Check if an absolute path names an existing node.
    pub async fn exists(&self, path: &str) -> bool {
        let root = self.root.read().await;
        node_at(&root, path).is_some()
    }

    /// Check if an absolute path names an existing directory.
    pub async fn is_directory(&self, path: &str) -> bool {
        let root = self.root.read().await;
        matches!(node_at(&root, path), Some(Node::Directory(_)))
    }

    /// List the entries of the directory at `dir` in insertion order.
    pub async fn list(&self, dir: &str) -> Result<Vec<DirEntry>, FsError> {
        let root = self.root.read().await;
        let entries = dir_entries(&root, dir)?;
        Ok(entries
            .iter()
            .map(|(name, node)| DirEntry {
                name: name.clone(),
                is_directory: node.is_directory(),
            })
            .collect())
    }

    /// Read the payload of the file named `name` in the directory at `dir`.
    ///
    /// A directory entry is not readable; the simulation reports it the
    /// same way as a missing file.
    pub async fn read_file(&self, dir: &str, name: &str) -> Result<String, FsError> {
        let root = self.root.read().await;
        let entries = dir_entries(&root, dir)?;
        match entries.get(name) {
            Some(Node::File(content)) => Ok(content.clone()),
            _ => Err(FsError::NoSuchFileOrDirectory(name.to_string())),
        }
    }

    /// Create (or silently overwrite) a file named `name` in the directory
    /// at `dir`. The name is taken literally; it is never split on `/`.
    pub async fn create_file(&self, dir: &str, name: &str, content: &str) -> Result<(), FsError> {
        let mut root = self.root.write().await;
        let entries = dir_entries_mut(&mut root, dir)?;
        entries.insert(name.to_string(), Node::File(content.to_string()));
        Ok(())
    }

    /// Create an empty directory named `name` in the directory at `dir`.
    pub async fn create_dir(&self, dir: &str, name: &str) -> Result<(), FsError> {
        let mut root = self.root.write().await;
        let entries = dir_entries_mut(&mut root, dir)?;
        if entries.contains_key(name) {
            return Err(FsError::AlreadyExists(name.to_string()));
        }
        entries.insert(name.to_string(), Node::empty_dir());
        Ok(())
    }

    /// Remove the entry named `name` from the directory at `dir`.
    /// Non-empty directories are refused; there is no recursive delete.
    pub async fn remove(&self, dir: &str, name: &str) -> Result<(), FsError> {
        let mut root = self.root.write().await;
        let entries = dir_entries_mut(&mut root, dir)?;
        match entries.get(name) {
            None => return Err(FsError::NoSuchFileOrDirectory(name.to_string())),
            Some(Node::Directory(children)) if !children.is_empty() => {
                return Err(FsError::NotEmpty(name.to_string()));
            }
            Some(_) => {}
        }
        entries.shift_remove(name);
        Ok(())
    }

    /// Resolve `target` against `cursor` and return the new cursor if it
    /// names an existing directory.
    pub async fn change_directory(&self, cursor: &str, target: &str) -> Result<String, FsError> {
        let resolved = resolve_path(cursor, target);
        let root = self.root.read().await;
        match node_at(&root, &resolved) {
            Some(Node::Directory(_)) => Ok(resolved),
            _ => Err(FsError::NotADirectory(resolved)),
        }
    }

    /// Move or copy the entry named `source` in the current directory.
    ///
    /// If `target` resolves to an existing directory the entry goes into
    /// it under its original name; otherwise the entry is renamed to
    /// `target` within the current directory. Directory sources can only
    /// be moved, never copied, and never into their own subtree. All
    /// validation happens before the first mutation.
    pub async fn move_or_copy(
        &self,
        cursor: &str,
        source: &str,
        target: &str,
        is_move: bool,
    ) -> Result<(), FsError> {
        let mut root = self.root.write().await;

        let resolved_target = resolve_path(cursor, target);
        let (source_is_dir, file_content) = {
            let entries = dir_entries(&root, cursor)?;
            match entries.get(source) {
                None => return Err(FsError::NoSuchFileOrDirectory(source.to_string())),
                Some(Node::Directory(_)) => (true, None),
                Some(Node::File(content)) => (false, Some(content.clone())),
            }
        };

        let target_is_dir = matches!(node_at(&root, &resolved_target), Some(Node::Directory(_)));
        let (dest_dir, new_name) = if target_is_dir {
            (resolved_target, source.to_string())
        } else {
            (cursor.to_string(), target.to_string())
        };
        let renaming_in_place = dest_dir == cursor && new_name == source;

        if source_is_dir {
            if !is_move {
                return Err(FsError::UnsupportedOperation(source.to_string()));
            }
            let source_abs = resolve_path(cursor, source);
            if dest_dir == source_abs || dest_dir.starts_with(&format!("{}/", source_abs)) {
                return Err(FsError::UnsupportedOperation(source.to_string()));
            }
            if renaming_in_place {
                return Ok(());
            }

            let moved = dir_entries_mut(&mut root, cursor)?
                .shift_remove(source)
                .ok_or_else(|| FsError::NoSuchFileOrDirectory(source.to_string()))?;
            match dir_entries_mut(&mut root, &dest_dir) {
                Ok(dest) => {
                    dest.insert(new_name, moved);
                    Ok(())
                }
                Err(e) => {
                    // Put the subtree back so a failed move never loses it.
                    dir_entries_mut(&mut root, cursor)?.insert(source.to_string(), moved);
                    Err(e)
                }
            }
        } else {
            let content = file_content.unwrap_or_default();
            dir_entries_mut(&mut root, &dest_dir)?.insert(new_name, Node::File(content));
            if is_move && !renaming_in_place {
                dir_entries_mut(&mut root, cursor)?.shift_remove(source);
            }
            Ok(())
        }
    }
}

impl Default for MemFs {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tree traversal helpers
// ============================================================================

fn node_at<'a>(root: &'a Node, path: &str) -> Option<&'a Node> {
    let mut node = root;
    for segment in path.split('/').filter(|p| !p.is_empty()) {
        node = node.as_directory()?.get(segment)?;
    }
    Some(node)
}

fn node_at_mut<'a>(root: &'a mut Node, path: &str) -> Option<&'a mut Node> {
    let mut node = root;
    for segment in path.split('/').filter(|p| !p.is_empty()) {
        node = node.as_directory_mut()?.get_mut(segment)?;
    }
    Some(node)
}

/// The cursor must always name an existing directory; anything else is a
/// broken invariant, not a user error.
fn dir_entries<'a>(root: &'a Node, path: &str) -> Result<&'a IndexMap<String, Node>, FsError> {
    match node_at(root, path) {
        Some(Node::Directory(entries)) => Ok(entries),
        _ => Err(FsError::InvariantViolation(path.to_string())),
    }
}

fn dir_entries_mut<'a>(
    root: &'a mut Node,
    path: &str,
) -> Result<&'a mut IndexMap<String, Node>, FsError> {
    match node_at_mut(root, path) {
        Some(Node::Directory(entries)) => Ok(entries),
        _ => Err(FsError::InvariantViolation(path.to_string())),
    }
}

// ============================================================================
// Tests
// ============================================================================
