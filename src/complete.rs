//! Tab completion for command names and directory entries.
//!
//! The first token of a line completes against the fixed command set;
//! any later token completes against the entries of the current
//! directory. Matching is plain prefix matching and returns every
//! candidate in source order; the caller decides what to do with them.

use crate::fs::{resolve_path, MemFs};

/// The fixed command set, in the order completion offers it.
pub const AVAILABLE_COMMANDS: &[&str] = &[
    "help", "echo", "pwd", "ls", "cd", "cat", "touch", "mkdir", "rm", "mv", "cp", "whoami",
    "date", "creator", "sudo", "apt-get", "clear",
];

/// Result of applying a completion to an input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Exactly one candidate; the rewritten input line, already suffixed
    /// with `/` for a directory or a space otherwise.
    Single(String),
    /// Several candidates; the input stays unchanged.
    Multiple(Vec<String>),
    /// Nothing matched.
    None,
}

/// Split a partial line into its completed tokens and the fragment being
/// completed. A line ending in whitespace has an empty fragment.
fn split_fragment(partial: &str) -> (Vec<&str>, &str) {
    let mut tokens: Vec<&str> = partial.split_whitespace().collect();
    if partial.ends_with(char::is_whitespace) || tokens.is_empty() {
        (tokens, "")
    } else {
        let fragment = tokens.pop().unwrap_or("");
        (tokens, fragment)
    }
}

/// All candidates matching the last token of `partial` by prefix.
pub async fn completions(fs: &MemFs, cursor: &str, partial: &str) -> Vec<String> {
    let (tokens, fragment) = split_fragment(partial);

    if tokens.is_empty() {
        AVAILABLE_COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(fragment))
            .map(|cmd| cmd.to_string())
            .collect()
    } else {
        match fs.list(cursor).await {
            Ok(entries) => entries
                .into_iter()
                .filter(|e| e.name.starts_with(fragment))
                .map(|e| e.name)
                .collect(),
            Err(_) => Vec::new(),
        }
    }
}

/// Complete `partial` and, for a single candidate, rewrite the line with
/// the candidate applied.
pub async fn complete_line(fs: &MemFs, cursor: &str, partial: &str) -> Completion {
    let matches = completions(fs, cursor, partial).await;

    match matches.len() {
        0 => Completion::None,
        1 => {
            let candidate = &matches[0];
            let (tokens, _) = split_fragment(partial);
            let mut line = tokens.join(" ");
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(candidate);

            let is_dir = fs.is_directory(&resolve_path(cursor, candidate)).await;
            line.push(if is_dir { '/' } else { ' ' });
            Completion::Single(line)
        }
        _ => Completion::Multiple(matches),
    }
}
