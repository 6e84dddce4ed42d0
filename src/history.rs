//! Command history with bounded recall.
//!
//! The log is append-only for the lifetime of a session; the recall index
//! walks over it without ever stepping before the first entry or past the
//! end of the list.

/// Ordered log of entered command lines plus a recall cursor.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<String>,
    index: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line verbatim and reset the recall cursor past the end.
    pub fn push(&mut self, line: &str) {
        self.entries.push(line.to_string());
        self.index = self.entries.len();
    }

    /// Step back one entry. Returns `None` when already at the oldest
    /// entry (the input stays unchanged).
    pub fn previous(&mut self) -> Option<&str> {
        if self.index > 0 {
            self.index -= 1;
            Some(&self.entries[self.index])
        } else {
            None
        }
    }

    /// Step forward one entry. Stepping past the newest entry yields an
    /// empty line once; further steps return `None`.
    pub fn next(&mut self) -> Option<&str> {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
            Some(&self.entries[self.index])
        } else if self.index + 1 == self.entries.len() {
            self.index = self.entries.len();
            Some("")
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
