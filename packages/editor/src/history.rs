//! # Undo/Redo History
//!
//! Linear history over full copies of the page list.
//!
//! ## Design
//!
//! - Every committed edit stores the complete resulting page list
//! - A cursor marks the snapshot currently shown
//! - Undo/redo only move the cursor; nothing is recomputed
//! - Committing truncates everything after the cursor
//! - The oldest snapshot is evicted once `limit` is exceeded
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut history = History::new(pages);
//! history.commit(edited, Some("Add page"));
//!
//! let previous = history.undo();   // Some(snapshot)
//! let next = history.redo();       // Some(snapshot)
//! ```

use folio_document::Page;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::debug;

/// Maximum number of snapshots kept by default.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Immutable copy of every page at one instant.
pub type Snapshot = Arc<Vec<Page>>;

#[derive(Debug, Clone)]
struct Entry {
    pages: Snapshot,
    label: Option<String>,
}

/// Bounded, truncating snapshot history.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<Entry>,
    cursor: usize,
    limit: usize,
}

impl History {
    /// History whose only entry is `initial`.
    pub fn new(initial: Vec<Page>) -> Self {
        Self::with_limit(initial, DEFAULT_HISTORY_LIMIT)
    }

    /// A limit below one is treated as one.
    pub fn with_limit(initial: Vec<Page>, limit: usize) -> Self {
        let limit = limit.max(1);
        let mut entries = VecDeque::with_capacity(limit);
        entries.push_back(Entry {
            pages: Arc::new(initial),
            label: None,
        });
        Self {
            entries,
            cursor: 0,
            limit,
        }
    }

    /// Record `pages` as the new current state and return its snapshot.
    pub fn commit(&mut self, pages: Vec<Page>, label: Option<&str>) -> Snapshot {
        // New edit invalidates the future
        self.entries.truncate(self.cursor + 1);

        // Evict before pushing; len never exceeds the limit
        if self.entries.len() == self.limit {
            self.entries.pop_front();
        }

        let snapshot = Arc::new(pages);
        self.entries.push_back(Entry {
            pages: Arc::clone(&snapshot),
            label: label.map(str::to_string),
        });
        self.cursor = self.entries.len() - 1;

        debug!(
            cursor = self.cursor,
            len = self.entries.len(),
            label = label.unwrap_or(""),
            "History commit"
        );
        snapshot
    }

    /// Step back one snapshot. `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Step forward one snapshot. `None` at the newest entry.
    pub fn redo(&mut self) -> Option<Snapshot> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Snapshot under the cursor.
    pub fn current(&self) -> Snapshot {
        Arc::clone(&self.entries[self.cursor].pages)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of stored snapshots, never more than the limit.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the initial state is never evicted without a newer one.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Label of the edit `undo` would revert.
    pub fn undo_label(&self) -> Option<&str> {
        if !self.can_undo() {
            return None;
        }
        self.entries[self.cursor].label.as_deref()
    }

    /// Label of the edit `redo` would reapply.
    pub fn redo_label(&self) -> Option<&str> {
        self.entries
            .get(self.cursor + 1)
            .and_then(|entry| entry.label.as_deref())
    }
}
