//! # Undo/Redo History
//!
//! Linear snapshot history: every entry is a full copy of the state, plus a
//! cursor pointing at the current one.
//!
//! ## Design
//!
//! - `record` drops everything after the cursor, appends, moves the cursor
//! - `undo` / `redo` move the cursor one step and hand back that snapshot
//! - At either end they return `None` and change nothing
//! - With `max_levels > 0` the oldest snapshot is dropped once the cap is hit
//!
//! ## Example
//!
//! ```rust
//! use newsletter_editor::History;
//!
//! let mut history = History::new();
//! history.record(vec![1]);
//! history.record(vec![1, 2]);
//!
//! assert_eq!(history.undo(), Some(&vec![1]));
//! assert_eq!(history.redo(), Some(&vec![1, 2]));
//! assert_eq!(history.redo(), None);
//! ```

pub const DEFAULT_MAX_LEVELS: usize = 100;

#[derive(Debug, Clone)]
pub struct History<T> {
    entries: Vec<T>,

    /// Index of the current snapshot; meaningless while `entries` is empty
    cursor: usize,

    /// Maximum number of snapshots kept (0 = unlimited)
    max_levels: usize,
}

impl<T> History<T> {
    /// Create a history with the default cap (100)
    pub fn new() -> Self {
        Self::with_max_levels(DEFAULT_MAX_LEVELS)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            max_levels,
        }
    }

    /// Record a new current state, discarding any redo entries
    pub fn record(&mut self, state: T) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(state);

        if self.max_levels > 0 && self.entries.len() > self.max_levels {
            let excess = self.entries.len() - self.max_levels;
            self.entries.drain(..excess);
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Step back one snapshot
    pub fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        tracing::debug!(cursor = self.cursor, len = self.entries.len(), "undo");
        self.entries.get(self.cursor)
    }

    /// Step forward one snapshot
    pub fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        tracing::debug!(cursor = self.cursor, len = self.entries.len(), "redo");
        self.entries.get(self.cursor)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn current(&self) -> Option<&T> {
        self.entries.get(self.cursor)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_levels(&self) -> usize {
        self.max_levels
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_creation() {
        let history: History<u32> = History::new();
        assert!(history.is_empty());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.max_levels(), 100);
    }

    #[test]
    fn test_undo_and_redo() {
        let mut history = History::new();
        history.record("a");
        history.record("b");
        history.record("c");

        assert_eq!(history.undo(), Some(&"b"));
        assert_eq!(history.undo(), Some(&"a"));
        assert_eq!(history.undo(), None);
        assert_eq!(history.current(), Some(&"a"));

        assert_eq!(history.redo(), Some(&"b"));
        assert_eq!(history.redo(), Some(&"c"));
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn test_record_truncates_redo() {
        let mut history = History::new();
        history.record(1);
        history.record(2);
        history.record(3);
        history.undo();
        history.undo();

        history.record(9);
        assert_eq!(history.len(), 2);
        assert!(!history.can_redo());
        assert_eq!(history.undo(), Some(&1));
    }

    #[test]
    fn test_max_levels_enforced() {
        let mut history = History::with_max_levels(2);
        for i in 0..5 {
            history.record(i);
        }

        assert_eq!(history.len(), 2);
        assert_eq!(history.current(), Some(&4));
        assert_eq!(history.undo(), Some(&3));
        assert_eq!(history.undo(), None);
    }

    #[test]
    fn test_unlimited() {
        let mut history = History::with_max_levels(0);
        for i in 0..250 {
            history.record(i);
        }
        assert_eq!(history.len(), 250);
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.record(1);
        history.record(2);
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), None);
    }
}
