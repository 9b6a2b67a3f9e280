//! Grid history (undo/redo)
//!
//! Each entry is a full grid snapshot taken immediately before a mutation.
//! Snapshots share unchanged rows with the live grid, so they are cheap.

use std::collections::VecDeque;

use crate::grid::Grid;

/// Default number of undo steps kept
pub const DEFAULT_UNDO_LIMIT: usize = 1000;

/// Linear undo/redo history over grid snapshots
#[derive(Debug, Clone)]
pub struct GridHistory {
    undo_stack: VecDeque<Grid>,
    redo_stack: Vec<Grid>,
    max_size: usize,
}

impl Default for GridHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl GridHistory {
    /// Create a new history with the default size limit
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_UNDO_LIMIT)
    }

    /// Create a new history keeping at most `max_size` undo steps
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_size: max_size.max(1),
        }
    }

    /// Record the pre-mutation snapshot (clears the redo stack)
    pub fn record(&mut self, before: Grid) {
        self.redo_stack.clear();
        self.undo_stack.push_back(before);

        while self.undo_stack.len() > self.max_size {
            self.undo_stack.pop_front();
        }
    }

    /// Step back: returns the snapshot to restore, stashing `current` for redo
    pub fn undo(&mut self, current: Grid) -> Option<Grid> {
        let previous = self.undo_stack.pop_back()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Step forward: returns the snapshot to restore, stashing `current` for undo
    pub fn redo(&mut self, current: Grid) -> Option<Grid> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push_back(current);
        Some(next)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Get the number of snapshots in the undo stack
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of snapshots in the redo stack
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }
}
