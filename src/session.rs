//! Editing session state
//!
//! One `EditSession` exists per table being edited. It is created when the
//! host opens a table, passed explicitly to [`crate::update::update`] for
//! every message, and dropped when the runtime sees `Cmd::CloseSession`.

use std::ops::Range;

use crate::config::EditorConfig;
use crate::grid::{CellPosition, Grid};
use crate::history::GridHistory;
use crate::markdown::{render_table, MarkdownTable};
use crate::selection::{CellRange, Selection};

/// State of one table editing session
#[derive(Debug, Clone)]
pub struct EditSession {
    grid: Grid,
    history: GridHistory,
    /// Current cell selection
    pub selection: Selection,
    /// Document lines the rendered table replaces (half-open)
    lines: Range<usize>,
    /// Last user-visible message (errors, confirmations)
    pub status: Option<String>,
    /// Range copied by a cut, cleared once the clipboard write succeeds
    pub(crate) pending_cut: Option<CellRange>,
    min_column_width: usize,
    is_modified: bool,
}

impl EditSession {
    /// Start a session over an existing grid
    pub fn new(grid: Grid, lines: Range<usize>, config: &EditorConfig) -> Self {
        let mut session = Self {
            grid,
            history: GridHistory::with_max_size(config.undo_limit),
            selection: Selection::new(),
            lines,
            status: None,
            pending_cut: None,
            min_column_width: config.min_column_width,
            is_modified: false,
        };
        session.grid.recompute_column_widths(session.min_column_width);
        session
            .selection
            .select(CellPosition::default(), session.row_count(), session.column_count());
        session
    }

    /// Start a session for a table parsed from the document
    pub fn from_table(table: &MarkdownTable, config: &EditorConfig) -> Self {
        tracing::debug!(
            start_line = table.start_line,
            end_line = table.end_line,
            "opening table session"
        );
        Self::new(
            table.to_grid(),
            table.start_line..table.end_line + 1,
            config,
        )
    }

    /// Start a session for a new blank table inserted before `line`
    pub fn blank(line: usize, config: &EditorConfig) -> Self {
        let grid = Grid::blank(config.blank_rows, config.blank_columns);
        Self::new(grid, line..line, config)
    }

    /// Current grid (read model for the rendering surface)
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Undo/redo availability
    pub fn history(&self) -> &GridHistory {
        &self.history
    }

    /// Document lines the table occupies
    pub fn lines(&self) -> Range<usize> {
        self.lines.clone()
    }

    pub fn row_count(&self) -> usize {
        self.grid.row_count()
    }

    pub fn column_count(&self) -> usize {
        self.grid.column_count()
    }

    /// Check if the grid changed since the session started
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Apply a grid mutation, recording the previous state for undo
    ///
    /// `mutate` reports whether it changed anything; unchanged grids leave the
    /// history alone.
    pub fn apply<F>(&mut self, action: &str, mutate: F) -> bool
    where
        F: FnOnce(&mut Grid) -> bool,
    {
        let before = self.grid.clone();
        if !mutate(&mut self.grid) {
            tracing::debug!(action, "mutation had no effect");
            return false;
        }

        self.history.record(before);
        self.after_grid_change();
        tracing::debug!(
            action,
            rows = self.row_count(),
            cols = self.column_count(),
            undo = self.history.undo_count(),
            "grid mutated"
        );
        true
    }

    /// Restore the previous snapshot
    pub fn undo(&mut self) -> bool {
        let current = self.grid.clone();
        match self.history.undo(current) {
            Some(previous) => {
                self.grid = previous;
                self.after_grid_change();
                true
            }
            None => false,
        }
    }

    /// Re-apply the last undone change
    pub fn redo(&mut self) -> bool {
        let current = self.grid.clone();
        match self.history.redo(current) {
            Some(next) => {
                self.grid = next;
                self.after_grid_change();
                true
            }
            None => false,
        }
    }

    fn after_grid_change(&mut self) {
        self.is_modified = true;
        self.selection.clamp(self.row_count(), self.column_count());
        self.grid.recompute_column_widths(self.min_column_width);
    }

    /// Render the grid as Markdown
    pub fn render(&self) -> String {
        render_table(&self.grid)
    }

    /// Capture the grid as an interchange record for its original span
    pub fn to_table(&self) -> MarkdownTable {
        let end_line = self.lines.start + self.row_count();
        MarkdownTable::from_grid(&self.grid, self.lines.start, end_line)
    }
}
