//! Interchange record between the host document and the grid

use serde::{Deserialize, Serialize};

use crate::grid::{Alignment, Grid};

/// Line-break marker used inside a single Markdown cell
pub const LINE_BREAK: &str = "<br>";

/// Spellings of the line-break marker accepted when parsing
pub(crate) const LINE_BREAK_VARIANTS: [&str; 3] = ["<br>", "<br/>", "<br />"];

/// A table as found in (or written back to) the host document
///
/// `start_line` and `end_line` are zero-based, inclusive document lines. They
/// are carried through editing unchanged so the rendered text can replace the
/// original span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownTable {
    pub start_line: usize,
    pub end_line: usize,
    pub headers: Vec<String>,
    /// Data rows (the separator line is not included)
    pub rows: Vec<Vec<String>>,
    pub column_count: usize,
    pub alignments: Vec<Alignment>,
}

impl MarkdownTable {
    /// Build the editing grid (headers become row 0)
    pub fn to_grid(&self) -> Grid {
        let mut rows = Vec::with_capacity(self.rows.len() + 1);
        rows.push(self.headers.clone());
        rows.extend(self.rows.iter().cloned());
        Grid::new(rows, &self.alignments)
    }

    /// Capture a grid back into an interchange record for the same span
    pub fn from_grid(grid: &Grid, start_line: usize, end_line: usize) -> Self {
        let mut rows = grid.to_rows();
        let headers = rows.remove(0);
        Self {
            start_line,
            end_line,
            headers,
            rows,
            column_count: grid.column_count(),
            alignments: grid.alignments(),
        }
    }

    /// Number of document lines the table occupies
    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }
}
