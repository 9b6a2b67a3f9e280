//! Grid data model types
//!
//! Rows are stored behind `Arc` so that a snapshot of the grid (for undo) is a
//! cheap vector of pointer copies. Mutations go through `Arc::make_mut`, which
//! only clones the rows a snapshot still shares.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::util::{display_width, normalize_newlines};

/// Default floor for column width hints
pub const DEFAULT_MIN_COLUMN_WIDTH: usize = 3;

/// Position of a cell in the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Horizontal text alignment of a column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Lowercase name, as used in configuration and logs
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Position of the column in the grid
    pub index: usize,
    /// Display width hint for the UI (not used when rendering Markdown)
    pub width: usize,
    pub alignment: Alignment,
}

impl Column {
    fn new(index: usize, alignment: Alignment) -> Self {
        Self {
            index,
            width: DEFAULT_MIN_COLUMN_WIDTH,
            alignment,
        }
    }
}

type Row = Arc<Vec<String>>;

/// Rows × columns cell store mirroring one Markdown table
///
/// Invariants:
/// - there is always at least one row and one column
/// - every row holds exactly `column_count()` cells
///
/// Row 0 is the header row by convention only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Row>,
    columns: Vec<Column>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::blank(3, 3)
    }
}

impl Grid {
    /// Create a grid from raw rows, padding ragged rows with empty cells
    ///
    /// The column count is the maximum of the longest row and the number of
    /// alignments given; missing alignments default to left.
    pub fn new(rows: Vec<Vec<String>>, alignments: &[Alignment]) -> Self {
        let column_count = rows
            .iter()
            .map(|r| r.len())
            .max()
            .unwrap_or(0)
            .max(alignments.len())
            .max(1);

        let mut rows: Vec<Row> = rows
            .into_iter()
            .map(|mut row| {
                row.resize(column_count, String::new());
                Arc::new(row)
            })
            .collect();
        if rows.is_empty() {
            rows.push(Arc::new(vec![String::new(); column_count]));
        }

        let columns = (0..column_count)
            .map(|i| Column::new(i, alignments.get(i).copied().unwrap_or_default()))
            .collect();

        Self { rows, columns }
    }

    /// Create an empty grid (dimensions are clamped to at least 1×1)
    pub fn blank(rows: usize, cols: usize) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self::new(vec![vec![String::new(); cols]; rows], &[])
    }

    /// Get number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column descriptors in visual order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Alignment of every column
    pub fn alignments(&self) -> Vec<Alignment> {
        self.columns.iter().map(|c| c.alignment).collect()
    }

    /// Check whether a position lies inside the grid
    pub fn contains(&self, pos: CellPosition) -> bool {
        pos.row < self.row_count() && pos.col < self.column_count()
    }

    /// Get cell value at position
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(|s| s.as_str())
    }

    /// Get an entire row
    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(|r| r.as_slice())
    }

    /// Iterate over rows in visual order
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// Copy all values out as owned rows
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(|r| r.as_ref().clone()).collect()
    }

    /// Copy the rectangle spanned by two corners (clamped to the grid)
    pub fn region(&self, a: CellPosition, b: CellPosition) -> Vec<Vec<String>> {
        let max_row = self.row_count() - 1;
        let max_col = self.column_count() - 1;
        let (top, bottom) = (a.row.min(b.row).min(max_row), a.row.max(b.row).min(max_row));
        let (left, right) = (a.col.min(b.col).min(max_col), a.col.max(b.col).min(max_col));

        self.rows[top..=bottom]
            .iter()
            .map(|r| r[left..=right].to_vec())
            .collect()
    }

    /// Set cell value at position
    ///
    /// Out-of-bounds positions are ignored. Returns whether the value changed.
    pub fn update_cell(&mut self, row: usize, col: usize, value: &str) -> bool {
        if !self.contains(CellPosition::new(row, col)) {
            tracing::debug!(row, col, "ignoring out-of-bounds cell update");
            return false;
        }
        let value = normalize_newlines(value);
        if self.rows[row][col] == value {
            return false;
        }
        Arc::make_mut(&mut self.rows[row])[col] = value;
        true
    }

    /// Set the same value in several cells (e.g. clearing a selection)
    pub fn update_cells(&mut self, positions: &[CellPosition], value: &str) -> bool {
        let mut changed = false;
        for pos in positions {
            changed |= self.update_cell(pos.row, pos.col, value);
        }
        changed
    }

    /// Set a distinct value per cell
    ///
    /// `positions` and `values` must have the same length, otherwise nothing
    /// is written.
    pub fn update_cells_distinct(&mut self, positions: &[CellPosition], values: &[String]) -> bool {
        if positions.len() != values.len() {
            tracing::warn!(
                positions = positions.len(),
                values = values.len(),
                "mismatched batch update ignored"
            );
            return false;
        }
        let mut changed = false;
        for (pos, value) in positions.iter().zip(values) {
            changed |= self.update_cell(pos.row, pos.col, value);
        }
        changed
    }

    /// Append an empty row
    pub fn add_row(&mut self) -> bool {
        self.add_multiple_rows(1)
    }

    /// Append an empty, left-aligned column
    pub fn add_column(&mut self) -> bool {
        self.add_multiple_columns(1)
    }

    /// Append `count` empty rows
    pub fn add_multiple_rows(&mut self, count: usize) -> bool {
        let cols = self.column_count();
        for _ in 0..count {
            self.rows.push(Arc::new(vec![String::new(); cols]));
        }
        count > 0
    }

    /// Append `count` empty, left-aligned columns
    pub fn add_multiple_columns(&mut self, count: usize) -> bool {
        if count == 0 {
            return false;
        }
        for row in &mut self.rows {
            let row = Arc::make_mut(row);
            row.resize(row.len() + count, String::new());
        }
        for _ in 0..count {
            let index = self.columns.len();
            self.columns.push(Column::new(index, Alignment::Left));
        }
        true
    }

    /// Grow the grid so that it has at least `rows` × `cols` cells
    pub fn ensure_size(&mut self, rows: usize, cols: usize) -> bool {
        let added_rows = rows.saturating_sub(self.row_count());
        let added_cols = cols.saturating_sub(self.column_count());
        // Columns first so the new rows are created at full width
        let grew_cols = self.add_multiple_columns(added_cols);
        let grew_rows = self.add_multiple_rows(added_rows);
        grew_cols || grew_rows
    }

    /// Remove a row; the last remaining row is never removed
    pub fn remove_row(&mut self, index: usize) -> bool {
        if self.row_count() <= 1 || index >= self.row_count() {
            return false;
        }
        self.rows.remove(index);
        true
    }

    /// Remove a column; the last remaining column is never removed
    pub fn remove_column(&mut self, index: usize) -> bool {
        if self.column_count() <= 1 || index >= self.column_count() {
            return false;
        }
        for row in &mut self.rows {
            Arc::make_mut(row).remove(index);
        }
        self.columns.remove(index);
        for (i, column) in self.columns.iter_mut().enumerate() {
            column.index = i;
        }
        true
    }

    /// Change a column's alignment
    pub fn set_alignment(&mut self, col: usize, alignment: Alignment) -> bool {
        match self.columns.get_mut(col) {
            Some(column) if column.alignment != alignment => {
                column.alignment = alignment;
                true
            }
            _ => false,
        }
    }

    /// Recalculate every column's width hint from its content
    pub fn recompute_column_widths(&mut self, min_width: usize) {
        for column in &mut self.columns {
            let widest = self
                .rows
                .iter()
                .flat_map(|row| row[column.index].split('\n'))
                .map(display_width)
                .max()
                .unwrap_or(0);
            column.width = widest.max(min_width);
        }
    }
}
