//! Rectangular cell selection
//!
//! An anchor stays fixed while the active cell moves during a shift-extend
//! gesture; the selection is the axis-aligned rectangle spanning both.
//! All positions are clamped to the grid each time they are set.

use crate::grid::CellPosition;

/// Direction for selection movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Anchor/active pair of a non-empty selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellRange {
    /// Where the selection started (fixed point)
    pub anchor: CellPosition,
    /// Where the cursor is (moving point)
    pub active: CellPosition,
}

impl CellRange {
    /// Create a single-cell range
    pub fn collapsed(pos: CellPosition) -> Self {
        Self {
            anchor: pos,
            active: pos,
        }
    }

    /// Check if the range covers a single cell
    pub fn is_single(&self) -> bool {
        self.anchor == self.active
    }

    /// Top-left corner
    pub fn start(&self) -> CellPosition {
        CellPosition::new(
            self.anchor.row.min(self.active.row),
            self.anchor.col.min(self.active.col),
        )
    }

    /// Bottom-right corner
    pub fn end(&self) -> CellPosition {
        CellPosition::new(
            self.anchor.row.max(self.active.row),
            self.anchor.col.max(self.active.col),
        )
    }

    /// Number of rows and columns covered
    pub fn size(&self) -> (usize, usize) {
        let (start, end) = (self.start(), self.end());
        (end.row - start.row + 1, end.col - start.col + 1)
    }

    /// Check if a position is within the rectangle (inclusive)
    pub fn contains(&self, pos: CellPosition) -> bool {
        let (start, end) = (self.start(), self.end());
        (start.row..=end.row).contains(&pos.row) && (start.col..=end.col).contains(&pos.col)
    }

    /// Every covered position, row-major
    pub fn positions(&self) -> Vec<CellPosition> {
        let (start, end) = (self.start(), self.end());
        (start.row..=end.row)
            .flat_map(|row| (start.col..=end.col).map(move |col| CellPosition::new(row, col)))
            .collect()
    }
}

fn clamp_position(pos: CellPosition, rows: usize, cols: usize) -> CellPosition {
    CellPosition::new(
        pos.row.min(rows.saturating_sub(1)),
        pos.col.min(cols.saturating_sub(1)),
    )
}

fn step(pos: CellPosition, direction: Direction, rows: usize, cols: usize) -> CellPosition {
    let moved = match direction {
        Direction::Up => CellPosition::new(pos.row.saturating_sub(1), pos.col),
        Direction::Down => CellPosition::new(pos.row + 1, pos.col),
        Direction::Left => CellPosition::new(pos.row, pos.col.saturating_sub(1)),
        Direction::Right => CellPosition::new(pos.row, pos.col + 1),
    };
    clamp_position(moved, rows, cols)
}

/// Selection state: nothing selected, or a [`CellRange`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    range: Option<CellRange>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current range, if any cell is selected
    pub fn range(&self) -> Option<CellRange> {
        self.range
    }

    /// Check if no cell is selected
    pub fn is_empty(&self) -> bool {
        self.range.is_none()
    }

    /// The active (cursor) cell
    pub fn active(&self) -> Option<CellPosition> {
        self.range.map(|r| r.active)
    }

    /// Plain click: select a single cell
    pub fn select(&mut self, pos: CellPosition, rows: usize, cols: usize) {
        self.range = Some(CellRange::collapsed(clamp_position(pos, rows, cols)));
    }

    /// Shift-click: move the active cell, keeping the anchor
    ///
    /// Without an anchor this behaves like a plain click.
    pub fn extend_to(&mut self, pos: CellPosition, rows: usize, cols: usize) {
        let pos = clamp_position(pos, rows, cols);
        match &mut self.range {
            Some(range) => range.active = pos,
            None => self.range = Some(CellRange::collapsed(pos)),
        }
    }

    /// Arrow key: move anchor and active together (collapsing any range)
    ///
    /// With nothing selected the first cell is selected instead.
    pub fn move_by(&mut self, direction: Direction, rows: usize, cols: usize) {
        let next = match self.range {
            Some(range) => step(range.active, direction, rows, cols),
            None => CellPosition::default(),
        };
        self.range = Some(CellRange::collapsed(next));
    }

    /// Shift+Arrow: move only the active cell
    pub fn extend_by(&mut self, direction: Direction, rows: usize, cols: usize) {
        match &mut self.range {
            Some(range) => range.active = step(range.active, direction, rows, cols),
            None => self.range = Some(CellRange::default()),
        }
    }

    /// Tab: next cell in reading order, wrapping to the next row
    pub fn next_cell(&mut self, rows: usize, cols: usize) {
        let Some(range) = self.range else {
            self.range = Some(CellRange::default());
            return;
        };
        let pos = range.active;
        let next = if pos.col + 1 < cols {
            CellPosition::new(pos.row, pos.col + 1)
        } else if pos.row + 1 < rows {
            CellPosition::new(pos.row + 1, 0)
        } else {
            pos
        };
        self.range = Some(CellRange::collapsed(clamp_position(next, rows, cols)));
    }

    /// Shift+Tab: previous cell in reading order, wrapping to the previous row
    pub fn prev_cell(&mut self, rows: usize, cols: usize) {
        let Some(range) = self.range else {
            self.range = Some(CellRange::default());
            return;
        };
        let pos = range.active;
        let prev = if pos.col > 0 {
            CellPosition::new(pos.row, pos.col - 1)
        } else if pos.row > 0 {
            CellPosition::new(pos.row - 1, cols.saturating_sub(1))
        } else {
            pos
        };
        self.range = Some(CellRange::collapsed(clamp_position(prev, rows, cols)));
    }

    /// Select every cell
    pub fn select_all(&mut self, rows: usize, cols: usize) {
        self.range = Some(CellRange {
            anchor: CellPosition::default(),
            active: clamp_position(CellPosition::new(rows, cols), rows, cols),
        });
    }

    /// Escape: select nothing
    pub fn clear(&mut self) {
        self.range = None;
    }

    /// Re-clamp after the grid changed shape
    pub fn clamp(&mut self, rows: usize, cols: usize) {
        if let Some(range) = &mut self.range {
            range.anchor = clamp_position(range.anchor, rows, cols);
            range.active = clamp_position(range.active, rows, cols);
        }
    }

    /// Every selected position, row-major
    pub fn selected_positions(&self) -> Vec<CellPosition> {
        self.range.map(|r| r.positions()).unwrap_or_default()
    }

    /// Check if a position is selected
    pub fn contains(&self, pos: CellPosition) -> bool {
        self.range.is_some_and(|r| r.contains(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> CellPosition {
        CellPosition::new(row, col)
    }

    #[test]
    fn test_select_collapses() {
        let mut sel = Selection::new();
        sel.select(pos(1, 2), 5, 5);
        let range = sel.range().unwrap();
        assert!(range.is_single());
        assert_eq!(range.anchor, pos(1, 2));
    }

    #[test]
    fn test_select_clamps_to_grid() {
        let mut sel = Selection::new();
        sel.select(pos(10, 10), 3, 2);
        assert_eq!(sel.active(), Some(pos(2, 1)));
    }

    #[test]
    fn test_extend_keeps_anchor() {
        let mut sel = Selection::new();
        sel.select(pos(2, 2), 5, 5);
        sel.extend_to(pos(0, 4), 5, 5);
        let range = sel.range().unwrap();
        assert_eq!(range.anchor, pos(2, 2));
        assert_eq!(range.start(), pos(0, 2));
        assert_eq!(range.end(), pos(2, 4));
        assert_eq!(range.size(), (3, 3));
    }

    #[test]
    fn test_extend_without_anchor_is_plain_select() {
        let mut sel = Selection::new();
        sel.extend_to(pos(1, 1), 3, 3);
        assert!(sel.range().unwrap().is_single());
    }

    #[test]
    fn test_selected_positions_fill_rectangle() {
        let mut sel = Selection::new();
        sel.select(pos(1, 1), 5, 5);
        sel.extend_to(pos(0, 2), 5, 5);
        assert_eq!(
            sel.selected_positions(),
            vec![pos(0, 1), pos(0, 2), pos(1, 1), pos(1, 2)]
        );
    }

    #[test]
    fn test_move_stops_at_edges() {
        let mut sel = Selection::new();
        sel.select(pos(0, 0), 2, 2);
        sel.move_by(Direction::Up, 2, 2);
        sel.move_by(Direction::Left, 2, 2);
        assert_eq!(sel.active(), Some(pos(0, 0)));
        sel.move_by(Direction::Right, 2, 2);
        sel.move_by(Direction::Right, 2, 2);
        assert_eq!(sel.active(), Some(pos(0, 1)));
    }

    #[test]
    fn test_move_collapses_range() {
        let mut sel = Selection::new();
        sel.select(pos(0, 0), 3, 3);
        sel.extend_by(Direction::Down, 3, 3);
        sel.extend_by(Direction::Right, 3, 3);
        assert_eq!(sel.range().unwrap().size(), (2, 2));

        sel.move_by(Direction::Down, 3, 3);
        let range = sel.range().unwrap();
        assert!(range.is_single());
        assert_eq!(range.active, pos(2, 1));
    }

    #[test]
    fn test_move_without_selection_selects_origin() {
        let mut sel = Selection::new();
        sel.move_by(Direction::Down, 3, 3);
        assert_eq!(sel.active(), Some(pos(0, 0)));
    }

    #[test]
    fn test_tab_wraps_rows() {
        let mut sel = Selection::new();
        sel.select(pos(0, 1), 2, 2);
        sel.next_cell(2, 2);
        assert_eq!(sel.active(), Some(pos(1, 0)));
        sel.next_cell(2, 2);
        sel.next_cell(2, 2);
        assert_eq!(sel.active(), Some(pos(1, 1)));

        sel.prev_cell(2, 2);
        sel.prev_cell(2, 2);
        assert_eq!(sel.active(), Some(pos(0, 1)));
    }

    #[test]
    fn test_select_all_and_clear() {
        let mut sel = Selection::new();
        sel.select_all(3, 4);
        assert_eq!(sel.selected_positions().len(), 12);
        sel.clear();
        assert!(sel.is_empty());
        assert!(sel.selected_positions().is_empty());
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut sel = Selection::new();
        sel.select(pos(1, 1), 4, 4);
        sel.extend_to(pos(3, 3), 4, 4);
        sel.clamp(2, 2);
        let range = sel.range().unwrap();
        assert_eq!(range.anchor, pos(1, 1));
        assert_eq!(range.active, pos(1, 1));
    }
}
