//! Writing a pasted matrix into the grid

use crate::grid::{CellPosition, Grid};

use super::codec::matrix_width;

/// Where a paste landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasteOutcome {
    /// Bottom-right corner of the pasted rectangle
    pub end: CellPosition,
    /// Whether the grid grew or any cell value changed
    pub changed: bool,
}

/// Paste `matrix` with its top-left corner at `target`
///
/// The grid grows first (rows and columns appended) so that the whole matrix
/// fits; paste never fails for lack of space. Ragged matrix rows only
/// overwrite the cells they have. Returns `None` if the matrix is empty.
pub fn paste_matrix(
    grid: &mut Grid,
    matrix: &[Vec<String>],
    target: CellPosition,
) -> Option<PasteOutcome> {
    let height = matrix.len();
    let width = matrix_width(matrix);
    if height == 0 || width == 0 {
        return None;
    }

    let needed_rows = target.row + height;
    let needed_cols = target.col + width;
    let grew = grid.ensure_size(needed_rows, needed_cols);
    if grew {
        tracing::debug!(
            rows = grid.row_count(),
            cols = grid.column_count(),
            "grid grown to fit paste"
        );
    }

    let mut positions = Vec::with_capacity(height * width);
    let mut values = Vec::with_capacity(height * width);
    for (r, row) in matrix.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            let pos = CellPosition::new(target.row + r, target.col + c);
            if grid.contains(pos) {
                positions.push(pos);
                values.push(value.clone());
            }
        }
    }
    let updated = grid.update_cells_distinct(&positions, &values);

    Some(PasteOutcome {
        end: CellPosition::new(needed_rows - 1, needed_cols - 1),
        changed: grew || updated,
    })
}
