//! Grid data model
//!
//! The in-memory spreadsheet behind an editing session:
//!
//! ```text
//! Grid
//! ├── rows: Vec<Arc<Vec<String>>>   (row 0 = header by convention)
//! └── columns: Vec<Column>          (index, width hint, alignment)
//! ```

mod model;

pub use model::{Alignment, CellPosition, Column, Grid, DEFAULT_MIN_COLUMN_WIDTH};
