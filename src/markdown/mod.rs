//! Markdown pipe-table codec
//!
//! Converts between document lines and the editing grid:
//!
//! ```text
//! lines ──parse_table──▶ MarkdownTable ──to_grid──▶ Grid
//!   ▲                                                 │
//!   └──────────── replace span ◀── render_table ──────┘
//! ```

mod parser;
mod render;
mod table;

pub use parser::{
    alignment_from_token, is_pipe_row, is_separator_row, locate_table, parse_row, parse_table,
    TableParseError,
};
pub use render::{column_widths, pad, render_rows, render_table};
pub use table::{MarkdownTable, LINE_BREAK};

/// A re-rendered table and the document span it replaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedTable {
    pub start_line: usize,
    pub end_line: usize,
    pub text: String,
}

/// Parse the table at `cursor_line` and render it back with aligned columns
pub fn format_table<S: AsRef<str>>(
    lines: &[S],
    cursor_line: usize,
) -> Result<FormattedTable, TableParseError> {
    let table = parse_table(lines, cursor_line)?;
    let text = render_table(&table.to_grid());
    Ok(FormattedTable {
        start_line: table.start_line,
        end_line: table.end_line,
        text,
    })
}
