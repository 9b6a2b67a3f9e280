//! Grid to Markdown rendering
//!
//! Produces a pipe-table whose `|` boundaries line up in a monospace font,
//! measuring cells with [`display_width`] so CJK text pads correctly.
//!
//! Multi-line cells are joined with `<br>`; only their last segment takes
//! part in the column width and receives padding.

use crate::grid::{Alignment, Grid};
use crate::util::{display_width, normalize_newlines};

use super::table::LINE_BREAK;

/// A cell prepared for output: escaped segments split on newlines
struct EncodedCell {
    segments: Vec<String>,
}

impl EncodedCell {
    fn new(value: &str) -> Self {
        let escaped = normalize_newlines(value).replace('|', "\\|");
        Self {
            segments: escaped.split('\n').map(str::to_string).collect(),
        }
    }

    /// Width of the segment that competes for the column width
    fn last_width(&self) -> usize {
        self.segments.last().map_or(0, |s| display_width(s))
    }

    /// Render with the last segment padded to `width`
    fn render(&self, width: usize, align: Alignment) -> String {
        let (last, earlier) = match self.segments.split_last() {
            Some(parts) => parts,
            None => return " ".repeat(width),
        };

        let mut out = String::new();
        for segment in earlier {
            out.push_str(segment);
            out.push_str(LINE_BREAK);
        }
        out.push_str(&pad(last, width, align));
        out
    }
}

/// Pad `content` with spaces to `width` display cells
pub fn pad(content: &str, width: usize, align: Alignment) -> String {
    let padding = width.saturating_sub(display_width(content));
    if padding == 0 {
        return content.to_string();
    }

    match align {
        Alignment::Left => format!("{}{}", content, " ".repeat(padding)),
        Alignment::Right => format!("{}{}", " ".repeat(padding), content),
        Alignment::Center => {
            let left = padding / 2;
            format!(
                "{}{}{}",
                " ".repeat(left),
                content,
                " ".repeat(padding - left)
            )
        }
    }
}

/// Separator token for a column of `width` display cells
fn separator_token(width: usize, align: Alignment) -> String {
    let total = width + 2;
    match align {
        Alignment::Left => format!(":{}", "-".repeat(total - 1)),
        Alignment::Right => format!("{}:", "-".repeat(total - 1)),
        Alignment::Center => format!(":{}:", "-".repeat(total - 2)),
    }
}

/// Compute the rendered width of every column
///
/// An all-empty column still gets width 1 so it renders as `|   |` over
/// `|:--|` rather than collapsing.
pub fn column_widths<R: AsRef<[String]>>(rows: &[R], column_count: usize) -> Vec<usize> {
    let mut widths = vec![0; column_count];
    for row in rows {
        for (col, value) in row.as_ref().iter().enumerate().take(column_count) {
            widths[col] = widths[col].max(EncodedCell::new(value).last_width());
        }
    }
    widths.into_iter().map(|w| w.max(1)).collect()
}

fn render_line(cells: &[EncodedCell], widths: &[usize], alignments: &[Alignment]) -> String {
    let rendered: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(col, &width)| {
            let align = alignments.get(col).copied().unwrap_or_default();
            match cells.get(col) {
                Some(cell) => cell.render(width, align),
                None => " ".repeat(width),
            }
        })
        .collect();
    format!("| {} |", rendered.join(" | "))
}

/// Render rows (row 0 is the header) as an aligned Markdown table
///
/// Every line ends with `\n`. Returns an empty string for no rows.
pub fn render_rows<R: AsRef<[String]>>(rows: &[R], alignments: &[Alignment]) -> String {
    let Some(column_count) = rows.iter().map(|r| r.as_ref().len()).max() else {
        return String::new();
    };
    let column_count = column_count.max(1);
    let widths = column_widths(rows, column_count);

    let mut lines = Vec::with_capacity(rows.len() + 1);
    for (i, row) in rows.iter().enumerate() {
        let cells: Vec<EncodedCell> = row.as_ref().iter().map(|v| EncodedCell::new(v)).collect();
        lines.push(render_line(&cells, &widths, alignments));

        if i == 0 {
            let tokens: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(col, &w)| separator_token(w, alignments.get(col).copied().unwrap_or_default()))
                .collect();
            lines.push(format!("|{}|", tokens.join("|")));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Render a grid using its column alignments
pub fn render_table(grid: &Grid) -> String {
    let rows: Vec<&[String]> = grid.rows().collect();
    render_rows(&rows, &grid.alignments())
}
