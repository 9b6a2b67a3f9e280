//! Markdown pipe-table parsing
//!
//! Locates the table around a cursor line, validates the separator row and
//! splits every row into trimmed cell values.

use crate::grid::Alignment;

use super::table::{MarkdownTable, LINE_BREAK_VARIANTS};

/// Error type for table parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableParseError {
    /// The cursor line is not part of a pipe-table
    #[error("no table found at line {}", .line + 1)]
    NoTable { line: usize },
    /// Only a single pipe row was found
    #[error("table at line {} needs a header row and a separator row", .start_line + 1)]
    TooFewLines { start_line: usize },
    /// The second table line is not a `|---|:--:|` style separator
    #[error("line {} is not a valid table separator row", .line + 1)]
    InvalidSeparator { line: usize },
}

/// Check if a line looks like a table row (`| ... |`)
pub fn is_pipe_row(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 2 && trimmed.starts_with('|') && trimmed.ends_with('|')
}

/// Split a table row into raw cell tokens
///
/// `\|` is an escaped pipe and stays inside the cell as `|`. The empty tokens
/// produced by the outer pipes are dropped; inner empty cells are kept.
fn split_tokens(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut chars = line.trim().chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' if chars.peek() == Some(&'|') => {
                current.push('|');
                chars.next();
            }
            '|' => tokens.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    tokens.push(current);

    if tokens.first().is_some_and(|t| t.is_empty()) {
        tokens.remove(0);
    }
    if tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }
    tokens
}

/// Turn a raw token into a cell value (`<br>` → newline)
///
/// Every line is trimmed, since aligned rendering pads the last line of a
/// multi-line cell on either side.
fn decode_cell(token: &str) -> String {
    let mut value = token.to_string();
    for marker in LINE_BREAK_VARIANTS {
        if value.contains(marker) {
            value = value.replace(marker, "\n");
        }
    }
    value.split('\n').map(str::trim).collect::<Vec<_>>().join("\n")
}

/// Split a table row into cell values
pub fn parse_row(line: &str) -> Vec<String> {
    split_tokens(line).iter().map(|t| decode_cell(t)).collect()
}

/// Check if a token is a separator cell (`---`, `:--`, `--:`, `:-:`)
fn is_separator_token(token: &str) -> bool {
    let token = token.trim();
    !token.is_empty() && token.contains('-') && token.chars().all(|c| c == '-' || c == ':')
}

/// Check if a line is a separator row
pub fn is_separator_row(line: &str) -> bool {
    if !is_pipe_row(line) {
        return false;
    }
    let tokens = split_tokens(line);
    !tokens.is_empty() && tokens.iter().all(|t| is_separator_token(t))
}

/// Derive a column alignment from its separator token
pub fn alignment_from_token(token: &str) -> Alignment {
    let token = token.trim();
    match (token.starts_with(':'), token.ends_with(':')) {
        (true, true) if token.len() > 1 => Alignment::Center,
        (false, true) => Alignment::Right,
        _ => Alignment::Left,
    }
}

/// Find the inclusive line range of the pipe-table containing `cursor_line`
pub fn locate_table<S: AsRef<str>>(lines: &[S], cursor_line: usize) -> Option<(usize, usize)> {
    let is_row = |i: usize| lines.get(i).is_some_and(|l| is_pipe_row(l.as_ref()));

    if !is_row(cursor_line) {
        return None;
    }

    let mut start = cursor_line;
    while start > 0 && is_row(start - 1) {
        start -= 1;
    }
    let mut end = cursor_line;
    while is_row(end + 1) {
        end += 1;
    }
    Some((start, end))
}

/// Parse the pipe-table that contains `cursor_line`
///
/// Rows shorter than the widest row are padded with empty cells.
pub fn parse_table<S: AsRef<str>>(
    lines: &[S],
    cursor_line: usize,
) -> Result<MarkdownTable, TableParseError> {
    let (start_line, end_line) =
        locate_table(lines, cursor_line).ok_or(TableParseError::NoTable { line: cursor_line })?;

    if end_line == start_line {
        return Err(TableParseError::TooFewLines { start_line });
    }

    let separator = lines[start_line + 1].as_ref();
    if !is_separator_row(separator) {
        return Err(TableParseError::InvalidSeparator {
            line: start_line + 1,
        });
    }

    let mut headers = parse_row(lines[start_line].as_ref());
    let mut rows: Vec<Vec<String>> = lines[start_line + 2..=end_line]
        .iter()
        .map(|l| parse_row(l.as_ref()))
        .collect();

    let column_count = rows
        .iter()
        .map(|r| r.len())
        .chain(std::iter::once(headers.len()))
        .max()
        .unwrap_or(0)
        .max(1);

    headers.resize(column_count, String::new());
    for row in &mut rows {
        row.resize(column_count, String::new());
    }

    let mut alignments: Vec<Alignment> = split_tokens(separator)
        .iter()
        .map(|t| alignment_from_token(t))
        .collect();
    alignments.resize(column_count, Alignment::Left);

    tracing::debug!(
        start_line,
        end_line,
        column_count,
        data_rows = rows.len(),
        "parsed markdown table"
    );

    Ok(MarkdownTable {
        start_line,
        end_line,
        headers,
        rows,
        column_count,
        alignments,
    })
}
