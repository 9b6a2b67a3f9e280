//! Interchange text for copy/paste
//!
//! Tab-separated rows with CSV-style quoting, the format spreadsheet tools
//! (Excel, Sheets, Numbers) put on the clipboard. A cell is quoted only when
//! it contains a tab, a newline or a quote, which lets multi-line cells
//! survive as a single field.

/// Check if a cell needs quoting in interchange text
fn needs_quotes(value: &str) -> bool {
    value.contains(['\n', '\t', '"'])
}

/// Quote a single cell value if required
pub fn escape_cell(value: &str) -> String {
    if needs_quotes(value) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Serialize a rectangular block of values
pub fn serialize<R: AsRef<[String]>>(rows: &[R]) -> String {
    rows.iter()
        .map(|row| {
            row.as_ref()
                .iter()
                .map(|v| escape_cell(v))
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse interchange text into rows of values
///
/// Rows may come out ragged; callers decide how to pad them.
pub fn parse(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    field.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            '"' => in_quotes = true,
            '\t' => row.push(std::mem::take(&mut field)),
            '\n' | '\r' => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            _ => field.push(ch),
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// Width of the widest row of a parsed matrix
pub fn matrix_width<R: AsRef<[String]>>(rows: &[R]) -> usize {
    rows.iter().map(|r| r.as_ref().len()).max().unwrap_or(0)
}
