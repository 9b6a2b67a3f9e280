//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use mdgrid::config::EditorConfig;
use mdgrid::grid::{Alignment, Grid};
use mdgrid::markdown::parse_table;
use mdgrid::messages::Msg;
use mdgrid::session::EditSession;
use mdgrid::update::update;
use mdgrid::Cmd;

/// Split document text into owned lines
pub fn lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Build a string matrix from literals
pub fn matrix(data: &[&[&str]]) -> Vec<Vec<String>> {
    data.iter()
        .map(|r| r.iter().map(|s| s.to_string()).collect())
        .collect()
}

/// Build a grid from literals
pub fn grid(data: &[&[&str]], alignments: &[Alignment]) -> Grid {
    Grid::new(matrix(data), alignments)
}

/// Open a session on the table containing `line` of `text`
pub fn session_at(text: &str, line: usize) -> EditSession {
    let table = parse_table(&lines(text), line).expect("table should parse");
    EditSession::from_table(&table, &EditorConfig::default())
}

/// Open a session on a blank 3×3 grid
pub fn blank_session() -> EditSession {
    EditSession::blank(0, &EditorConfig::default())
}

/// Feed several messages through `update`, returning the last command
pub fn send_all(session: &mut EditSession, msgs: Vec<Msg>) -> Option<Cmd> {
    let mut last = None;
    for msg in msgs {
        last = update(session, msg);
    }
    last
}

/// Grid cell values as a plain matrix
pub fn cells(grid: &Grid) -> Vec<Vec<String>> {
    grid.to_rows()
}
