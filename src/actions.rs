//! One-shot CLI actions
//!
//! Each action opens the file, runs a short editing session through the
//! normal message loop, and reports what happened.

use anyhow::{bail, Context, Result};

use crate::cli::Action;
use crate::clipboard::ClipboardProvider;
use crate::config::EditorConfig;
use crate::document::{DocumentWriter, FileDocument};
use crate::markdown::{format_table, parse_table};
use crate::messages::{ClipboardMsg, SelectionMsg, SessionMsg};
use crate::runtime::Runtime;
use crate::session::EditSession;

/// Result of a completed action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Formatted table text for stdout
    Printed(String),
    /// Short message for stderr
    Done(String),
}

/// Run an action against `clipboard`
pub fn run<C: ClipboardProvider>(
    action: &Action,
    config: &EditorConfig,
    clipboard: C,
) -> Result<Report> {
    let file = action.file();
    let document = FileDocument::open(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    match *action {
        Action::Format {
            line, to_stdout, ..
        } => format(document, line, to_stdout),
        Action::Copy { line, .. } => copy(document, line, config, clipboard),
        Action::Paste { line, target, .. } => {
            let mut runtime = Runtime::new(clipboard, document);
            let table = parse_table(runtime.document().lines(), line)?;
            let mut session = EditSession::from_table(&table, config);
            // The target may lie outside the table; make it selectable
            session.apply("grow to paste target", |grid| {
                grid.ensure_size(target.row + 1, target.col + 1)
            });

            runtime.dispatch(
                &mut session,
                SelectionMsg::SelectCell {
                    row: target.row,
                    col: target.col,
                },
            );
            runtime.dispatch(&mut session, ClipboardMsg::Paste);
            if let Some(status) = session.status.take() {
                bail!(status);
            }
            if !session.is_modified() {
                return Ok(Report::Done("Nothing to paste".to_string()));
            }

            let (rows, cols) = (session.row_count(), session.column_count());
            let outcome = runtime.dispatch(&mut session, SessionMsg::Save);
            if !outcome.closed {
                bail!(session
                    .status
                    .unwrap_or_else(|| "Table was not saved".to_string()));
            }
            Ok(Report::Done(format!(
                "Pasted into table at line {} ({} rows × {} columns)",
                line + 1,
                rows,
                cols
            )))
        }
    }
}

fn format(mut document: FileDocument, line: usize, to_stdout: bool) -> Result<Report> {
    let formatted = format_table(document.lines(), line)?;
    if to_stdout {
        return Ok(Report::Printed(formatted.text));
    }
    document.replace_lines(formatted.start_line..formatted.end_line + 1, &formatted.text)?;
    Ok(Report::Done(format!(
        "Formatted table at lines {}-{}",
        formatted.start_line + 1,
        formatted.end_line + 1
    )))
}

fn copy<C: ClipboardProvider>(
    document: FileDocument,
    line: usize,
    config: &EditorConfig,
    clipboard: C,
) -> Result<Report> {
    let table = parse_table(document.lines(), line)?;
    let mut session = EditSession::from_table(&table, config);
    let mut runtime = Runtime::new(clipboard, document);

    runtime.dispatch(&mut session, SelectionMsg::SelectAll);
    runtime.dispatch(&mut session, ClipboardMsg::Copy);
    if let Some(status) = session.status.take() {
        bail!(status);
    }
    runtime.dispatch(&mut session, SessionMsg::Cancel);

    Ok(Report::Done(format!(
        "Copied {} rows × {} columns",
        session.row_count(),
        session.column_count()
    )))
}
