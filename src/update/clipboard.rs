//! Clipboard update functions
//!
//! The clipboard itself is only touched by the runtime. These handlers turn
//! intents into `Cmd::WriteClipboard`/`Cmd::ReadClipboard` and apply the
//! results that come back.

use super::redraw_if;
use crate::clipboard::{paste_matrix, parse_clipboard, serialize_clipboard};
use crate::commands::Cmd;
use crate::messages::ClipboardMsg;
use crate::session::EditSession;

/// Handle clipboard messages
pub fn update_clipboard(session: &mut EditSession, msg: ClipboardMsg) -> Option<Cmd> {
    match msg {
        ClipboardMsg::Copy => copy_selection(session),
        ClipboardMsg::Cut => {
            let cmd = copy_selection(session)?;
            session.pending_cut = session.selection.range();
            Some(cmd)
        }
        ClipboardMsg::Paste => Some(Cmd::ReadClipboard),
        ClipboardMsg::PasteText(text) => paste_text(session, &text),
        ClipboardMsg::Written => finish_cut(session),
        ClipboardMsg::Failed(error) => {
            tracing::warn!("Clipboard operation failed: {}", error);
            session.pending_cut = None;
            session.status = Some(format!("Clipboard error: {}", error));
            Some(Cmd::Redraw)
        }
    }
}

/// Serialize the selected rectangle for the clipboard
fn copy_selection(session: &mut EditSession) -> Option<Cmd> {
    let range = session.selection.range()?;
    let cells = session.grid().region(range.start(), range.end());
    let (rows, cols) = range.size();
    tracing::debug!(rows, cols, "copying selection");
    Some(Cmd::WriteClipboard(serialize_clipboard(&cells)))
}

/// Clear the cut rectangle once its text is safely on the clipboard
fn finish_cut(session: &mut EditSession) -> Option<Cmd> {
    let range = session.pending_cut.take()?;
    let positions = range.positions();
    let changed = session.apply("cut", |grid| grid.update_cells(&positions, ""));
    redraw_if(changed)
}

/// Paste interchange text at the selection's top-left cell
///
/// With nothing selected the text lands at the first cell. A single value
/// pasted onto a multi-cell selection fills every selected cell.
fn paste_text(session: &mut EditSession, text: &str) -> Option<Cmd> {
    let matrix = parse_clipboard(text);
    if matrix.is_empty() {
        tracing::debug!("ignoring empty paste");
        return None;
    }

    let range = session.selection.range();
    if let (Some(range), [row]) = (range, matrix.as_slice()) {
        if let [value] = row.as_slice() {
            if !range.is_single() {
                let positions = range.positions();
                let changed =
                    session.apply("paste fill", |grid| grid.update_cells(&positions, value));
                return redraw_if(changed);
            }
        }
    }

    let target = range.map(|r| r.start()).unwrap_or_default();
    let mut end = None;
    let changed = session.apply("paste", |grid| match paste_matrix(grid, &matrix, target) {
        Some(outcome) => {
            end = Some(outcome.end);
            outcome.changed
        }
        None => false,
    });

    if let Some(end) = end {
        let (rows, cols) = (session.row_count(), session.column_count());
        session.selection.select(target, rows, cols);
        session.selection.extend_to(end, rows, cols);
    }
    tracing::debug!(changed, "pasted clipboard text");
    end.map(|_| Cmd::Redraw)
}
