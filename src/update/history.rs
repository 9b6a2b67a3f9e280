//! Undo/redo update functions

use super::redraw_if;
use crate::commands::Cmd;
use crate::messages::HistoryMsg;
use crate::session::EditSession;

/// Handle undo/redo messages
pub fn update_history(session: &mut EditSession, msg: HistoryMsg) -> Option<Cmd> {
    let changed = match msg {
        HistoryMsg::Undo => session.undo(),
        HistoryMsg::Redo => session.redo(),
    };
    if !changed {
        tracing::debug!(?msg, "nothing to apply");
    }
    redraw_if(changed)
}
