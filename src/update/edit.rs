//! Cell content update functions

use super::redraw_if;
use crate::commands::Cmd;
use crate::messages::EditMsg;
use crate::session::EditSession;

/// Handle cell edit messages
pub fn update_edit(session: &mut EditSession, msg: EditMsg) -> Option<Cmd> {
    match msg {
        EditMsg::SetCell { row, col, value } => {
            let changed = session.apply("set cell", |grid| grid.update_cell(row, col, &value));
            redraw_if(changed)
        }
        EditMsg::ClearSelectedCells => clear_selected_cells(session),
    }
}

/// Empty every selected cell as one undo step
fn clear_selected_cells(session: &mut EditSession) -> Option<Cmd> {
    let positions = session.selection.selected_positions();
    if positions.is_empty() {
        return None;
    }
    let changed = session.apply("clear cells", |grid| grid.update_cells(&positions, ""));
    redraw_if(changed)
}
