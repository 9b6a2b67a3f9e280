//! Grid shape update functions

use super::redraw_if;
use crate::commands::Cmd;
use crate::messages::StructureMsg;
use crate::session::EditSession;

/// Handle row/column/alignment messages
pub fn update_structure(session: &mut EditSession, msg: StructureMsg) -> Option<Cmd> {
    let changed = match msg {
        StructureMsg::AddRow => session.apply("add row", |grid| grid.add_row()),
        StructureMsg::AddColumn => session.apply("add column", |grid| grid.add_column()),
        StructureMsg::RemoveRow(index) => {
            let index = index.unwrap_or(session.row_count() - 1);
            session.apply("remove row", |grid| grid.remove_row(index))
        }
        StructureMsg::RemoveColumn(index) => {
            let index = index.unwrap_or(session.column_count() - 1);
            session.apply("remove column", |grid| grid.remove_column(index))
        }
        StructureMsg::SetAlignment { col, alignment } => {
            session.apply("set alignment", |grid| grid.set_alignment(col, alignment))
        }
        StructureMsg::AlignSelection(alignment) => {
            let range = session.selection.range()?;
            let columns = range.start().col..=range.end().col;
            session.apply("align selection", |grid| {
                columns.fold(false, |changed, col| {
                    grid.set_alignment(col, alignment) || changed
                })
            })
        }
    };
    redraw_if(changed)
}
