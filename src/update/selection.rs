//! Selection and navigation update functions

use crate::commands::Cmd;
use crate::grid::CellPosition;
use crate::messages::SelectionMsg;
use crate::session::EditSession;

/// Handle selection messages
pub fn update_selection(session: &mut EditSession, msg: SelectionMsg) -> Option<Cmd> {
    let (rows, cols) = (session.row_count(), session.column_count());
    let before = session.selection.range();
    let selection = &mut session.selection;

    match msg {
        SelectionMsg::SelectCell { row, col } => {
            selection.select(CellPosition::new(row, col), rows, cols)
        }
        SelectionMsg::ExtendSelectionTo { row, col } => {
            selection.extend_to(CellPosition::new(row, col), rows, cols)
        }
        SelectionMsg::Move(direction) => selection.move_by(direction, rows, cols),
        SelectionMsg::MoveWithSelection(direction) => selection.extend_by(direction, rows, cols),
        SelectionMsg::NextCell => selection.next_cell(rows, cols),
        SelectionMsg::PrevCell => selection.prev_cell(rows, cols),
        SelectionMsg::SelectAll => selection.select_all(rows, cols),
        SelectionMsg::Clear => selection.clear(),
    }

    (session.selection.range() != before).then_some(Cmd::Redraw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::selection::Direction;

    fn session() -> EditSession {
        EditSession::blank(0, &EditorConfig::default())
    }

    #[test]
    fn test_select_then_extend() {
        let mut s = session();
        update_selection(&mut s, SelectionMsg::SelectCell { row: 1, col: 0 });
        let cmd = update_selection(&mut s, SelectionMsg::ExtendSelectionTo { row: 2, col: 2 });
        assert_eq!(cmd, Some(Cmd::Redraw));

        let range = s.selection.range().unwrap();
        assert_eq!(range.start(), CellPosition::new(1, 0));
        assert_eq!(range.end(), CellPosition::new(2, 2));
    }

    #[test]
    fn test_move_at_edge_is_noop() {
        let mut s = session();
        update_selection(&mut s, SelectionMsg::SelectCell { row: 0, col: 0 });
        assert_eq!(update_selection(&mut s, SelectionMsg::Move(Direction::Up)), None);
    }

    #[test]
    fn test_clear_then_arrow_selects_origin() {
        let mut s = session();
        update_selection(&mut s, SelectionMsg::Clear);
        assert!(s.selection.is_empty());
        update_selection(&mut s, SelectionMsg::Move(Direction::Right));
        assert_eq!(s.selection.active(), Some(CellPosition::new(0, 0)));
    }
}
