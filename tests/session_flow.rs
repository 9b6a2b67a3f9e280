//! End-to-end editing session tests

mod common;

use common::{blank_session, cells, lines, matrix, send_all, session_at};
use mdgrid::actions::{self, Report};
use mdgrid::cli::Action;
use mdgrid::clipboard::MemoryClipboard;
use mdgrid::config::EditorConfig;
use mdgrid::document::FileDocument;
use mdgrid::grid::{Alignment, CellPosition};
use mdgrid::messages::{ClipboardMsg, EditMsg, SelectionMsg, SessionMsg, StructureMsg};
use mdgrid::runtime::Runtime;
use mdgrid::selection::Direction;
use mdgrid::session::EditSession;
use mdgrid::Cmd;

const DOC: &str = "\
# Inventory

| item | qty |
|------|----:|
| pen  |   2 |

Notes below.
";

// ========================================================================
// Structural guard
// ========================================================================

#[test]
fn test_single_row_and_column_are_kept() {
    let mut session = session_at("| only |\n|---|", 0);
    assert_eq!((session.row_count(), session.column_count()), (1, 1));

    let cmd = send_all(
        &mut session,
        vec![
            StructureMsg::RemoveRow(None).into(),
            StructureMsg::RemoveRow(Some(0)).into(),
            StructureMsg::RemoveColumn(None).into(),
            StructureMsg::RemoveColumn(Some(0)).into(),
        ],
    );
    assert_eq!(cmd, None);
    assert_eq!(cells(session.grid()), matrix(&[&["only"]]));
    assert!(!session.history().can_undo());
}

// ========================================================================
// Navigation
// ========================================================================

#[test]
fn test_tab_wraps_rows() {
    let mut session = blank_session();
    send_all(
        &mut session,
        vec![
            SelectionMsg::SelectCell { row: 0, col: 2 }.into(),
            SelectionMsg::NextCell.into(),
        ],
    );
    assert_eq!(session.selection.active(), Some(CellPosition::new(1, 0)));

    send_all(&mut session, vec![SelectionMsg::PrevCell.into()]);
    assert_eq!(session.selection.active(), Some(CellPosition::new(0, 2)));
}

#[test]
fn test_shift_arrows_extend_from_anchor() {
    let mut session = blank_session();
    send_all(
        &mut session,
        vec![
            SelectionMsg::SelectCell { row: 1, col: 1 }.into(),
            SelectionMsg::MoveWithSelection(Direction::Down).into(),
            SelectionMsg::MoveWithSelection(Direction::Left).into(),
        ],
    );
    let range = session.selection.range().unwrap();
    assert_eq!(range.anchor, CellPosition::new(1, 1));
    assert_eq!(range.start(), CellPosition::new(1, 0));
    assert_eq!(range.end(), CellPosition::new(2, 1));

    send_all(&mut session, vec![SelectionMsg::Move(Direction::Up).into()]);
    assert!(session.selection.range().unwrap().is_single());
}

#[test]
fn test_select_all_then_clear() {
    let mut session = blank_session();
    send_all(&mut session, vec![SelectionMsg::SelectAll.into()]);
    assert_eq!(session.selection.selected_positions().len(), 9);
    send_all(&mut session, vec![SelectionMsg::Clear.into()]);
    assert!(session.selection.is_empty());
}

// ========================================================================
// Full sessions through the runtime
// ========================================================================

#[test]
fn test_edit_and_save_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.md");
    std::fs::write(&path, DOC).unwrap();

    let document = FileDocument::open(&path).unwrap();
    let table = mdgrid::markdown::parse_table(document.lines(), 3).unwrap();
    let mut session = EditSession::from_table(&table, &EditorConfig::default());
    let mut runtime = Runtime::new(MemoryClipboard::new(), document);

    runtime.dispatch(&mut session, StructureMsg::AddRow);
    runtime.dispatch(
        &mut session,
        EditMsg::SetCell {
            row: 2,
            col: 0,
            value: "notebook".to_string(),
        },
    );
    runtime.dispatch(
        &mut session,
        EditMsg::SetCell {
            row: 2,
            col: 1,
            value: "10".to_string(),
        },
    );
    runtime.dispatch(
        &mut session,
        StructureMsg::SetAlignment {
            col: 0,
            alignment: Alignment::Center,
        },
    );
    let outcome = runtime.dispatch(&mut session, SessionMsg::Save);
    assert!(outcome.closed);
    assert_eq!(session.status.as_deref(), Some("Table updated"));

    let saved = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        saved,
        "\
# Inventory

|   item   | qty |
|:--------:|----:|
|   pen    |   2 |
| notebook |  10 |

Notes below.
"
    );
}

#[test]
fn test_new_table_inserted_at_line() {
    let mut session = EditSession::blank(1, &EditorConfig::default());
    let mut runtime = Runtime::new(MemoryClipboard::new(), lines("before\nafter"));
    runtime.dispatch(&mut session, StructureMsg::RemoveColumn(None));
    runtime.dispatch(&mut session, StructureMsg::RemoveRow(None));
    runtime.dispatch(
        &mut session,
        EditMsg::SetCell {
            row: 0,
            col: 0,
            value: "h".to_string(),
        },
    );
    runtime.dispatch(&mut session, SessionMsg::Save);

    let (_, document) = runtime.into_parts();
    assert_eq!(
        document,
        lines("before\n| h |   |\n|:--|:--|\n|   |   |\nafter")
    );
}

#[test]
fn test_cut_then_undo_restores_cells() {
    let mut session = session_at(DOC, 2);
    let mut runtime = Runtime::new(MemoryClipboard::new(), lines(DOC));

    runtime.dispatch(&mut session, SelectionMsg::SelectCell { row: 1, col: 0 });
    runtime.dispatch(&mut session, SelectionMsg::ExtendSelectionTo { row: 1, col: 1 });
    runtime.dispatch(&mut session, ClipboardMsg::Cut);
    assert_eq!(runtime.clipboard().contents.as_deref(), Some("pen\t2"));
    assert_eq!(session.grid().row(1).unwrap(), &["".to_string(), "".to_string()]);

    runtime.dispatch(&mut session, mdgrid::messages::HistoryMsg::Undo);
    assert_eq!(session.grid().get(1, 0), Some("pen"));
}

#[test]
fn test_cancel_leaves_document() {
    let mut session = session_at(DOC, 4);
    let mut runtime = Runtime::new(MemoryClipboard::new(), lines(DOC));
    runtime.dispatch(&mut session, EditMsg::ClearSelectedCells);
    let outcome = runtime.dispatch(&mut session, SessionMsg::Cancel);
    assert!(outcome.closed);
    assert_eq!(runtime.document(), &lines(DOC));
}

#[test]
fn test_save_command_targets_table_span() {
    let mut session = session_at(DOC, 4);
    let cmd = send_all(&mut session, vec![SessionMsg::Save.into()]);
    assert!(matches!(cmd, Some(Cmd::ReplaceDocumentRange { lines, .. }) if lines == (2..5)));
}

// ========================================================================
// CLI actions
// ========================================================================

#[test]
fn test_format_action_rewrites_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t.md");
    std::fs::write(&path, "intro\n|a|b|\n|-|:-:|\n|long cell|x|\n").unwrap();

    let action = Action::Format {
        file: path.clone(),
        line: 2,
        to_stdout: false,
    };
    let report = actions::run(&action, &EditorConfig::default(), MemoryClipboard::new()).unwrap();
    assert!(matches!(report, Report::Done(_)));
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "intro\n| a         | b |\n|:----------|:-:|\n| long cell | x |\n"
    );
}

#[test]
fn test_copy_action_uses_clipboard() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t.md");
    std::fs::write(&path, DOC).unwrap();

    let mut clipboard = MemoryClipboard::new();
    let action = Action::Copy {
        file: path.clone(),
        line: 2,
    };
    actions::run(&action, &EditorConfig::default(), &mut clipboard).unwrap();
    assert_eq!(clipboard.contents.as_deref(), Some("item\tqty\npen\t2"));
}

#[test]
fn test_paste_action_grows_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t.md");
    std::fs::write(&path, DOC).unwrap();

    let action = Action::Paste {
        file: path.clone(),
        line: 3,
        target: CellPosition::new(2, 1),
    };
    let clipboard = MemoryClipboard::with_text("5\tblue\n1\tred");
    actions::run(&action, &EditorConfig::default(), clipboard).unwrap();

    let saved = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        saved,
        "\
# Inventory

| item | qty |      |
|:-----|----:|:-----|
| pen  |   2 |      |
|      |   5 | blue |
|      |   1 | red  |

Notes below.
"
    );
}
