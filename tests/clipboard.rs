//! Clipboard interchange and paste tests

mod common;

use common::{blank_session, cells, grid, matrix, send_all};
use mdgrid::clipboard::{paste_matrix, parse_clipboard, serialize_clipboard};
use mdgrid::grid::CellPosition;
use mdgrid::messages::{ClipboardMsg, SelectionMsg};

#[test]
fn test_spreadsheet_text_scenario() {
    let parsed = parse_clipboard("x\ty\n\"a\nb\"\tz");
    assert_eq!(parsed, matrix(&[&["x", "y"], &["a\nb", "z"]]));
}

#[test]
fn test_clipboard_round_trip() {
    let samples = [
        matrix(&[&["a"]]),
        matrix(&[&["a", "b", "c"], &["d", "e", "f"]]),
        matrix(&[&["tab\there", "quote \"q\""], &["multi\nline", ""]]),
        matrix(&[&["", "x"], &["y", ""]]),
        matrix(&[&["\"", "\"\""], &["日本語", "end"]]),
    ];
    for m in samples {
        let text = serialize_clipboard(&m);
        assert_eq!(parse_clipboard(&text), m, "round trip failed for {text:?}");
    }
}

#[test]
fn test_crlf_rows() {
    let parsed = parse_clipboard("a\tb\r\nc\td\r\n");
    assert_eq!(parsed, matrix(&[&["a", "b"], &["c", "d"]]));
}

#[test]
fn test_quoted_field_keeps_crlf_literal() {
    let parsed = parse_clipboard("\"one\r\ntwo\"\tx");
    assert_eq!(parsed, matrix(&[&["one\r\ntwo", "x"]]));
}

#[test]
fn test_paste_growth_property() {
    let before = grid(&[&["a", "b"], &["c", "d"]], &[]);
    for (r, c) in [(0, 0), (1, 1), (2, 0), (0, 3), (4, 4)] {
        for (h, w) in [(1, 1), (2, 3), (3, 1)] {
            let data: Vec<Vec<String>> = (0..h)
                .map(|i| (0..w).map(|j| format!("{i}{j}")).collect())
                .collect();
            let mut g = before.clone();
            paste_matrix(&mut g, &data, CellPosition::new(r, c));

            assert_eq!(g.row_count(), before.row_count().max(r + h));
            assert_eq!(g.column_count(), before.column_count().max(c + w));

            // Cells outside the pasted rectangle keep their values
            for (row, values) in cells(&before).iter().enumerate() {
                for (col, value) in values.iter().enumerate() {
                    let inside = (r..r + h).contains(&row) && (c..c + w).contains(&col);
                    if !inside {
                        assert_eq!(g.get(row, col), Some(value.as_str()));
                    }
                }
            }
        }
    }
}

#[test]
fn test_paste_message_grows_session() {
    let mut session = blank_session();
    send_all(
        &mut session,
        vec![
            SelectionMsg::SelectCell { row: 2, col: 1 }.into(),
            ClipboardMsg::PasteText("1\t2\t3\n4\t5\t6\n7\t8\t9".to_string()).into(),
        ],
    );

    assert_eq!((session.row_count(), session.column_count()), (5, 4));
    assert_eq!(session.grid().get(4, 3), Some("9"));
    assert_eq!(session.grid().get(2, 0), Some(""));
}

#[test]
fn test_copy_paste_between_sessions() {
    let mut source = common::session_at("| k | v |\n|---|---|\n| a | 1 |\n| b | 2 |", 0);
    let cmd = send_all(
        &mut source,
        vec![
            SelectionMsg::SelectCell { row: 1, col: 0 }.into(),
            SelectionMsg::ExtendSelectionTo { row: 2, col: 1 }.into(),
            ClipboardMsg::Copy.into(),
        ],
    );
    let Some(mdgrid::Cmd::WriteClipboard(text)) = cmd else {
        panic!("expected a clipboard write");
    };
    assert_eq!(text, "a\t1\nb\t2");

    let mut target = blank_session();
    send_all(&mut target, vec![ClipboardMsg::PasteText(text).into()]);
    assert_eq!(
        cells(target.grid()),
        matrix(&[&["a", "1", ""], &["b", "2", ""], &["", "", ""]])
    );
}
