//! Message types for the Elm-style architecture
//!
//! Every user intent coming from the rendering surface is one of these
//! messages. Follow-up messages from side effects (clipboard reads, document
//! writes) come back through the same channel.

use crate::grid::Alignment;

pub use crate::selection::Direction;

/// Selection and navigation intents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionMsg {
    /// Plain click on a cell
    SelectCell { row: usize, col: usize },
    /// Shift+Click on a cell
    ExtendSelectionTo { row: usize, col: usize },
    /// Arrow key
    Move(Direction),
    /// Shift+Arrow
    MoveWithSelection(Direction),
    /// Tab
    NextCell,
    /// Shift+Tab
    PrevCell,
    /// Cmd/Ctrl+A
    SelectAll,
    /// Escape
    Clear,
}

/// Cell content intents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMsg {
    /// Commit a plain-text value into a cell
    SetCell {
        row: usize,
        col: usize,
        value: String,
    },
    /// Delete/Backspace over the selection
    ClearSelectedCells,
}

/// Clipboard intents and results
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardMsg {
    Copy,
    Cut,
    /// Request a paste; the runtime reads the clipboard and answers with `PasteText`
    Paste,
    /// Clipboard text to paste at the selection
    PasteText(String),
    /// The clipboard write succeeded
    Written,
    /// Reading or writing the system clipboard failed
    Failed(String),
}

/// Grid shape intents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureMsg {
    AddRow,
    AddColumn,
    /// Remove a row (`None` = last row)
    RemoveRow(Option<usize>),
    /// Remove a column (`None` = last column)
    RemoveColumn(Option<usize>),
    SetAlignment { col: usize, alignment: Alignment },
    /// Align every column the selection touches
    AlignSelection(Alignment),
}

/// Undo/redo intents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMsg {
    Undo,
    Redo,
}

/// Session lifecycle intents and results
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMsg {
    /// Render the grid and write it back to the document
    Save,
    /// The document write succeeded
    Saved,
    /// The document write failed
    SaveFailed(String),
    /// Close without writing
    Cancel,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Selection(SelectionMsg),
    Edit(EditMsg),
    Clipboard(ClipboardMsg),
    Structure(StructureMsg),
    History(HistoryMsg),
    Session(SessionMsg),
}

impl From<SelectionMsg> for Msg {
    fn from(msg: SelectionMsg) -> Self {
        Msg::Selection(msg)
    }
}

impl From<EditMsg> for Msg {
    fn from(msg: EditMsg) -> Self {
        Msg::Edit(msg)
    }
}

impl From<ClipboardMsg> for Msg {
    fn from(msg: ClipboardMsg) -> Self {
        Msg::Clipboard(msg)
    }
}

impl From<StructureMsg> for Msg {
    fn from(msg: StructureMsg) -> Self {
        Msg::Structure(msg)
    }
}

impl From<HistoryMsg> for Msg {
    fn from(msg: HistoryMsg) -> Self {
        Msg::History(msg)
    }
}

impl From<SessionMsg> for Msg {
    fn from(msg: SessionMsg) -> Self {
        Msg::Session(msg)
    }
}
