//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The core never performs them itself; see [`crate::runtime`].

use std::ops::Range;

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Grid or selection changed; the surface should re-read the session
    Redraw,
    /// Put interchange text on the system clipboard
    WriteClipboard(String),
    /// Read the system clipboard and answer with `ClipboardMsg::PasteText`
    ReadClipboard,
    /// Replace the table's span in the host document
    ReplaceDocumentRange { lines: Range<usize>, text: String },
    /// The session is over; the handle can be dropped
    CloseSession,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            // Effects report back through messages, which redraw as needed
            Cmd::WriteClipboard(_) | Cmd::ReadClipboard => false,
            Cmd::ReplaceDocumentRange { .. } => false,
            Cmd::CloseSession => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_redraw() {
        assert!(!Cmd::None.needs_redraw());
        assert!(Cmd::Redraw.needs_redraw());
        assert!(Cmd::batch(vec![Cmd::ReadClipboard, Cmd::Redraw]).needs_redraw());
        assert!(!Cmd::WriteClipboard("x".to_string()).needs_redraw());
    }
}
