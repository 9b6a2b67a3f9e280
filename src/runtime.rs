//! Command execution
//!
//! `update` only describes side effects. The runtime performs them against a
//! [`ClipboardProvider`] and a [`DocumentWriter`] and feeds each result back
//! into `update` as a message, until no work is left.

use std::collections::VecDeque;

use crate::clipboard::ClipboardProvider;
use crate::commands::Cmd;
use crate::document::DocumentWriter;
use crate::messages::{ClipboardMsg, Msg, SessionMsg};
use crate::session::EditSession;
use crate::update::update;

/// What the caller should do after a dispatch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    /// The session's read model changed
    pub redraw: bool,
    /// The session ended; drop the handle
    pub closed: bool,
}

/// Executes commands for one editing session at a time
#[derive(Debug)]
pub struct Runtime<C, D> {
    clipboard: C,
    document: D,
}

impl<C: ClipboardProvider, D: DocumentWriter> Runtime<C, D> {
    pub fn new(clipboard: C, document: D) -> Self {
        Self {
            clipboard,
            document,
        }
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn into_parts(self) -> (C, D) {
        (self.clipboard, self.document)
    }

    /// Run `msg` and every follow-up message it causes
    pub fn dispatch(&mut self, session: &mut EditSession, msg: impl Into<Msg>) -> Outcome {
        let mut outcome = Outcome::default();
        let mut queue = VecDeque::from([msg.into()]);

        while let Some(msg) = queue.pop_front() {
            if let Some(cmd) = update(session, msg) {
                outcome.redraw |= cmd.needs_redraw();
                self.process_cmd(cmd, &mut outcome, &mut queue);
            }
            if outcome.closed {
                break;
            }
        }

        outcome
    }

    /// Perform one command, queueing the message that reports its result
    fn process_cmd(&mut self, cmd: Cmd, outcome: &mut Outcome, queue: &mut VecDeque<Msg>) {
        match cmd {
            Cmd::None | Cmd::Redraw => {}
            Cmd::WriteClipboard(text) => {
                let msg = match self.clipboard.write_text(&text) {
                    Ok(()) => ClipboardMsg::Written,
                    Err(e) => ClipboardMsg::Failed(e.to_string()),
                };
                queue.push_back(msg.into());
            }
            Cmd::ReadClipboard => {
                let msg = match self.clipboard.read_text() {
                    Ok(text) => ClipboardMsg::PasteText(text),
                    Err(e) => ClipboardMsg::Failed(e.to_string()),
                };
                queue.push_back(msg.into());
            }
            Cmd::ReplaceDocumentRange { lines, text } => {
                let msg = match self.document.replace_lines(lines, &text) {
                    Ok(()) => SessionMsg::Saved,
                    Err(e) => SessionMsg::SaveFailed(e.to_string()),
                };
                queue.push_back(msg.into());
            }
            Cmd::CloseSession => {
                tracing::debug!("session closed");
                outcome.closed = true;
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd, outcome, queue);
                }
            }
        }
    }
}
