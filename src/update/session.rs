//! Session lifecycle update functions

use crate::commands::Cmd;
use crate::messages::SessionMsg;
use crate::session::EditSession;

/// Handle save/cancel messages
pub fn update_session(session: &mut EditSession, msg: SessionMsg) -> Option<Cmd> {
    match msg {
        SessionMsg::Save => {
            let text = session.render();
            tracing::debug!(lines = ?session.lines(), "writing table back");
            Some(Cmd::ReplaceDocumentRange {
                lines: session.lines(),
                text,
            })
        }
        SessionMsg::Saved => {
            session.status = Some("Table updated".to_string());
            Some(Cmd::CloseSession)
        }
        SessionMsg::SaveFailed(error) => {
            // Session stays open so the user can retry or cancel
            tracing::warn!("Failed to write table: {}", error);
            session.status = Some(format!("Could not update document: {}", error));
            Some(Cmd::Redraw)
        }
        SessionMsg::Cancel => Some(Cmd::CloseSession),
    }
}
