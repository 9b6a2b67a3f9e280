//! Update functions for the Elm-style architecture
//!
//! All session state transformations flow through these functions.

mod clipboard;
mod edit;
mod history;
mod selection;
mod session;
mod structure;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::session::EditSession;

pub use clipboard::update_clipboard;
pub use edit::update_edit;
pub use history::update_history;
pub use selection::update_selection;
pub use session::update_session;
pub use structure::update_structure;

/// Main update function - dispatches to sub-handlers
pub fn update(session: &mut EditSession, msg: Msg) -> Option<Cmd> {
    tracing::trace!(?msg, "update");
    match msg {
        Msg::Selection(m) => update_selection(session, m),
        Msg::Edit(m) => update_edit(session, m),
        Msg::Clipboard(m) => update_clipboard(session, m),
        Msg::Structure(m) => update_structure(session, m),
        Msg::History(m) => update_history(session, m),
        Msg::Session(m) => update_session(session, m),
    }
}

/// Redraw if the grid changed, otherwise nothing
fn redraw_if(changed: bool) -> Option<Cmd> {
    changed.then_some(Cmd::Redraw)
}
