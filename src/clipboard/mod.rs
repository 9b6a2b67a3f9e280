//! Clipboard interchange
//!
//! - `codec`: tab-separated, quote-escaped text ⇄ string matrix
//! - `paste`: writing a matrix into the grid, growing it to fit
//! - `system`: the [`ClipboardProvider`] seam and its backends

pub mod codec;
mod paste;
mod system;

pub use codec::{escape_cell, parse as parse_clipboard, serialize as serialize_clipboard};
pub use paste::{paste_matrix, PasteOutcome};
pub use system::{ClipboardError, ClipboardProvider, MemoryClipboard, SystemClipboard};
