//! mdgrid - Markdown pipe tables as an editable grid
//!
//! This crate provides the core types and logic for editing a Markdown
//! table as a grid of cells, implementing the Elm Architecture pattern:
//! intents arrive as [`Msg`], [`update`](update::update) mutates an
//! [`EditSession`] and returns a [`Cmd`] describing side effects, and the
//! [`Runtime`](runtime::Runtime) performs them.

pub mod actions;
pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod document;
pub mod grid;
pub mod history;
pub mod markdown;
pub mod messages;
pub mod runtime;
pub mod selection;
pub mod session;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use grid::{Alignment, CellPosition, Grid};
pub use markdown::{MarkdownTable, TableParseError};
pub use messages::Msg;
pub use session::EditSession;
