//! Utility modules

pub mod text;

pub use text::{display_width, is_wide, last_line, normalize_newlines};
