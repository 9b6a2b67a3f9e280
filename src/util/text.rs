//! Display-width helpers for table formatting
//!
//! Markdown previewers commonly render East Asian characters at double width,
//! so column padding is measured in display cells rather than `char`s.

/// Check if a character occupies two display cells
///
/// Covers CJK symbols, kana and unified ideographs (U+3000..=U+9FFF),
/// half/full-width forms (U+FF00..=U+FFEF) and the CJK extension planes
/// (U+20000..=U+2FFFF).
pub fn is_wide(ch: char) -> bool {
    matches!(
        ch as u32,
        0x3000..=0x9FFF | 0xFF00..=0xFFEF | 0x20000..=0x2FFFF
    )
}

/// Display width of a character (1 or 2)
pub fn char_width(ch: char) -> usize {
    if is_wide(ch) {
        2
    } else {
        1
    }
}

/// Display width of a string
pub fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// The last visual line of a possibly multi-line value
pub fn last_line(text: &str) -> &str {
    text.rsplit('\n').next().unwrap_or(text)
}

/// Normalize line endings to `\n` (CRLF and lone CR)
pub fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
