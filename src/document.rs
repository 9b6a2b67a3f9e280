//! Host document access
//!
//! The editing core never touches files. Saving a session produces a
//! `Cmd::ReplaceDocumentRange`, which the runtime hands to a
//! [`DocumentWriter`].

use std::ops::Range;
use std::path::{Path, PathBuf};

/// Errors from replacing a line range in a document
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("lines {start}..{end} are outside the document ({len} lines)")]
    OutOfRange { start: usize, end: usize, len: usize },
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Something whose lines can be replaced by rendered table text
pub trait DocumentWriter {
    /// Replace the half-open line range `lines` with `text`
    ///
    /// An empty range inserts before `lines.start`.
    fn replace_lines(&mut self, lines: Range<usize>, text: &str) -> Result<(), WriteError>;
}

impl<T: DocumentWriter + ?Sized> DocumentWriter for &mut T {
    fn replace_lines(&mut self, lines: Range<usize>, text: &str) -> Result<(), WriteError> {
        (**self).replace_lines(lines, text)
    }
}

fn splice_lines(target: &mut Vec<String>, lines: Range<usize>, text: &str) -> Result<(), WriteError> {
    if lines.start > lines.end || lines.end > target.len() {
        return Err(WriteError::OutOfRange {
            start: lines.start,
            end: lines.end,
            len: target.len(),
        });
    }
    target.splice(lines, text.lines().map(str::to_string));
    Ok(())
}

impl DocumentWriter for Vec<String> {
    fn replace_lines(&mut self, lines: Range<usize>, text: &str) -> Result<(), WriteError> {
        splice_lines(self, lines, text)
    }
}

/// A Markdown file loaded as lines and written back on every replacement
#[derive(Debug, Clone)]
pub struct FileDocument {
    path: PathBuf,
    lines: Vec<String>,
    line_ending: &'static str,
    trailing_newline: bool,
}

impl FileDocument {
    /// Load a file from disk
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path)?;
        let line_ending = if content.contains("\r\n") { "\r\n" } else { "\n" };
        let trailing_newline = content.ends_with('\n');
        let lines = content.lines().map(str::to_string).collect();
        tracing::debug!(path = %path.display(), "opened document");
        Ok(Self {
            path,
            lines,
            line_ending,
            trailing_newline,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Full file content with the original line endings
    pub fn to_text(&self) -> String {
        let mut text = self.lines.join(self.line_ending);
        if self.trailing_newline && !self.lines.is_empty() {
            text.push_str(self.line_ending);
        }
        text
    }

    /// Write the current lines to disk
    pub fn save(&self) -> Result<(), WriteError> {
        std::fs::write(&self.path, self.to_text()).map_err(|source| WriteError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!("Wrote {}", self.path.display());
        Ok(())
    }
}

impl DocumentWriter for FileDocument {
    fn replace_lines(&mut self, lines: Range<usize>, text: &str) -> Result<(), WriteError> {
        let previous = self.lines.clone();
        splice_lines(&mut self.lines, lines, text)?;
        if let Err(e) = self.save() {
            self.lines = previous;
            return Err(e);
        }
        Ok(())
    }
}
