//! System clipboard access
//!
//! The editing core never touches the OS clipboard directly; the runtime goes
//! through [`ClipboardProvider`] so hosts and tests can swap the backend.

/// Error type for clipboard access
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard is unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard read failed: {0}")]
    Read(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Read/write plain text on a clipboard
pub trait ClipboardProvider {
    fn read_text(&mut self) -> Result<String, ClipboardError>;
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl<T: ClipboardProvider + ?Sized> ClipboardProvider for &mut T {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        (**self).read_text()
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_text(text)
    }
}

/// The OS clipboard via `arboard`
///
/// A fresh handle is opened per operation. On X11 and Wayland the text lives
/// only as long as its owning handle, so short-lived processes use
/// [`SystemClipboard::holding_until_replaced`] to keep serving it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard {
    hold_until_replaced: bool,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block on write until another program replaces the clipboard contents
    pub fn holding_until_replaced() -> Self {
        Self {
            hold_until_replaced: true,
        }
    }

    /// Check if writes block to keep the contents available
    pub fn holds_contents(&self) -> bool {
        self.hold_until_replaced
            && cfg!(all(
                unix,
                not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
            ))
    }

    fn open() -> Result<arboard::Clipboard, ClipboardError> {
        arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
fn set_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    hold: bool,
) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    if hold {
        tracing::debug!("serving clipboard until it is replaced");
        clipboard.set().wait().text(text)
    } else {
        clipboard.set_text(text)
    }
}

#[cfg(not(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
)))]
fn set_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    _hold: bool,
) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

impl ClipboardProvider for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        Self::open()?
            .get_text()
            .map_err(|e| ClipboardError::Read(e.to_string()))
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = Self::open()?;
        set_text(&mut clipboard, text, self.hold_until_replaced)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// In-process clipboard, used by tests and headless hosts
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            contents: Some(text.to_string()),
        }
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        self.contents
            .clone()
            .ok_or_else(|| ClipboardError::Read("clipboard is empty".to_string()))
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
