//! Clipboard operations for quire.
//!
//! The editor only talks to a [`ClipboardPort`]. [`SystemClipboard`] provides
//! cross-platform clipboard access using arboard (on Linux, both CLIPBOARD and
//! PRIMARY selections); [`MemoryClipboard`] keeps the text in-process.

use std::fmt;
use std::sync::{Mutex, OnceLock};

use arboard::Clipboard;
use thiserror::Error;

#[cfg(target_os = "linux")]
use arboard::{GetExtLinux, LinuxClipboardKind, SetExtLinux};

/// Tag describing the kind of transfer. Diagnostic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipLabel {
    Cut,
    Copy,
}

impl ClipLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            ClipLabel::Cut => "CUT",
            ClipLabel::Copy => "COPY",
        }
    }
}

impl fmt::Display for ClipLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clipboard failure reported by the system clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Failed to initialize clipboard: {0}")]
    Unavailable(String),

    #[error("Failed to lock clipboard")]
    Poisoned,

    #[error("Failed to set clipboard text: {0}")]
    Write(String),
}

/// Boundary between the editor and a clipboard.
///
/// Writes are fire-and-forget from the editor's point of view: a port that
/// can fail must handle (log) the failure itself.
pub trait ClipboardPort {
    /// Store `text` as the primary clip.
    fn write(&mut self, label: ClipLabel, text: &str);

    /// Current primary clip text, `None` when the clipboard is empty.
    fn read_primary(&self) -> Option<String>;

    /// Whether the primary clip holds non-empty text.
    ///
    /// A stored empty string counts as no clip.
    fn has_primary(&self) -> bool {
        self.read_primary().is_some_and(|text| !text.is_empty())
    }
}

impl<T: ClipboardPort + ?Sized> ClipboardPort for Box<T> {
    fn write(&mut self, label: ClipLabel, text: &str) {
        (**self).write(label, text);
    }

    fn read_primary(&self) -> Option<String> {
        (**self).read_primary()
    }

    fn has_primary(&self) -> bool {
        (**self).has_primary()
    }
}

/// In-process clipboard.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    primary: Option<String>,
    last_label: Option<ClipLabel>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clipboard preloaded with `text`
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            primary: Some(text.into()),
            last_label: None,
        }
    }

    /// Label of the most recent write
    pub fn last_label(&self) -> Option<ClipLabel> {
        self.last_label
    }

    pub fn clear(&mut self) {
        self.primary = None;
    }
}

impl ClipboardPort for MemoryClipboard {
    fn write(&mut self, label: ClipLabel, text: &str) {
        self.primary = Some(text.to_string());
        self.last_label = Some(label);
    }

    fn read_primary(&self) -> Option<String> {
        self.primary.clone()
    }

    fn has_primary(&self) -> bool {
        self.primary.as_deref().is_some_and(|text| !text.is_empty())
    }
}

/// Global clipboard instance that persists for the application lifetime.
static CLIPBOARD: OnceLock<Result<Mutex<Clipboard>, String>> = OnceLock::new();

/// Get or initialize the global clipboard instance.
fn get_clipboard() -> Result<&'static Mutex<Clipboard>, ClipboardError> {
    CLIPBOARD
        .get_or_init(|| Clipboard::new().map(Mutex::new).map_err(|e| e.to_string()))
        .as_ref()
        .map_err(|e| ClipboardError::Unavailable(e.clone()))
}

/// Copy text to system clipboard.
///
/// On Linux, copies to BOTH CLIPBOARD and PRIMARY selections.
pub fn copy(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = get_clipboard()?
        .lock()
        .map_err(|_| ClipboardError::Poisoned)?;

    #[cfg(target_os = "linux")]
    {
        // Copy to CLIPBOARD selection (Ctrl+C/V)
        clipboard
            .set()
            .clipboard(LinuxClipboardKind::Clipboard)
            .text(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))?;

        // Copy to PRIMARY selection (middle-click/Shift+Insert)
        let _ = clipboard
            .set()
            .clipboard(LinuxClipboardKind::Primary)
            .text(text.to_string());
    }

    #[cfg(not(target_os = "linux"))]
    clipboard
        .set_text(text)
        .map_err(|e| ClipboardError::Write(e.to_string()))?;

    Ok(())
}

/// Paste text from system clipboard.
///
/// On Linux, tries CLIPBOARD selection first, then falls back to PRIMARY.
/// Returns None if clipboard is empty or inaccessible.
pub fn paste() -> Option<String> {
    let mut clipboard = get_clipboard().ok()?.lock().ok()?;

    #[cfg(target_os = "linux")]
    {
        // Try CLIPBOARD selection first
        if let Ok(text) = clipboard
            .get()
            .clipboard(LinuxClipboardKind::Clipboard)
            .text()
        {
            if !text.is_empty() {
                return Some(text);
            }
        }

        // Fall back to PRIMARY selection
        clipboard
            .get()
            .clipboard(LinuxClipboardKind::Primary)
            .text()
            .ok()
    }

    #[cfg(not(target_os = "linux"))]
    clipboard.get_text().ok()
}

/// Check if clipboard contains text.
pub fn has_text() -> bool {
    paste().is_some_and(|t| !t.is_empty())
}

/// Port backed by the operating system clipboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardPort for SystemClipboard {
    fn write(&mut self, label: ClipLabel, text: &str) {
        match copy(text) {
            Ok(()) => quire_logger::debug(format!(
                "Clipboard {}: {} chars",
                label,
                text.chars().count()
            )),
            Err(e) => quire_logger::error(format!("Clipboard {} failed: {}", label, e)),
        }
    }

    fn read_primary(&self) -> Option<String> {
        paste()
    }

    fn has_primary(&self) -> bool {
        has_text()
    }
}
