//! Editor core for quire.
//!
//! [`Editor`] composes a [`TextBuffer`](quire_buffer::TextBuffer), a
//! [`ClipboardPort`](quire_clipboard::ClipboardPort) and an ordered
//! [`PluginRegistry`](quire_plugin::PluginRegistry). Input events are first
//! offered to plugins; unclaimed key presses fall through to the default
//! key map.

mod editing;
mod editor;
mod keymap;
mod navigation;
pub mod plugins;
mod search;

pub use editor::Editor;

// Re-export the types that appear in the editor API
pub use quire_buffer::{BufferError, Selection};
pub use quire_clipboard::{ClipLabel, ClipboardPort, MemoryClipboard, SystemClipboard};
pub use quire_config::EditorSettings;
pub use quire_plugin::{
    EditorPlugin, InputEvent, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind,
    PluginHost, PluginSupplier,
};
pub use quire_text_search::SearchOptions;
