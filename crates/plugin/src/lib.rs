//! Editor plugins for quire.
//!
//! A plugin is an independently developed behavior unit that can intercept
//! key and pointer events before the editor's default handling. Plugins are
//! identified only by their [`EditorPlugin::plugin_id`] and kept in
//! attachment order: the first attached plugin gets the first chance to
//! claim an event.

mod event;
mod plugin;
mod registry;
mod supplier;

pub use event::InputEvent;
pub use plugin::EditorPlugin;
pub use registry::{PluginHost, PluginRegistry};
pub use supplier::PluginSupplier;

// Re-export crossterm event types used in plugin signatures
pub use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
