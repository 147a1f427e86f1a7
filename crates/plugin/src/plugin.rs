use std::any::Any;

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};

/// Trait for all editor plugins.
///
/// `H` is the host editor. Every hook receives the host by mutable
/// reference, so a plugin never needs to keep a handle to it between calls.
/// Event handlers return `true` to claim the event, which stops dispatch to
/// later plugins and suppresses the editor's default handling.
pub trait EditorPlugin<H: ?Sized + 'static>: Any {
    /// Unique identifier; the only identity the registry knows about.
    fn plugin_id(&self) -> &str;

    /// Called once after the plugin has been added to the registry.
    fn on_attached(&mut self, host: &mut H) {
        let _ = host;
    }

    /// Called once after the plugin has been removed from the registry.
    fn on_detached(&mut self, host: &mut H) {
        let _ = host;
    }

    /// Key pressed.
    fn on_key_down(&mut self, code: KeyCode, event: &KeyEvent, host: &mut H) -> bool {
        let _ = (code, event, host);
        false
    }

    /// Key released.
    fn on_key_up(&mut self, code: KeyCode, event: &KeyEvent, host: &mut H) -> bool {
        let _ = (code, event, host);
        false
    }

    /// Pointer event.
    fn on_touch_event(&mut self, event: &MouseEvent, host: &mut H) -> bool {
        let _ = (event, host);
        false
    }

    /// Downcast to concrete type (immutable).
    fn as_any(&self) -> &dyn Any;

    /// Downcast to concrete type (mutable).
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
