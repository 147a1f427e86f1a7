use crossterm::event::{Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent};

/// Input event routed through the plugin registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Key pressed (or auto-repeated)
    KeyDown(KeyEvent),
    /// Key released
    KeyUp(KeyEvent),
    /// Pointer event
    Touch(MouseEvent),
}

impl InputEvent {
    /// Convert a terminal event, if it is an input event.
    ///
    /// Release events only arrive from terminals with the kitty keyboard
    /// protocol enabled; everywhere else every key event is a key-down.
    pub fn from_crossterm(event: CrosstermEvent) -> Option<Self> {
        match event {
            CrosstermEvent::Key(key) => Some(Self::from_key(key)),
            CrosstermEvent::Mouse(mouse) => Some(InputEvent::Touch(mouse)),
            _ => None,
        }
    }

    /// Classify a key event by its kind
    pub fn from_key(key: KeyEvent) -> Self {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => InputEvent::KeyDown(key),
            KeyEventKind::Release => InputEvent::KeyUp(key),
        }
    }
}
