use std::fmt;

use quire_buffer::{BufferError, Selection, TextBuffer};
use quire_clipboard::{ClipboardPort, MemoryClipboard};
use quire_config::EditorSettings;
use quire_plugin::{EditorPlugin, InputEvent, PluginHost, PluginRegistry, PluginSupplier};

use crate::keymap;
use crate::plugins::{AutoClose, AutoIndent};

/// Callback fired after content changes made through editor operations.
type ChangeListener = Box<dyn FnMut()>;

/// Editor instance: document, selection, clipboard and attached plugins.
pub struct Editor {
    /// Document and selection
    pub(crate) buffer: TextBuffer,
    /// Attached plugins in attachment order
    plugins: PluginRegistry<Editor>,
    /// Clipboard used by cut/copy/paste
    pub(crate) clipboard: Box<dyn ClipboardPort>,
    /// Active editor settings
    settings: EditorSettings,
    /// Change listener
    on_change: Option<ChangeListener>,
}

impl Editor {
    /// Create an empty editor using `clipboard`
    pub fn new(clipboard: impl ClipboardPort + 'static) -> Self {
        Self {
            buffer: TextBuffer::new(),
            plugins: PluginRegistry::new(),
            clipboard: Box::new(clipboard),
            settings: EditorSettings::default(),
            on_change: None,
        }
    }

    /// Create an editor holding `text` with the caret at offset 0
    pub fn with_text(text: &str, clipboard: impl ClipboardPort + 'static) -> Self {
        let mut editor = Self::new(clipboard);
        editor.buffer.set_text(text);
        editor
    }

    // === Content ===

    /// Get all text
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    /// Read access to document, selection and line index
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Replace the whole document without firing the change listener.
    ///
    /// Used for loading content, which is not an edit.
    pub fn set_text_content(&mut self, text: &str) {
        self.buffer.set_text(text);
    }

    /// Register the change listener, replacing any previous one
    pub fn set_on_change(&mut self, listener: impl FnMut() + 'static) {
        self.on_change = Some(Box::new(listener));
    }

    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }

    pub(crate) fn notify_change(&mut self) {
        if let Some(listener) = self.on_change.as_mut() {
            listener();
        }
    }

    /// Whether the editor rejects mutations; logs the rejected operation.
    pub(crate) fn reject_if_read_only(&self, operation: &str) -> bool {
        if self.settings.read_only {
            quire_logger::warn(format!("Read-only editor: {} ignored", operation));
        }
        self.settings.read_only
    }

    // === Selection ===

    /// Current selection
    pub fn selection(&self) -> Selection {
        self.buffer.selection()
    }

    /// Selected text (empty for a caret)
    pub fn selected_text(&self) -> String {
        self.buffer.selected_text()
    }

    /// Set selection between two offsets in any order
    pub fn set_selection(&mut self, a: usize, b: usize) -> Result<(), BufferError> {
        self.buffer.set_selection(a, b)
    }

    /// Collapse selection to `offset`
    pub fn set_caret(&mut self, offset: usize) -> Result<(), BufferError> {
        self.buffer.set_caret(offset)
    }

    // === Settings ===

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn is_read_only(&self) -> bool {
        self.settings.read_only
    }

    /// Apply `settings` and reconcile plugins.
    ///
    /// The desired plugin set is the built-in plugins enabled by `settings`
    /// followed by `extra`; attached plugins missing from it are uninstalled.
    pub fn configure(&mut self, settings: EditorSettings, extra: PluginSupplier<Editor>) {
        let desired = PluginSupplier::new()
            .plugin_if(settings.auto_indent, AutoIndent::new)
            .plugin_if(settings.auto_close_brackets, AutoClose::new);
        let desired = extra
            .supply()
            .into_iter()
            .fold(desired, PluginSupplier::boxed);

        self.settings = settings;
        self.reconcile_plugins(desired);
    }

    // === Clipboard ===

    /// Whether the clipboard holds a primary clip
    pub fn has_primary_clip(&self) -> bool {
        self.clipboard.has_primary()
    }

    // === Plugins ===

    /// Attach `plugin`; a duplicate id is logged and ignored
    pub fn install_plugin<P: EditorPlugin<Editor>>(&mut self, plugin: P) -> bool {
        self.install_boxed_plugin(Box::new(plugin))
    }

    pub fn install_boxed_plugin(&mut self, plugin: Box<dyn EditorPlugin<Editor>>) -> bool {
        PluginRegistry::install(self, plugin)
    }

    /// Detach plugin `plugin_id`; an unknown id is logged and ignored
    pub fn uninstall_plugin(&mut self, plugin_id: &str) -> bool {
        PluginRegistry::uninstall(self, plugin_id)
    }

    /// Transition the attached set to the plugins in `supplier`
    pub fn reconcile_plugins(&mut self, supplier: PluginSupplier<Editor>) {
        PluginRegistry::reconcile(self, supplier);
    }

    /// Find attached plugin by id and downcast it to `T`.
    ///
    /// A plugin cannot find itself from inside its own hook.
    pub fn find_plugin<T: EditorPlugin<Editor>>(&self, plugin_id: &str) -> Option<&T> {
        self.plugins.find_as::<T>(plugin_id)
    }

    /// Find attached plugin by id and downcast it to `T` (mutable)
    pub fn find_plugin_mut<T: EditorPlugin<Editor>>(&mut self, plugin_id: &str) -> Option<&mut T> {
        self.plugins.find_as_mut::<T>(plugin_id)
    }

    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.has(plugin_id)
    }

    /// Attached plugin ids in attachment order
    pub fn plugin_ids(&self) -> Vec<&str> {
        self.plugins.ids()
    }

    // === Events ===

    /// Route an input event: plugins first, then the default key map.
    ///
    /// Returns whether the event was handled.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        if PluginRegistry::dispatch(self, &event) {
            return true;
        }

        match &event {
            InputEvent::KeyDown(key) => keymap::handle_key_down(self, key),
            InputEvent::KeyUp(_) | InputEvent::Touch(_) => false,
        }
    }
}

impl PluginHost for Editor {
    fn plugins(&self) -> &PluginRegistry<Self> {
        &self.plugins
    }

    fn plugins_mut(&mut self) -> &mut PluginRegistry<Self> {
        &mut self.plugins
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(MemoryClipboard::new())
    }
}

impl fmt::Debug for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Editor")
            .field("buffer", &self.buffer)
            .field("plugins", &self.plugins)
            .field("settings", &self.settings)
            .field("has_on_change", &self.on_change.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_set_text_content_does_not_notify() {
        let changes = Rc::new(Cell::new(0));
        let counter = changes.clone();

        let mut editor = Editor::default();
        editor.set_on_change(move || counter.set(counter.get() + 1));
        editor.set_text_content("loaded");
        assert_eq!(changes.get(), 0);

        editor.insert("!");
        assert_eq!(changes.get(), 1);
        assert_eq!(editor.text(), "!loaded");
    }

    #[test]
    fn test_configure_installs_enabled_builtins() {
        let mut editor = Editor::default();
        editor.configure(EditorSettings::default(), PluginSupplier::new());
        assert_eq!(editor.plugin_ids(), vec![AutoIndent::ID, AutoClose::ID]);

        let settings = EditorSettings {
            auto_indent: false,
            ..Default::default()
        };
        editor.configure(settings, PluginSupplier::new());
        assert_eq!(editor.plugin_ids(), vec![AutoClose::ID]);
        assert!(editor.find_plugin::<AutoClose>(AutoClose::ID).is_some());
        assert!(editor.find_plugin::<AutoIndent>(AutoClose::ID).is_none());
    }

    #[test]
    fn test_read_only_setting() {
        let mut editor = Editor::with_text("fixed", MemoryClipboard::new());
        editor.configure(
            EditorSettings {
                read_only: true,
                ..Default::default()
            },
            PluginSupplier::new(),
        );
        assert!(editor.is_read_only());

        editor.insert("x");
        assert_eq!(editor.text(), "fixed");
    }
}
