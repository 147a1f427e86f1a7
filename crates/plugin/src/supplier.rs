use std::fmt;

use crate::EditorPlugin;

/// Ordered description of the plugins that should be attached.
///
/// Built by the caller, consumed once by [`crate::PluginRegistry::reconcile`].
pub struct PluginSupplier<H: ?Sized + 'static> {
    plugins: Vec<Box<dyn EditorPlugin<H>>>,
}

impl<H: ?Sized + 'static> PluginSupplier<H> {
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    /// Append a plugin
    pub fn plugin<P: EditorPlugin<H>>(self, plugin: P) -> Self {
        self.boxed(Box::new(plugin))
    }

    /// Append an already boxed plugin
    pub fn boxed(mut self, plugin: Box<dyn EditorPlugin<H>>) -> Self {
        self.plugins.push(plugin);
        self
    }

    /// Append a plugin only when `enabled`
    pub fn plugin_if<P: EditorPlugin<H>>(self, enabled: bool, plugin: impl FnOnce() -> P) -> Self {
        if enabled {
            self.plugin(plugin())
        } else {
            self
        }
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Consume the supplier, yielding plugins in insertion order
    pub fn supply(self) -> Vec<Box<dyn EditorPlugin<H>>> {
        self.plugins
    }
}

impl<H: ?Sized + 'static> Default for PluginSupplier<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: ?Sized + 'static> FromIterator<Box<dyn EditorPlugin<H>>> for PluginSupplier<H> {
    fn from_iter<I: IntoIterator<Item = Box<dyn EditorPlugin<H>>>>(iter: I) -> Self {
        Self {
            plugins: iter.into_iter().collect(),
        }
    }
}

impl<H: ?Sized + 'static> fmt::Debug for PluginSupplier<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.plugins.iter().map(|p| p.plugin_id()))
            .finish()
    }
}
