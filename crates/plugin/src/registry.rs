use std::collections::HashSet;
use std::fmt;

use crate::{EditorPlugin, InputEvent, PluginSupplier};

/// Host that owns a [`PluginRegistry`] and is handed to every plugin hook.
///
/// The registry lives inside its host, so the protocol operations
/// ([`PluginRegistry::install`], [`PluginRegistry::dispatch`], ...) take the
/// host instead of `self` and reach the registry through this accessor.
/// Hooks may call back into the host, including into the registry.
pub trait PluginHost: Sized + 'static {
    fn plugins(&self) -> &PluginRegistry<Self>;

    fn plugins_mut(&mut self) -> &mut PluginRegistry<Self>;
}

struct Slot<H: ?Sized + 'static> {
    id: String,
    /// Distinguishes a reinstalled plugin from an earlier one with the same id
    serial: u64,
    /// `None` while one of the plugin's hooks is running
    plugin: Option<Box<dyn EditorPlugin<H>>>,
}

/// Attached plugins in attachment order.
///
/// A plugin whose hook is running is lent out of its slot; the slot (and so
/// the id) stays attached. Detaching a lent plugin is completed when its
/// hook returns.
pub struct PluginRegistry<H: ?Sized + 'static> {
    slots: Vec<Slot<H>>,
    next_serial: u64,
}

impl<H: ?Sized + 'static> PluginRegistry<H> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            next_serial: 0,
        }
    }

    /// Find plugin by id.
    ///
    /// `None` for a plugin whose hook is currently running.
    pub fn find(&self, plugin_id: &str) -> Option<&dyn EditorPlugin<H>> {
        self.slot(plugin_id)?.plugin.as_deref()
    }

    /// Find plugin by id (mutable)
    pub fn find_mut(&mut self, plugin_id: &str) -> Option<&mut dyn EditorPlugin<H>> {
        let pos = self.position(plugin_id)?;
        match self.slots[pos].plugin.as_mut() {
            Some(plugin) => Some(plugin.as_mut()),
            None => None,
        }
    }

    /// Find plugin by id and downcast it to `T`
    pub fn find_as<T: EditorPlugin<H>>(&self, plugin_id: &str) -> Option<&T> {
        self.find(plugin_id)?.as_any().downcast_ref::<T>()
    }

    /// Find plugin by id and downcast it to `T` (mutable)
    pub fn find_as_mut<T: EditorPlugin<H>>(&mut self, plugin_id: &str) -> Option<&mut T> {
        self.find_mut(plugin_id)?.as_any_mut().downcast_mut::<T>()
    }

    /// Check if a plugin with `plugin_id` is attached
    pub fn has(&self, plugin_id: &str) -> bool {
        self.position(plugin_id).is_some()
    }

    /// Attached ids in attachment order
    pub fn ids(&self) -> Vec<&str> {
        self.slots.iter().map(|s| s.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn position(&self, plugin_id: &str) -> Option<usize> {
        self.slots.iter().position(|s| s.id == plugin_id)
    }

    fn slot(&self, plugin_id: &str) -> Option<&Slot<H>> {
        self.slots.iter().find(|s| s.id == plugin_id)
    }

    /// Lend the plugin out of its slot
    fn checkout(&mut self, plugin_id: &str) -> Option<(u64, Box<dyn EditorPlugin<H>>)> {
        let pos = self.position(plugin_id)?;
        let slot = &mut self.slots[pos];
        slot.plugin.take().map(|plugin| (slot.serial, plugin))
    }

    /// Put a lent plugin back; hands it back when its slot is gone.
    fn checkin(
        &mut self,
        serial: u64,
        plugin: Box<dyn EditorPlugin<H>>,
    ) -> Result<(), Box<dyn EditorPlugin<H>>> {
        match self
            .slots
            .iter_mut()
            .find(|s| s.serial == serial && s.plugin.is_none())
        {
            Some(slot) => {
                slot.plugin = Some(plugin);
                Ok(())
            }
            None => Err(plugin),
        }
    }
}

impl<H: PluginHost> PluginRegistry<H> {
    /// Attach `plugin` to `host` and run its attachment hook.
    ///
    /// A plugin whose id is already attached is dropped without running any
    /// hook; the conflict is logged, not reported. Returns whether the
    /// plugin was attached.
    pub fn install(host: &mut H, mut plugin: Box<dyn EditorPlugin<H>>) -> bool {
        let registry = host.plugins_mut();
        let plugin_id = plugin.plugin_id().to_string();
        if registry.has(&plugin_id) {
            quire_logger::error(format!("Plugin {} is already attached.", plugin_id));
            return false;
        }

        let serial = registry.next_serial;
        registry.next_serial += 1;
        registry.slots.push(Slot {
            id: plugin_id.clone(),
            serial,
            plugin: None,
        });
        quire_logger::debug(format!("Plugin {} attached", plugin_id));

        plugin.on_attached(host);
        Self::restore(host, serial, plugin);
        true
    }

    /// Detach the plugin with `plugin_id` from `host` and run its
    /// detachment hook.
    ///
    /// A plugin detached from inside one of its own hooks gets its
    /// detachment hook once that hook returns. Unknown ids are logged and
    /// ignored. Returns whether a plugin was detached.
    pub fn uninstall(host: &mut H, plugin_id: &str) -> bool {
        let registry = host.plugins_mut();
        let Some(pos) = registry.position(plugin_id) else {
            quire_logger::error(format!("Plugin {} is not attached.", plugin_id));
            return false;
        };

        let slot = registry.slots.remove(pos);
        quire_logger::debug(format!("Plugin {} detached", plugin_id));
        if let Some(mut plugin) = slot.plugin {
            plugin.on_detached(host);
        }
        true
    }

    /// Bring the plugins attached to `host` in line with `supplier`.
    ///
    /// Every id present in exactly one of the two sets is uninstalled first
    /// (attached order, then supplier order); afterwards every supplied
    /// plugin is installed in supplier order. Plugins whose id stays
    /// attached keep their current instance.
    pub fn reconcile(host: &mut H, supplier: PluginSupplier<H>) {
        let desired = supplier.supply();

        let attached: Vec<String> = host
            .plugins()
            .ids()
            .into_iter()
            .map(String::from)
            .collect();
        let disjoint: Vec<String> = {
            let desired_ids: HashSet<&str> = desired.iter().map(|p| p.plugin_id()).collect();
            let attached_ids: HashSet<&str> = attached.iter().map(String::as_str).collect();

            let mut seen = HashSet::new();
            attached
                .iter()
                .map(String::as_str)
                .filter(|id| !desired_ids.contains(id))
                .chain(
                    desired
                        .iter()
                        .map(|p| p.plugin_id())
                        .filter(|id| !attached_ids.contains(id)),
                )
                .filter(|id| seen.insert(*id))
                .map(String::from)
                .collect()
        };

        for plugin_id in &disjoint {
            Self::uninstall(host, plugin_id);
        }
        for plugin in desired {
            Self::install(host, plugin);
        }
    }

    /// Offer `event` to the plugins attached to `host`, in attachment order.
    ///
    /// Plugins attached while the event is being dispatched do not see it.
    /// Returns `true` as soon as one plugin claims it.
    pub fn dispatch(host: &mut H, event: &InputEvent) -> bool {
        let ids: Vec<String> = host
            .plugins()
            .ids()
            .into_iter()
            .map(String::from)
            .collect();

        for plugin_id in ids {
            // Detached by an earlier plugin, or already running
            let Some((serial, mut plugin)) = host.plugins_mut().checkout(&plugin_id) else {
                continue;
            };
            let claimed = match event {
                InputEvent::KeyDown(key) => plugin.on_key_down(key.code, key, host),
                InputEvent::KeyUp(key) => plugin.on_key_up(key.code, key, host),
                InputEvent::Touch(mouse) => plugin.on_touch_event(mouse, host),
            };
            Self::restore(host, serial, plugin);

            if claimed {
                quire_logger::debug(format!("Event claimed by plugin {}", plugin_id));
                return true;
            }
        }
        false
    }

    /// Return a lent plugin to its slot, or finish detaching it.
    fn restore(host: &mut H, serial: u64, plugin: Box<dyn EditorPlugin<H>>) {
        if let Err(mut plugin) = host.plugins_mut().checkin(serial, plugin) {
            plugin.on_detached(host);
        }
    }
}

impl<H: ?Sized + 'static> Default for PluginRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: ?Sized + 'static> fmt::Debug for PluginRegistry<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("plugins", &self.ids())
            .finish()
    }
}
