//! Instances bound to a root scope.

mod events;
mod id;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use ferry_locale::Locales;

pub use events::FerryEvent;
pub use id::InstanceId;

use crate::arbiter::Arbiter;
use crate::clock::{Clock, SystemClock};
use crate::config::{FerryConfig, lock_platform_patches};
use crate::engine::{Engine, EngineParts, Mutation};
use crate::error::ConfigError;
use crate::host::Host;
use crate::input::Input;
use crate::registry::{Container, ContainerId, ContainerSpec, Item, ItemId};
use crate::selection::{SelectionState, TransferOrder};

type Callback = Box<dyn FnMut(&FerryEvent)>;

/// Builder for [`Ferry`].
///
/// # Example
///
/// ```
/// use ferry::prelude::*;
///
/// let host = MemoryHost::new("board");
/// let ferry = Ferry::builder("board")
///     .host(host)
///     .container(ContainerSpec::new("todo", "todo-label").items(["a", "b"]))
///     .container(ContainerSpec::new("done", "done-label"))
///     .build()
///     .unwrap();
/// assert_eq!(ferry.locale_key(), "en");
/// ```
pub struct FerryBuilder {
    scope: String,
    host: Option<Box<dyn Host>>,
    arbiter: Option<Arbiter>,
    clock: Option<Rc<dyn Clock>>,
    config: FerryConfig,
    locales: Locales,
    containers: Vec<ContainerSpec>,
}

impl FerryBuilder {
    fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            host: None,
            arbiter: None,
            clock: None,
            config: FerryConfig::default(),
            locales: Locales::default(),
            containers: Vec::new(),
        }
    }

    pub fn host(mut self, host: impl Host + 'static) -> Self {
        self.host = Some(Box::new(host));
        self
    }

    /// Use a specific arbiter instead of the thread's shared one.
    pub fn arbiter(mut self, arbiter: Arbiter) -> Self {
        self.arbiter = Some(arbiter);
        self
    }

    pub fn clock(mut self, clock: Rc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn config(mut self, config: FerryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn locales(mut self, locales: Locales) -> Self {
        self.locales = locales;
        self
    }

    /// Declare a container found under the root scope.
    pub fn container(mut self, spec: ContainerSpec) -> Self {
        self.containers.push(spec);
        self
    }

    pub fn containers(mut self, specs: impl IntoIterator<Item = ContainerSpec>) -> Self {
        self.containers.extend(specs);
        self
    }

    /// Validate everything and create the instance.
    ///
    /// Nothing is registered unless every declaration is valid. Building the
    /// first instance locks the platform patch flag.
    pub fn build(self) -> Result<Ferry, ConfigError> {
        let Some(host) = self.host else {
            log::warn!("No host for scope '{}'", self.scope);
            return Err(ConfigError::MissingHost(self.scope));
        };
        if !host.resolve_scope(&self.scope) {
            log::warn!("Root scope '{}' could not be resolved", self.scope);
            return Err(ConfigError::UnresolvedScope(self.scope));
        }

        let mut containers = self.containers;
        // Host keys are matched exactly; surrounding whitespace is noise.
        for spec in &mut containers {
            spec.key = spec.key.trim().to_string();
        }
        crate::registry::Registry::new()
            .validate(&containers)
            .inspect_err(|e| log::warn!("{}", e))?;

        let patched = lock_platform_patches().effective(host.prefers_touch());
        let id = InstanceId::new();
        let engine = Engine::new_shared(EngineParts {
            id,
            host,
            arbiter: self.arbiter.unwrap_or_else(Arbiter::shared),
            clock: self.clock.unwrap_or_else(|| Rc::new(SystemClock)),
            config: self.config,
            locales: self.locales,
            locale_key: String::new(),
            patched,
        });

        {
            let mut engine = engine.borrow_mut();
            for spec in &containers {
                let container = engine.registry.add_container(spec);
                engine.sync_active_marker(container);
            }
            engine.renegotiate(&self.scope);
            engine.selection_changed(None, false);
        }

        log::debug!(
            "[{}] bound to '{}' with {} containers (patches {})",
            id,
            self.scope,
            containers.len(),
            if patched { "on" } else { "off" }
        );

        Ok(Ferry {
            id,
            scope: self.scope,
            engine,
            callbacks: Vec::new(),
        })
    }
}

/// A drag-and-drop instance.
///
/// Owns its selection, registry and announcement queue. The only state
/// shared with other instances is the [`Arbiter`].
pub struct Ferry {
    id: InstanceId,
    scope: String,
    engine: Rc<RefCell<Engine>>,
    callbacks: Vec<Callback>,
}

impl std::fmt::Debug for Ferry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ferry")
            .field("id", &self.id)
            .field("scope", &self.scope)
            .field("callbacks", &self.callbacks.len())
            .finish_non_exhaustive()
    }
}

impl Drop for Ferry {
    fn drop(&mut self) {
        // A dead instance must not keep the arbiter slot.
        match self.engine.try_borrow() {
            Ok(engine) => {
                if engine.arbiter.release(self.id, true) {
                    log::debug!("[{}] released the arbiter on drop", self.id);
                }
            }
            Err(_) => log::warn!("[{}] dropped while busy; arbiter left as is", self.id),
        }
    }
}

impl Ferry {
    pub fn builder(scope: impl Into<String>) -> FerryBuilder {
        FerryBuilder::new(scope)
    }

    pub fn id(&self) -> InstanceId {
        self.id
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Run `f` against the engine, then hand queued events to callbacks.
    ///
    /// Callbacks run after the engine borrow is released.
    fn with_engine<R>(&mut self, f: impl FnOnce(&mut Engine) -> R) -> R {
        let (result, events) = {
            let mut engine = self.engine.borrow_mut();
            let result = f(&mut *engine);
            (result, std::mem::take(&mut engine.outbox))
        };
        for event in &events {
            for callback in &mut self.callbacks {
                callback(event);
            }
        }
        result
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Handle an event raised inside this instance's root.
    pub fn handle(&mut self, input: Input) {
        self.with_engine(|engine| engine.handle(input));
    }

    /// Handle a document-wide event. Ignored unless this instance holds the
    /// arbiter.
    pub fn handle_global(&mut self, input: Input) -> bool {
        if !self.holds_arbiter() {
            return false;
        }
        self.handle(input);
        true
    }

    /// Register a callback for completed transfers and item list changes.
    pub fn on_change(&mut self, callback: impl FnMut(&FerryEvent) + 'static) {
        self.callbacks.push(Box::new(callback));
    }

    /// Apply structural changes observed in the host tree.
    pub fn apply_mutations(&mut self, batch: Vec<Mutation>) -> Result<Vec<ContainerId>, ConfigError> {
        self.with_engine(|engine| engine.apply_mutations(batch))
    }

    /// Write due announcements to the host. Returns how many were written.
    pub fn tick(&mut self) -> usize {
        self.with_engine(Engine::tick)
    }

    // -------------------------------------------------------------------------
    // Programmatic gestures
    // -------------------------------------------------------------------------

    /// Select every enabled item of a container.
    pub fn select_all(&mut self, container: ContainerId) -> bool {
        self.with_engine(|engine| engine.select_all(container))
    }

    /// Drop the selection and any drag in progress.
    pub fn cancel(&mut self) {
        self.with_engine(Engine::cancel);
    }

    /// Order used by the next transfer. Reset to node order whenever an item
    /// is added to the selection.
    pub fn set_order_policy(&mut self, order: TransferOrder) {
        self.with_engine(|engine| engine.selection.set_order(order));
    }

    /// Transfer the selection into `container` using the current order.
    pub fn drop_into(&mut self, container: ContainerId) -> bool {
        self.with_engine(|engine| {
            let order = engine.selection.order();
            engine.drop_into(container, order)
        })
    }

    // -------------------------------------------------------------------------
    // Locales
    // -------------------------------------------------------------------------

    /// Register a translation table and renegotiate the active one.
    pub fn register_locale<I, K, V>(&mut self, code: &str, entries: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let scope = self.scope.clone();
        self.with_engine(|engine| -> Result<(), ConfigError> {
            engine.locales.register(code, entries)?;
            engine.renegotiate(&scope);
            Ok(())
        })
    }

    /// Register a translation table from JSON and renegotiate.
    pub fn register_locale_json(&mut self, code: &str, json: &str) -> Result<(), ConfigError> {
        let scope = self.scope.clone();
        self.with_engine(|engine| -> Result<(), ConfigError> {
            engine.locales.register_json(code, json)?;
            engine.renegotiate(&scope);
            Ok(())
        })
    }

    /// Key of the table in use.
    pub fn locale_key(&self) -> String {
        self.engine.borrow().locale_key.clone()
    }

    /// Codes of every registered table.
    pub fn locale_codes(&self) -> Vec<String> {
        self.engine
            .borrow()
            .locales
            .codes()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    // -------------------------------------------------------------------------
    // State
    // -------------------------------------------------------------------------

    pub fn selection(&self) -> SelectionState {
        self.engine.borrow().selection.clone()
    }

    pub fn container(&self, id: ContainerId) -> Option<Container> {
        self.engine.borrow().registry.container(id).cloned()
    }

    pub fn item(&self, id: ItemId) -> Option<Item> {
        self.engine.borrow().registry.item(id).cloned()
    }

    pub fn container_by_key(&self, key: &str) -> Option<Container> {
        let engine = self.engine.borrow();
        let id = engine.registry.container_id(key)?;
        engine.registry.container(id).cloned()
    }

    pub fn item_by_key(&self, key: &str) -> Option<Item> {
        let engine = self.engine.borrow();
        let id = engine.registry.item_id(key)?;
        engine.registry.item(id).cloned()
    }

    /// Id of a container by host key.
    pub fn container_id(&self, key: &str) -> Option<ContainerId> {
        self.engine.borrow().registry.container_id(key)
    }

    /// Id of an item by host key.
    pub fn item_id(&self, key: &str) -> Option<ItemId> {
        self.engine.borrow().registry.item_id(key)
    }

    /// Host keys of a container's items, in node order.
    pub fn item_keys(&self, container: &str) -> Vec<String> {
        let engine = self.engine.borrow();
        let Some(id) = engine.registry.container_id(container) else {
            return Vec::new();
        };
        engine
            .registry
            .container(id)
            .map(|c| {
                c.items
                    .iter()
                    .filter_map(|item| engine.registry.item_key(*item))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Host keys of the selected items, in selection order.
    pub fn selected_keys(&self) -> Vec<String> {
        let engine = self.engine.borrow();
        engine
            .selection
            .items()
            .iter()
            .filter_map(|item| engine.registry.item_key(*item))
            .map(str::to_string)
            .collect()
    }

    pub fn holds_arbiter(&self) -> bool {
        self.engine.borrow().arbiter.is_held_by(self.id)
    }

    /// Whether platform patches apply to this instance.
    pub fn is_patched(&self) -> bool {
        self.engine.borrow().patched
    }

    /// Number of announcements not yet delivered.
    pub fn pending_announcements(&self) -> usize {
        self.engine.borrow().scheduler.len()
    }

    /// When the next announcement falls due.
    pub fn next_announcement(&self) -> Option<Instant> {
        self.engine.borrow().scheduler.next_due()
    }
}
