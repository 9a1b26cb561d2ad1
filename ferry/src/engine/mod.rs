//! The selection and transfer state machine.
//!
//! One [`Engine`] per instance. It owns the registry, the selection and the
//! announcement queue, and writes every decision through to the host right
//! after making it. Split across files by concern:
//!
//! - `selection`: selection membership and multimode actions
//! - `focus`: virtual focus and reveal
//! - `transfer`: drops
//! - `input`: translation of [`Input`](crate::input::Input) events
//! - `mutation`: externally observed structural changes
//! - `announce`: live region texts and item descriptions

mod announce;
mod focus;
mod input;
mod mutation;
mod selection;
mod transfer;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::time::Instant;

use ferry_locale::{LocaleTable, Locales};

pub use mutation::Mutation;

use crate::announce::{Channel, Scheduler};
use crate::arbiter::{Arbiter, Evict};
use crate::clock::Clock;
use crate::config::FerryConfig;
use crate::host::Host;
use crate::instance::{FerryEvent, InstanceId};
use crate::registry::{ContainerId, ItemId, Registry};
use crate::selection::SelectionState;

/// Pointer gesture in progress.
#[derive(Debug, Clone, Default)]
pub(crate) struct PointerState {
    /// Action postponed from pointer-down on an already selected item, so
    /// that dragging a multi selection does not collapse it first.
    pub deferred: Option<(ContainerId, ItemId, crate::input::Modifiers)>,
    /// Items showing the dragging visual.
    pub dragging: Vec<ItemId>,
}

pub(crate) struct Engine {
    pub id: InstanceId,
    pub host: Box<dyn Host>,
    pub registry: Registry,
    pub selection: SelectionState,
    pub scheduler: Scheduler,
    pub arbiter: Arbiter,
    pub clock: Rc<dyn Clock>,
    pub config: FerryConfig,
    pub locales: Locales,
    pub locale_key: String,
    /// Whether platform patches are in effect for this instance.
    pub patched: bool,
    pub pointer: PointerState,
    /// Last text scheduled per live region.
    pub announced: HashMap<(ContainerId, Channel), String>,
    /// Events waiting for the instance to hand them to callbacks.
    pub outbox: Vec<FerryEvent>,
    handle: Weak<RefCell<Engine>>,
}

pub(crate) struct EngineParts {
    pub id: InstanceId,
    pub host: Box<dyn Host>,
    pub arbiter: Arbiter,
    pub clock: Rc<dyn Clock>,
    pub config: FerryConfig,
    pub locales: Locales,
    pub locale_key: String,
    pub patched: bool,
}

impl Engine {
    /// Build an engine inside the shared cell the arbiter evicts through.
    pub fn new_shared(parts: EngineParts) -> Rc<RefCell<Engine>> {
        Rc::new_cyclic(|handle| {
            let scheduler = Scheduler::new(parts.config.announce_delay, parts.config.placeholder.clone());
            RefCell::new(Engine {
                id: parts.id,
                host: parts.host,
                registry: Registry::new(),
                selection: SelectionState::new(),
                scheduler,
                arbiter: parts.arbiter,
                clock: parts.clock,
                config: parts.config,
                locales: parts.locales,
                locale_key: parts.locale_key,
                patched: parts.patched,
                pointer: PointerState::default(),
                announced: HashMap::new(),
                outbox: Vec::new(),
                handle: handle.clone(),
            })
        })
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    pub fn table(&self) -> &LocaleTable {
        self.locales.table(&self.locale_key)
    }

    /// Claim the arbiter for this instance, evicting any other holder.
    pub fn claim_arbiter(&mut self) {
        let client: Weak<dyn Evict> = self.handle.clone();
        self.arbiter.claim(self.id, client);
    }

    /// Release the arbiter if the selection is empty.
    pub fn release_arbiter(&mut self) {
        self.arbiter.release(self.id, self.selection.is_empty());
    }

    /// Whether `container` may receive the current selection.
    pub fn is_valid_target(&self, container: ContainerId) -> bool {
        match (self.selection.owner(), self.registry.container(container)) {
            (Some(owner), Some(target)) => owner != container || target.sortable,
            _ => false,
        }
    }

    /// Abandon the selection and any drag: the full cancel sequence.
    pub fn cancel(&mut self) {
        log::debug!("[{}] cancel", self.id);
        self.pointer.deferred = None;
        self.end_drag();
        self.clear_selection();
        self.selection_changed(None, true);
    }

    /// Clear drag visuals and the pending target.
    pub fn end_drag(&mut self) {
        for item in std::mem::take(&mut self.pointer.dragging) {
            if let Some(key) = self.registry.item_key(item) {
                self.host.set_dragging(key, false);
            }
        }
        self.selection.set_pending_target(None);
    }

    /// Deliver due announcements. Returns how many were written.
    pub fn tick(&mut self) -> usize {
        let due = self.scheduler.take_due(self.now());
        for announcement in &due {
            if let Some(key) = self.registry.container_key(announcement.container) {
                self.host
                    .set_live_text(key, announcement.channel, &announcement.text);
            }
        }
        due.len()
    }

    /// Switch to the best table for the host's languages.
    pub fn renegotiate(&mut self, scope: &str) {
        let element = self.host.element_language(scope);
        let document = self.host.document_language();
        let platform = self.host.platform_language();
        let key = self
            .locales
            .resolve(element.as_deref(), document.as_deref(), platform.as_deref())
            .to_string();
        if key != self.locale_key {
            log::debug!("[{}] locale {} -> {}", self.id, self.locale_key, key);
            self.locale_key = key;
        }
        let role_description = self.table().role_description.clone();
        for container in self.registry.containers() {
            self.host
                .set_role_description(&container.key, &role_description);
        }
    }
}

impl Evict for RefCell<Engine> {
    fn evict(&self) {
        match self.try_borrow_mut() {
            Ok(mut engine) => engine.cancel(),
            Err(_) => log::warn!("Evicted instance is busy; its selection was left in place"),
        }
    }
}
