//! Container and item registry.
//!
//! An arena of [`Container`] and [`Item`] records addressed by stable ids.
//! The host tree is only a synchronization target; this registry is the
//! source of truth for membership, order and virtual focus.

mod container;
mod item;

use std::collections::HashMap;

pub use container::{Container, ContainerId, ContainerRole, ContainerSpec, ModePolicy, SelectionMode};
pub use item::{Item, ItemId, ItemRole, ItemSpec};

use crate::error::ConfigError;

/// All containers and items of one instance.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    containers: Vec<Container>,
    items: HashMap<ItemId, Item>,
    container_keys: HashMap<String, ContainerId>,
    item_keys: HashMap<String, ItemId>,
    next_item: usize,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Check a batch of container declarations without registering anything.
    ///
    /// Keys already registered count as duplicates.
    pub fn validate(&self, specs: &[ContainerSpec]) -> Result<(), ConfigError> {
        let mut container_keys: Vec<&str> = Vec::new();
        let mut item_keys: Vec<&str> = Vec::new();

        for spec in specs {
            if spec.role.is_none() {
                return Err(ConfigError::ContainerMissingRole(spec.key.clone()));
            }
            if spec.label.as_deref().is_none_or(|label| label.trim().is_empty()) {
                return Err(ConfigError::ContainerMissingLabel(spec.key.clone()));
            }
            if self.container_keys.contains_key(&spec.key) || container_keys.contains(&spec.key.as_str()) {
                return Err(ConfigError::DuplicateContainer(spec.key.clone()));
            }
            container_keys.push(&spec.key);

            for item in &spec.items {
                if item.role.is_none() {
                    return Err(ConfigError::ItemMissingRole(item.key.clone()));
                }
                if self.item_keys.contains_key(&item.key) || item_keys.contains(&item.key.as_str()) {
                    return Err(ConfigError::DuplicateItem(item.key.clone()));
                }
                item_keys.push(&item.key);
            }
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------------

    /// Register a validated container and its items.
    pub(crate) fn add_container(&mut self, spec: &ContainerSpec) -> ContainerId {
        let id = ContainerId(self.containers.len());
        self.containers.push(Container {
            id,
            key: spec.key.clone(),
            role: spec.role.unwrap_or(ContainerRole::Listbox),
            label: spec.label.clone().unwrap_or_default(),
            items: Vec::new(),
            mode: spec.mode.resolve(&[]),
            policy: spec.mode,
            sortable: spec.sortable,
            active: None,
            last_active: None,
            mixed_roles: false,
        });
        self.container_keys.insert(spec.key.clone(), id);

        for item in &spec.items {
            self.insert_item(id, item, None);
        }
        self.rebuild(id);
        log::debug!("Registered {} '{}' with {} items", id, spec.key, spec.items.len());
        id
    }

    /// Insert a validated item into a container at `index` (appended when
    /// `None` or out of range). Does not rebuild.
    pub(crate) fn insert_item(&mut self, container: ContainerId, spec: &ItemSpec, index: Option<usize>) -> ItemId {
        let id = ItemId(self.next_item);
        self.next_item += 1;
        self.items.insert(
            id,
            Item {
                id,
                key: spec.key.clone(),
                role: spec.role.unwrap_or(ItemRole::Option),
                container,
                selected: false,
                disabled: spec.disabled,
            },
        );
        self.item_keys.insert(spec.key.clone(), id);

        if let Some(target) = self.containers.get_mut(container.0) {
            match index {
                Some(index) if index < target.items.len() => target.items.insert(index, id),
                _ => target.items.push(id),
            }
        }
        id
    }

    /// Remove an item entirely. Returns its last record and former container.
    pub(crate) fn remove_item(&mut self, item: ItemId) -> Option<Item> {
        self.detach(item)?;
        let removed = self.items.remove(&item)?;
        self.item_keys.remove(&removed.key);
        Some(removed)
    }

    /// Move an item to the end of `destination`.
    ///
    /// Detach and append happen in one call so the item is never listed
    /// twice nor orphaned.
    pub(crate) fn move_item(&mut self, item: ItemId, destination: ContainerId) -> bool {
        if destination.0 >= self.containers.len() || self.detach(item).is_none() {
            return false;
        }
        self.containers[destination.0].items.push(item);
        if let Some(record) = self.items.get_mut(&item) {
            record.container = destination;
        }
        true
    }

    /// Take an item out of its container's list, clamping the virtual focus
    /// to the same position.
    fn detach(&mut self, item: ItemId) -> Option<ContainerId> {
        let owner = self.items.get(&item)?.container;
        let container = self.containers.get_mut(owner.0)?;
        let index = container.index_of(item)?;
        container.items.remove(index);

        if container.active == Some(item) {
            container.active = if container.items.is_empty() {
                None
            } else {
                Some(container.items[index.min(container.items.len() - 1)])
            };
        }
        if container.last_active == Some(item) {
            container.last_active = None;
        }
        Some(owner)
    }

    /// Re-derive a container's mode after its item list changed.
    ///
    /// A container that has items but no virtual focus gets its first item.
    pub(crate) fn rebuild(&mut self, id: ContainerId) {
        let Some(container) = self.containers.get_mut(id.0) else {
            return;
        };
        let roles: Vec<ItemRole> = container
            .items
            .iter()
            .filter_map(|item| self.items.get(item).map(|record| record.role))
            .collect();

        container.mode = container.policy.resolve(&roles);
        container.mixed_roles =
            container.policy == ModePolicy::Lockable && roles.windows(2).any(|pair| pair[0] != pair[1]);
        if container.mixed_roles {
            log::warn!(
                "Container '{}' mixes item roles; selection mode follows the first item ({:?})",
                container.key,
                container.mode
            );
        }

        if container.active.is_none() {
            container.active = container.first();
        }
    }

    // -------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------

    pub fn container(&self, id: ContainerId) -> Option<&Container> {
        self.containers.get(id.0)
    }

    pub(crate) fn container_mut(&mut self, id: ContainerId) -> Option<&mut Container> {
        self.containers.get_mut(id.0)
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    pub(crate) fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.get_mut(&id)
    }

    pub fn container_id(&self, key: &str) -> Option<ContainerId> {
        self.container_keys.get(key).copied()
    }

    pub fn item_id(&self, key: &str) -> Option<ItemId> {
        self.item_keys.get(key).copied()
    }

    /// Containers in registration order.
    pub fn containers(&self) -> impl Iterator<Item = &Container> {
        self.containers.iter()
    }

    /// Container currently holding `item`.
    pub fn owner_of(&self, item: ItemId) -> Option<ContainerId> {
        self.items.get(&item).map(|record| record.container)
    }

    pub fn container_key(&self, id: ContainerId) -> Option<&str> {
        self.container(id).map(|c| c.key.as_str())
    }

    pub fn item_key(&self, id: ItemId) -> Option<&str> {
        self.item(id).map(|i| i.key.as_str())
    }
}
