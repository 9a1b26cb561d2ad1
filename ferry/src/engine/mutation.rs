//! Structural changes observed in the host tree.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::Engine;
use crate::error::ConfigError;
use crate::instance::FerryEvent;
use crate::registry::{ContainerId, ItemSpec};

/// One observed change, addressed by host keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Mutation {
    /// An item node appeared in a container, at `index` or at the end.
    Added {
        container: String,
        item: ItemSpec,
        #[serde(default)]
        index: Option<usize>,
    },
    /// An item node was removed.
    Removed { item: String },
    /// An item's disabled state changed.
    SetDisabled { item: String, disabled: bool },
}

impl Engine {
    /// Check a batch against the registry as it would be mid-batch.
    fn validate_mutations(&self, batch: &[Mutation]) -> Result<(), ConfigError> {
        let mut added: HashSet<&str> = HashSet::new();
        let mut removed: HashSet<&str> = HashSet::new();
        let exists = |key: &str, added: &HashSet<&str>, removed: &HashSet<&str>| {
            added.contains(key) || (self.registry.item_id(key).is_some() && !removed.contains(key))
        };

        for mutation in batch {
            match mutation {
                Mutation::Added { container, item, .. } => {
                    if self.registry.container_id(container).is_none() {
                        return Err(ConfigError::UnknownContainer(container.clone()));
                    }
                    if item.role.is_none() {
                        return Err(ConfigError::ItemMissingRole(item.key.clone()));
                    }
                    if exists(&item.key, &added, &removed) {
                        return Err(ConfigError::DuplicateItem(item.key.clone()));
                    }
                    removed.remove(item.key.as_str());
                    added.insert(&item.key);
                }
                Mutation::Removed { item } => {
                    if !exists(item, &added, &removed) {
                        return Err(ConfigError::UnknownItem(item.clone()));
                    }
                    added.remove(item.as_str());
                    removed.insert(item);
                }
                Mutation::SetDisabled { item, .. } => {
                    if !exists(item, &added, &removed) {
                        return Err(ConfigError::UnknownItem(item.clone()));
                    }
                }
            }
        }
        Ok(())
    }

    /// Apply a batch of changes.
    ///
    /// The whole batch is validated first; on error nothing changes. Every
    /// affected container is rebuilt before a single
    /// [`FerryEvent::ItemsChanged`] is queued.
    pub fn apply_mutations(&mut self, batch: Vec<Mutation>) -> Result<Vec<ContainerId>, ConfigError> {
        self.validate_mutations(&batch)
            .inspect_err(|e| log::warn!("Rejected mutation batch: {}", e))?;

        fn touch(affected: &mut Vec<ContainerId>, id: ContainerId) {
            if !affected.contains(&id) {
                affected.push(id);
            }
        }

        let mut affected: Vec<ContainerId> = Vec::new();
        let mut selection_touched = false;

        for mutation in batch {
            match mutation {
                Mutation::Added { container, item, index } => {
                    let Some(container) = self.registry.container_id(&container) else {
                        continue;
                    };
                    self.registry.insert_item(container, &item, index);
                    touch(&mut affected, container);
                }
                Mutation::Removed { item } => {
                    let Some(id) = self.registry.item_id(&item) else {
                        continue;
                    };
                    if self.selection.contains(id) {
                        self.remove_selection(id);
                        selection_touched = true;
                    }
                    self.pointer.dragging.retain(|dragged| *dragged != id);
                    if self.pointer.deferred.is_some_and(|(_, deferred, _)| deferred == id) {
                        self.pointer.deferred = None;
                    }
                    if let Some(removed) = self.registry.remove_item(id) {
                        touch(&mut affected, removed.container);
                    }
                }
                Mutation::SetDisabled { item, disabled } => {
                    let Some(id) = self.registry.item_id(&item) else {
                        continue;
                    };
                    if disabled && self.selection.contains(id) {
                        self.remove_selection(id);
                        selection_touched = true;
                    }
                    if let Some(record) = self.registry.item_mut(id) {
                        record.disabled = disabled;
                        touch(&mut affected, record.container);
                    }
                }
            }
        }

        for container in &affected {
            self.registry.rebuild(*container);
            self.sync_active_marker(*container);
        }
        log::debug!("[{}] mutation batch rebuilt {} containers", self.id, affected.len());

        if selection_touched {
            self.selection_changed(None, true);
        } else {
            let now = self.now();
            self.announce_statuses(now);
        }
        self.outbox.push(FerryEvent::ItemsChanged {
            containers: affected.clone(),
        });
        Ok(affected)
    }
}
