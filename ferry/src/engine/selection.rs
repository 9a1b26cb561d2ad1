//! Selection membership and multimode actions.

use super::Engine;
use crate::registry::{ContainerId, ItemId, SelectionMode};
use crate::selection::{Multimode, SelectionModifiers};

impl Engine {
    /// Add an item to the selection.
    ///
    /// Disabled items and items outside the current owner are refused.
    /// Claims the arbiter, evicting any other instance's selection.
    pub fn add_selection(&mut self, item: ItemId) -> bool {
        let Some(record) = self.registry.item(item) else {
            return false;
        };
        if record.disabled {
            log::debug!("[{}] {} is disabled, not selected", self.id, record.key);
            return false;
        }
        let owner = record.container;
        if !self.selection.push(item, owner) {
            log::debug!(
                "[{}] {} not selected: already selected or outside {:?}",
                self.id,
                record.key,
                self.selection.owner()
            );
            return false;
        }

        if let Some(record) = self.registry.item_mut(item) {
            record.selected = true;
            self.host.set_selected(&record.key, true);
        }
        self.claim_arbiter();
        true
    }

    /// Remove an item from the selection. Releases the arbiter once the
    /// selection is empty.
    pub fn remove_selection(&mut self, item: ItemId) -> bool {
        if !self.selection.remove(item) {
            return false;
        }
        self.unmark(item);
        self.release_arbiter();
        true
    }

    /// Deselect everything.
    pub fn clear_selection(&mut self) {
        for item in self.selection.take() {
            self.unmark(item);
        }
        self.release_arbiter();
    }

    /// Drop the selected flag and description from an item that already
    /// left the selection.
    pub(super) fn unmark(&mut self, item: ItemId) {
        if let Some(record) = self.registry.item_mut(item) {
            record.selected = false;
            self.host.set_selected(&record.key, false);
            self.host.set_item_description(&record.key, None);
        }
    }

    /// Reselect the range between the container's previous and current
    /// active item.
    ///
    /// Items are added walking from the previous active item towards the
    /// current one, so a range drawn upwards is stored in reverse.
    pub fn select_range(&mut self, container: ContainerId) {
        let Some(target) = self.registry.container(container) else {
            return;
        };
        let Some(active) = target.active.and_then(|item| target.index_of(item)) else {
            log::debug!("[{}] no active item in {}, no range", self.id, target.key);
            return;
        };
        let anchor = target
            .last_active
            .and_then(|item| target.index_of(item))
            .unwrap_or(active);

        let range: Vec<ItemId> = if anchor <= active {
            target.items[anchor..=active].to_vec()
        } else {
            target.items[active..=anchor].iter().rev().copied().collect()
        };

        self.clear_selection();
        for item in range {
            self.add_selection(item);
        }
    }

    /// Apply one selection gesture on `item`.
    pub fn resolve_selection_action(&mut self, container: ContainerId, item: ItemId, multimode: Multimode) {
        match multimode {
            Multimode::Contiguous => {
                if !self.selection.contains(item) {
                    self.add_selection(item);
                }
                self.select_range(container);
            }
            Multimode::Noncontiguous => {
                if self.selection.contains(item) {
                    self.remove_selection(item);
                } else {
                    self.add_selection(item);
                }
            }
            Multimode::Exclusive => {
                if self.selection.is_sole(item) {
                    self.clear_selection();
                } else {
                    self.clear_selection();
                    self.add_selection(item);
                }
            }
        }
    }

    /// Make `item` active and apply a gesture resolved from its container's
    /// mode and the given modifiers.
    pub fn select_item(&mut self, item: ItemId, modifiers: SelectionModifiers) {
        let Some(record) = self.registry.item(item) else {
            return;
        };
        let (container, disabled) = (record.container, record.disabled);
        let Some(mode) = self.registry.container(container).map(|c| c.mode) else {
            return;
        };

        self.set_active(container, item);
        if disabled {
            log::debug!("[{}] action on disabled {} ignored", self.id, item);
            self.selection_changed(Some(container), false);
            return;
        }

        let multimode = mode.multimode(modifiers);
        log::trace!("[{}] {:?} on {} ({:?})", self.id, multimode, item, mode);
        self.resolve_selection_action(container, item, multimode);
        self.selection_changed(Some(container), true);
    }

    /// Select every enabled item of a container, in node order.
    ///
    /// Containers locked to single selection are left alone.
    pub fn select_all(&mut self, container: ContainerId) -> bool {
        let Some(target) = self.registry.container(container) else {
            return false;
        };
        if target.mode == SelectionMode::LockedSingle {
            log::debug!("[{}] select all skipped for {}", self.id, target.key);
            return false;
        }
        let items = target.items.clone();

        if self.selection.owner().is_some_and(|owner| owner != container) {
            self.clear_selection();
        }
        for item in items {
            if !self.selection.contains(item) {
                self.add_selection(item);
            }
        }
        self.selection_changed(Some(container), true);
        true
    }
}
