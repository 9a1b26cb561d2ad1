//! Drops.

use super::Engine;
use crate::announce::Channel;
use crate::instance::FerryEvent;
use crate::registry::ContainerId;
use crate::selection::TransferOrder;
use crate::transfer::{Transfer, ordered_items};

impl Engine {
    /// Propose `container` as the drop destination. Ignored unless the
    /// container may receive the selection.
    pub fn set_pending_target(&mut self, container: ContainerId) -> bool {
        if !self.is_valid_target(container) {
            log::trace!("[{}] {} is not a valid target", self.id, container);
            return false;
        }
        self.selection.set_pending_target(Some(container));
        true
    }

    /// Move the selection into the pending target.
    ///
    /// Returns `false`, changing nothing, when no target is pending or the
    /// selection is empty.
    pub fn transfer(&mut self) -> bool {
        let Some(destination) = self.selection.pending_target() else {
            log::debug!("[{}] drop without a target ignored", self.id);
            return false;
        };
        let Some(source) = self.selection.owner() else {
            log::debug!("[{}] drop with an empty selection ignored", self.id);
            return false;
        };
        let Some(source_items) = self.registry.container(source).map(|c| c.items.clone()) else {
            return false;
        };
        let Some(destination_key) = self.registry.container_key(destination).map(str::to_string) else {
            return false;
        };

        let order = self.selection.order();
        let moved = ordered_items(&source_items, self.selection.items(), order);

        self.end_drag();
        self.clear_selection();
        for item in &moved {
            if self.registry.move_item(*item, destination)
                && let Some(key) = self.registry.item_key(*item)
            {
                self.host.move_item(key, &destination_key);
            }
        }

        self.registry.rebuild(source);
        self.registry.rebuild(destination);
        let new_active = if destination != source {
            moved.last().copied()
        } else {
            self.registry.container(destination).and_then(|c| c.last())
        };
        if let Some(item) = new_active {
            self.set_active(destination, item);
        }
        self.sync_active_marker(source);
        self.sync_active_marker(destination);

        log::debug!(
            "[{}] moved {} items from {} to {} ({:?})",
            self.id,
            moved.len(),
            source,
            destination,
            order
        );

        self.host.focus_container(&destination_key);
        self.reveal(destination);

        let confirmation = self.table().dropped_count(moved.len());
        self.selection_changed(None, true);
        self.announce(destination, Channel::Status, confirmation);

        self.outbox.push(FerryEvent::Transferred(Transfer {
            source,
            destination,
            items: moved,
            order,
        }));
        true
    }

    /// Drop the selection into `container` with the given order.
    pub fn drop_into(&mut self, container: ContainerId, order: TransferOrder) -> bool {
        if !self.set_pending_target(container) {
            return false;
        }
        self.selection.set_order(order);
        self.transfer()
    }
}
