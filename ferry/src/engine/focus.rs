//! Virtual focus and reveal.

use super::Engine;
use crate::focus::{Direction, container_scroll, target_index, viewport_scroll};
use crate::registry::{ContainerId, ItemId};

impl Engine {
    /// Make `item` the active item of `container`.
    ///
    /// No-op unless the item belongs to the container and is not already
    /// active.
    pub fn set_active(&mut self, container: ContainerId, item: ItemId) -> bool {
        let Some(target) = self.registry.container_mut(container) else {
            return false;
        };
        if !target.set_active(item) {
            return false;
        }
        let key = target.key.clone();
        self.host
            .set_active_marker(&key, self.registry.item_key(item));
        true
    }

    /// Re-send a container's active marker after its list changed.
    pub(crate) fn sync_active_marker(&mut self, container: ContainerId) {
        let Some(target) = self.registry.container(container) else {
            return;
        };
        let active = target.active.and_then(|item| self.registry.item_key(item));
        self.host.set_active_marker(&target.key, active);
    }

    /// Move the virtual focus. Returns the newly active item, or `None` when
    /// the container has no items.
    pub fn move_focus(&mut self, container: ContainerId, direction: Direction) -> Option<ItemId> {
        let target = self.registry.container(container)?;
        let current = target.active.and_then(|item| target.index_of(item));
        let Some(index) = target_index(target.len(), current, direction, self.config.page_step) else {
            log::debug!("[{}] {} is empty, nowhere to move", self.id, target.key);
            return None;
        };
        let item = target.items[index];

        self.set_active(container, item);
        if self.config.reveal_on_move {
            self.reveal(container);
        }
        Some(item)
    }

    /// Scroll the active item into view.
    ///
    /// Overflow of the container's own viewport is fixed first with a
    /// nearest-edge scroll; the item is then measured again and centered if
    /// it still overflows the outer viewport.
    pub fn reveal(&mut self, container: ContainerId) {
        let Some(target) = self.registry.container(container) else {
            return;
        };
        let Some(item) = target.active else {
            return;
        };
        let Some(item_key) = self.registry.item_key(item).map(str::to_string) else {
            return;
        };
        let Some(mut bounds) = self.host.item_bounds(&item_key) else {
            return;
        };

        if let Some(viewport) = self.host.container_viewport(&target.key)
            && let Some(align) = container_scroll(&bounds, &viewport)
        {
            self.host.scroll_into_view(&item_key, align);
            match self.host.item_bounds(&item_key) {
                Some(updated) => bounds = updated,
                None => return,
            }
        }

        if let Some(align) = viewport_scroll(&bounds, &self.host.viewport()) {
            self.host.scroll_into_view(&item_key, align);
        }
    }
}
