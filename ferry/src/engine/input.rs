//! Translation of input events into state machine operations.

use super::Engine;
use crate::input::{Input, Key, KeyAction, Modifiers, key_action};
use crate::registry::{ContainerId, ItemId};
use crate::selection::{Multimode, SelectionModifiers};

impl Engine {
    pub fn handle(&mut self, input: Input) {
        log::trace!("[{}] {:?}", self.id, input);
        match input {
            Input::PointerDown { item, modifiers } => self.pointer_down(&item, modifiers),
            Input::PointerUp { .. } => self.pointer_up(),
            Input::Touch { item } => {
                if let Some(item) = self.resolve_item(&item) {
                    self.pointer.deferred = None;
                    self.select_item(item, SelectionModifiers::alternate());
                }
            }
            Input::DragStart { item, modifiers } => self.drag_start(&item, modifiers),
            Input::DragEnter { container } | Input::DragOver { container } => {
                if let Some(container) = self.resolve_container(&container) {
                    self.set_pending_target(container);
                }
            }
            Input::DragLeave { container } => {
                if let Some(container) = self.resolve_container(&container)
                    && self.selection.pending_target() == Some(container)
                {
                    self.selection.set_pending_target(None);
                }
            }
            Input::Drop { container, modifiers } => {
                if let Some(container) = self.resolve_container(&container) {
                    self.drop_into(container, modifiers.transfer_order());
                }
                self.end_drag();
            }
            Input::DragEnd => self.end_drag(),
            Input::Key {
                container,
                key,
                modifiers,
                repeat,
            } => {
                if let Some(container) = self.resolve_container(&container) {
                    self.key(container, key, modifiers, repeat);
                }
            }
            Input::FocusContainer { container } => {
                if let Some(container) = self.resolve_container(&container) {
                    self.focus_container(container);
                }
            }
            Input::Abort => self.cancel(),
        }
    }

    fn resolve_item(&self, key: &str) -> Option<ItemId> {
        let id = self.registry.item_id(key);
        if id.is_none() {
            log::debug!("[{}] unknown item '{}'", self.id, key);
        }
        id
    }

    fn resolve_container(&self, key: &str) -> Option<ContainerId> {
        let id = self.registry.container_id(key);
        if id.is_none() {
            log::debug!("[{}] unknown container '{}'", self.id, key);
        }
        id
    }

    // -------------------------------------------------------------------------
    // Pointer and drag
    // -------------------------------------------------------------------------

    fn pointer_down(&mut self, key: &str, modifiers: Modifiers) {
        let Some(item) = self.resolve_item(key) else {
            return;
        };
        let Some(container) = self.registry.owner_of(item) else {
            return;
        };
        self.pointer.deferred = None;

        // Pressing an already selected item may start a drag of the whole
        // selection; the action waits for the release.
        if self.selection.contains(item) && modifiers.none() {
            self.set_active(container, item);
            self.pointer.deferred = Some((container, item, modifiers));
            return;
        }
        self.select_item(item, modifiers.selection(false));
    }

    fn pointer_up(&mut self) {
        if let Some((_, item, modifiers)) = self.pointer.deferred.take()
            && self.pointer.dragging.is_empty()
        {
            self.select_item(item, modifiers.selection(false));
        }
        if self.patched && !self.pointer.dragging.is_empty() {
            log::debug!("[{}] clearing drag visuals on pointer release", self.id);
            self.end_drag();
        }
    }

    fn drag_start(&mut self, key: &str, modifiers: Modifiers) {
        let Some(item) = self.resolve_item(key) else {
            return;
        };
        self.pointer.deferred = None;
        if !self.selection.contains(item) {
            self.select_for_drag(item, modifiers);
        }
        if !self.selection.contains(item) {
            return;
        }

        let items: Vec<ItemId> = self.selection.items().to_vec();
        for selected in &items {
            if let Some(key) = self.registry.item_key(*selected) {
                self.host.set_dragging(key, true);
            }
        }
        self.pointer.dragging = items;
    }

    /// Dragging an unselected item replaces the selection with it, whatever
    /// the container's mode. Held modifiers resolve as for a click.
    fn select_for_drag(&mut self, item: ItemId, modifiers: Modifiers) {
        let Some((container, disabled)) = self.registry.item(item).map(|i| (i.container, i.disabled)) else {
            return;
        };
        if !modifiers.none() || disabled {
            self.select_item(item, modifiers.selection(false));
            return;
        }
        self.set_active(container, item);
        self.resolve_selection_action(container, item, Multimode::Exclusive);
        self.selection_changed(Some(container), true);
    }

    // -------------------------------------------------------------------------
    // Keyboard and focus
    // -------------------------------------------------------------------------

    fn key(&mut self, container: ContainerId, key: Key, modifiers: Modifiers, repeat: bool) {
        let Some(action) = key_action(key, modifiers) else {
            return;
        };
        match action {
            KeyAction::Move { direction, extend } => {
                let Some(item) = self.move_focus(container, direction) else {
                    return;
                };
                if extend {
                    self.extend_to(container, item);
                }
            }
            KeyAction::Activate if repeat => {
                log::debug!("[{}] repeated {:?} ignored", self.id, key);
            }
            KeyAction::Activate => self.activate(container, modifiers),
            KeyAction::SelectAll if repeat => {
                log::debug!("[{}] repeated select all ignored", self.id);
            }
            KeyAction::SelectAll => {
                self.select_all(container);
            }
            KeyAction::Cancel => self.cancel(),
        }
    }

    /// Range selection after a shift move.
    fn extend_to(&mut self, container: ContainerId, item: ItemId) {
        let Some(mode) = self.registry.container(container).map(|c| c.mode) else {
            return;
        };
        let disabled = self.registry.item(item).is_some_and(|i| i.disabled);
        if disabled {
            self.selection_changed(Some(container), false);
            return;
        }
        match mode.multimode(SelectionModifiers::range()) {
            Multimode::Contiguous => self.resolve_selection_action(container, item, Multimode::Contiguous),
            _ => {
                log::debug!("[{}] range selection unavailable in {:?}", self.id, mode);
                return;
            }
        }
        self.selection_changed(Some(container), true);
    }

    /// Space/Enter: drop into a container that is not the selection's
    /// owner, otherwise act on the active item.
    fn activate(&mut self, container: ContainerId, modifiers: Modifiers) {
        if self
            .selection
            .owner()
            .is_some_and(|owner| owner != container)
        {
            self.drop_into(container, modifiers.transfer_order());
            return;
        }
        let Some(item) = self.registry.container(container).and_then(|c| c.active) else {
            log::debug!("[{}] nothing active to select", self.id);
            return;
        };
        let forced = self.config.keyboard_toggles;
        self.select_item(item, modifiers.selection(forced));
    }

    /// A container received real focus: make sure it has an active item and
    /// refresh its status line.
    fn focus_container(&mut self, container: ContainerId) {
        if let Some(first) = self
            .registry
            .container(container)
            .filter(|c| c.active.is_none())
            .and_then(|c| c.first())
        {
            self.set_active(container, first);
        }
        let now = self.now();
        self.announce_statuses(now);
    }
}
