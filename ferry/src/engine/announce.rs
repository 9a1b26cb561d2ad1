//! Live region texts, drop target markers and item descriptions.

use std::time::Instant;

use super::Engine;
use crate::announce::{Channel, status_text};
use crate::registry::{ContainerId, SelectionMode};

impl Engine {
    /// Bring markers and announcements in line with the selection.
    ///
    /// `origin` is the container the triggering event happened in. Count
    /// announcements are skipped when `announce_count` is false, which is
    /// the case for events on disabled items.
    pub(crate) fn selection_changed(&mut self, origin: Option<ContainerId>, announce_count: bool) {
        self.sync_drop_targets();
        self.sync_sort_numbers();

        let now = self.now();
        if announce_count {
            let ids: Vec<ContainerId> = self.registry.containers().map(|c| c.id).collect();
            for id in ids {
                if Some(id) == origin || self.announced.contains_key(&(id, Channel::Count)) {
                    self.announce_count(id, now);
                }
            }
        }
        self.announce_statuses(now);
    }

    /// Schedule the selection count of one container, if it changed.
    fn announce_count(&mut self, container: ContainerId, now: Instant) {
        let Some(target) = self.registry.container(container) else {
            return;
        };
        if target.mode == SelectionMode::LockedSingle {
            return;
        }
        let count = if self.selection.owner() == Some(container) {
            self.selection.len()
        } else {
            0
        };
        let text = if count == 0 {
            String::new()
        } else {
            self.table().selected_count(count)
        };
        self.schedule_if_changed(container, Channel::Count, text, now);
    }

    /// Schedule the status line of every container whose text changed.
    pub(crate) fn announce_statuses(&mut self, now: Instant) {
        let texts: Vec<(ContainerId, String)> = {
            let table = self.table();
            self.registry
                .containers()
                .map(|c| (c.id, status_text(table, c, &self.selection).to_string()))
                .collect()
        };
        for (id, text) in texts {
            self.schedule_if_changed(id, Channel::Status, text, now);
        }
    }

    /// Schedule text unless it equals the last text scheduled for the
    /// channel. Empty text stands for the placeholder.
    fn schedule_if_changed(&mut self, container: ContainerId, channel: Channel, text: String, now: Instant) {
        if self.announced.get(&(container, channel)) == Some(&text) {
            return;
        }
        self.scheduler.schedule(container, channel, text.clone(), now);
        self.announced.insert((container, channel), text);
    }

    /// Schedule text unconditionally.
    pub(super) fn announce(&mut self, container: ContainerId, channel: Channel, text: String) {
        let now = self.now();
        self.scheduler.schedule(container, channel, text.clone(), now);
        self.announced.insert((container, channel), text);
    }

    /// Mark every container that may receive the selection.
    pub(super) fn sync_drop_targets(&mut self) {
        let targets: Vec<(String, bool)> = self
            .registry
            .containers()
            .map(|c| (c.key.clone(), self.is_valid_target(c.id)))
            .collect();
        for (key, valid) in targets {
            self.host.set_drop_target(&key, valid);
        }
    }

    /// Describe selected items of a sortable container with their position
    /// in selection order.
    fn sync_sort_numbers(&mut self) {
        let Some(owner) = self.selection.owner() else {
            return;
        };
        if !self.registry.container(owner).is_some_and(|c| c.sortable) {
            return;
        }
        let descriptions: Vec<(String, String)> = self
            .selection
            .items()
            .iter()
            .filter_map(|item| {
                let key = self.registry.item_key(*item)?;
                let number = self.selection.number_of(*item)?;
                Some((key.to_string(), self.table().sort_number(number)))
            })
            .collect();
        for (key, text) in descriptions {
            self.host.set_item_description(&key, Some(&text));
        }
    }
}
