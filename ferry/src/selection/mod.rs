//! Selection state of one instance.
//!
//! Mutation goes through the engine, which keeps the host, the registry
//! flags and the arbiter in step. This module only holds the data and the
//! invariant that a non-empty selection always has an owner.

mod multimode;

use serde::{Deserialize, Serialize};

pub use multimode::{Multimode, SelectionModifiers};

use crate::registry::{ContainerId, ItemId};

/// Order in which a transfer appends the selected items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferOrder {
    /// The source container's own order.
    #[default]
    NodeOrder,
    /// The order in which items were selected.
    SelectionOrder,
}

/// Items currently selected, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    items: Vec<ItemId>,
    owner: Option<ContainerId>,
    pending_target: Option<ContainerId>,
    order: TransferOrder,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected items in the order they were selected.
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    /// Container all selected items belong to. `None` iff empty.
    pub fn owner(&self) -> Option<ContainerId> {
        self.owner
    }

    /// Candidate drop destination.
    pub fn pending_target(&self) -> Option<ContainerId> {
        self.pending_target
    }

    pub fn order(&self) -> TransferOrder {
        self.order
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.items.contains(&item)
    }

    /// 1-based position of an item in selection order.
    pub fn number_of(&self, item: ItemId) -> Option<usize> {
        self.items.iter().position(|i| *i == item).map(|idx| idx + 1)
    }

    /// Whether `item` is the only selected item.
    pub fn is_sole(&self, item: ItemId) -> bool {
        self.items.len() == 1 && self.items[0] == item
    }

    /// Append an item owned by `owner`.
    ///
    /// Rejected when a different container already owns the selection or the
    /// item is already selected.
    pub(crate) fn push(&mut self, item: ItemId, owner: ContainerId) -> bool {
        match self.owner {
            Some(current) if current != owner => return false,
            _ => {}
        }
        if self.items.contains(&item) {
            return false;
        }
        self.owner = Some(owner);
        self.items.push(item);
        self.order = TransferOrder::NodeOrder;
        true
    }

    /// Remove an item; clears the owner when the selection empties.
    pub(crate) fn remove(&mut self, item: ItemId) -> bool {
        let Some(idx) = self.items.iter().position(|i| *i == item) else {
            return false;
        };
        self.items.remove(idx);
        if self.items.is_empty() {
            self.owner = None;
        }
        true
    }

    /// Empty the selection. Returns the removed items in selection order.
    pub(crate) fn take(&mut self) -> Vec<ItemId> {
        self.owner = None;
        std::mem::take(&mut self.items)
    }

    pub(crate) fn set_pending_target(&mut self, target: Option<ContainerId>) {
        self.pending_target = target;
    }

    pub(crate) fn set_order(&mut self, order: TransferOrder) {
        self.order = order;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_rejects_other_owner() {
        let mut state = SelectionState::new();
        assert!(state.push(ItemId(0), ContainerId(0)));
        assert!(!state.push(ItemId(1), ContainerId(1)));
        assert_eq!(state.items(), &[ItemId(0)]);
    }

    #[test]
    fn removing_last_item_clears_owner() {
        let mut state = SelectionState::new();
        state.push(ItemId(3), ContainerId(0));
        state.remove(ItemId(3));
        assert!(state.is_empty());
        assert_eq!(state.owner(), None);
    }

    #[test]
    fn numbers_follow_selection_order() {
        let mut state = SelectionState::new();
        state.push(ItemId(4), ContainerId(0));
        state.push(ItemId(1), ContainerId(0));
        assert_eq!(state.number_of(ItemId(1)), Some(2));
        state.remove(ItemId(4));
        assert_eq!(state.number_of(ItemId(1)), Some(1));
        assert_eq!(state.number_of(ItemId(4)), None);
    }

    #[test]
    fn push_resets_order() {
        let mut state = SelectionState::new();
        state.set_order(TransferOrder::SelectionOrder);
        state.push(ItemId(0), ContainerId(0));
        assert_eq!(state.order(), TransferOrder::NodeOrder);
    }
}
