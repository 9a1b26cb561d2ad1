//! Ordering of items moved by a drop.

use crate::registry::{ContainerId, ItemId};
use crate::selection::TransferOrder;

/// Outcome of a completed transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub source: ContainerId,
    pub destination: ContainerId,
    /// Moved items, in the order they were appended.
    pub items: Vec<ItemId>,
    pub order: TransferOrder,
}

/// Order in which `selected` items are appended to the destination.
///
/// With [`TransferOrder::NodeOrder`] the source list decides; items not in
/// `source` are dropped. With [`TransferOrder::SelectionOrder`] the
/// selection is taken as is.
pub fn ordered_items(source: &[ItemId], selected: &[ItemId], order: TransferOrder) -> Vec<ItemId> {
    match order {
        TransferOrder::NodeOrder => source
            .iter()
            .filter(|item| selected.contains(item))
            .copied()
            .collect(),
        TransferOrder::SelectionOrder => selected.to_vec(),
    }
}
