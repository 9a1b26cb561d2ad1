//! Notifications delivered to `on_change` callbacks.

use crate::registry::ContainerId;
use crate::transfer::Transfer;

/// Something observers may need to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FerryEvent {
    /// A drop completed.
    Transferred(Transfer),
    /// A batch of structural changes was applied and every affected
    /// container rebuilt.
    ItemsChanged { containers: Vec<ContainerId> },
}
