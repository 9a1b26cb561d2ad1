//! Item records.

use serde::{Deserialize, Serialize};

use super::ContainerId;

/// Stable identifier of an item within one instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub(crate) usize);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Accessible role of a draggable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemRole {
    /// An option in a list box.
    Option,
    /// A singular choice. A lockable container whose first item has this
    /// role only ever allows one selected item.
    Radio,
    /// A checkable entry.
    Checkbox,
}

impl ItemRole {
    /// Whether this role denotes a singular choice.
    pub fn is_singular_choice(self) -> bool {
        matches!(self, Self::Radio)
    }
}

/// Declaration of an item, as produced by scanning the host tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSpec {
    /// Host key for this item (e.g. a node id).
    pub key: String,
    /// Accessible role. Required.
    #[serde(default)]
    pub role: Option<ItemRole>,
    /// Disabled items cannot be selected.
    #[serde(default)]
    pub disabled: bool,
}

impl ItemSpec {
    /// An enabled item with the `Option` role.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            role: Some(ItemRole::Option),
            disabled: false,
        }
    }

    /// Set the role.
    pub fn role(mut self, role: ItemRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Remove the role (used to exercise validation).
    pub fn without_role(mut self) -> Self {
        self.role = None;
        self
    }

    /// Mark as disabled.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// A registered item. Owned by exactly one container at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub key: String,
    pub role: ItemRole,
    pub container: ContainerId,
    pub selected: bool,
    pub disabled: bool,
}
