//! Container records and their selection modes.

use serde::{Deserialize, Serialize};

use super::item::{ItemId, ItemRole, ItemSpec};

/// Stable identifier of a container within one instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContainerId(pub(crate) usize);

impl std::fmt::Display for ContainerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "container#{}", self.0)
    }
}

/// Accessible role of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerRole {
    Listbox,
    RadioGroup,
    Group,
}

/// How a container lets items be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Exactly one item at a time, whatever the modifiers.
    LockedSingle,
    /// Single selection by default, extendable with modifiers.
    SingleDefault,
    /// Every plain action toggles; a range modifier selects a range.
    MultiNoncontiguous,
    /// Unrestricted: plain actions replace, modifiers toggle or extend.
    MultiContiguous,
}

impl SelectionMode {
    /// Whether more than one item can end up selected.
    pub fn is_multiselectable(self) -> bool {
        matches!(self, Self::MultiNoncontiguous | Self::MultiContiguous)
    }
}

/// How a container's mode is derived when its item list changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModePolicy {
    /// Locked to single selection when the first item is a singular choice,
    /// non-contiguous multi selection otherwise. Empty containers are
    /// unrestricted until they receive an item.
    #[default]
    Lockable,
    /// Always the given mode.
    Fixed(SelectionMode),
}

impl ModePolicy {
    /// Resolve the mode for a container whose items have `roles`, in node
    /// order. Only the first role is consulted.
    pub fn resolve(self, roles: &[ItemRole]) -> SelectionMode {
        match self {
            Self::Fixed(mode) => mode,
            Self::Lockable => match roles.first() {
                None => SelectionMode::MultiContiguous,
                Some(role) if role.is_singular_choice() => SelectionMode::LockedSingle,
                Some(_) => SelectionMode::MultiNoncontiguous,
            },
        }
    }
}

/// Declaration of a container and its initial items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSpec {
    /// Host key for this container.
    pub key: String,
    /// Accessible role. Required.
    #[serde(default)]
    pub role: Option<ContainerRole>,
    /// Reference to the element labelling this container. Required.
    #[serde(default)]
    pub label: Option<String>,
    /// Whether items may be dropped back into this container to reorder them.
    #[serde(default)]
    pub sortable: bool,
    #[serde(default)]
    pub mode: ModePolicy,
    #[serde(default)]
    pub items: Vec<ItemSpec>,
}

impl ContainerSpec {
    /// A list box labelled by `label`.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            role: Some(ContainerRole::Listbox),
            label: Some(label.into()),
            sortable: false,
            mode: ModePolicy::default(),
            items: Vec::new(),
        }
    }

    pub fn role(mut self, role: ContainerRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn without_role(mut self) -> Self {
        self.role = None;
        self
    }

    pub fn without_label(mut self) -> Self {
        self.label = None;
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn mode(mut self, mode: ModePolicy) -> Self {
        self.mode = mode;
        self
    }

    /// Append an item declaration.
    pub fn item(mut self, item: ItemSpec) -> Self {
        self.items.push(item);
        self
    }

    /// Append plain items by key.
    pub fn items<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items.extend(keys.into_iter().map(ItemSpec::new));
        self
    }
}

/// A registered container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub id: ContainerId,
    pub key: String,
    pub role: ContainerRole,
    pub label: String,
    /// Items in node order.
    pub items: Vec<ItemId>,
    pub mode: SelectionMode,
    pub policy: ModePolicy,
    pub sortable: bool,
    /// The virtual focus.
    pub active: Option<ItemId>,
    /// Previous virtual focus, the other end of a range.
    pub last_active: Option<ItemId>,
    /// Set when a lockable container holds items of different roles.
    pub mixed_roles: bool,
}

impl Container {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.items.contains(&item)
    }

    /// Position of an item in node order.
    pub fn index_of(&self, item: ItemId) -> Option<usize> {
        self.items.iter().position(|i| *i == item)
    }

    pub fn first(&self) -> Option<ItemId> {
        self.items.first().copied()
    }

    pub fn last(&self) -> Option<ItemId> {
        self.items.last().copied()
    }

    /// Move the virtual focus, remembering the previous one.
    ///
    /// No-op unless `item` belongs here and differs from the current value.
    pub(crate) fn set_active(&mut self, item: ItemId) -> bool {
        if !self.contains(item) || self.active == Some(item) {
            return false;
        }
        self.last_active = self.active;
        self.active = Some(item);
        true
    }
}
