//! Modality-neutral input events.
//!
//! The host translates pointer, native drag, touch and keyboard events into
//! [`Input`] values and passes them to [`crate::Ferry::handle`] (events inside
//! the instance root) or [`crate::Ferry::handle_global`] (document-wide
//! events such as a drag ending outside any container).

mod keys;

use serde::{Deserialize, Serialize};

pub use keys::{KeyAction, key_action};

use crate::selection::{SelectionModifiers, TransferOrder};

/// Modifier keys held during an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Self::NONE
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt && !self.meta
    }

    /// Selection modifiers: shift is the range modifier, ctrl or meta the
    /// alternate one.
    pub fn selection(self, forced_multi: bool) -> SelectionModifiers {
        SelectionModifiers {
            range: self.shift,
            alternate: self.ctrl || self.meta,
            forced_multi,
        }
    }

    /// Drop order: ctrl or alt requests selection order.
    pub fn transfer_order(self) -> TransferOrder {
        if self.ctrl || self.alt {
            TransferOrder::SelectionOrder
        } else {
            TransferOrder::NodeOrder
        }
    }
}

/// Keys the engine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Char(char),
    Enter,
    Space,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Tab,
}

/// An input event, addressed by host keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Input {
    /// Pointer pressed on an item.
    PointerDown {
        item: String,
        #[serde(default)]
        modifiers: Modifiers,
    },
    /// Pointer released.
    PointerUp {
        #[serde(default)]
        item: Option<String>,
    },
    /// Touch tap on an item.
    Touch { item: String },
    /// Native drag started on an item.
    DragStart {
        item: String,
        #[serde(default)]
        modifiers: Modifiers,
    },
    DragEnter { container: String },
    DragOver { container: String },
    DragLeave { container: String },
    /// Native drop on a container.
    Drop {
        container: String,
        #[serde(default)]
        modifiers: Modifiers,
    },
    /// Native drag finished, with or without a drop.
    DragEnd,
    /// Key pressed while a container has focus.
    Key {
        container: String,
        key: Key,
        #[serde(default)]
        modifiers: Modifiers,
        #[serde(default)]
        repeat: bool,
    },
    /// A container received real focus.
    FocusContainer { container: String },
    /// Abandon everything, like pressing escape.
    Abort,
}

impl Input {
    pub fn key(container: impl Into<String>, key: Key) -> Self {
        Self::Key {
            container: container.into(),
            key,
            modifiers: Modifiers::NONE,
            repeat: false,
        }
    }

    pub fn key_with(container: impl Into<String>, key: Key, modifiers: Modifiers) -> Self {
        Self::Key {
            container: container.into(),
            key,
            modifiers,
            repeat: false,
        }
    }

    pub fn click(item: impl Into<String>) -> Self {
        Self::PointerDown {
            item: item.into(),
            modifiers: Modifiers::NONE,
        }
    }

    pub fn click_with(item: impl Into<String>, modifiers: Modifiers) -> Self {
        Self::PointerDown {
            item: item.into(),
            modifiers,
        }
    }
}
