//! Resolution of a selection gesture into a multimode.

use serde::{Deserialize, Serialize};

use crate::registry::SelectionMode;

/// Resolved behavior of one selection action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Multimode {
    /// Replace the selection with the item, or clear it if the item was the
    /// sole selection.
    Exclusive,
    /// Toggle the item.
    Noncontiguous,
    /// Select the range between the previous and current active item.
    Contiguous,
}

/// Modifier trio accompanying a selection gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionModifiers {
    /// Range modifier (shift).
    pub range: bool,
    /// Alternate modifier (ctrl/meta, or a touch tap).
    pub alternate: bool,
    /// Additive selection forced by configuration.
    pub forced_multi: bool,
}

impl SelectionModifiers {
    pub const NONE: Self = Self {
        range: false,
        alternate: false,
        forced_multi: false,
    };

    pub fn range() -> Self {
        Self {
            range: true,
            ..Self::NONE
        }
    }

    pub fn alternate() -> Self {
        Self {
            alternate: true,
            ..Self::NONE
        }
    }
}

impl SelectionMode {
    /// Resolve the multimode of an action under this mode.
    ///
    /// | mode                | range      | alternate/forced | none          |
    /// |---------------------|------------|------------------|---------------|
    /// | locked single       | exclusive  | exclusive        | exclusive     |
    /// | multi noncontiguous | contiguous | noncontiguous    | noncontiguous |
    /// | other               | contiguous | noncontiguous    | exclusive     |
    pub fn multimode(self, modifiers: SelectionModifiers) -> Multimode {
        match self {
            Self::LockedSingle => Multimode::Exclusive,
            _ if modifiers.range => Multimode::Contiguous,
            Self::MultiNoncontiguous => Multimode::Noncontiguous,
            _ if modifiers.alternate || modifiers.forced_multi => Multimode::Noncontiguous,
            _ => Multimode::Exclusive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locked_ignores_modifiers() {
        let all = SelectionModifiers {
            range: true,
            alternate: true,
            forced_multi: true,
        };
        assert_eq!(SelectionMode::LockedSingle.multimode(all), Multimode::Exclusive);
    }

    #[test]
    fn unrestricted_defaults_to_exclusive() {
        let mode = SelectionMode::MultiContiguous;
        assert_eq!(mode.multimode(SelectionModifiers::NONE), Multimode::Exclusive);
        assert_eq!(mode.multimode(SelectionModifiers::alternate()), Multimode::Noncontiguous);
        assert_eq!(mode.multimode(SelectionModifiers::range()), Multimode::Contiguous);
    }

    #[test]
    fn noncontiguous_toggles_without_modifier() {
        let mode = SelectionMode::MultiNoncontiguous;
        assert_eq!(mode.multimode(SelectionModifiers::NONE), Multimode::Noncontiguous);
        assert_eq!(mode.multimode(SelectionModifiers::range()), Multimode::Contiguous);
    }
}
