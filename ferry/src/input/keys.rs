//! Key bindings.

use super::{Key, Modifiers};
use crate::focus::Direction;

/// What a key press asks for, before the engine looks at state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Move the virtual focus; `extend` runs a range selection afterwards.
    Move { direction: Direction, extend: bool },
    /// Select the active item, or drop into the container.
    Activate,
    SelectAll,
    Cancel,
}

/// Map a key press to an action. Unbound keys yield `None`.
pub fn key_action(key: Key, modifiers: Modifiers) -> Option<KeyAction> {
    let extend = modifiers.shift;
    let action = match key {
        Key::Up | Key::Left => KeyAction::Move {
            direction: Direction::Prev,
            extend,
        },
        Key::Down | Key::Right => KeyAction::Move {
            direction: Direction::Next,
            extend,
        },
        Key::PageUp => KeyAction::Move {
            direction: Direction::PageBack,
            extend,
        },
        Key::PageDown => KeyAction::Move {
            direction: Direction::PageForward,
            extend,
        },
        Key::Home => KeyAction::Move {
            direction: Direction::First,
            extend,
        },
        Key::End => KeyAction::Move {
            direction: Direction::Last,
            extend,
        },
        Key::Space | Key::Enter => KeyAction::Activate,
        Key::Escape => KeyAction::Cancel,
        Key::Char(c) if (modifiers.ctrl || modifiers.meta) && c.eq_ignore_ascii_case(&'a') => KeyAction::SelectAll,
        _ => return None,
    };
    Some(action)
}
