//! Virtual focus movement and reveal decisions.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::host::ScrollAlign;

/// Direction of a virtual focus move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Next,
    Prev,
    PageForward,
    PageBack,
    First,
    Last,
}

impl Direction {
    /// Whether the move goes towards the end of the list.
    pub fn is_forward(self) -> bool {
        matches!(self, Self::Next | Self::PageForward | Self::Last)
    }
}

/// Index reached by moving from `current` in a list of `len` items.
///
/// Next/Prev wrap at the ends; paging and First/Last clamp. Without a
/// current index, forward moves start at the first item and backward moves
/// at the last. Returns `None` for an empty list.
pub fn target_index(len: usize, current: Option<usize>, direction: Direction, page_step: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    let Some(current) = current.map(|idx| idx.min(last)) else {
        return Some(if direction.is_forward() { 0 } else { last });
    };

    let target = match direction {
        Direction::Next => {
            if current == last {
                0
            } else {
                current + 1
            }
        }
        Direction::Prev => {
            if current == 0 {
                last
            } else {
                current - 1
            }
        }
        Direction::PageForward => current.saturating_add(page_step).min(last),
        Direction::PageBack => current.saturating_sub(page_step),
        Direction::First => 0,
        Direction::Last => last,
    };
    Some(target)
}

/// Scroll needed to bring `item` inside `container`'s viewport.
///
/// Container overflow is fixed with the least movement.
pub fn container_scroll(item: &Rect, container: &Rect) -> Option<ScrollAlign> {
    overflows(container, item).then_some(ScrollAlign::Nearest)
}

/// Scroll needed to bring `item` inside the outer viewport.
///
/// Viewport overflow centers the item so its surroundings are visible too.
pub fn viewport_scroll(item: &Rect, viewport: &Rect) -> Option<ScrollAlign> {
    overflows(viewport, item).then_some(ScrollAlign::Center)
}

fn overflows(outer: &Rect, inner: &Rect) -> bool {
    outer.overflows_vertically(inner) || outer.overflows_horizontally(inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(target_index(3, Some(2), Direction::Next, 5), Some(0));
        assert_eq!(target_index(3, Some(0), Direction::Prev, 5), Some(2));
    }

    #[test]
    fn paging_clamps() {
        assert_eq!(target_index(8, Some(5), Direction::PageForward, 5), Some(7));
        assert_eq!(target_index(8, Some(3), Direction::PageBack, 5), Some(0));
        assert_eq!(target_index(12, Some(1), Direction::PageForward, 5), Some(6));
    }

    #[test]
    fn empty_list_has_no_target() {
        assert_eq!(target_index(0, None, Direction::First, 5), None);
    }

    #[test]
    fn missing_current_starts_at_an_end() {
        assert_eq!(target_index(4, None, Direction::Next, 5), Some(0));
        assert_eq!(target_index(4, None, Direction::Prev, 5), Some(3));
    }
}
