//! Bounding regions reported by the host.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in host coordinates.
///
/// Coordinates are signed because regions scrolled above or left of a
/// viewport have negative offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn left(&self) -> i32 {
        self.x
    }

    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub const fn top(&self) -> i32 {
        self.y
    }

    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Whether `other` sticks out of this rectangle on the vertical axis.
    pub const fn overflows_vertically(&self, other: &Rect) -> bool {
        other.top() < self.top() || other.bottom() > self.bottom()
    }

    /// Whether `other` sticks out of this rectangle on the horizontal axis.
    pub const fn overflows_horizontally(&self, other: &Rect) -> bool {
        other.left() < self.left() || other.right() > self.right()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_saturate_at_extremes() {
        let rect = Rect::new(i32::MAX - 10, i32::MAX - 5, 100, 100);
        assert_eq!(rect.right(), i32::MAX);
        assert_eq!(rect.bottom(), i32::MAX);
        assert!(!Rect::new(0, 0, i32::MAX, i32::MAX).overflows_vertically(&rect));
    }
}
